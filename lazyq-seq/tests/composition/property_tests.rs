// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Randomized checks of every operator against a plain `Vec` model.

use lazyq_seq::prelude::*;
use lazyq_seq::{from_vec, generate};
use lazyq_test_utils::counter_from;
use std::collections::HashSet;

const ROUNDS: usize = 200;

fn random_values(rng: &mut fastrand::Rng) -> Vec<i32> {
    let len = rng.usize(0..24);
    (0..len).map(|_| rng.i32(-10..10)).collect()
}

fn interleave_model(left: &[i32], right: &[i32]) -> Vec<i32> {
    let mut woven = Vec::with_capacity(left.len() + right.len());
    let shared = left.len().min(right.len());
    for i in 0..shared {
        woven.push(left[i]);
        woven.push(right[i]);
    }
    woven.extend_from_slice(&left[shared..]);
    woven.extend_from_slice(&right[shared..]);
    woven
}

#[test]
fn test_filter_matches_model() -> anyhow::Result<()> {
    let mut rng = fastrand::Rng::with_seed(0x5EED_0001);

    for _ in 0..ROUNDS {
        // Arrange
        let values = random_values(&mut rng);
        let threshold = rng.i32(-10..10);

        // Act
        let filtered = from_vec(values.clone()).filter(|n| *n >= threshold);

        // Assert
        let expected: Vec<i32> = values.into_iter().filter(|n| *n >= threshold).collect();
        assert_eq!(filtered.count(), expected.len());
        assert_eq!(filtered.to_vec(), expected);
    }

    Ok(())
}

#[test]
fn test_map_matches_model() -> anyhow::Result<()> {
    let mut rng = fastrand::Rng::with_seed(0x5EED_0002);

    for _ in 0..ROUNDS {
        // Arrange
        let values = random_values(&mut rng);
        let source = from_vec(values.clone());

        // Act
        let mapped = (&source).map(|n| i64::from(n) * 3 - 1);

        // Assert
        assert_eq!(mapped.count(), source.count());
        let expected: Vec<i64> = values.into_iter().map(|n| i64::from(n) * 3 - 1).collect();
        assert_eq!(mapped.to_vec(), expected);
    }

    Ok(())
}

#[test]
fn test_skip_and_limit_match_model() -> anyhow::Result<()> {
    let mut rng = fastrand::Rng::with_seed(0x5EED_0003);

    for _ in 0..ROUNDS {
        // Arrange
        let values = random_values(&mut rng);
        let n = rng.usize(0..30);
        let source = from_vec(values.clone());

        // Act
        let skipped = (&source).skip(n);
        let limited = (&source).limit(n);

        // Assert
        assert_eq!(skipped.count(), values.len().saturating_sub(n));
        assert_eq!(limited.count(), values.len().min(n));
        assert_eq!(
            skipped.to_vec(),
            values.iter().copied().skip(n).collect::<Vec<_>>()
        );
        assert_eq!(
            limited.to_vec(),
            values.iter().copied().take(n).collect::<Vec<_>>()
        );
    }

    Ok(())
}

#[test]
fn test_distinct_matches_model() -> anyhow::Result<()> {
    let mut rng = fastrand::Rng::with_seed(0x5EED_0004);

    for _ in 0..ROUNDS {
        // Arrange
        let values = random_values(&mut rng);
        let source = from_vec(values.clone());

        // Act
        let unique = (&source).distinct().to_vec();

        // Assert
        let mut seen = HashSet::new();
        let expected: Vec<i32> = values.into_iter().filter(|n| seen.insert(*n)).collect();
        assert_eq!(unique, expected);
        assert!(unique.len() <= source.count());
    }

    Ok(())
}

#[test]
fn test_concat_and_interleave_match_model() -> anyhow::Result<()> {
    let mut rng = fastrand::Rng::with_seed(0x5EED_0005);

    for _ in 0..ROUNDS {
        // Arrange
        let left = random_values(&mut rng);
        let right = random_values(&mut rng);
        let a = from_vec(left.clone());
        let b = from_vec(right.clone());

        // Act
        let joined = (&a).concat(&b);
        let woven = (&a).interleave(&b);

        // Assert
        assert_eq!(joined.count(), left.len() + right.len());
        assert_eq!(
            joined.to_vec(),
            left.iter().chain(&right).copied().collect::<Vec<_>>()
        );
        assert_eq!(woven.count(), left.len() + right.len());
        assert_eq!(woven.to_vec(), interleave_model(&left, &right));
    }

    Ok(())
}

#[test]
fn test_max_matches_model() -> anyhow::Result<()> {
    let mut rng = fastrand::Rng::with_seed(0x5EED_0006);

    for _ in 0..ROUNDS {
        // Arrange
        let values = random_values(&mut rng);

        // Act
        let greatest = from_vec(values.clone()).max();

        // Assert
        match values.iter().copied().max() {
            Some(expected) => assert_eq!(greatest?, expected),
            None => assert!(greatest.is_err()),
        }
    }

    Ok(())
}

#[test]
fn test_bounded_generate_filter_terminates() -> anyhow::Result<()> {
    let mut rng = fastrand::Rng::with_seed(0x5EED_0007);

    for _ in 0..ROUNDS {
        // Arrange
        let n = rng.usize(0..500);
        let modulus = rng.i64(1..10);

        // Act
        let filtered = generate(counter_from(0)).limit(n).filter(|v| v % modulus == 0);

        // Assert
        let total = filtered.count();
        assert!(total <= n);
        assert_eq!(total, (0..n as i64).filter(|v| v % modulus == 0).count());
    }

    Ok(())
}

#[test]
fn test_retraversal_is_deterministic() -> anyhow::Result<()> {
    let mut rng = fastrand::Rng::with_seed(0x5EED_0008);

    for _ in 0..ROUNDS {
        // Arrange
        let left = random_values(&mut rng);
        let right = random_values(&mut rng);
        let skip = rng.usize(0..5);
        let a = from_vec(left);
        let b = from_vec(right);
        let pipeline = (&a)
            .interleave(&b)
            .skip(skip)
            .filter(|n| n % 2 != 0)
            .map(|n| n * n)
            .distinct()
            .concat((&b).limit(3));

        // Act
        let first = pipeline.to_vec();
        let second = pipeline.to_vec();

        // Assert
        assert_eq!(first, second);
    }

    Ok(())
}
