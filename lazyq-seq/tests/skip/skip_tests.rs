// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lazyq_seq::prelude::*;
use lazyq_seq::{empty, from_vec, of};
use lazyq_test_utils::records::{location_lisbon, location_madrid, location_porto};
use lazyq_test_utils::{assert_exhausted, expect_next, ProbeSequence};

#[test]
fn test_skip_skips_initial_items() -> anyhow::Result<()> {
    // Arrange
    let places = from_vec(vec![location_lisbon(), location_porto(), location_madrid()]);

    // Act
    let skipped = places.skip(2);

    // Assert - Only third item emitted
    let mut cursor = skipped.cursor();
    expect_next(&mut cursor, location_madrid());
    assert_exhausted(&mut cursor);

    Ok(())
}

#[test]
fn test_skip_more_than_available() -> anyhow::Result<()> {
    // Arrange
    let numbers = of([1, 2]);

    // Act
    let skipped = numbers.skip(10);

    // Assert - No items emitted (all skipped)
    assert_exhausted(&mut skipped.cursor());
    assert_eq!(skipped.count(), 0);

    Ok(())
}

#[test]
fn test_skip_exactly_all() -> anyhow::Result<()> {
    // Arrange
    let numbers = of([1, 2, 3]);

    // Act
    let skipped = numbers.skip(3);

    // Assert
    assert_eq!(skipped.count(), 0);

    Ok(())
}

#[test]
fn test_skip_zero_is_identity() -> anyhow::Result<()> {
    // Arrange
    let numbers = of([4, 5, 6]);

    // Act
    let skipped = (&numbers).skip(0);

    // Assert
    assert_eq!(skipped.to_vec(), numbers.to_vec());

    Ok(())
}

#[test]
fn test_skip_empty_source() -> anyhow::Result<()> {
    // Arrange
    let skipped = empty::<u8>().skip(5);

    // Act
    let mut cursor = skipped.cursor();

    // Assert
    assert_exhausted(&mut cursor);

    Ok(())
}

#[test]
fn test_skip_is_lazy_until_cursor() -> anyhow::Result<()> {
    // Arrange
    let probe = ProbeSequence::new(vec![1, 2, 3, 4]);

    // Act
    let skipped = (&probe).skip(2);

    // Assert
    assert_eq!(probe.cursors(), 0);
    assert_eq!(probe.pulls(), 0);
    let mut cursor = skipped.cursor();
    assert_eq!(probe.pulls(), 2);
    expect_next(&mut cursor, 3);

    Ok(())
}

#[test]
fn test_skip_stops_at_upstream_end() -> anyhow::Result<()> {
    // Arrange
    let probe = ProbeSequence::new(vec![1, 2]);
    let skipped = (&probe).skip(usize::MAX);

    // Act
    let mut cursor = skipped.cursor();

    // Assert - advancing stopped as soon as upstream ran out
    assert_eq!(probe.pulls(), 2);
    assert!(probe.probes() <= 3);
    assert_exhausted(&mut cursor);

    Ok(())
}

#[test]
fn test_skip_retraversal_skips_again() -> anyhow::Result<()> {
    // Arrange
    let skipped = of(['a', 'b', 'c']).skip(1);

    // Act
    let first = skipped.to_vec();
    let second = skipped.to_vec();

    // Assert
    assert_eq!(first, vec!['b', 'c']);
    assert_eq!(second, first);

    Ok(())
}
