// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lazyq_seq::prelude::*;
use lazyq_seq::generate;
use lazyq_test_utils::{counted_supplier, counter_from, expect_next};

#[test]
fn test_generate_yields_supplier_values_in_order() -> anyhow::Result<()> {
    // Arrange
    let naturals = generate(counter_from(1));

    // Act
    let mut cursor = naturals.cursor();

    // Assert
    expect_next(&mut cursor, 1);
    expect_next(&mut cursor, 2);
    expect_next(&mut cursor, 3);

    Ok(())
}

#[test]
fn test_generate_has_next_is_always_true() -> anyhow::Result<()> {
    // Arrange
    let (supplier, calls) = counted_supplier(0_u8);
    let zeros = generate(supplier);
    let mut cursor = zeros.cursor();

    // Act
    let answers: Vec<bool> = (0..10).map(|_| cursor.has_next()).collect();

    // Assert - asking never runs the supplier
    assert!(answers.into_iter().all(|answer| answer));
    assert_eq!(calls.get(), 0);

    Ok(())
}

#[test]
fn test_generate_supplier_runs_once_per_element() -> anyhow::Result<()> {
    // Arrange
    let (supplier, calls) = counted_supplier("x");
    let letters = generate(supplier);
    let mut cursor = letters.cursor();

    // Act
    for _ in 0..7 {
        cursor.try_next()?;
    }

    // Assert
    assert_eq!(calls.get(), 7);

    Ok(())
}

#[test]
fn test_generate_building_runs_nothing() -> anyhow::Result<()> {
    // Arrange
    let (supplier, calls) = counted_supplier(1.5_f64);

    // Act
    let _halves = generate(supplier).map(|x| x / 2.0).limit(3);

    // Assert
    assert_eq!(calls.get(), 0);

    Ok(())
}

#[test]
fn test_generate_each_cursor_restarts_captured_state() -> anyhow::Result<()> {
    // Arrange
    let naturals = generate(counter_from(10)).limit(3);

    // Act
    let first = naturals.to_vec();
    let second = naturals.to_vec();

    // Assert
    assert_eq!(first, vec![10, 11, 12]);
    assert_eq!(second, first);

    Ok(())
}

#[test]
fn test_generate_independent_cursors() -> anyhow::Result<()> {
    // Arrange
    let naturals = generate(counter_from(0));
    let mut left = naturals.cursor();
    let mut right = naturals.cursor();

    // Act
    expect_next(&mut left, 0);
    expect_next(&mut left, 1);

    // Assert
    expect_next(&mut right, 0);
    expect_next(&mut left, 2);

    Ok(())
}

#[test]
#[should_panic(expected = "supplier failed")]
fn test_generate_supplier_panic_propagates() {
    let failing = generate(|| -> u32 { panic!("supplier failed") }).limit(1);

    let _ = failing.count();
}
