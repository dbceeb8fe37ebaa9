// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lazyq_seq::prelude::*;
use lazyq_seq::{from_vec, generate, lines};
use lazyq_test_utils::records::{location_lisbon, location_madrid, location_porto, WEEK_BODY};
use lazyq_test_utils::{counted_supplier, counter_from};

#[test]
fn test_limit_of_limit_takes_smaller() -> anyhow::Result<()> {
    // Arrange
    let naturals = generate(counter_from(1));

    // Act
    let inner_smaller = (&naturals).limit(3).limit(7);
    let outer_smaller = (&naturals).limit(7).limit(3);

    // Assert
    assert_eq!(inner_smaller.to_vec(), vec![1, 2, 3]);
    assert_eq!(outer_smaller.to_vec(), vec![1, 2, 3]);

    Ok(())
}

#[test]
fn test_limit_after_filter_pulls_only_what_is_needed() -> anyhow::Result<()> {
    // Arrange
    let (supplier, calls) = counted_supplier(7_u32);
    let sevens = generate(supplier);

    // Act
    let first_two = sevens.filter(|n| *n == 7).limit(2);

    // Assert
    assert_eq!(first_two.to_vec(), vec![7, 7]);
    assert_eq!(calls.get(), 2);

    Ok(())
}

#[test]
fn test_limit_over_lines() -> anyhow::Result<()> {
    // Arrange
    let body = lines(WEEK_BODY);

    // Act
    let header_and_first = body.limit(2);

    // Assert
    assert_eq!(
        header_and_first.to_vec(),
        vec!["day,temp_c,precip_mm,description", "1,14,0,Sunny"]
    );

    Ok(())
}

#[test]
fn test_limit_then_distinct() -> anyhow::Result<()> {
    // Arrange
    let places = from_vec(vec![
        location_lisbon(),
        location_lisbon(),
        location_porto(),
        location_madrid(),
    ]);

    // Act
    let regions = places.limit(3).distinct().map(|place| place.region);

    // Assert
    assert_eq!(regions.to_vec(), vec!["Lisboa", "Porto"]);

    Ok(())
}
