// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lazyq_seq::prelude::*;
use lazyq_seq::{generate, lines, of};
use lazyq_test_utils::counter_from;
use lazyq_test_utils::records::{Weather, WEEK_BODY};

#[test]
fn test_concat_is_associative() -> anyhow::Result<()> {
    // Arrange
    let a = of([1, 2]);
    let b = of([3]);
    let c = of([4, 5]);

    // Act
    let left = (&a).concat(&b).concat(&c);
    let right = (&a).concat((&b).concat(&c));

    // Assert
    assert_eq!(left.to_vec(), right.to_vec());
    assert_eq!(left.count(), a.count() + b.count() + c.count());

    Ok(())
}

#[test]
fn test_concat_with_infinite_second_side() -> anyhow::Result<()> {
    // Arrange
    let head = of([-2_i64, -1]);
    let naturals = generate(counter_from(0));

    // Act
    let joined = head.concat(naturals).limit(5);

    // Assert
    assert_eq!(joined.to_vec(), vec![-2, -1, 0, 1, 2]);

    Ok(())
}

#[test]
fn test_concat_two_bodies_then_parse() -> anyhow::Result<()> {
    // Arrange
    let this_week = lines(WEEK_BODY).skip(1);
    let extra = lines("8,20,0,Sunny\nnot a record\n9,19,0,Cloudy");

    // Act
    let hottest = this_week
        .concat(extra)
        .map(|line| Weather::parse(&line))
        .filter(Option::is_some)
        .map(|parsed| parsed.map_or(i32::MIN, |day| day.temp_c))
        .max()?;

    // Assert
    assert_eq!(hottest, 20);

    Ok(())
}
