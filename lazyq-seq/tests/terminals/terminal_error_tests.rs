// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lazyq_seq::prelude::*;
use lazyq_test_utils::error_injection::INJECTED_CONTEXT;
use lazyq_test_utils::ErrorInjectingSequence;

#[test]
fn test_count_skips_upstream_errors() -> anyhow::Result<()> {
    // Arrange
    let source = ErrorInjectingSequence::new(vec![1, 2, 3], 1);

    // Act
    let total = source.count();

    // Assert
    assert_eq!(total, 3);

    Ok(())
}

#[test]
fn test_max_propagates_upstream_error() -> anyhow::Result<()> {
    // Arrange
    let source = ErrorInjectingSequence::new(vec![1, 9, 3], 2);

    // Act
    let result = source.max();

    // Assert
    assert!(result.is_err_and(|e| e.context() == INJECTED_CONTEXT));

    Ok(())
}
