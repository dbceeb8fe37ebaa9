// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error injection utilities for testing error handling in operators.

use lazyq_core::{Cursor, LazyError, Result, Sequence};

/// Context carried by the error an [`ErrorInjectingSequence`] yields.
pub const INJECTED_CONTEXT: &str = "injected failure";

/// Sequence that yields an error at a fixed position of every traversal.
///
/// The failing position still counts as an element: `has_next` reports it,
/// and `try_next` moves past it, so the elements after it remain reachable.
/// Operators are expected to hand the error downstream in order instead of
/// dropping it.
///
/// # Examples
///
/// ```rust
/// use lazyq_core::Sequence;
/// use lazyq_test_utils::{drain_results, ErrorInjectingSequence};
///
/// let source = ErrorInjectingSequence::new(vec![1, 2], 1);
/// let results = drain_results(&mut source.cursor());
///
/// assert_eq!(results.len(), 3);
/// assert_eq!(results[0], Ok(1));
/// assert!(results[1].is_err());
/// assert_eq!(results[2], Ok(2));
/// ```
#[derive(Debug, Clone)]
pub struct ErrorInjectingSequence<T> {
    items: Vec<T>,
    inject_error_at: usize,
}

impl<T> ErrorInjectingSequence<T> {
    /// Creates a sequence over `items` with an error inserted before
    /// `items[inject_error_at]`.
    ///
    /// A position past the end places the error after the last element.
    pub fn new(items: Vec<T>, inject_error_at: usize) -> Self {
        let inject_error_at = inject_error_at.min(items.len());
        Self {
            items,
            inject_error_at,
        }
    }
}

impl<T: Clone> Sequence for ErrorInjectingSequence<T> {
    type Item = T;
    type Cursor<'a>
        = ErrorInjectingCursor<'a, T>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        ErrorInjectingCursor {
            source: self,
            position: 0,
        }
    }
}

/// Cursor produced by [`ErrorInjectingSequence`].
#[derive(Debug)]
pub struct ErrorInjectingCursor<'a, T> {
    source: &'a ErrorInjectingSequence<T>,
    position: usize,
}

impl<T: Clone> Cursor for ErrorInjectingCursor<'_, T> {
    type Item = T;

    fn has_next(&mut self) -> bool {
        self.position <= self.source.items.len()
    }

    fn try_next(&mut self) -> Result<T> {
        let at = self.source.inject_error_at;
        let index = match self.position {
            p if p == at => {
                self.position += 1;
                return Err(LazyError::exhausted(INJECTED_CONTEXT));
            }
            p if p < at => p,
            p => p - 1,
        };
        let item = self
            .source
            .items
            .get(index)
            .cloned()
            .ok_or_else(|| LazyError::exhausted("error injecting cursor"))?;
        self.position += 1;
        Ok(item)
    }
}
