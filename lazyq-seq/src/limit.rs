// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Limit operator - caps every traversal at n elements.

use crate::util::exhausted;
use lazyq_core::{Cursor, Result, Sequence};

/// Extension trait providing the `limit` operator for sequences.
pub trait LimitExt: Sequence + Sized {
    /// Emits at most the first `n` elements, then reports exhaustion.
    ///
    /// Once `n` elements have been produced the upstream cursor is never
    /// queried again, which is what makes `limit` the way to terminate an
    /// infinite [`generate`](crate::generate) source.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyq_seq::{generate, LimitExt, SequenceExt};
    ///
    /// let mut next = 0;
    /// let naturals = generate(move || {
    ///     next += 1;
    ///     next
    /// });
    ///
    /// assert_eq!(naturals.limit(4).to_vec(), vec![1, 2, 3, 4]);
    /// ```
    ///
    /// # See Also
    ///
    /// - [`SkipExt::skip`](crate::SkipExt::skip) - Skip first n elements
    fn limit(self, n: usize) -> Limit<Self>;
}

impl<S: Sequence> LimitExt for S {
    fn limit(self, n: usize) -> Limit<Self> {
        Limit::new(self, n)
    }
}

/// Sequence of at most `max` upstream elements.
#[derive(Debug, Clone)]
pub struct Limit<S> {
    source: S,
    max: usize,
}

impl<S> Limit<S> {
    /// Wraps `source`, stopping after `max` elements.
    pub const fn new(source: S, max: usize) -> Self {
        Self { source, max }
    }
}

impl<S: Sequence> Sequence for Limit<S> {
    type Item = S::Item;
    type Cursor<'a>
        = LimitCursor<S::Cursor<'a>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        LimitCursor {
            upstream: self.source.cursor(),
            emitted: 0,
            max: self.max,
        }
    }
}

/// Cursor produced by [`Limit`].
#[derive(Debug)]
pub struct LimitCursor<C> {
    upstream: C,
    emitted: usize,
    max: usize,
}

impl<C: Cursor> Cursor for LimitCursor<C> {
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        self.emitted < self.max && self.upstream.has_next()
    }

    fn try_next(&mut self) -> Result<Self::Item> {
        if !self.has_next() {
            return exhausted("limit");
        }
        let item = self.upstream.try_next()?;
        self.emitted += 1;
        if self.emitted == self.max {
            debug!("limit cursor reached its cap of {} elements", self.max);
        }
        Ok(item)
    }
}
