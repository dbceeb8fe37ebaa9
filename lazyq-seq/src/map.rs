// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Map operator - transforms every element on pull.

use crate::util::exhausted;
use lazyq_core::{Cursor, Result, Sequence};

/// Extension trait providing the `map` operator for sequences.
pub trait MapExt: Sequence + Sized {
    /// Applies `transform` to every element; the output may have a different type.
    ///
    /// The mapped sequence has exactly the length of its source. `has_next` is a
    /// pure pass-through; the transform runs once per consumed element and its
    /// results are never cached. Keep `transform` pure if the sequence is going
    /// to be traversed more than once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyq_seq::{lines, MapExt, SequenceExt};
    ///
    /// let lengths = lines("alpha\nbe\ngamma").map(|line| line.len());
    ///
    /// assert_eq!(lengths.to_vec(), vec![5, 2, 5]);
    /// ```
    fn map<F, U>(self, transform: F) -> Map<Self, F>
    where
        F: Fn(Self::Item) -> U;
}

impl<S: Sequence> MapExt for S {
    fn map<F, U>(self, transform: F) -> Map<Self, F>
    where
        F: Fn(Self::Item) -> U,
    {
        Map::new(self, transform)
    }
}

/// Sequence of the upstream elements passed through a transform.
#[derive(Debug, Clone)]
pub struct Map<S, F> {
    source: S,
    transform: F,
}

impl<S, F> Map<S, F> {
    /// Wraps `source`, passing every element through `transform`.
    pub const fn new(source: S, transform: F) -> Self {
        Self { source, transform }
    }
}

impl<S, F, U> Sequence for Map<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> U,
{
    type Item = U;
    type Cursor<'a>
        = MapCursor<'a, S::Cursor<'a>, F>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        MapCursor {
            upstream: self.source.cursor(),
            transform: &self.transform,
        }
    }
}

/// Cursor produced by [`Map`].
#[derive(Debug)]
pub struct MapCursor<'a, C, F> {
    upstream: C,
    transform: &'a F,
}

impl<C, F, U> Cursor for MapCursor<'_, C, F>
where
    C: Cursor,
    F: Fn(C::Item) -> U,
{
    type Item = U;

    fn has_next(&mut self) -> bool {
        self.upstream.has_next()
    }

    fn try_next(&mut self) -> Result<U> {
        if !self.has_next() {
            return exhausted("map");
        }
        self.upstream.try_next().map(self.transform)
    }
}
