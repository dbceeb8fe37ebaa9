// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Concat operator - traverses one sequence, then another.

use crate::util::exhausted;
use lazyq_core::{Cursor, Result, Sequence};

/// Extension trait providing the `concat` operator for sequences.
pub trait ConcatExt: Sequence + Sized {
    /// Emits every element of `self`, then every element of `other`.
    ///
    /// The cursor drains the first side and, the moment it reports exhaustion,
    /// switches to the second side for good; the first side is never queried
    /// again. No element is buffered.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyq_seq::{from_vec, ConcatExt, SequenceExt};
    ///
    /// let head = from_vec(vec!["a", "b"]);
    /// let tail = from_vec(vec!["c"]);
    ///
    /// assert_eq!((&head).concat(&tail).to_vec(), vec!["a", "b", "c"]);
    /// // The same source can feed both sides.
    /// assert_eq!((&head).concat(&head).to_vec(), vec!["a", "b", "a", "b"]);
    /// ```
    ///
    /// # See Also
    ///
    /// - [`InterleaveExt::interleave`](crate::InterleaveExt::interleave) - Alternate between two sequences
    fn concat<B>(self, other: B) -> Concat<Self, B>
    where
        B: Sequence<Item = Self::Item>;
}

impl<S: Sequence> ConcatExt for S {
    fn concat<B>(self, other: B) -> Concat<Self, B>
    where
        B: Sequence<Item = Self::Item>,
    {
        Concat::new(self, other)
    }
}

/// Sequence of all of `first` followed by all of `second`.
#[derive(Debug, Clone)]
pub struct Concat<A, B> {
    first: A,
    second: B,
}

impl<A, B> Concat<A, B> {
    /// Chains `second` after `first`.
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A, B> Sequence for Concat<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    type Item = A::Item;
    type Cursor<'a>
        = ConcatCursor<A::Cursor<'a>, B::Cursor<'a>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        ConcatCursor {
            first: self.first.cursor(),
            second: self.second.cursor(),
            side: Side::First,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    First,
    Second,
}

/// Cursor produced by [`Concat`].
#[derive(Debug)]
pub struct ConcatCursor<A, B> {
    first: A,
    second: B,
    side: Side,
}

impl<A, B> Cursor for ConcatCursor<A, B>
where
    A: Cursor,
    B: Cursor<Item = A::Item>,
{
    type Item = A::Item;

    fn has_next(&mut self) -> bool {
        if self.side == Side::First {
            if self.first.has_next() {
                return true;
            }
            self.side = Side::Second;
        }
        self.second.has_next()
    }

    fn try_next(&mut self) -> Result<Self::Item> {
        if !self.has_next() {
            return exhausted("concat");
        }
        match self.side {
            Side::First => self.first.try_next(),
            Side::Second => self.second.try_next(),
        }
    }
}
