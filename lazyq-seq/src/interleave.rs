// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Interleave operator - alternates between two sequences.
//!
//! The cursor keeps a turn flag that starts on the first sequence. Each pull
//! applies these rules in order:
//!
//! 1. If it is the first side's turn and it has an element, take it and pass
//!    the turn to the second side.
//! 2. If it is the second side's turn and it has an element, take it and pass
//!    the turn to the first side.
//! 3. Otherwise take from whichever side still has elements. The turn does not
//!    change, since the other side is already exhausted.
//! 4. If neither side has elements, the traversal is over.
//!
//! Equal lengths therefore give `a0, b0, a1, b1, ...`, and once one side runs
//! out the rest of the other side follows in its own order. No element is ever
//! dropped. An upstream error occupies its side's turn and is yielded in place.
//!
//! # Examples
//!
//! ```rust
//! use lazyq_seq::{from_vec, InterleaveExt, SequenceExt};
//!
//! let left = from_vec(vec![1, 2, 3, 4]);
//! let right = from_vec(vec![9, 8]);
//!
//! assert_eq!(left.interleave(right).to_vec(), vec![1, 9, 2, 8, 3, 4]);
//! ```

use crate::util::exhausted;
use lazyq_core::{Cursor, Pending, Result, Sequence};

/// Extension trait providing the `interleave` operator for sequences.
pub trait InterleaveExt: Sequence + Sized {
    /// Alternates between `self` and `other`, then drains the longer side.
    ///
    /// See the [module-level documentation](crate::interleave) for the exact
    /// alternation rules.
    ///
    /// # See Also
    ///
    /// - [`ConcatExt::concat`](crate::ConcatExt::concat) - One sequence after another
    fn interleave<B>(self, other: B) -> Interleave<Self, B>
    where
        B: Sequence<Item = Self::Item>;
}

impl<S: Sequence> InterleaveExt for S {
    fn interleave<B>(self, other: B) -> Interleave<Self, B>
    where
        B: Sequence<Item = Self::Item>,
    {
        Interleave::new(self, other)
    }
}

/// Sequence alternating between two sources of the same element type.
#[derive(Debug, Clone)]
pub struct Interleave<A, B> {
    first: A,
    second: B,
}

impl<A, B> Interleave<A, B> {
    /// Pairs `first` and `second` for alternation.
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A, B> Sequence for Interleave<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    type Item = A::Item;
    type Cursor<'a>
        = InterleaveCursor<A::Cursor<'a>, B::Cursor<'a>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        InterleaveCursor {
            first: self.first.cursor(),
            second: self.second.cursor(),
            turn: Turn::First,
            pending: Pending::Empty,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Turn {
    First,
    Second,
}

/// Cursor produced by [`Interleave`].
#[derive(Debug)]
pub struct InterleaveCursor<A: Cursor, B> {
    first: A,
    second: B,
    turn: Turn,
    pending: Pending<Result<A::Item>>,
}

impl<A, B> Cursor for InterleaveCursor<A, B>
where
    A: Cursor,
    B: Cursor<Item = A::Item>,
{
    type Item = A::Item;

    fn has_next(&mut self) -> bool {
        let Self {
            first,
            second,
            turn,
            pending,
        } = self;
        let current = *turn;
        pending.resolve(|| match current {
            Turn::First if first.has_next() => {
                *turn = Turn::Second;
                Some(first.try_next())
            }
            Turn::Second if second.has_next() => {
                *turn = Turn::First;
                Some(second.try_next())
            }
            _ if first.has_next() => Some(first.try_next()),
            _ if second.has_next() => Some(second.try_next()),
            _ => None,
        })
    }

    fn try_next(&mut self) -> Result<Self::Item> {
        if self.has_next() {
            if let Some(result) = self.pending.take() {
                return result;
            }
        }
        exhausted("interleave")
    }
}
