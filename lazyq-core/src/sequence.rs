// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::cursor::{Cursor, CursorIter};

/// A repeatable, lazy, possibly infinite source of elements.
///
/// The only capability of a sequence is handing out a fresh [`Cursor`]. The
/// sequence itself is an immutable descriptor: each call to
/// [`cursor`](Sequence::cursor) builds independent traversal state, so two
/// cursors from the same sequence never observe each other. Cursors borrow the
/// sequence, which therefore outlives every traversal made over it.
///
/// Re-traversal is deterministic as long as the underlying data does not change
/// between traversals.
pub trait Sequence {
    /// Element type produced by every traversal
    type Item;

    /// Cursor type produced by [`cursor`](Sequence::cursor)
    type Cursor<'a>: Cursor<Item = Self::Item>
    where
        Self: 'a;

    /// Starts a new, independent traversal.
    fn cursor(&self) -> Self::Cursor<'_>;
}

impl<S: Sequence + ?Sized> Sequence for &S {
    type Item = S::Item;
    type Cursor<'a>
        = S::Cursor<'a>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        (**self).cursor()
    }
}

/// Convenience traversals available on every [`Sequence`].
pub trait SequenceExt: Sequence {
    /// Traverses the sequence through a standard [`Iterator`].
    fn iter(&self) -> CursorIter<Self::Cursor<'_>> {
        CursorIter::new(self.cursor())
    }

    /// Collects one full traversal.
    ///
    /// Never returns for an unbounded sequence.
    fn to_vec(&self) -> Vec<Self::Item> {
        self.iter().collect()
    }
}

impl<S: Sequence + ?Sized> SequenceExt for S {}
