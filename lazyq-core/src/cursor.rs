// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::Result;

/// A single traversal over a [`Sequence`](crate::Sequence).
///
/// A cursor is stateful, forward-only and not re-windable. It separates the
/// question "is there another element?" from the act of taking it:
///
/// - [`has_next`](Cursor::has_next) may pull from upstream cursors to find the
///   answer, but repeated calls without an intervening
///   [`try_next`](Cursor::try_next) pull nothing further and return the same
///   answer.
/// - [`try_next`](Cursor::try_next) always re-validates through `has_next` and
///   fails with [`LazyError::ExhaustedCursor`](crate::LazyError::ExhaustedCursor)
///   when nothing is left.
///
/// Cursors hold no external resources. Stopping a traversal is simply dropping
/// the cursor.
pub trait Cursor {
    /// Element type produced by this cursor
    type Item;

    /// Reports whether another element is available without consuming it.
    fn has_next(&mut self) -> bool;

    /// Consumes and returns the next element.
    ///
    /// # Errors
    ///
    /// Returns [`LazyError::ExhaustedCursor`](crate::LazyError::ExhaustedCursor)
    /// if [`has_next`](Cursor::has_next) reports `false`.
    fn try_next(&mut self) -> Result<Self::Item>;

    /// Consumes the next element and drops it.
    ///
    /// Returns `false` once the cursor is exhausted.
    fn advance(&mut self) -> bool {
        self.has_next() && self.try_next().is_ok()
    }
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        (**self).has_next()
    }

    fn try_next(&mut self) -> Result<Self::Item> {
        (**self).try_next()
    }
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        (**self).has_next()
    }

    fn try_next(&mut self) -> Result<Self::Item> {
        (**self).try_next()
    }
}

/// [`Iterator`] view over a [`Cursor`].
///
/// Lets a traversal feed `for` loops, `collect` and the rest of the standard
/// iterator toolbox. The iterator ends the first time the cursor reports
/// exhaustion or yields an error. Use the cursor directly to observe errors.
#[derive(Debug)]
pub struct CursorIter<C> {
    cursor: C,
}

impl<C> CursorIter<C> {
    /// Wraps a cursor.
    pub const fn new(cursor: C) -> Self {
        Self { cursor }
    }

    /// Returns the wrapped cursor.
    pub fn into_inner(self) -> C {
        self.cursor
    }
}

impl<C: Cursor> Iterator for CursorIter<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.has_next() {
            self.cursor.try_next().ok()
        } else {
            None
        }
    }
}
