// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! One-slot lookahead buffer shared by buffering cursors.
//!
//! Cursors that must pull from upstream to answer `has_next` (filter, distinct,
//! interleave, iterator adapters) park the element they found here until it is
//! consumed. An explicit state enum keeps "nothing buffered yet" apart from
//! "upstream is finished", even when the element type itself has an
//! absent-like value such as `None`.

/// State of a cursor's pending slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pending<T> {
    /// Nothing buffered; upstream may still have elements.
    Empty,
    /// An element was produced by a `has_next` probe and awaits consumption.
    Buffered(T),
    /// Upstream reported exhaustion. Terminal.
    Done,
}

impl<T> Default for Pending<T> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<T> Pending<T> {
    /// Returns `true` if an element is waiting to be consumed.
    pub const fn is_buffered(&self) -> bool {
        matches!(self, Self::Buffered(_))
    }

    /// Returns `true` once upstream has been found exhausted.
    pub const fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Answers `has_next` for a buffering cursor.
    ///
    /// A buffered slot answers `true` and a done slot answers `false` without
    /// calling `pull`. An empty slot calls `pull` exactly once: `Some` is
    /// buffered, `None` marks the slot done.
    pub fn resolve<F>(&mut self, pull: F) -> bool
    where
        F: FnOnce() -> Option<T>,
    {
        match self {
            Self::Buffered(_) => true,
            Self::Done => false,
            Self::Empty => match pull() {
                Some(item) => {
                    *self = Self::Buffered(item);
                    true
                }
                None => {
                    *self = Self::Done;
                    false
                }
            },
        }
    }

    /// Moves the buffered element out, leaving the slot empty.
    ///
    /// Returns `None` for an empty or done slot; a done slot stays done.
    pub fn take(&mut self) -> Option<T> {
        match std::mem::replace(self, Self::Empty) {
            Self::Buffered(item) => Some(item),
            Self::Done => {
                *self = Self::Done;
                None
            }
            Self::Empty => None,
        }
    }
}
