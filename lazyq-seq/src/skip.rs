// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Skip operator - discards the first n elements of every traversal.
//!
//! Unlike the other views, `skip` does its work eagerly when the cursor is
//! created: the upstream cursor is advanced `n` times (or until it runs out)
//! and then handed back unchanged. Every later `has_next`/`try_next` goes
//! straight to the upstream cursor, so a skipped view adds no per-element cost.
//!
//! Counts are `usize`; a negative count cannot be expressed and `skip(0)`
//! traverses exactly like its source. Upstream errors met while skipping are
//! logged and dropped without counting toward `n`.
//!
//! # Examples
//!
//! ```rust
//! use lazyq_seq::{from_vec, SequenceExt, SkipExt};
//!
//! let numbers = from_vec(vec![1, 2, 3, 4, 5]);
//!
//! assert_eq!((&numbers).skip(2).to_vec(), vec![3, 4, 5]);
//! assert_eq!((&numbers).skip(10).to_vec(), Vec::<i32>::new());
//! ```
//!
//! # See Also
//!
//! - [`LimitExt::limit`](crate::LimitExt::limit) - Take first n elements

use lazyq_core::{Cursor, Sequence};

/// Extension trait providing the `skip` operator for sequences.
pub trait SkipExt: Sequence + Sized {
    /// Drops the first `min(n, len)` elements of every traversal.
    ///
    /// See the [module-level documentation](crate::skip) for details.
    fn skip(self, n: usize) -> Skip<Self>;
}

impl<S: Sequence> SkipExt for S {
    fn skip(self, n: usize) -> Skip<Self> {
        Skip::new(self, n)
    }
}

/// Sequence of the upstream elements after the first `count`.
#[derive(Debug, Clone)]
pub struct Skip<S> {
    source: S,
    count: usize,
}

impl<S> Skip<S> {
    /// Wraps `source`, dropping its first `count` elements.
    pub const fn new(source: S, count: usize) -> Self {
        Self { source, count }
    }
}

impl<S: Sequence> Sequence for Skip<S> {
    type Item = S::Item;
    type Cursor<'a>
        = S::Cursor<'a>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        let mut cursor = self.source.cursor();
        let mut skipped = 0;
        while skipped < self.count && cursor.has_next() {
            match cursor.try_next() {
                Ok(_) => skipped += 1,
                Err(e) => warn!("skip cursor discarded an upstream error: {e}"),
            }
        }
        debug!("skip cursor discarded {skipped} of {} elements", self.count);
        cursor
    }
}
