// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Instrumented source for checking how operators drive their upstream.
//!
//! Operators must never pull more than they need, never pull twice for one
//! element and never do work before a cursor exists. [`ProbeSequence`] counts
//! cursor creations, `has_next` probes and consumed elements so tests can
//! assert exactly that.

use lazyq_core::{Cursor, LazyError, Result, Sequence};
use std::cell::Cell;

/// In-memory sequence that records how it is traversed.
///
/// Counters are shared by every cursor of the probe and are never reset
/// implicitly; use [`reset`](ProbeSequence::reset) between phases of a test.
///
/// # Examples
///
/// ```rust
/// use lazyq_core::{Cursor, Sequence};
/// use lazyq_test_utils::ProbeSequence;
///
/// let probe = ProbeSequence::new(vec![1, 2, 3]);
/// let mut cursor = probe.cursor();
///
/// assert!(cursor.has_next());
/// assert_eq!(cursor.try_next().unwrap(), 1);
/// assert_eq!(probe.cursors(), 1);
/// assert_eq!(probe.pulls(), 1);
/// ```
#[derive(Debug)]
pub struct ProbeSequence<T> {
    items: Vec<T>,
    cursors: Cell<usize>,
    probes: Cell<usize>,
    pulls: Cell<usize>,
}

impl<T> ProbeSequence<T> {
    /// Creates a probe over `items` with every counter at zero.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            cursors: Cell::new(0),
            probes: Cell::new(0),
            pulls: Cell::new(0),
        }
    }

    /// Number of cursors created so far.
    pub fn cursors(&self) -> usize {
        self.cursors.get()
    }

    /// Number of `has_next` calls across all cursors.
    pub fn probes(&self) -> usize {
        self.probes.get()
    }

    /// Number of elements consumed across all cursors.
    pub fn pulls(&self) -> usize {
        self.pulls.get()
    }

    /// Sets every counter back to zero.
    pub fn reset(&self) {
        self.cursors.set(0);
        self.probes.set(0);
        self.pulls.set(0);
    }
}

impl<T: Clone> Sequence for ProbeSequence<T> {
    type Item = T;
    type Cursor<'a>
        = ProbeCursor<'a, T>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.cursors.set(self.cursors.get() + 1);
        ProbeCursor {
            probe: self,
            position: 0,
        }
    }
}

/// Cursor produced by [`ProbeSequence`].
#[derive(Debug)]
pub struct ProbeCursor<'a, T> {
    probe: &'a ProbeSequence<T>,
    position: usize,
}

impl<T: Clone> Cursor for ProbeCursor<'_, T> {
    type Item = T;

    fn has_next(&mut self) -> bool {
        self.probe.probes.set(self.probe.probes.get() + 1);
        self.position < self.probe.items.len()
    }

    fn try_next(&mut self) -> Result<T> {
        let item = self
            .probe
            .items
            .get(self.position)
            .cloned()
            .ok_or_else(|| LazyError::exhausted("probe cursor"))?;
        self.position += 1;
        self.probe.pulls.set(self.probe.pulls.get() + 1);
        Ok(item)
    }
}
