// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::util::exhausted;
use lazyq_core::{Cursor, Pending, Result, Sequence};
use std::collections::HashSet;
use std::hash::Hash;

/// Extension trait providing the `distinct` operator for sequences.
///
/// This operator suppresses every element equal to one already emitted during
/// the same traversal.
pub trait DistinctExt: Sequence + Sized
where
    Self::Item: Eq + Hash + Clone,
{
    /// Emits each distinct value once, in order of first occurrence.
    ///
    /// Equality is the element type's `Eq`; hashing keeps membership checks
    /// near constant time.
    ///
    /// # Behavior
    ///
    /// - The first occurrence of a value is emitted
    /// - Later occurrences, adjacent or not, are dropped
    /// - Every cursor owns its own seen-set; independent traversals do not
    ///   influence each other
    ///
    /// # Memory
    ///
    /// Unlike every other operator in this crate, `distinct` is not O(1) in
    /// memory: each cursor keeps a clone of every distinct element emitted so
    /// far. Running it over an unbounded source with unbounded variety grows
    /// without limit. The set is released when the cursor is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyq_seq::{from_vec, DistinctExt, SequenceExt};
    ///
    /// let unique = from_vec(vec![3, 1, 3, 2, 1, 3]).distinct();
    ///
    /// assert_eq!(unique.to_vec(), vec![3, 1, 2]);
    /// ```
    ///
    /// # See Also
    ///
    /// - [`FilterExt::filter`](crate::FilterExt::filter) - General filtering
    fn distinct(self) -> Distinct<Self>;
}

impl<S> DistinctExt for S
where
    S: Sequence,
    S::Item: Eq + Hash + Clone,
{
    fn distinct(self) -> Distinct<Self> {
        Distinct::new(self)
    }
}

/// Sequence of the first occurrence of each upstream value.
///
/// Upstream errors are yielded where they occur and never enter the seen set.
#[derive(Debug, Clone)]
pub struct Distinct<S> {
    source: S,
}

impl<S> Distinct<S> {
    /// Wraps `source`, dropping repeated elements.
    pub const fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S> Sequence for Distinct<S>
where
    S: Sequence,
    S::Item: Eq + Hash + Clone,
{
    type Item = S::Item;
    type Cursor<'a>
        = DistinctCursor<S::Cursor<'a>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        DistinctCursor {
            upstream: self.source.cursor(),
            seen: HashSet::new(),
            pending: Pending::Empty,
        }
    }
}

/// Cursor produced by [`Distinct`].
#[derive(Debug)]
pub struct DistinctCursor<C: Cursor> {
    upstream: C,
    seen: HashSet<C::Item>,
    pending: Pending<Result<C::Item>>,
}

impl<C> DistinctCursor<C>
where
    C: Cursor,
{
    /// Number of distinct elements recorded so far.
    pub fn seen_len(&self) -> usize {
        self.seen.len()
    }
}

impl<C> Cursor for DistinctCursor<C>
where
    C: Cursor,
    C::Item: Eq + Hash + Clone,
{
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        let Self {
            upstream,
            seen,
            pending,
        } = self;
        pending.resolve(|| {
            while upstream.has_next() {
                match upstream.try_next() {
                    Ok(item) if !seen.contains(&item) => {
                        seen.insert(item.clone());
                        return Some(Ok(item));
                    }
                    Ok(_) => {}
                    Err(e) => return Some(Err(e)),
                }
            }
            None
        })
    }

    fn try_next(&mut self) -> Result<Self::Item> {
        if self.has_next() {
            if let Some(result) = self.pending.take() {
                return result;
            }
        }
        exhausted("distinct")
    }
}
