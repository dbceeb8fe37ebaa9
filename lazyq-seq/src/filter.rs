// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Filter operator - keeps only the elements matching a predicate.

use crate::util::exhausted;
use lazyq_core::{Cursor, Pending, Result, Sequence};

/// Extension trait providing the `filter` operator for sequences.
pub trait FilterExt: Sequence + Sized {
    /// Keeps, in source order, exactly the elements for which `predicate` holds.
    ///
    /// Nothing is evaluated until a cursor is pulled. Asking the cursor
    /// `has_next` pulls upstream until a match is found (or upstream runs out)
    /// and parks the match until it is consumed, so the predicate runs at most
    /// once per upstream element no matter how often `has_next` is asked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyq_seq::{from_vec, FilterExt, SequenceExt};
    ///
    /// let evens = from_vec(vec![1, 2, 3, 4, 5, 6]).filter(|n| n % 2 == 0);
    ///
    /// assert_eq!(evens.to_vec(), vec![2, 4, 6]);
    /// ```
    ///
    /// # See Also
    ///
    /// - [`DistinctExt::distinct`](crate::DistinctExt::distinct) - Drop repeated elements
    /// - [`LimitExt::limit`](crate::LimitExt::limit) - Stop after n elements
    fn filter<F>(self, predicate: F) -> Filter<Self, F>
    where
        F: Fn(&Self::Item) -> bool;
}

impl<S: Sequence> FilterExt for S {
    fn filter<F>(self, predicate: F) -> Filter<Self, F>
    where
        F: Fn(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }
}

/// Sequence of the upstream elements that satisfy a predicate.
///
/// Upstream errors skip the predicate and are yielded where they occur.
#[derive(Debug, Clone)]
pub struct Filter<S, F> {
    source: S,
    predicate: F,
}

impl<S, F> Filter<S, F> {
    /// Wraps `source`, keeping the elements `predicate` accepts.
    pub const fn new(source: S, predicate: F) -> Self {
        Self { source, predicate }
    }
}

impl<S, F> Sequence for Filter<S, F>
where
    S: Sequence,
    F: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Cursor<'a>
        = FilterCursor<'a, S::Cursor<'a>, F>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        FilterCursor {
            upstream: self.source.cursor(),
            predicate: &self.predicate,
            pending: Pending::Empty,
        }
    }
}

/// Cursor produced by [`Filter`].
#[derive(Debug)]
pub struct FilterCursor<'a, C: Cursor, F> {
    upstream: C,
    predicate: &'a F,
    pending: Pending<Result<C::Item>>,
}

impl<C, F> Cursor for FilterCursor<'_, C, F>
where
    C: Cursor,
    F: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        let Self {
            upstream,
            predicate,
            pending,
        } = self;
        pending.resolve(|| {
            while upstream.has_next() {
                match upstream.try_next() {
                    Ok(item) if predicate(&item) => return Some(Ok(item)),
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
        exhausted("filter")
    }
}
