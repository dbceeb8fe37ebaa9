// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Lazyq
//!
//! Lazy, repeatable sequence pipelines with pull-based cursors.
//!
//! ## Overview
//!
//! A pipeline is a tree of views over one or more leaf sequences. Building it
//! does no work at all. Work starts when a cursor is created and pulled, and
//! each pull walks down through the views on demand, so a pipeline over an
//! infinite source costs only what its consumer asks for.
//!
//! Every operator is available twice:
//!
//! - as a free function in this crate: `filter(source, predicate)`
//! - as an extension method through [`prelude`]: `source.filter(predicate)`
//!
//! ## Quick Start
//!
//! ```rust
//! use lazyq::{count, distinct, filter, lines, map, max, skip};
//!
//! let body = lines("city,temp\nLisbon,21\nPorto,17\nFaro,24\nPorto,17");
//!
//! let rows = skip(&body, 1);
//! let temps = map(distinct(&rows), |row| {
//!     row.rsplit(',').next().and_then(|t| t.parse::<i32>().ok()).unwrap_or(i32::MIN)
//! });
//!
//! assert_eq!(count(&rows), 4);
//! assert_eq!(count(filter(&temps, |t| *t > 20)), 2);
//! assert_eq!(max(&temps).ok(), Some(24));
//! ```
//!
//! ## Infinite Sources
//!
//! ```rust
//! use lazyq::{generate, interleave, limit, map};
//! use lazyq::prelude::*;
//!
//! let mut next = 0u32;
//! let naturals = generate(move || {
//!     next += 1;
//!     next
//! });
//!
//! let evens = map(&naturals, |n| n * 2);
//! let odds = map(&naturals, |n| n * 2 - 1);
//! let woven = limit(interleave(odds, evens), 6);
//!
//! assert_eq!(woven.to_vec(), vec![1, 2, 3, 4, 5, 6]);
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

use lazyq_seq::{CountExt, MaxExt};
use std::hash::Hash;

// Re-export core types
pub use lazyq_core::{Cursor, CursorIter, LazyError, Pending, Result, Sequence, SequenceExt};

// Re-export the views and leaf sources
pub use lazyq_seq::{
    empty, from_fn, from_vec, generate, lines, of, Concat, Distinct, Empty, Filter, FromFn,
    Generate, Interleave, Limit, Lines, Map, Records, Skip,
};

#[cfg(feature = "stream")]
pub use lazyq_seq::IntoStreamExt;

/// Prelude module for convenient imports
pub mod prelude {
    pub use lazyq_seq::prelude::*;
}

/// Keeps the elements of `source` for which `predicate` returns `true`.
///
/// See [`FilterExt::filter`](lazyq_seq::FilterExt::filter).
pub fn filter<S, F>(source: S, predicate: F) -> Filter<S, F>
where
    S: Sequence,
    F: Fn(&S::Item) -> bool,
{
    Filter::new(source, predicate)
}

/// Applies `transform` to every element of `source`.
///
/// See [`MapExt::map`](lazyq_seq::MapExt::map).
pub fn map<S, F, U>(source: S, transform: F) -> Map<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> U,
{
    Map::new(source, transform)
}

/// Drops the first `n` elements of every traversal of `source`.
pub fn skip<S: Sequence>(source: S, n: usize) -> Skip<S> {
    Skip::new(source, n)
}

/// Caps every traversal of `source` at `n` elements.
pub fn limit<S: Sequence>(source: S, n: usize) -> Limit<S> {
    Limit::new(source, n)
}

/// Emits each distinct element of `source` once, in order of first occurrence.
///
/// See [`DistinctExt::distinct`](lazyq_seq::DistinctExt::distinct) for the
/// memory cost.
pub fn distinct<S>(source: S) -> Distinct<S>
where
    S: Sequence,
    S::Item: Eq + Hash + Clone,
{
    Distinct::new(source)
}

/// Emits every element of `first`, then every element of `second`.
pub fn concat<A, B>(first: A, second: B) -> Concat<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    Concat::new(first, second)
}

/// Alternates between `first` and `second`, then drains the longer one.
///
/// See [`lazyq_seq::interleave`] for the alternation rules.
pub fn interleave<A, B>(first: A, second: B) -> Interleave<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    Interleave::new(first, second)
}

/// Number of elements in one full traversal of `source`.
///
/// Never returns for an unbounded sequence.
pub fn count<S: Sequence>(source: S) -> usize {
    source.count()
}

/// Greatest element of one full traversal of `source`, first occurrence on ties.
///
/// # Errors
///
/// Returns [`LazyError::EmptySequence`] if `source` produces no elements.
pub fn max<S>(source: S) -> Result<S::Item>
where
    S: Sequence,
    S::Item: Ord,
{
    source.max()
}
