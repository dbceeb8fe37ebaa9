// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Lazy sequence combinators.
//!
//! This crate provides composable, pull-based operators over any type
//! implementing [`Sequence`]. Pipelines are built by nesting views; building
//! one does no work. Work happens only when a [`Cursor`] is created and pulled,
//! and each pull walks down through the wrapped cursors on demand.
//!
//! # Architecture
//!
//! - **[`Sequence`]**: an immutable descriptor that hands out fresh cursors
//! - **[`Cursor`]**: a single traversal with idempotent `has_next` and
//!   validating `try_next`
//! - **Extension traits**: each operator is provided via an extension trait for
//!   composability, and re-exported through [`prelude`]
//! - **Leaf sources**: [`from_vec`], [`of`], [`lines`], [`from_fn`], [`empty`]
//!   and the infinite [`generate`]
//!
//! ## Operator Categories
//!
//! ### Filtering Operators
//!
//! - **[`filter`](FilterExt::filter)**: Keeps elements matching a predicate
//! - **[`distinct`](DistinctExt::distinct)**: Keeps the first occurrence of each value
//! - **[`skip`](SkipExt::skip)**: Drops the first n elements
//! - **[`limit`](LimitExt::limit)**: Stops after n elements
//!
//! ### Transformation Operators
//!
//! - **[`map`](MapExt::map)**: Transforms each element
//!
//! ### Combination Operators
//!
//! - **[`concat`](ConcatExt::concat)**: One sequence after another
//! - **[`interleave`](InterleaveExt::interleave)**: Alternates between two sequences
//!
//! ### Terminal Reducers
//!
//! - **[`count`](CountExt::count)**: Number of elements
//! - **[`max`](MaxExt::max)**: Greatest element, first occurrence on ties
//!
//! # Buffering
//!
//! Every cursor holds at most one produced-but-unconsumed element, except
//! [`Distinct`], whose seen-set grows with the number of distinct elements
//! emitted.
//!
//! # Re-traversal
//!
//! ```rust
//! use lazyq_seq::prelude::*;
//! use lazyq_seq::lines;
//!
//! let body = lines("Lisbon\nPorto\nFaro\nPorto");
//! let cities = (&body).distinct().map(|city| city.to_uppercase());
//!
//! assert_eq!(cities.to_vec(), vec!["LISBON", "PORTO", "FARO"]);
//! // A second traversal starts over with a fresh seen-set.
//! assert_eq!(cities.count(), 3);
//! assert_eq!(body.count(), 4);
//! ```
//!
//! # Threading
//!
//! Evaluation is synchronous on the caller's thread. A cursor is driven
//! through `&mut`, so one cursor has one driver at a time; separate cursors of
//! a `Sync` sequence may run on separate threads.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
#[macro_use]
mod logging;
pub mod concat;
pub mod count;
pub mod distinct;
pub mod filter;
pub mod generate;
pub mod interleave;
#[cfg(feature = "stream")]
pub mod into_stream;
pub mod limit;
pub mod map;
pub mod max;
pub mod prelude;
pub mod skip;
pub mod sources;
mod util;

// Re-export commonly used types
pub use concat::{Concat, ConcatCursor, ConcatExt};
pub use count::CountExt;
pub use distinct::{Distinct, DistinctCursor, DistinctExt};
pub use filter::{Filter, FilterCursor, FilterExt};
pub use generate::{generate, Generate, GenerateCursor};
pub use interleave::{Interleave, InterleaveCursor, InterleaveExt};
#[cfg(feature = "stream")]
pub use into_stream::IntoStreamExt;
pub use lazyq_core::{Cursor, CursorIter, LazyError, Pending, Result, Sequence, SequenceExt};
pub use limit::{Limit, LimitCursor, LimitExt};
pub use map::{Map, MapCursor, MapExt};
pub use max::MaxExt;
pub use skip::{Skip, SkipExt};
pub use sources::{
    empty, from_fn, from_vec, lines, of, Empty, EmptyCursor, FromFn, IterCursor, Lines,
    LinesCursor, Records, RecordsCursor,
};
