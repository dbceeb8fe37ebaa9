// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting all commonly used traits.
//!
//! ```rust
//! use lazyq_seq::prelude::*;
//! use lazyq_seq::from_vec;
//!
//! let words = from_vec(vec!["b", "a", "b", "c"]);
//! assert_eq!(words.distinct().limit(2).to_vec(), vec!["b", "a"]);
//! ```
//!
//! # Contents
//!
//! - [`Sequence`], [`Cursor`], [`SequenceExt`] - Core capabilities
//! - [`FilterExt`] - Keep matching elements
//! - [`MapExt`] - Transform elements
//! - [`SkipExt`] - Skip first n elements
//! - [`LimitExt`] - Take first n elements
//! - [`DistinctExt`] - Drop repeated elements
//! - [`ConcatExt`] - One sequence after another
//! - [`InterleaveExt`] - Alternate between two sequences
//! - [`CountExt`], [`MaxExt`] - Terminal reducers
//! - `IntoStreamExt` - Expose a traversal as a `futures::Stream` (feature `stream`)

pub use crate::concat::ConcatExt;
pub use crate::count::CountExt;
pub use crate::distinct::DistinctExt;
pub use crate::filter::FilterExt;
#[cfg(feature = "stream")]
pub use crate::into_stream::IntoStreamExt;
pub use crate::interleave::InterleaveExt;
pub use crate::limit::LimitExt;
pub use crate::map::MapExt;
pub use crate::max::MaxExt;
pub use crate::skip::SkipExt;
pub use lazyq_core::{Cursor, Sequence, SequenceExt};
