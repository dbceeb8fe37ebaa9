// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core traits and types for lazy, pull-based sequences.
//!
//! A [`Sequence`] is an immutable description of a traversal. Asking it for a
//! [`Cursor`] allocates fresh per-traversal state; nothing is evaluated before a
//! cursor is pulled. Every operator in `lazyq-seq` both consumes and produces
//! this capability, so pipelines can be nested freely and re-traversed from the
//! leaf source any number of times.
//!
//! ```
//! use lazyq_core::{Cursor, Sequence, SequenceExt};
//!
//! struct Countdown(u32);
//!
//! struct CountdownCursor(u32);
//!
//! impl Cursor for CountdownCursor {
//!     type Item = u32;
//!
//!     fn has_next(&mut self) -> bool {
//!         self.0 > 0
//!     }
//!
//!     fn try_next(&mut self) -> lazyq_core::Result<u32> {
//!         if self.0 == 0 {
//!             return Err(lazyq_core::LazyError::exhausted("countdown"));
//!         }
//!         self.0 -= 1;
//!         Ok(self.0 + 1)
//!     }
//! }
//!
//! impl Sequence for Countdown {
//!     type Item = u32;
//!     type Cursor<'a> = CountdownCursor;
//!
//!     fn cursor(&self) -> CountdownCursor {
//!         CountdownCursor(self.0)
//!     }
//! }
//!
//! let countdown = Countdown(3);
//! assert_eq!(countdown.to_vec(), vec![3, 2, 1]);
//! // Each traversal starts over.
//! assert_eq!(countdown.to_vec(), vec![3, 2, 1]);
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod cursor;
pub mod error;
pub mod pending;
pub mod sequence;

pub use self::cursor::{Cursor, CursorIter};
pub use self::error::{LazyError, Result};
pub use self::pending::Pending;
pub use self::sequence::{Sequence, SequenceExt};
