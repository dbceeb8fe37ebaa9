// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the lazyq workspace.
//!
//! This crate provides record fixtures, an instrumented source and assertion
//! helpers for testing sequence operators. It is designed for use in
//! development and testing only, not for production code.
//!
//! # Key Types
//!
//! ## `ProbeSequence<T>`
//!
//! An in-memory source that counts cursor creations, `has_next` probes and
//! consumed elements:
//!
//! ```rust
//! use lazyq_core::{Cursor, Sequence};
//! use lazyq_test_utils::ProbeSequence;
//!
//! let probe = ProbeSequence::new(vec!["a", "b"]);
//! let mut cursor = probe.cursor();
//! cursor.has_next();
//! cursor.has_next();
//!
//! assert_eq!(probe.probes(), 2);
//! assert_eq!(probe.pulls(), 0);
//! ```
//!
//! ## Record fixtures
//!
//! ```rust
//! use lazyq_test_utils::records::{week, Weather, WEEK_BODY};
//!
//! let parsed: Vec<Weather> = WEEK_BODY.lines().filter_map(Weather::parse).collect();
//! assert_eq!(parsed, week());
//! ```
//!
//! # Module Organization
//!
//! - `probe` - `ProbeSequence<T>` and its cursor
//! - `error_injection` - `ErrorInjectingSequence<T>` for failure paths
//! - `records` - `Location` and `Weather` fixtures plus a raw text body
//! - `helpers` - Assertion and supplier helpers

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod error_injection;
pub mod helpers;
pub mod probe;
pub mod records;

// Re-export commonly used test utilities
pub use error_injection::{ErrorInjectingCursor, ErrorInjectingSequence};
pub use helpers::{
    assert_exhausted, counted_supplier, counter_from, drain, drain_results, expect_next,
};
pub use probe::{ProbeCursor, ProbeSequence};
pub use records::{Location, Weather};
