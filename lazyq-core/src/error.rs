// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for lazy sequence traversal.
//!
//! Both failure modes signal a caller bug rather than a transient condition, so
//! nothing in this crate retries or recovers from a [`LazyError`]. Panics raised
//! by user-supplied predicates, transforms or suppliers are not converted into
//! errors; they unwind through every enclosing cursor unchanged.
//!
//! # Examples
//!
//! ```
//! use lazyq_core::{LazyError, Result};
//!
//! fn largest(values: &[i32]) -> Result<i32> {
//!     values
//!         .iter()
//!         .copied()
//!         .max()
//!         .ok_or_else(|| LazyError::empty_sequence("largest of no values"))
//! }
//!
//! assert!(largest(&[]).is_err());
//! ```

/// Root error type for all sequence operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LazyError {
    /// An element was requested from a cursor that has none left.
    ///
    /// Consuming always re-validates through `has_next`, so this is only raised
    /// when the cursor is genuinely exhausted.
    #[error("Exhausted cursor: {context}")]
    ExhaustedCursor {
        /// Which cursor was drained
        context: String,
    },

    /// A reduction that needs at least one element was applied to an empty
    /// sequence.
    #[error("Empty sequence: {context}")]
    EmptySequence {
        /// Which reduction was attempted
        context: String,
    },
}

impl LazyError {
    /// Create an exhausted-cursor error with the given context
    pub fn exhausted(context: impl Into<String>) -> Self {
        Self::ExhaustedCursor {
            context: context.into(),
        }
    }

    /// Create an empty-sequence error with the given context
    pub fn empty_sequence(context: impl Into<String>) -> Self {
        Self::EmptySequence {
            context: context.into(),
        }
    }

    /// Check if this is a recoverable error
    ///
    /// Neither variant can succeed on retry: pulling an exhausted cursor again
    /// stays exhausted and an empty sequence stays empty.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        false
    }

    /// Check if this error comes from driving a cursor past its end
    #[must_use]
    pub const fn is_misuse(&self) -> bool {
        matches!(self, Self::ExhaustedCursor { .. })
    }

    /// Returns the context message attached to this error
    #[must_use]
    pub fn context(&self) -> &str {
        match self {
            Self::ExhaustedCursor { context } | Self::EmptySequence { context } => context,
        }
    }
}

/// Specialized Result type for sequence operations
///
/// This is a type alias for `std::result::Result<T, LazyError>`.
///
/// # Examples
///
/// ```
/// use lazyq_core::Result;
///
/// fn first_line() -> Result<String> {
///     Ok("processed".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, LazyError>;
