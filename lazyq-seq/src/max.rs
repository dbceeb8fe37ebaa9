// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lazyq_core::{Cursor, LazyError, Result, Sequence};

/// Extension trait providing the `max` terminal reducer.
pub trait MaxExt: Sequence {
    /// Drains a fresh cursor and returns its greatest element.
    ///
    /// Ties keep the earliest maximal element: a later element replaces the
    /// current maximum only when it compares strictly greater.
    ///
    /// # Errors
    ///
    /// Returns [`LazyError::EmptySequence`] if the sequence produces no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyq_seq::{from_vec, MaxExt};
    ///
    /// assert_eq!(from_vec(vec![5, 3, 9, 1]).max().ok(), Some(9));
    /// assert!(from_vec(Vec::<i32>::new()).max().is_err());
    /// ```
    fn max(&self) -> Result<Self::Item>
    where
        Self::Item: Ord,
    {
        let mut cursor = self.cursor();
        if !cursor.has_next() {
            warn!("max called on an empty sequence");
            return Err(LazyError::empty_sequence("max of an empty sequence"));
        }
        let mut greatest = cursor.try_next()?;
        while cursor.has_next() {
            let item = cursor.try_next()?;
            if item > greatest {
                greatest = item;
            }
        }
        Ok(greatest)
    }
}

impl<S: Sequence + ?Sized> MaxExt for S {}
