// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lazyq_core::{Cursor, Sequence};

/// Extension trait providing the `count` terminal reducer.
pub trait CountExt: Sequence {
    /// Drains a fresh cursor and returns how many elements it produced.
    ///
    /// The size of a sequence is only discoverable this way. Counting an
    /// unbounded sequence never returns. Upstream errors are logged and not
    /// counted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyq_seq::{lines, CountExt, FilterExt};
    ///
    /// let body = "GET /\nPOST /login\nGET /about";
    /// let gets = lines(body).filter(|line| line.starts_with("GET"));
    ///
    /// assert_eq!(gets.count(), 2);
    /// ```
    fn count(&self) -> usize {
        let mut cursor = self.cursor();
        let mut total = 0;
        while cursor.has_next() {
            match cursor.try_next() {
                Ok(_) => total += 1,
                Err(e) => warn!("count skipped an upstream error: {e}"),
            }
        }
        total
    }
}

impl<S: Sequence + ?Sized> CountExt for S {}
