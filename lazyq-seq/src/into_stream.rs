// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Bridge from pull-based sequences to `futures::Stream`.
//!
//! The stream polls a fresh cursor synchronously: every `poll_next` is
//! immediately ready with the next element. This lets a pipeline feed async
//! consumers without changing how it is evaluated.

use futures::Stream;
use lazyq_core::{Sequence, SequenceExt};

/// Extension trait exposing a traversal as a [`Stream`].
pub trait IntoStreamExt: Sequence {
    /// Starts a new traversal and wraps it as a stream.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyq_seq::{from_vec, IntoStreamExt, MapExt};
    /// use futures::StreamExt;
    ///
    /// # async fn example() {
    /// let doubled = from_vec(vec![1, 2, 3]).map(|n| n * 2);
    ///
    /// let collected: Vec<i32> = doubled.stream().collect().await;
    /// assert_eq!(collected, vec![2, 4, 6]);
    /// # }
    /// ```
    fn stream(&self) -> impl Stream<Item = Self::Item> + '_ {
        futures::stream::iter(self.iter())
    }
}

impl<S: Sequence + ?Sized> IntoStreamExt for S {}
