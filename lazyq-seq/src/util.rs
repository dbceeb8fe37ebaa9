// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lazyq_core::{LazyError, Result};

/// Error returned by `try_next` on a drained cursor.
pub(crate) fn exhausted<T>(cursor: &'static str) -> Result<T> {
    warn!("try_next called on exhausted {cursor} cursor");
    Err(LazyError::exhausted(format!("{cursor} cursor")))
}
