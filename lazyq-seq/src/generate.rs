// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Generate source - an infinite sequence fed by a supplier.

use lazyq_core::{Cursor, Result, Sequence};

/// Creates an infinite sequence whose every element comes from `supplier`.
///
/// `has_next` is always `true`. Bound the sequence with
/// [`limit`](crate::LimitExt::limit) (or another operator that stops pulling)
/// before handing it to a terminal reducer, or the reduction never returns.
///
/// Each cursor runs its own clone of the supplier. A supplier that captures its
/// state by value therefore restarts from that state on every traversal, which
/// keeps re-traversal deterministic.
///
/// # Examples
///
/// ```rust
/// use lazyq_seq::{generate, CountExt, LimitExt, SequenceExt};
///
/// let mut power = 1u64;
/// let powers_of_two = generate(move || {
///     let current = power;
///     power *= 2;
///     current
/// })
/// .limit(5);
///
/// assert_eq!(powers_of_two.to_vec(), vec![1, 2, 4, 8, 16]);
/// assert_eq!(powers_of_two.count(), 5);
/// ```
pub fn generate<F, T>(supplier: F) -> Generate<F>
where
    F: FnMut() -> T + Clone,
{
    Generate { supplier }
}

/// Infinite sequence produced by [`generate`].
#[derive(Debug, Clone)]
pub struct Generate<F> {
    supplier: F,
}

impl<F, T> Sequence for Generate<F>
where
    F: FnMut() -> T + Clone,
{
    type Item = T;
    type Cursor<'a>
        = GenerateCursor<F>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        GenerateCursor {
            supplier: self.supplier.clone(),
        }
    }
}

/// Cursor produced by [`Generate`].
#[derive(Debug)]
pub struct GenerateCursor<F> {
    supplier: F,
}

impl<F, T> Cursor for GenerateCursor<F>
where
    F: FnMut() -> T,
{
    type Item = T;

    fn has_next(&mut self) -> bool {
        true
    }

    fn try_next(&mut self) -> Result<T> {
        Ok((self.supplier)())
    }
}
