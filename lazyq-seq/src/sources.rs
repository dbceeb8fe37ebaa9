// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Leaf sequences that pipelines start from.
//!
//! Producers outside this crate (HTTP bodies, parsed documents, query results)
//! hand their records over through one of these sources. The only requirement
//! is that a fresh, repeatable traversal can be started at any time:
//!
//! - [`from_vec`] / [`of`] - records already in memory
//! - [`lines`] - one record per line of a text body
//! - [`from_fn`] - any factory of standard iterators
//! - [`empty`] - no records at all
//!
//! [`generate`](crate::generate) is the infinite counterpart.

use crate::util::exhausted;
use lazyq_core::{Cursor, Pending, Result, Sequence};
use std::iter::Peekable;
use std::marker::PhantomData;

/// Creates a sequence over owned in-memory records.
///
/// Cursors walk the vector in place and yield clones of its elements.
pub fn from_vec<T: Clone>(items: Vec<T>) -> Records<T> {
    Records { items }
}

/// Creates a sequence over a fixed list of records.
///
/// ```rust
/// use lazyq_seq::{of, SequenceExt};
///
/// assert_eq!(of(["x", "y"]).to_vec(), vec!["x", "y"]);
/// ```
pub fn of<T: Clone, const N: usize>(items: [T; N]) -> Records<T> {
    Records {
        items: Vec::from(items),
    }
}

/// In-memory sequence created by [`from_vec`] or [`of`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Records<T> {
    items: Vec<T>,
}

impl<T> Records<T> {
    /// Gives back the records.
    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T: Clone> Sequence for Records<T> {
    type Item = T;
    type Cursor<'a>
        = RecordsCursor<'a, T>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        RecordsCursor {
            items: self.items.iter(),
        }
    }
}

/// Cursor produced by [`Records`].
#[derive(Debug)]
pub struct RecordsCursor<'a, T> {
    items: std::slice::Iter<'a, T>,
}

impl<T: Clone> Cursor for RecordsCursor<'_, T> {
    type Item = T;

    fn has_next(&mut self) -> bool {
        !self.items.as_slice().is_empty()
    }

    fn try_next(&mut self) -> Result<T> {
        match self.items.next() {
            Some(item) => Ok(item.clone()),
            None => exhausted("records"),
        }
    }
}

/// Creates a sequence with one `String` per line of `text`.
///
/// Line terminators (`\n` or `\r\n`) are stripped; a trailing terminator does
/// not produce an empty last line.
///
/// ```rust
/// use lazyq_seq::{lines, SequenceExt};
///
/// let body = lines("first\r\nsecond\n");
/// assert_eq!(body.to_vec(), vec!["first", "second"]);
/// ```
pub fn lines(text: impl Into<String>) -> Lines {
    Lines { text: text.into() }
}

/// Line-by-line sequence created by [`lines`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lines {
    text: String,
}

impl Sequence for Lines {
    type Item = String;
    type Cursor<'a> = LinesCursor<'a>;

    fn cursor(&self) -> LinesCursor<'_> {
        LinesCursor {
            lines: self.text.lines().peekable(),
        }
    }
}

/// Cursor produced by [`Lines`].
#[derive(Debug)]
pub struct LinesCursor<'a> {
    lines: Peekable<std::str::Lines<'a>>,
}

impl Cursor for LinesCursor<'_> {
    type Item = String;

    fn has_next(&mut self) -> bool {
        self.lines.peek().is_some()
    }

    fn try_next(&mut self) -> Result<String> {
        match self.lines.next() {
            Some(line) => Ok(line.to_owned()),
            None => exhausted("lines"),
        }
    }
}

/// Creates a sequence from a factory of standard iterators.
///
/// The factory runs once per cursor, so every traversal gets a fresh iterator.
///
/// ```rust
/// use lazyq_seq::{from_fn, SequenceExt};
///
/// let squares = from_fn(|| (1..=4).map(|n| n * n));
/// assert_eq!(squares.to_vec(), vec![1, 4, 9, 16]);
/// assert_eq!(squares.to_vec(), vec![1, 4, 9, 16]);
/// ```
pub fn from_fn<F, I>(factory: F) -> FromFn<F>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    FromFn { factory }
}

/// Iterator-backed sequence created by [`from_fn`].
#[derive(Debug, Clone)]
pub struct FromFn<F> {
    factory: F,
}

impl<F, I> Sequence for FromFn<F>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    type Item = I::Item;
    type Cursor<'a>
        = IterCursor<I::IntoIter>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        IterCursor::new((self.factory)())
    }
}

/// Adapts a standard [`Iterator`] to the [`Cursor`] contract.
///
/// `has_next` pulls one element ahead and parks it, so the wrapped iterator is
/// never advanced more than one element past what has been consumed.
#[derive(Debug)]
pub struct IterCursor<I: Iterator> {
    iter: I,
    pending: Pending<I::Item>,
}

impl<I: Iterator> IterCursor<I> {
    /// Wraps anything iterable.
    pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            iter: iter.into_iter(),
            pending: Pending::Empty,
        }
    }
}

impl<I: Iterator> Cursor for IterCursor<I> {
    type Item = I::Item;

    fn has_next(&mut self) -> bool {
        let Self { iter, pending } = self;
        pending.resolve(|| iter.next())
    }

    fn try_next(&mut self) -> Result<Self::Item> {
        if self.has_next() {
            if let Some(item) = self.pending.take() {
                return Ok(item);
            }
        }
        exhausted("iterator")
    }
}

/// Creates a sequence with no elements.
pub const fn empty<T>() -> Empty<T> {
    Empty {
        marker: PhantomData,
    }
}

/// Sequence created by [`empty`].
#[derive(Debug, Clone, Copy)]
pub struct Empty<T> {
    marker: PhantomData<fn() -> T>,
}

impl<T> Sequence for Empty<T> {
    type Item = T;
    type Cursor<'a>
        = EmptyCursor<T>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        EmptyCursor {
            marker: PhantomData,
        }
    }
}

/// Cursor produced by [`Empty`].
#[derive(Debug)]
pub struct EmptyCursor<T> {
    marker: PhantomData<fn() -> T>,
}

impl<T> Cursor for EmptyCursor<T> {
    type Item = T;

    fn has_next(&mut self) -> bool {
        false
    }

    fn try_next(&mut self) -> Result<T> {
        exhausted("empty")
    }
}
