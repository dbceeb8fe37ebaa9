// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lazyq_core::{Cursor, LazyError, Result};
use std::cell::Cell;
use std::fmt::Debug;
use std::rc::Rc;

/// Asserts that a cursor is drained and that consuming from it fails.
///
/// # Panics
///
/// Panics if the cursor still reports or yields an element.
pub fn assert_exhausted<C>(cursor: &mut C)
where
    C: Cursor,
    C::Item: Debug,
{
    assert!(!cursor.has_next(), "Expected exhausted cursor, has_next is true");
    match cursor.try_next() {
        Err(LazyError::ExhaustedCursor { .. }) => {}
        other => panic!("Expected ExhaustedCursor error but got {other:?}"),
    }
}

/// Consumes the next element, asserting that it equals `expected`.
///
/// # Panics
///
/// Panics if the cursor is exhausted or yields a different element.
pub fn expect_next<C>(cursor: &mut C, expected: C::Item)
where
    C: Cursor,
    C::Item: Debug + PartialEq,
{
    assert!(cursor.has_next(), "Expected {expected:?} but cursor is exhausted");
    match cursor.try_next() {
        Ok(item) => assert_eq!(item, expected),
        Err(e) => panic!("Expected {expected:?} but got error: {e}"),
    }
}

/// Pulls every remaining element of a cursor.
pub fn drain<C: Cursor>(cursor: &mut C) -> Vec<C::Item> {
    let mut items = Vec::new();
    while cursor.has_next() {
        match cursor.try_next() {
            Ok(item) => items.push(item),
            Err(_) => break,
        }
    }
    items
}

/// Pulls every remaining result of a cursor, errors included.
///
/// Unlike [`drain`], an `Err` does not end the traversal.
pub fn drain_results<C: Cursor>(cursor: &mut C) -> Vec<Result<C::Item>> {
    let mut results = Vec::new();
    while cursor.has_next() {
        results.push(cursor.try_next());
    }
    results
}

/// Supplier yielding `start, start + 1, ...`.
///
/// The counter is captured by value, so every clone restarts at `start`.
pub fn counter_from(start: i64) -> impl FnMut() -> i64 + Clone {
    let mut next = start;
    move || {
        let current = next;
        next += 1;
        current
    }
}

/// Supplier that counts its invocations in a shared cell.
///
/// Clones share the same cell, so the count covers every cursor.
pub fn counted_supplier<T: Clone>(value: T) -> (impl FnMut() -> T + Clone, Rc<Cell<usize>>) {
    let calls = Rc::new(Cell::new(0));
    let shared = Rc::clone(&calls);
    let supplier = move || {
        shared.set(shared.get() + 1);
        value.clone()
    };
    (supplier, calls)
}
