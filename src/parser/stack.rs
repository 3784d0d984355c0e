//! Bracket stack used while pairing loop instructions
//!
//! Push and pop are serialized through a mutex so a stack may be shared by
//! reference, though the parser only ever drives it from one thread.

use std::sync::{Mutex, MutexGuard};

/// LIFO of instruction indices of still-open loop brackets.
#[derive(Debug, Default)]
pub struct BracketStack {
    items: Mutex<Vec<usize>>,
}

impl BracketStack {
    pub fn new() -> Self {
        BracketStack {
            items: Mutex::new(Vec::new()),
        }
    }

    pub fn push(&self, index: usize) {
        self.lock().push(index);
    }

    /// Pop the most recent index; `None` when empty.
    pub fn pop(&self) -> Option<usize> {
        self.lock().pop()
    }

    pub fn peek(&self) -> Option<usize> {
        self.lock().last().copied()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A poisoned lock still holds a consistent Vec: every critical section is
    // a single push/pop/read.
    fn lock(&self) -> MutexGuard<'_, Vec<usize>> {
        self.items.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
