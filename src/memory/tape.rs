//! Tape memory: a fixed-capacity row of integer cells and a movable cursor
//!
//! Cursor movement is never checked against the tape bounds; the cursor may
//! wander outside the tape and come back. Touching a cell while the cursor is
//! outside the tape does not panic: reads yield 0, writes are dropped, and the
//! offending cursor position is recorded as a fault that the engine turns into
//! a runtime error after the current instruction.
//!
//! The cell operators keep values in `[0, 254]` for in-range input, with one
//! asymmetry that programs can observe:
//!
//! ```text
//! increment: cell = (cell + count) % 255
//! decrement: cell = cell - count            if cell - count >= 0
//!            cell = 256 + cell - count      otherwise
//! ```
//!
//! so `0 - 1` gives 255, a value `+` can never produce.

use crate::interpreter::constants::MEMORY_SIZE;
use std::cell::Cell;

/// The tape plus its cursor.
#[derive(Debug, Clone)]
pub struct Memory {
    cells: Vec<i64>,
    cursor: isize,
    fault: Cell<Option<isize>>,
}

impl Memory {
    /// Create a zeroed tape with `capacity` cells and the cursor at 0.
    pub fn new(capacity: usize) -> Self {
        Memory {
            cells: vec![0; capacity],
            cursor: 0,
            fault: Cell::new(None),
        }
    }

    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    pub fn cursor(&self) -> isize {
        self.cursor
    }

    pub fn cells(&self) -> &[i64] {
        &self.cells
    }

    /// Move the cursor by `delta` cells. Unchecked against the tape bounds.
    pub fn seek(&mut self, delta: isize) {
        self.cursor = self.cursor.wrapping_add(delta);
    }

    /// Value of the cell under the cursor, or 0 if the cursor is off the tape.
    pub fn value(&self) -> i64 {
        self.current().unwrap_or(0)
    }

    /// Value of the cell under the cursor; `None` (and a recorded fault) if
    /// the cursor is off the tape.
    pub fn current(&self) -> Option<i64> {
        match self.index() {
            Some(index) => Some(self.cells[index]),
            None => {
                self.fault.set(Some(self.cursor));
                None
            }
        }
    }

    /// Overwrite the cell under the cursor.
    pub fn set_value(&mut self, value: i64) {
        match self.index() {
            Some(index) => self.cells[index] = value,
            None => self.fault.set(Some(self.cursor)),
        }
    }

    /// Value at an absolute position; 0 unless `0 <= position < capacity`.
    pub fn get(&self, position: isize) -> i64 {
        usize::try_from(position)
            .ok()
            .and_then(|index| self.cells.get(index))
            .copied()
            .unwrap_or(0)
    }

    /// Whether the cursor currently addresses a cell.
    pub fn in_bounds(&self) -> bool {
        self.index().is_some()
    }

    /// Take the last out-of-bounds cursor position a cell access was made at.
    pub fn take_fault(&mut self) -> Option<isize> {
        self.fault.take()
    }

    fn index(&self) -> Option<usize> {
        usize::try_from(self.cursor)
            .ok()
            .filter(|&index| index < self.cells.len())
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new(MEMORY_SIZE)
    }
}

fn narrow(value: i128) -> i64 {
    i64::try_from(value).unwrap_or(if value < 0 { i64::MIN } else { i64::MAX })
}

/// `+`: add `count` to the current cell, modulo 255.
pub fn increment(count: usize, memory: &mut Memory) {
    let cell = memory.value() as i128;
    memory.set_value(narrow((cell + count as i128) % 255));
}

/// `-`: subtract `count` from the current cell, wrapping through 256.
pub fn decrement(count: usize, memory: &mut Memory) {
    let next = memory.value() as i128 - count as i128;
    if next >= 0 {
        memory.set_value(narrow(next));
    } else {
        memory.set_value(narrow(256 + next));
    }
}

/// `>`: move the cursor `count` cells right.
pub fn seek_forward(count: usize, memory: &mut Memory) {
    memory.seek(count as isize);
}

/// `<`: move the cursor `count` cells left.
pub fn seek_backward(count: usize, memory: &mut Memory) {
    memory.seek((count as isize).wrapping_neg());
}
