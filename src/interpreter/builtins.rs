//! Engine-level operators
//!
//! `.`, `,`, `[` and `]` have no entry-level operator in the registry: they
//! need the input/output collaborators or the instruction pointer, which a
//! plain `(count, memory)` operator cannot reach. They are implemented here as
//! methods on the [`Interpreter`] so every piece of state they touch is an
//! explicit field of the engine.
//!
//! # I/O failures
//!
//! The first failed read or write of an instruction is stored in the engine's
//! error slot and the remaining repetitions are skipped. The engine checks the
//! slot after the instruction and ends the run with it.

use crate::interpreter::config::EofBehavior;
use crate::interpreter::engine::{Flow, Interpreter};
use std::io::{self, Read, Write};

impl<R: Read, W: Write> Interpreter<R, W> {
    /// `.`: write the current cell's low byte `times` times.
    pub(crate) fn op_print(&mut self, times: usize) {
        let Some(value) = self.memory.current() else {
            return;
        };
        let byte = [value as u8];
        for _ in 0..times {
            if let Err(err) = self.output.write_all(&byte) {
                self.error = Some(err.into());
                return;
            }
        }
    }

    /// `,`: read `times` bytes, each overwriting the current cell.
    pub(crate) fn op_read(&mut self, times: usize) {
        if self.memory.current().is_none() {
            return;
        }
        let mut byte = [0u8];
        for _ in 0..times {
            match self.input.read_exact(&mut byte) {
                Ok(()) => self.memory.set_value(i64::from(byte[0])),
                Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
                    match self.config.eof {
                        EofBehavior::Error => self.error = Some(err.into()),
                        EofBehavior::Unchanged => {}
                        EofBehavior::Zero => self.memory.set_value(0),
                    }
                    return;
                }
                Err(err) => {
                    self.error = Some(err.into());
                    return;
                }
            }
        }
    }

    /// `[` / `]`: jump to the matching bracket when `taken` holds for the
    /// current cell.
    pub(crate) fn op_jump(&self, target: usize, taken: fn(i64) -> bool) -> Flow {
        if taken(self.memory.value()) {
            Flow::Jump(target)
        } else {
            Flow::Next
        }
    }
}
