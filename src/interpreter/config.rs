//! Interpreter configuration
//!
//! [`InterpreterConfig::default`] reproduces the classic machine: a
//! 3000-cell tape, no step limit, end of input reported as an I/O error, and
//! parsing that stops at the first unrecognized symbol.

use crate::interpreter::constants::MEMORY_SIZE;
use crate::parser::parser::UnrecognizedSymbol;

/// What `,` does once the input source is exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EofBehavior {
    /// End of input is a read failure and terminates the run.
    #[default]
    Error,
    /// Leave the current cell as it is.
    Unchanged,
    /// Store 0 in the current cell.
    Zero,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpreterConfig {
    /// Number of cells on the tape
    pub memory_size: usize,
    /// Maximum number of instructions dispatched per interpreter, if any
    pub step_limit: Option<u64>,
    pub eof: EofBehavior,
    pub unrecognized: UnrecognizedSymbol,
}

impl InterpreterConfig {
    pub fn with_memory_size(mut self, memory_size: usize) -> Self {
        self.memory_size = memory_size;
        self
    }

    pub fn with_step_limit(mut self, step_limit: u64) -> Self {
        self.step_limit = Some(step_limit);
        self
    }

    pub fn with_eof(mut self, eof: EofBehavior) -> Self {
        self.eof = eof;
        self
    }

    pub fn with_unrecognized(mut self, unrecognized: UnrecognizedSymbol) -> Self {
        self.unrecognized = unrecognized;
        self
    }
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        InterpreterConfig {
            memory_size: MEMORY_SIZE,
            step_limit: None,
            eof: EofBehavior::Error,
            unrecognized: UnrecognizedSymbol::Truncate,
        }
    }
}
