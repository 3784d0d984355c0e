//! Runtime error types for the tape interpreter
//!
//! [`RuntimeError`] is what [`Interpreter::run`](crate::interpreter::engine::Interpreter::run)
//! returns. Every variant is terminal for the run that produced it: there is
//! no retry and no partial-result salvage.
//!
//! Registry failures ([`RegistryError`](crate::parser::registry::RegistryError))
//! are separate; they are local to the add/remove call and never stop a run.

use crate::parser::ast::SourceLocation;
use crate::parser::parser::ParseError;
use crate::parser::token::TokenKind;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The program text could not be turned into instructions
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// An earlier parse failure already consumed the program source
    #[error("program source was consumed by an earlier failed parse")]
    SourceConsumed,

    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The engine has no behavior for this instruction
    #[error("unknown instruction {kind} at line {}, column {}", .location.line, .location.column)]
    UnknownInstruction {
        kind: TokenKind,
        location: SourceLocation,
    },

    /// An operator touched a cell while the cursor was off the tape
    #[error(
        "cursor {cursor} is outside the tape (capacity {capacity}) at line {}, column {}",
        .location.line,
        .location.column
    )]
    CursorOutOfBounds {
        cursor: isize,
        capacity: usize,
        location: SourceLocation,
    },

    /// The configured instruction budget ran out
    #[error("step limit of {limit} instructions exceeded")]
    StepLimitExceeded { limit: u64 },
}

impl RuntimeError {
    pub fn location(&self) -> Option<SourceLocation> {
        match self {
            RuntimeError::Parse(err) => err.location(),
            RuntimeError::UnknownInstruction { location, .. } => Some(*location),
            RuntimeError::CursorOutOfBounds { location, .. } => Some(*location),
            RuntimeError::SourceConsumed
            | RuntimeError::Io(_)
            | RuntimeError::StepLimitExceeded { .. } => None,
        }
    }
}
