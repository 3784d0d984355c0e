//! Tape interpreter execution engine
//!
//! This module provides the core execution logic:
//! - [`engine`]: The [`engine::Interpreter`] and its dispatch loop
//! - [`builtins`]: Print, read and loop-jump operators
//! - [`config`]: Tape size, step limit, end-of-input and parse policies
//! - [`errors`]: Runtime error types
//!
//! # Execution Model
//!
//! The engine walks the instruction list with an instruction pointer. An
//! instruction whose token carries an operator runs it against the tape;
//! print, read and the two brackets are handled by the engine itself. After
//! each instruction the pointer advances by one, except when a bracket jumps
//! to its partner, in which case the partner instruction is the next one run.

pub mod builtins;
pub mod config;
pub mod constants;
pub mod engine;
pub mod errors;
