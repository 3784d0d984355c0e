//! Memory model for the tape interpreter
//!
//! - [`tape`]: the fixed-capacity cell array, its cursor, and the built-in
//!   cell operators (`+`, `-`, `<`, `>`)
//!
//! # Cell Arithmetic
//!
//! Cells are signed integers rather than bytes. Increment reduces modulo 255,
//! decrement wraps by adding 256, and printing truncates to the low byte.

pub mod tape;

pub use tape::Memory;
