//! Program text parser
//!
//! This module turns program text into an executable instruction list:
//! - [`token`]: Token kinds and descriptors
//! - [`registry`]: The symbol → token table (built-ins plus user operators)
//! - [`lexer`]: Tokenization (program bytes → tokens)
//! - [`stack`]: Bracket stack for pairing loops
//! - [`parser`]: Instruction building (tokens → folded, loop-linked instructions)
//! - [`ast`]: Instruction and program definitions
//!
//! # Program Text
//!
//! The eight built-in symbols are `< > + - . , [ ]`; any symbol registered in
//! the [`registry::OperatorTable`] is accepted as well. Whitespace and runs of
//! letters or digits are comments. What happens at any other symbol is chosen
//! by [`parser::UnrecognizedSymbol`]; by default parsing stops there.

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod registry;
pub mod stack;
pub mod token;
