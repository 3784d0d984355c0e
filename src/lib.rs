//! # Introduction
//!
//! Tapelang runs programs written in a minimal tape language: eight
//! single-character symbols operating on a fixed-size tape of integer cells
//! with a movable cursor. New single-character operators can be registered,
//! and existing ones removed, on each interpreter before its program is parsed.
//!
//! ## Execution pipeline
//!
//! ```text
//! Program bytes → Scanner → Parser → Instructions → Interpreter → Output bytes
//! ```
//!
//! 1. [`parser`]: Tokenises the program text against an operator table,
//!    folds repeated symbols, and pairs loop brackets.
//! 2. [`interpreter`]: Walks the instruction list, dispatching each
//!    instruction to its operator, and reports the first error.
//! 3. [`memory`]: The tape and the built-in cell operators.
//!
//! ## Example
//!
//! ```
//! use tapelang::Interpreter;
//!
//! let mut interpreter = Interpreter::new(std::io::empty(), Vec::new(), "++++[>++++<-]>+.".as_bytes());
//! interpreter.run().unwrap();
//! assert_eq!(interpreter.output().as_slice(), &[17]);
//! ```

pub mod interpreter;
pub mod memory;
pub mod parser;

pub use interpreter::config::{EofBehavior, InterpreterConfig};
pub use interpreter::engine::Interpreter;
pub use interpreter::errors::RuntimeError;
pub use memory::tape::Memory;
pub use parser::parser::{ParseError, UnrecognizedSymbol};
pub use parser::registry::{OperatorTable, RegistryError};
