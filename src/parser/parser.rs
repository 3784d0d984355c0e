//! Instruction builder
//!
//! Turns the scanner's token stream into a flat [`Program`] in one pass:
//!
//! - runs of same-kind tokens fold into one instruction with a repeat count
//!   (`+++` → one increment, count 3); whitespace and comments end a run
//! - loop brackets are paired with a [`BracketStack`]: an opening bracket
//!   pushes its index, a closing bracket pops it, and the two instructions
//!   record each other's index in `count`
//!
//! Folding compares token kinds only, so two different user-defined symbols
//! next to each other fold into one instruction that runs the first symbol's
//! operator.

use super::ast::{Instruction, Program, SourceLocation};
use super::lexer::{Lexeme, Scanner};
use super::registry::OperatorTable;
use super::stack::BracketStack;
use super::token::{Token, TokenKind};
use std::io::{self, Read};
use thiserror::Error;
use tracing::debug;

/// Parser error type
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unmatched ']' at line {}, column {}", .location.line, .location.column)]
    UnmatchedClose { location: SourceLocation },

    #[error("unclosed '[' at line {}, column {}", .location.line, .location.column)]
    UnclosedLoop { location: SourceLocation },

    #[error("unrecognized symbol '{symbol}' at line {}, column {}", .location.line, .location.column)]
    UnrecognizedSymbol {
        symbol: char,
        location: SourceLocation,
    },

    #[error("failed to read program: {0}")]
    Io(#[from] io::Error),
}

impl ParseError {
    pub fn location(&self) -> Option<SourceLocation> {
        match self {
            ParseError::UnmatchedClose { location }
            | ParseError::UnclosedLoop { location }
            | ParseError::UnrecognizedSymbol { location, .. } => Some(*location),
            ParseError::Io(_) => None,
        }
    }
}

/// What the parser does with a symbol that is not in the operator table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnrecognizedSymbol {
    /// Stop parsing; the rest of the program text is ignored. Brackets
    /// still open at that point are not closed for you, so the parse then
    /// fails with [`ParseError::UnclosedLoop`].
    #[default]
    Truncate,
    /// Ignore the symbol and keep parsing.
    Skip,
    /// Fail with [`ParseError::UnrecognizedSymbol`].
    Reject,
}

/// Single-pass instruction builder with one token of pushback.
pub struct Parser<'t, R: Read> {
    scanner: Scanner<'t, R>,
    pushed_back: Option<Lexeme>,
    instructions: Vec<Instruction>,
    stack: BracketStack,
    unrecognized: UnrecognizedSymbol,
}

impl<'t, R: Read> Parser<'t, R> {
    pub fn new(scanner: Scanner<'t, R>) -> Self {
        Self {
            scanner,
            pushed_back: None,
            instructions: Vec::new(),
            stack: BracketStack::new(),
            unrecognized: UnrecognizedSymbol::default(),
        }
    }

    /// Parser reading `source` with symbols classified by `operators`.
    pub fn from_source(source: R, operators: &'t OperatorTable) -> Self {
        Self::new(Scanner::new(source, operators))
    }

    pub fn with_unrecognized(mut self, policy: UnrecognizedSymbol) -> Self {
        self.unrecognized = policy;
        self
    }

    /// Build the instruction list
    pub fn parse(mut self) -> Result<Program, ParseError> {
        loop {
            let lexeme = self.scan()?;
            match lexeme.kind() {
                TokenKind::Eof => break,
                TokenKind::Whitespace | TokenKind::Comment => {}
                TokenKind::Illegal => {
                    let symbol = lexeme
                        .token
                        .literal
                        .chars()
                        .next()
                        .unwrap_or(char::REPLACEMENT_CHARACTER);
                    let location = lexeme.location;
                    match self.unrecognized {
                        UnrecognizedSymbol::Truncate => {
                            debug!(%symbol, line = location.line, column = location.column, "parsing stopped at unrecognized symbol");
                            break;
                        }
                        UnrecognizedSymbol::Skip => {
                            debug!(%symbol, line = location.line, column = location.column, "skipping unrecognized symbol");
                        }
                        UnrecognizedSymbol::Reject => {
                            return Err(ParseError::UnrecognizedSymbol { symbol, location });
                        }
                    }
                }
                TokenKind::LoopOpen => {
                    let open = self.build(lexeme.token, 0, lexeme.location);
                    self.stack.push(open);
                }
                TokenKind::LoopClose => {
                    let open = self.stack.pop().ok_or(ParseError::UnmatchedClose {
                        location: lexeme.location,
                    })?;
                    let close = self.build(lexeme.token, open, lexeme.location);
                    self.instructions[open].count = close;
                }
                _ => self.fold(lexeme)?,
            }
        }

        if let Some(open) = self.stack.pop() {
            return Err(ParseError::UnclosedLoop {
                location: self.instructions[open].location,
            });
        }

        debug!(instructions = self.instructions.len(), "program built");
        Ok(Program::from(self.instructions))
    }

    /// Next token, preferring the pushed-back one
    fn scan(&mut self) -> Result<Lexeme, ParseError> {
        match self.pushed_back.take() {
            Some(lexeme) => Ok(lexeme),
            None => Ok(self.scanner.scan()?),
        }
    }

    fn unscan(&mut self, lexeme: Lexeme) {
        debug_assert!(self.pushed_back.is_none(), "only one token of pushback");
        self.pushed_back = Some(lexeme);
    }

    /// Fold the run of tokens sharing `first`'s kind into one instruction
    fn fold(&mut self, first: Lexeme) -> Result<(), ParseError> {
        let mut count = 1;
        loop {
            let next = self.scan()?;
            if next.kind() != first.kind() {
                self.unscan(next);
                break;
            }
            count += 1;
        }
        self.build(first.token, count, first.location);
        Ok(())
    }

    fn build(&mut self, token: Token, count: usize, location: SourceLocation) -> usize {
        self.instructions
            .push(Instruction::new(token, count, location));
        self.instructions.len() - 1
    }
}
