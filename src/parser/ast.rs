// Instruction list definitions for the tape interpreter

use super::token::{Token, TokenKind};

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A single executable step produced by the parser.
///
/// `count` has two meanings depending on the token kind:
/// - loop brackets: index of the matching bracket instruction
/// - everything else: how many consecutive occurrences were folded together
#[derive(Debug, Clone)]
pub struct Instruction {
    pub token: Token,
    pub count: usize,
    pub location: SourceLocation,
}

impl Instruction {
    pub fn new(token: Token, count: usize, location: SourceLocation) -> Self {
        Instruction {
            token,
            count,
            location,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.token.kind
    }

    /// Index of the matching bracket, for loop instructions only.
    pub fn jump_target(&self) -> Option<usize> {
        match self.token.kind {
            TokenKind::LoopOpen | TokenKind::LoopClose => Some(self.count),
            _ => None,
        }
    }
}

/// An ordered instruction list, built once and executed by the engine.
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub instructions: Vec<Instruction>,
}

impl Program {
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Instruction> {
        self.instructions.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.instructions.iter()
    }
}

impl From<Vec<Instruction>> for Program {
    fn from(instructions: Vec<Instruction>) -> Self {
        Program { instructions }
    }
}
