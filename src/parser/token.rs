//! Token descriptors shared by the scanner, parser and engine
//!
//! A [`Token`] is what the operator registry stores for each symbol and what
//! the scanner hands to the parser. Built-in cell operators and user-defined
//! operators travel inside the token as an [`Operator`], so the engine can
//! dispatch an instruction without consulting the registry again.

use crate::memory::tape::Memory;
use std::fmt;
use std::sync::Arc;

/// Operator function: `(count, memory)`.
///
/// `count` is the folded occurrence count of the instruction being executed.
pub type Operator = Arc<dyn Fn(usize, &mut Memory) + Send + Sync>;

/// Symbol classes produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    MoveLeft,     // <
    MoveRight,    // >
    Increment,    // +
    Decrement,    // -
    Print,        // .
    Read,         // ,
    LoopOpen,     // [
    LoopClose,    // ]
    Whitespace,
    Comment,      // letter/digit runs
    Illegal,
    UserDefined,
    Eof,
}

impl TokenKind {
    /// Kinds the parser drops without producing an instruction.
    pub fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Comment)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::MoveLeft => "move-left",
            TokenKind::MoveRight => "move-right",
            TokenKind::Increment => "increment",
            TokenKind::Decrement => "decrement",
            TokenKind::Print => "print",
            TokenKind::Read => "read",
            TokenKind::LoopOpen => "loop-open",
            TokenKind::LoopClose => "loop-close",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Comment => "comment",
            TokenKind::Illegal => "illegal",
            TokenKind::UserDefined => "user-defined",
            TokenKind::Eof => "end of program",
        };
        f.write_str(name)
    }
}

/// A classified piece of program text.
#[derive(Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub operator: Option<Operator>,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Token {
            kind,
            literal: literal.into(),
            operator: None,
        }
    }

    pub fn with_operator(kind: TokenKind, literal: impl Into<String>, operator: Operator) -> Self {
        Token {
            kind,
            literal: literal.into(),
            operator: Some(operator),
        }
    }

    pub fn eof() -> Self {
        Token::new(TokenKind::Eof, "")
    }

    pub fn has_operator(&self) -> bool {
        self.operator.is_some()
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("kind", &self.kind)
            .field("literal", &self.literal)
            .field("operator", &self.operator.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

// Operators are opaque closures, so equality only looks at the classification.
impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.literal == other.literal
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "end of program"),
            TokenKind::Whitespace => write!(f, "whitespace"),
            kind => write!(f, "{} '{}'", kind, self.literal),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_ignores_operator() {
        let plain = Token::new(TokenKind::UserDefined, "#");
        let with_op = Token::with_operator(TokenKind::UserDefined, "#", Arc::new(|_, _| {}));
        assert_eq!(plain, with_op);
        assert!(!plain.has_operator());
        assert!(with_op.has_operator());
    }

    #[test]
    fn test_trivia_kinds() {
        assert!(TokenKind::Whitespace.is_trivia());
        assert!(TokenKind::Comment.is_trivia());
        assert!(!TokenKind::Illegal.is_trivia());
        assert!(!TokenKind::Increment.is_trivia());
    }

    #[test]
    fn test_display() {
        assert_eq!(Token::new(TokenKind::LoopOpen, "[").to_string(), "loop-open '['");
        assert_eq!(Token::eof().to_string(), "end of program");
    }
}
