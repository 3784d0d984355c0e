//! Scanner (tokenizer) for program text
//!
//! Pulls one code point at a time from any [`Read`] source and hands the
//! parser one [`Lexeme`] per call:
//!
//! - a maximal whitespace run becomes a single `Whitespace` token
//! - a maximal letter/digit run becomes a single `Comment` token
//! - any other code point is looked up in the [`OperatorTable`]; unknown
//!   symbols come back as `Illegal` carrying the symbol as their literal
//! - end of input is an `Eof` token, returned again on every later call
//!
//! Input is decoded as UTF-8. A malformed sequence decodes to U+FFFD, which
//! is never a registered symbol.

use super::ast::SourceLocation;
use super::registry::OperatorTable;
use super::token::{Token, TokenKind};
use std::io::{self, BufReader, Bytes, Read};

/// A token together with where it starts in the program text.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    pub token: Token,
    pub location: SourceLocation,
}

impl Lexeme {
    pub fn kind(&self) -> TokenKind {
        self.token.kind
    }
}

/// Pull-based scanner over a program source.
pub struct Scanner<'t, R: Read> {
    bytes: Bytes<BufReader<R>>,
    operators: &'t OperatorTable,
    pending_byte: Option<u8>,
    peeked: Option<char>,
    line: usize,
    column: usize,
}

impl<'t, R: Read> Scanner<'t, R> {
    /// Create a scanner that classifies symbols with `operators`.
    pub fn new(source: R, operators: &'t OperatorTable) -> Self {
        Self {
            bytes: BufReader::new(source).bytes(),
            operators,
            pending_byte: None,
            peeked: None,
            line: 1,
            column: 1,
        }
    }

    /// Scan the next token.
    pub fn scan(&mut self) -> io::Result<Lexeme> {
        let location = self.current_location();

        let Some(ch) = self.advance()? else {
            return Ok(Lexeme {
                token: Token::eof(),
                location,
            });
        };

        let token = if ch.is_whitespace() {
            self.scan_run(ch, TokenKind::Whitespace, char::is_whitespace)?
        } else if ch.is_alphanumeric() {
            self.scan_run(ch, TokenKind::Comment, char::is_alphanumeric)?
        } else {
            match self.operators.lookup(ch) {
                Some(token) => token.clone(),
                None => Token::new(TokenKind::Illegal, ch),
            }
        };

        Ok(Lexeme { token, location })
    }

    /// Scan everything up to and including the `Eof` token.
    pub fn tokenize(&mut self) -> io::Result<Vec<Lexeme>> {
        let mut lexemes = Vec::new();
        loop {
            let lexeme = self.scan()?;
            let done = lexeme.kind() == TokenKind::Eof;
            lexemes.push(lexeme);
            if done {
                return Ok(lexemes);
            }
        }
    }

    fn scan_run(
        &mut self,
        first: char,
        kind: TokenKind,
        belongs: fn(char) -> bool,
    ) -> io::Result<Token> {
        let mut literal = String::from(first);
        while let Some(ch) = self.peek()? {
            if !belongs(ch) {
                break;
            }
            literal.push(ch);
            self.advance()?;
        }
        Ok(Token::new(kind, literal))
    }

    /// Peek at the next code point without consuming it
    fn peek(&mut self) -> io::Result<Option<char>> {
        if self.peeked.is_none() {
            self.peeked = self.decode()?;
        }
        Ok(self.peeked)
    }

    /// Consume the next code point
    fn advance(&mut self) -> io::Result<Option<char>> {
        let ch = match self.peeked.take() {
            Some(ch) => Some(ch),
            None => self.decode()?,
        };

        if let Some(ch) = ch {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }

        Ok(ch)
    }

    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        if let Some(byte) = self.pending_byte.take() {
            return Ok(Some(byte));
        }
        self.bytes.next().transpose()
    }

    fn decode(&mut self) -> io::Result<Option<char>> {
        let Some(first) = self.next_byte()? else {
            return Ok(None);
        };

        let width = match first {
            0x00..=0x7F => return Ok(Some(first as char)),
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            _ => return Ok(Some(char::REPLACEMENT_CHARACTER)),
        };

        let mut buf = [first, 0, 0, 0];
        for slot in buf.iter_mut().take(width).skip(1) {
            match self.next_byte()? {
                Some(byte) if byte & 0xC0 == 0x80 => *slot = byte,
                Some(byte) => {
                    // Not a continuation byte; it starts the next code point.
                    self.pending_byte = Some(byte);
                    return Ok(Some(char::REPLACEMENT_CHARACTER));
                }
                None => return Ok(Some(char::REPLACEMENT_CHARACTER)),
            }
        }

        Ok(Some(
            std::str::from_utf8(&buf[..width])
                .ok()
                .and_then(|s| s.chars().next())
                .unwrap_or(char::REPLACEMENT_CHARACTER),
        ))
    }

    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str, table: &OperatorTable) -> Vec<TokenKind> {
        Scanner::new(source.as_bytes(), table)
            .tokenize()
            .unwrap()
            .iter()
            .map(Lexeme::kind)
            .collect()
    }

    #[test]
    fn test_first_token() {
        let table = OperatorTable::builtin();
        let mut scanner = Scanner::new("<>   this is string [+++]".as_bytes(), &table);
        let lexeme = scanner.scan().unwrap();
        assert_eq!(lexeme.token.literal, "<");
        assert_eq!(lexeme.kind(), TokenKind::MoveLeft);
    }

    #[test]
    fn test_whitespace_run_is_one_token() {
        let table = OperatorTable::builtin();
        let mut scanner = Scanner::new("        [+]".as_bytes(), &table);

        let ws = scanner.scan().unwrap();
        assert_eq!(ws.kind(), TokenKind::Whitespace);
        assert_eq!(ws.token.literal, "        ");

        assert_eq!(scanner.scan().unwrap().token.literal, "[");
        assert_eq!(scanner.scan().unwrap().token.literal, "+");
        assert_eq!(scanner.scan().unwrap().token.literal, "]");
        assert_eq!(scanner.scan().unwrap().kind(), TokenKind::Eof);
        assert_eq!(scanner.scan().unwrap().kind(), TokenKind::Eof);
    }

    #[test]
    fn test_alphanumeric_run_is_comment() {
        let table = OperatorTable::builtin();
        let mut scanner = Scanner::new("abc123+".as_bytes(), &table);
        let comment = scanner.scan().unwrap();
        assert_eq!(comment.kind(), TokenKind::Comment);
        assert_eq!(comment.token.literal, "abc123");
        assert_eq!(scanner.scan().unwrap().kind(), TokenKind::Increment);
    }

    #[test]
    fn test_unknown_symbol_is_illegal() {
        let table = OperatorTable::builtin();
        let mut scanner = Scanner::new("#+".as_bytes(), &table);
        let illegal = scanner.scan().unwrap();
        assert_eq!(illegal.kind(), TokenKind::Illegal);
        assert_eq!(illegal.token.literal, "#");
    }

    #[test]
    fn test_registered_symbol_is_user_defined() {
        let mut table = OperatorTable::builtin();
        table.add('#', |_, _| {}).unwrap();
        assert_eq!(
            kinds("#+", &table),
            vec![TokenKind::UserDefined, TokenKind::Increment, TokenKind::Eof]
        );
    }

    #[test]
    fn test_removed_builtin_is_illegal() {
        let mut table = OperatorTable::builtin();
        table.remove('+').unwrap();
        assert_eq!(kinds("+", &table), vec![TokenKind::Illegal, TokenKind::Eof]);
    }

    #[test]
    fn test_locations() {
        let table = OperatorTable::builtin();
        let lexemes = Scanner::new("+\n  -".as_bytes(), &table).tokenize().unwrap();
        assert_eq!(lexemes[0].location, SourceLocation::new(1, 1));
        assert_eq!(lexemes[1].kind(), TokenKind::Whitespace);
        assert_eq!(lexemes[1].location, SourceLocation::new(1, 2));
        assert_eq!(lexemes[2].location, SourceLocation::new(2, 3));
    }

    #[test]
    fn test_multibyte_symbols() {
        let mut table = OperatorTable::builtin();
        table.add('→', |_, _| {}).unwrap();
        assert_eq!(
            kinds("→€", &table),
            vec![TokenKind::UserDefined, TokenKind::Illegal, TokenKind::Eof]
        );
    }

    #[test]
    fn test_malformed_utf8_keeps_following_byte() {
        let table = OperatorTable::builtin();
        let source: &[u8] = &[0xE2, b'+', b'+'];
        let lexemes = Scanner::new(source, &table).tokenize().unwrap();
        assert_eq!(lexemes[0].kind(), TokenKind::Illegal);
        assert_eq!(lexemes[0].token.literal, "\u{FFFD}");
        assert_eq!(lexemes[1].kind(), TokenKind::Increment);
        assert_eq!(lexemes[2].kind(), TokenKind::Increment);
    }
}
