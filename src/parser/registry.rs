//! Operator registry: the symbol → token table
//!
//! The scanner consults the table to classify punctuation and the resulting
//! tokens carry their operator into the instruction list. Each interpreter owns
//! its own [`OperatorTable`], seeded from [`OperatorTable::builtin`], so adding
//! or removing a symbol on one interpreter is invisible to every other.
//!
//! Built-in symbols:
//!
//! ```text
//! <  move-left    seek backward
//! >  move-right   seek forward
//! +  increment    (cell + n) % 255
//! -  decrement    wraps through 256
//! .  print        handled by the engine
//! ,  read         handled by the engine
//! [  loop-open    handled by the engine
//! ]  loop-close   handled by the engine
//! ```

use super::token::{Operator, Token, TokenKind};
use crate::memory::tape::{self, Memory};
use rustc_hash::FxHashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors from mutating an [`OperatorTable`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("symbol '{0}' already exists")]
    DuplicateSymbol(char),

    #[error("symbol '{0}' does not exist")]
    UnknownSymbol(char),

    #[error("symbol '{0}' is read as whitespace or comment text and cannot be an operator")]
    UnreachableSymbol(char),
}

/// Symbol table mapping a single character to its token descriptor.
#[derive(Debug, Clone)]
pub struct OperatorTable {
    symbols: FxHashMap<char, Token>,
}

impl OperatorTable {
    /// An empty table. Every symbol is unrecognized.
    pub fn empty() -> Self {
        OperatorTable {
            symbols: FxHashMap::default(),
        }
    }

    /// The eight built-in symbols.
    pub fn builtin() -> Self {
        let mut symbols = FxHashMap::default();

        let cell_ops: [(char, TokenKind, Operator); 4] = [
            ('<', TokenKind::MoveLeft, Arc::new(tape::seek_backward)),
            ('>', TokenKind::MoveRight, Arc::new(tape::seek_forward)),
            ('+', TokenKind::Increment, Arc::new(tape::increment)),
            ('-', TokenKind::Decrement, Arc::new(tape::decrement)),
        ];
        for (symbol, kind, operator) in cell_ops {
            symbols.insert(symbol, Token::with_operator(kind, symbol, operator));
        }

        for (symbol, kind) in [
            ('.', TokenKind::Print),
            (',', TokenKind::Read),
            ('[', TokenKind::LoopOpen),
            (']', TokenKind::LoopClose),
        ] {
            symbols.insert(symbol, Token::new(kind, symbol));
        }

        OperatorTable { symbols }
    }

    /// Token registered for `symbol`, if any.
    pub fn lookup(&self, symbol: char) -> Option<&Token> {
        self.symbols.get(&symbol)
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains_key(&symbol)
    }

    /// Register a user-defined operator under `symbol`.
    ///
    /// Fails without touching the table if `symbol` is already registered,
    /// including the built-ins. Whitespace and letters or digits are rejected:
    /// the scanner folds them into whitespace and comment runs before it ever
    /// consults the table.
    pub fn add<F>(&mut self, symbol: char, operator: F) -> Result<(), RegistryError>
    where
        F: Fn(usize, &mut Memory) + Send + Sync + 'static,
    {
        if symbol.is_whitespace() || symbol.is_alphanumeric() {
            return Err(RegistryError::UnreachableSymbol(symbol));
        }
        if self.symbols.contains_key(&symbol) {
            return Err(RegistryError::DuplicateSymbol(symbol));
        }
        self.symbols.insert(
            symbol,
            Token::with_operator(TokenKind::UserDefined, symbol, Arc::new(operator)),
        );
        debug!(%symbol, "operator registered");
        Ok(())
    }

    /// Remove `symbol` from the table, returning its descriptor.
    ///
    /// Built-ins may be removed too.
    pub fn remove(&mut self, symbol: char) -> Result<Token, RegistryError> {
        let token = self
            .symbols
            .remove(&symbol)
            .ok_or(RegistryError::UnknownSymbol(symbol))?;
        debug!(%symbol, kind = %token.kind, "operator removed");
        Ok(token)
    }

    /// Registered symbols, in no particular order.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Default for OperatorTable {
    fn default() -> Self {
        Self::builtin()
    }
}
