//! Cursor over an immutable token sequence.
//!
//! The compiler consumes tokens strictly forward through a position index,
//! with non-destructive lookahead for bracket matching: several productions
//! must locate a body's matching close bracket before descending into it.

use jackc_core::ErrorKind;
use jackc_lexer::Token;

/// A forward-only cursor over a token slice.
///
/// Returned token references borrow from the underlying slice (`'t`), not
/// from the cursor, so peeked tokens stay usable while the cursor advances.
#[derive(Debug, Clone)]
pub struct TokenCursor<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl<'t> TokenCursor<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Current position index into the underlying slice.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Peek at the current token without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    /// Peek at the nth token ahead (0 = current).
    #[inline]
    pub fn peek_nth(&self, n: usize) -> Option<&'t Token> {
        self.tokens.get(self.pos + n)
    }

    /// Consume and return the current token.
    pub fn advance(&mut self) -> Option<&'t Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// Consume a specific symbol or fail with `UnexpectedToken`.
    pub fn expect_symbol(&mut self, symbol: &str) -> Result<(), ErrorKind> {
        match self.peek() {
            Some(token) if token.is_symbol(symbol) => {
                self.pos += 1;
                Ok(())
            }
            _ => Err(self.unexpected()),
        }
    }

    /// Consume a specific keyword or fail with `UnexpectedToken`.
    pub fn expect_keyword(&mut self, keyword: &str) -> Result<(), ErrorKind> {
        match self.peek() {
            Some(token) if token.is_keyword(keyword) => {
                self.pos += 1;
                Ok(())
            }
            _ => Err(self.unexpected()),
        }
    }

    /// Consume an identifier, returning its text.
    pub fn expect_identifier(&mut self) -> Result<&'t str, ErrorKind> {
        match self.peek() {
            Some(token) if token.kind == jackc_lexer::TokenKind::Identifier => {
                self.pos += 1;
                Ok(&token.text)
            }
            _ => Err(self.unexpected()),
        }
    }

    /// An `UnexpectedToken` for whatever is at the current position.
    pub fn unexpected(&self) -> ErrorKind {
        match self.peek() {
            Some(token) => ErrorKind::unexpected(&token.text),
            None => ErrorKind::unexpected("end of input"),
        }
    }

    /// Find the position of the close bracket matching the open bracket at
    /// the current position, scanning forward over nested pairs.
    ///
    /// The current token must be `open`. Fails with `UnbalancedBrackets` if
    /// the stream ends before the nesting count returns to zero.
    pub fn matching_close(&self, open: &str, close: &str) -> Result<usize, ErrorKind> {
        let mut depth = 0i32;
        for (index, token) in self.tokens[self.pos..].iter().enumerate() {
            if token.is_symbol(open) {
                depth += 1;
            } else if token.is_symbol(close) {
                depth -= 1;
                if depth <= 0 {
                    return Ok(self.pos + index);
                }
            }
        }
        Err(ErrorKind::UnbalancedBrackets {
            close: close.chars().next().unwrap_or('}'),
        })
    }

    /// Consume `open ... close` and return the inner token run.
    ///
    /// The current token must be `open`; nested pairs are skipped over.
    pub fn take_delimited(&mut self, open: &str, close: &str) -> Result<&'t [Token], ErrorKind> {
        if !self.peek().is_some_and(|t| t.is_symbol(open)) {
            return Err(self.unexpected());
        }
        let close_pos = self.matching_close(open, close)?;
        let inner = &self.tokens[self.pos + 1..close_pos];
        self.pos = close_pos + 1;
        Ok(inner)
    }

    /// Consume tokens up to (not including) the first occurrence of a
    /// symbol, returning the consumed run. Consumes to the end of the stream
    /// when the symbol never occurs; the caller's following `expect_symbol`
    /// reports that case.
    pub fn take_until_symbol(&mut self, symbol: &str) -> &'t [Token] {
        let start = self.pos;
        while let Some(token) = self.peek() {
            if token.is_symbol(symbol) {
                break;
            }
            self.pos += 1;
        }
        &self.tokens[start..self.pos]
    }
}
