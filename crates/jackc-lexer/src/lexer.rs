//! Main lexer implementation for Jack source text.
//!
//! The [`Lexer`] dispatches on the first character of each token: `"` starts
//! a string constant, a digit starts an integer constant, an identifier
//! character starts an identifier or keyword, and any of the fixed symbol
//! characters is a one-character symbol token. `//` and `/* */` comments
//! (including `/** */` doc comments) are skipped as trivia.

use super::cursor::{Cursor, is_ident_continue, is_ident_start};
use super::error::LexError;
use super::token::{Token, TokenKind, is_symbol_char, lookup_keyword};

/// The largest integer constant representable on the target VM.
const MAX_INTEGER_CONSTANT: u32 = 32767;

/// Tokenize one compilation unit of Jack source text.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}

/// Lexer for Jack source code.
pub struct Lexer<'src> {
    cursor: Cursor<'src>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// Consume the whole source, producing the token sequence.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            self.skip_trivia()?;
            if self.cursor.is_eof() {
                return Ok(tokens);
            }
            tokens.push(self.scan_token()?);
        }
    }

    /// Skip whitespace and comments.
    fn skip_trivia(&mut self) -> Result<(), LexError> {
        loop {
            self.cursor.eat_while(|c| c.is_ascii_whitespace());

            if self.cursor.peek() != Some('/') {
                return Ok(());
            }
            match self.cursor.peek_nth(1) {
                Some('/') => {
                    self.cursor.eat_while(|c| c != '\n');
                }
                Some('*') => {
                    let start_line = self.cursor.line();
                    self.cursor.advance();
                    self.cursor.advance();
                    loop {
                        if self.cursor.is_eof() {
                            return Err(LexError::UnterminatedComment { line: start_line });
                        }
                        if self.cursor.eat('*') {
                            if self.cursor.eat('/') {
                                break;
                            }
                        } else {
                            self.cursor.advance();
                        }
                    }
                }
                // A lone '/' is the division symbol, not trivia.
                _ => return Ok(()),
            }
        }
    }

    fn scan_token(&mut self) -> Result<Token, LexError> {
        let line = self.cursor.line();
        let ch = self.cursor.peek().expect("scan_token called at EOF");

        if ch == '"' {
            return self.scan_string(line);
        }
        if ch.is_ascii_digit() {
            return self.scan_integer(line);
        }
        if is_ident_start(ch) {
            return Ok(self.scan_word());
        }
        if is_symbol_char(ch) {
            self.cursor.advance();
            return Ok(Token::symbol(ch.to_string()));
        }

        Err(LexError::UnexpectedCharacter { ch, line })
    }

    /// Scan a string constant. The surrounding quotes are not part of the
    /// token text; a string may not span lines.
    fn scan_string(&mut self, line: u32) -> Result<Token, LexError> {
        self.cursor.advance(); // opening quote
        let content = self.cursor.eat_while(|c| c != '"' && c != '\n');
        let content = content.to_owned();
        if !self.cursor.eat('"') {
            return Err(LexError::UnterminatedString { line });
        }
        Ok(Token::string(content))
    }

    fn scan_integer(&mut self, line: u32) -> Result<Token, LexError> {
        let digits = self.cursor.eat_while(|c| c.is_ascii_digit());
        let in_range = digits
            .parse::<u32>()
            .is_ok_and(|value| value <= MAX_INTEGER_CONSTANT);
        if !in_range {
            return Err(LexError::IntegerOutOfRange {
                text: digits.to_owned(),
                line,
            });
        }
        Ok(Token::integer(digits))
    }

    fn scan_word(&mut self) -> Token {
        let word = self.cursor.eat_while(is_ident_continue);
        match lookup_keyword(word) {
            Some(keyword) => Token::keyword(keyword),
            None => Token::identifier(word),
        }
    }
}
