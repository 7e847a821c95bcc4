//! Tokenizer error types.

use thiserror::Error;

/// A fatal tokenizer error.
///
/// Line numbers are 1-indexed and refer to where the offending construct
/// begins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unexpected character '{ch}' on line {line}")]
    UnexpectedCharacter { ch: char, line: u32 },

    #[error("unterminated string constant on line {line}")]
    UnterminatedString { line: u32 },

    #[error("unterminated comment starting on line {line}")]
    UnterminatedComment { line: u32 },

    #[error("integer constant '{text}' out of range on line {line}")]
    IntegerOutOfRange { text: String, line: u32 },
}
