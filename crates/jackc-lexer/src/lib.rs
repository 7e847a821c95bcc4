//! Tokenizer for the Jack language.
//!
//! Converts raw source text into the flat, ordered token sequence the
//! compiler consumes: keywords, symbols, identifiers, integer constants, and
//! string constants. Comments and whitespace are discarded here; downstream
//! stages never re-examine raw text.

mod cursor;
mod error;
mod lexer;
mod token;

pub use error::LexError;
pub use lexer::{Lexer, tokenize};
pub use token::{KEYWORDS, Token, TokenKind, is_symbol_char, lookup_keyword};
