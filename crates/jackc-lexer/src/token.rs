//! Token types for the Jack language.

use std::fmt;

/// Lexical category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// One of the reserved words in [`KEYWORDS`].
    Keyword,
    /// A single-character symbol: brackets, punctuation, or an operator.
    Symbol,
    /// A user-defined name.
    Identifier,
    /// A decimal integer constant in `0..=32767`.
    IntegerConstant,
    /// A double-quoted string constant, stored without the quotes.
    StringConstant,
}

/// A classified token.
///
/// Immutable once produced: the compiler only inspects and consumes tokens,
/// it never rewrites them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn keyword(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Keyword, text)
    }

    pub fn symbol(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Symbol, text)
    }

    pub fn identifier(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Identifier, text)
    }

    pub fn integer(text: impl Into<String>) -> Self {
        Self::new(TokenKind::IntegerConstant, text)
    }

    pub fn string(text: impl Into<String>) -> Self {
        Self::new(TokenKind::StringConstant, text)
    }

    /// Check for a specific keyword.
    #[inline]
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.kind == TokenKind::Keyword && self.text == keyword
    }

    /// Check for a specific symbol.
    #[inline]
    pub fn is_symbol(&self, symbol: &str) -> bool {
        self.kind == TokenKind::Symbol && self.text == symbol
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// The reserved words of the Jack language.
pub const KEYWORDS: [&str; 21] = [
    "class",
    "constructor",
    "function",
    "method",
    "field",
    "static",
    "var",
    "int",
    "char",
    "boolean",
    "void",
    "true",
    "false",
    "null",
    "this",
    "let",
    "do",
    "if",
    "else",
    "while",
    "return",
];

/// Classify an identifier-shaped word as a keyword if it is reserved.
pub fn lookup_keyword(text: &str) -> Option<&'static str> {
    KEYWORDS.iter().find(|&&kw| kw == text).copied()
}

/// Check whether a character is one of the Jack single-character symbols.
pub fn is_symbol_char(c: char) -> bool {
    matches!(
        c,
        '{' | '}'
            | '('
            | ')'
            | '['
            | ']'
            | '.'
            | ','
            | ';'
            | '+'
            | '-'
            | '*'
            | '/'
            | '&'
            | '|'
            | '<'
            | '>'
            | '='
            | '~'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_lookup() {
        assert_eq!(lookup_keyword("class"), Some("class"));
        assert_eq!(lookup_keyword("while"), Some("while"));
        assert_eq!(lookup_keyword("Main"), None);
        assert_eq!(lookup_keyword("classes"), None);
    }

    #[test]
    fn symbol_chars() {
        for c in "{}()[].,;+-*/&|<>=~".chars() {
            assert!(is_symbol_char(c), "{c} should be a symbol");
        }
        assert!(!is_symbol_char('_'));
        assert!(!is_symbol_char('"'));
    }

    #[test]
    fn token_predicates() {
        let tok = Token::keyword("let");
        assert!(tok.is_keyword("let"));
        assert!(!tok.is_keyword("do"));
        assert!(!tok.is_symbol("let"));

        let tok = Token::symbol("{");
        assert!(tok.is_symbol("{"));
        assert!(!tok.is_keyword("{"));
    }
}
