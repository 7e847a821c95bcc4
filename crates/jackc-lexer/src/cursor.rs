//! Character cursor over source text.

/// A cursor over source text that tracks position and line number.
///
/// Provides peek/advance access to characters; the line number is kept for
/// error reporting only, tokens themselves carry no location.
pub struct Cursor<'src> {
    /// The full source text being scanned.
    source: &'src str,
    /// Remaining source text (slice starting at current position).
    rest: &'src str,
    /// Current byte offset from start of source.
    offset: usize,
    /// Current line number (1-indexed).
    line: u32,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            rest: source,
            offset: 0,
            line: 1,
        }
    }

    /// Current line number (1-indexed).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.rest.is_empty()
    }

    /// Peek at the current character without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// Peek at the nth character ahead (0 = current).
    #[inline]
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest.chars().nth(n)
    }

    /// Consume the current character and advance, updating line tracking.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.rest.chars().next()?;
        let len = ch.len_utf8();
        self.rest = &self.rest[len..];
        self.offset += len;
        if ch == '\n' {
            self.line += 1;
        }
        Some(ch)
    }

    /// Consume if the current character matches.
    #[inline]
    pub fn eat(&mut self, ch: char) -> bool {
        if self.peek() == Some(ch) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume characters while the predicate matches; returns the consumed
    /// slice.
    pub fn eat_while(&mut self, f: impl Fn(char) -> bool) -> &'src str {
        let start = self.offset;
        while self.peek().is_some_and(&f) {
            self.advance();
        }
        &self.source[start..self.offset]
    }
}

/// Check if a character can start an identifier.
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peek_and_advance() {
        let mut cursor = Cursor::new("ab");
        assert_eq!(cursor.peek(), Some('a'));
        assert_eq!(cursor.advance(), Some('a'));
        assert_eq!(cursor.peek(), Some('b'));
        assert_eq!(cursor.advance(), Some('b'));
        assert!(cursor.is_eof());
        assert_eq!(cursor.advance(), None);
    }

    #[test]
    fn eat_while_returns_slice() {
        let mut cursor = Cursor::new("let x");
        assert_eq!(cursor.eat_while(is_ident_continue), "let");
        assert_eq!(cursor.peek(), Some(' '));
    }

    #[test]
    fn line_tracking() {
        let mut cursor = Cursor::new("a\nb");
        assert_eq!(cursor.line(), 1);
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.line(), 2);
    }

    #[test]
    fn peek_nth() {
        let cursor = Cursor::new("xyz");
        assert_eq!(cursor.peek_nth(0), Some('x'));
        assert_eq!(cursor.peek_nth(2), Some('z'));
        assert_eq!(cursor.peek_nth(3), None);
    }
}
