//! Character cursor over a single source line

/// Returned by [`Scanner::peek`] and [`Scanner::advance`] past the end of the line.
pub const END: char = '\0';

/// A cursor over one line of text.
///
/// The scanner is `Copy`: grammar alternatives each work on their own copy
/// and hand back the advanced copy on success. Backtracking is dropping the
/// copy of a failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scanner<'a> {
    line: &'a str,
    current: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(line: &'a str) -> Self {
        Self { line, current: 0 }
    }

    /// Byte offset of the cursor.
    pub fn position(&self) -> usize {
        self.current
    }

    /// Text between `start` and the cursor.
    pub fn lexeme(&self, start: usize) -> &'a str {
        &self.line[start..self.current]
    }

    pub fn is_at_end(&self) -> bool {
        self.current >= self.line.len()
    }

    /// Current character without moving, or [`END`].
    pub fn peek(&self) -> char {
        self.line[self.current.min(self.line.len())..]
            .chars()
            .next()
            .unwrap_or(END)
    }

    /// Return the current character and move past it. At the end of the
    /// line this yields [`END`] and the cursor stays put.
    pub fn advance(&mut self) -> char {
        let c = self.peek();
        if !self.is_at_end() {
            self.current += c.len_utf8();
        }
        c
    }

    /// Advance only if the current character is `expected`.
    pub fn matches(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.peek() != expected {
            return false;
        }
        self.advance();
        true
    }

    pub fn skip_whitespace(&mut self) {
        while is_space(self.peek()) {
            self.advance();
        }
    }

    /// Skip trailing whitespace and report whether nothing else is left.
    pub fn at_line_end(&mut self) -> bool {
        self.skip_whitespace();
        self.is_at_end()
    }
}

/// C `isspace`: includes vertical tab and form feed.
pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic()
}

pub fn is_alphanumeric(c: char) -> bool {
    is_digit(c) || is_alpha(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_and_advance() {
        let mut s = Scanner::new("AB");
        assert_eq!(s.peek(), 'A');
        assert_eq!(s.advance(), 'A');
        assert_eq!(s.advance(), 'B');
        assert!(s.is_at_end());
        assert_eq!(s.peek(), END);
    }

    #[test]
    fn test_advance_at_end_yields_null() {
        let mut s = Scanner::new("");
        assert_eq!(s.advance(), END);
        assert_eq!(s.position(), 0);
    }

    #[test]
    fn test_matches_only_on_expected() {
        let mut s = Scanner::new("<-");
        assert!(!s.matches('-'));
        assert_eq!(s.position(), 0);
        assert!(s.matches('<'));
        assert!(s.matches('-'));
        assert!(!s.matches('-'));
    }

    #[test]
    fn test_skip_whitespace() {
        let mut s = Scanner::new(" \t  A ");
        s.skip_whitespace();
        assert_eq!(s.peek(), 'A');
        s.advance();
        assert!(s.at_line_end());
    }

    #[test]
    fn test_skip_vertical_tab_and_form_feed() {
        let mut s = Scanner::new("\x0B\x0C\r A");
        s.skip_whitespace();
        assert_eq!(s.peek(), 'A');
        assert!(is_space('\x0B'));
        assert!(!is_space('_'));
    }

    #[test]
    fn test_copy_is_independent() {
        let mut s = Scanner::new("ashl A");
        let saved = s;
        s.advance();
        s.advance();
        assert_eq!(saved.position(), 0);
        assert_eq!(s.lexeme(saved.position()), "as");
    }

    #[test]
    fn test_non_ascii_does_not_split_chars() {
        let mut s = Scanner::new("é1");
        assert_eq!(s.advance(), 'é');
        assert_eq!(s.advance(), '1');
        assert!(s.is_at_end());
    }

    #[test]
    fn test_character_classes() {
        assert!(is_digit('7'));
        assert!(!is_digit('a'));
        assert!(is_alpha('z'));
        assert!(!is_alpha('_'));
        assert!(is_alphanumeric('Q'));
        assert!(!is_alphanumeric('&'));
    }
}
