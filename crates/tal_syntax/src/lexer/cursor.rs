//! Character cursor over one input string.
//!
//! The cursor owns a single absolute byte offset plus line/column bookkeeping. Every lookahead is
//! non-consuming and total: reading past the end yields `None` or an empty slice, never a panic.
//!
//! ## Notes
//! - Lines are 0-based. Columns count **characters** from the start of the line, 0-based.
//! - `\r\n` counts as a single line break regardless of how it is consumed.

/// Scanning position over the current input.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source: &'a str,
    offset: usize,
    line: usize,
    column: usize,
    line_start: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            offset: 0,
            line: 0,
            column: 0,
            line_start: 0,
        }
    }

    // ========================================================================
    // Position
    // ========================================================================

    /// Rewind to the start of the input.
    pub fn reset(&mut self) {
        *self = Self::new(self.source);
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn is_at_end(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// Unconsumed input.
    pub fn rest(&self) -> &'a str {
        &self.source[self.offset..]
    }

    /// Text between the start of the current line and the cursor.
    pub fn line_prefix(&self) -> &'a str {
        &self.source[self.line_start..self.offset]
    }

    /// Source text for a byte range already scanned.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.source[start..end]
    }

    // ========================================================================
    // Lookahead
    // ========================================================================

    /// Current character.
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Character `n` positions ahead (`peek_at(0) == peek()`).
    pub fn peek_at(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    /// The next `n` characters, or fewer at end of input.
    pub fn peek_n(&self, n: usize) -> &'a str {
        let rest = self.rest();
        let end = rest.char_indices().nth(n).map_or(rest.len(), |(i, _)| i);
        &rest[..end]
    }

    // ========================================================================
    // Consumption
    // ========================================================================

    /// Consume one character.
    pub fn consume(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.offset += c.len_utf8();
        self.track(c);
        Some(c)
    }

    /// Consume up to `n` characters and return them.
    pub fn consume_n(&mut self, n: usize) -> &'a str {
        let start = self.offset;
        for _ in 0..n {
            if self.consume().is_none() {
                break;
            }
        }
        &self.source[start..self.offset]
    }

    /// Consume at least `len` bytes, stopping on the first character boundary past them.
    pub fn consume_bytes(&mut self, len: usize) -> &'a str {
        let start = self.offset;
        let target = (start + len).min(self.source.len());
        while self.offset < target {
            if self.consume().is_none() {
                break;
            }
        }
        &self.source[start..self.offset]
    }

    /// Consume characters while `pred` holds and return them.
    pub fn skip_while(&mut self, mut pred: impl FnMut(char) -> bool) -> &'a str {
        let start = self.offset;
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.consume();
        }
        &self.source[start..self.offset]
    }

    fn track(&mut self, c: char) {
        let line_break = match c {
            '\n' => true,
            // A `\r` directly before `\n` leaves the break to the `\n`.
            '\r' => self.peek() != Some('\n'),
            _ => false,
        };
        if line_break {
            self.line += 1;
            self.column = 0;
            self.line_start = self.offset;
        } else {
            self.column += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookahead_is_total() {
        let cursor = Cursor::new("ab");
        assert_eq!(cursor.peek(), Some('a'));
        assert_eq!(cursor.peek_at(1), Some('b'));
        assert_eq!(cursor.peek_at(2), None);
        assert_eq!(cursor.peek_n(5), "ab");
        assert_eq!(cursor.peek_n(0), "");
    }

    #[test]
    fn consume_at_end_yields_nothing() {
        let mut cursor = Cursor::new("x");
        assert_eq!(cursor.consume(), Some('x'));
        assert_eq!(cursor.consume(), None);
        assert_eq!(cursor.consume_n(3), "");
        assert!(cursor.is_at_end());
    }

    #[test]
    fn tracks_lines_and_columns() {
        let mut cursor = Cursor::new("ab\r\ncd\ne\rf");
        cursor.consume_n(2);
        assert_eq!((cursor.line(), cursor.column()), (0, 2));
        cursor.consume();
        assert_eq!(cursor.line(), 0, "\\r before \\n is not a break on its own");
        cursor.consume();
        assert_eq!((cursor.line(), cursor.column()), (1, 0));
        cursor.skip_while(|c| c != 'e');
        assert_eq!((cursor.line(), cursor.column()), (2, 0));
        cursor.consume_n(2);
        assert_eq!((cursor.line(), cursor.column()), (3, 0));
        assert_eq!(cursor.line_prefix(), "");
    }

    #[test]
    fn columns_count_characters_not_bytes() {
        let mut cursor = Cursor::new("é=1");
        cursor.consume();
        assert_eq!(cursor.offset(), 2);
        assert_eq!(cursor.column(), 1);
    }

    #[test]
    fn reset_rewinds() {
        let mut cursor = Cursor::new("a\nb");
        cursor.consume_n(3);
        cursor.reset();
        assert_eq!((cursor.offset(), cursor.line(), cursor.column()), (0, 0, 0));
        assert_eq!(cursor.rest(), "a\nb");
    }
}
