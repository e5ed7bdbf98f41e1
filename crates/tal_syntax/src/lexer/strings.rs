//! String and comment scanning.

use super::{Lexer, Mark, TokenKind};
use crate::diagnostics::errors;

fn is_line_break(c: char) -> bool {
    c == '\n' || c == '\r'
}

impl Lexer<'_> {
    /// Scan a `"` string. The payload is the raw text between the quotes.
    ///
    /// An unterminated string runs to end of input.
    pub(super) fn scan_string(&mut self, start: Mark) {
        self.cursor.consume();
        let contents = self.cursor.skip_while(|c| c != '"');
        let contents = contents.to_string();

        if self.cursor.consume().is_none() {
            let span = self.span_from(start);
            self.diagnose(errors::unterminated_string(span));
        }
        self.add_token(TokenKind::String(contents), start);
    }

    /// Scan a `--` comment through its line terminator.
    ///
    /// The terminator belongs to the comment, so no `NewLine` token follows it.
    pub(super) fn scan_line_comment(&mut self, start: Mark) {
        self.cursor.consume_n(2);
        self.cursor.skip_while(|c| !is_line_break(c));
        if self.cursor.peek_n(2) == "\r\n" {
            self.cursor.consume_n(2);
        } else if self.cursor.peek().is_some_and(is_line_break) {
            self.cursor.consume();
        }
        if self.options.keep_comments {
            self.add_token(TokenKind::CommentLine, start);
        }
    }

    /// Scan a `! ... !` comment. An unclosed comment ends at the line terminator.
    pub(super) fn scan_bang_comment(&mut self, start: Mark) {
        self.cursor.consume();
        self.cursor.skip_while(|c| c != '!' && !is_line_break(c));

        if self.cursor.peek() == Some('!') {
            self.cursor.consume();
        } else {
            let span = self.span_from(start);
            self.diagnose(errors::unterminated_comment(span));
        }
        if self.options.keep_comments {
            self.add_token(TokenKind::Comment, start);
        }
    }
}
