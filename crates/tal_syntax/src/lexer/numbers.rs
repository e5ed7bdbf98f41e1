//! Numeric literal scanning.

use super::{Lexer, Mark, TokenKind};
use crate::diagnostics::errors;
use tal_core::lang::numeric::{self, NumericBase};

impl Lexer<'_> {
    /// Scan an integer literal: optional base prefix, digit run, optional size suffix.
    ///
    /// ## Notes
    /// - Values that overflow `i64` saturate to `i64::MAX` and record a diagnostic.
    /// - `1.5` is not joined; it lexes as number, delimiter, number.
    pub(super) fn scan_number(&mut self, start: Mark) {
        let base = match numeric::match_base_prefix(self.cursor.rest()) {
            Some((base, prefix_len)) => {
                self.cursor.consume_bytes(prefix_len);
                base
            }
            None => NumericBase::Decimal,
        };

        let digits = self.cursor.skip_while(|c| base.is_digit(c));
        let parsed = i64::from_str_radix(digits, base.radix());

        if let Some((suffix, len)) = numeric::match_suffix(self.cursor.rest(), base) {
            tracing::trace!(?suffix, "numeric suffix");
            self.cursor.consume_bytes(len);
        }

        let value = match parsed {
            Ok(value) => value,
            Err(_) => {
                let span = self.span_from(start);
                let text = self.cursor.slice(span.start, span.end).to_string();
                self.diagnose(errors::integer_out_of_range(&text, span));
                i64::MAX
            }
        };
        self.add_token(TokenKind::Number(value), start);
    }
}
