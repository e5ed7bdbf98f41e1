/// Token-stream helpers.
///
/// This chunk contains the low-level primitives used by every declaration handler:
/// - Peeking/consuming tokens (`peek`, `advance`, `peek_significant`)
/// - Token windows (`tokens_between`, `tokens_until_delimiter`, `collect_value`)
///
/// Every helper stops silently at end of input.
impl<'a> SymbolParser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return the current token without consuming it.
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Advance to the next token and return the token we just consumed.
    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Skip newlines and comments.
    fn skip_layout(&mut self) {
        while self.peek().is_some_and(|t| t.kind.is_layout()) {
            self.pos += 1;
        }
    }

    /// Return the next token that is not a newline or comment, without consuming anything.
    fn peek_significant(&self) -> Option<&'a Token> {
        self.tokens[self.pos.min(self.tokens.len())..]
            .iter()
            .find(|t| !t.kind.is_layout())
    }

    fn check_delimiter(&self, id: DelimiterId) -> bool {
        self.peek().is_some_and(|t| t.is_delimiter(id))
    }

    /// Consume up to and including the next `;`, if any.
    fn skip_past_semicolon(&mut self) {
        while let Some(token) = self.advance() {
            if token.is_delimiter(DelimiterId::Semicolon) {
                break;
            }
        }
        self.statement_start = true;
    }

    /// Collect the tokens strictly between a balanced `open` / `close` pair.
    ///
    /// ## Notes
    /// - Expects the current token to be `open`; returns an empty window otherwise.
    /// - Commas at the outermost depth are separators and are left out; nested ones are kept.
    /// - Consumes through the matching `close`.
    fn tokens_between(&mut self, open: DelimiterId, close: DelimiterId) -> Vec<Token> {
        let mut inner = Vec::new();
        if !self.check_delimiter(open) {
            return inner;
        }
        self.advance();

        let mut depth = 1usize;
        while let Some(token) = self.advance() {
            if token.is_delimiter(open) {
                depth += 1;
            } else if token.is_delimiter(close) {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            } else if depth == 1 && token.is_delimiter(DelimiterId::Comma) {
                continue;
            }
            inner.push(token.clone());
        }
        inner
    }

    /// Collect tokens up to `delimiter`, then consume the delimiter itself.
    ///
    /// ## Returns
    /// - The collected tokens and whether the delimiter was found.
    fn tokens_until_delimiter(&mut self, delimiter: DelimiterId) -> (Vec<Token>, bool) {
        let mut collected = Vec::new();
        while let Some(token) = self.advance() {
            if token.is_delimiter(delimiter) {
                return (collected, true);
            }
            collected.push(token.clone());
        }
        (collected, false)
    }

    /// Collect an initializer/value: tokens up to a `,` or `;` at bracket depth zero (not consumed).
    fn collect_value(&mut self) -> Vec<Token> {
        let mut collected = Vec::new();
        let mut depth = 0usize;
        while let Some(token) = self.peek() {
            match token.delimiter_id() {
                Some(DelimiterId::Comma | DelimiterId::Semicolon) if depth == 0 => break,
                Some(DelimiterId::LParen | DelimiterId::LBracket) => depth += 1,
                Some(DelimiterId::RParen | DelimiterId::RBracket) => depth = depth.saturating_sub(1),
                _ => {}
            }
            collected.push(token.clone());
            self.pos += 1;
        }
        collected
    }

    /// Consume a `,` (returning `true` to continue a declaration list) or a `;` (returning `false`).
    ///
    /// Anything else ends the list without being consumed.
    fn list_continues(&mut self) -> bool {
        self.skip_layout();
        match self.peek().and_then(Token::delimiter_id) {
            Some(DelimiterId::Comma) => {
                self.advance();
                true
            }
            Some(DelimiterId::Semicolon) => {
                self.advance();
                self.statement_start = true;
                false
            }
            _ => false,
        }
    }

    fn insert(&mut self, entry: SymbolEntry) {
        tracing::trace!(key = %entry.key, kind = ?entry.kind, "symbol");
        if let Some(previous) = self.table.insert(entry) {
            tracing::debug!(key = %previous.key, "redeclared; later declaration wins");
        }
    }

    fn diagnose(&mut self, diagnostic: SyntaxDiagnostic) {
        tracing::debug!(code = diagnostic.kind.code(), message = %diagnostic.message, "recovered");
        self.diagnostics.push(diagnostic);
    }
}
