/// Directive dispatch.
///
/// A directive line runs from its `?` marker to the next line terminator and may name several directives
/// separated by commas (`?NOLIST, NOCODE`). Each named directive becomes a `Directive` entry in the current
/// context. `SOURCE` additionally declares every section name in its parenthesised list as an external
/// function scoped to the source file rather than the enclosing code.
impl<'a> SymbolParser<'a> {
    fn directive_line(&mut self) {
        self.advance();

        while let Some(token) = self.peek() {
            match &token.kind {
                kind if kind.ends_line() => {
                    self.advance();
                    break;
                }
                _ if token.kind.is_word() => {
                    match directives::from_str(&token.text) {
                        Some(DirectiveId::Source) => self.source_directive(token),
                        Some(DirectiveId::Target) => self.target_directive(token),
                        Some(id) if directives::form(id) == DirectiveForm::Simple => {
                            self.advance();
                            self.insert_directive(token, directives::as_str(id), SymbolValue::None);
                        }
                        Some(id) => {
                            self.advance();
                            // `ASSERTION level, procedure` keeps its comma.
                            let value = self.directive_arguments(id == DirectiveId::Assertion);
                            self.insert_directive(token, directives::as_str(id), value);
                        }
                        None => {
                            tracing::debug!(name = %token.text, "unrecognised directive");
                            self.advance();
                            let value = self.directive_arguments(false);
                            self.insert_directive(token, &token.text, value);
                        }
                    }
                }
                _ => {
                    self.advance();
                }
            }
        }
        self.statement_start = true;
    }

    fn insert_directive(&mut self, token: &Token, name: &str, value: SymbolValue) {
        let context = self.context().to_string();
        let mut entry = SymbolEntry::at(token, SymbolKind::Directive, SymbolType::Directive, &context).with_value(value);
        entry.name = name.to_string();
        entry.key = SymbolKey::new(context, name);
        self.insert(entry);
    }

    /// Arguments of a complex directive: everything up to a `,` at depth zero or the end of the line.
    fn directive_arguments(&mut self, to_line_end: bool) -> SymbolValue {
        let mut args = Vec::new();
        let mut depth = 0usize;
        while let Some(token) = self.peek() {
            match &token.kind {
                kind if kind.ends_line() => break,
                TokenKind::Delimiter(DelimiterId::Comma) if depth == 0 && !to_line_end => break,
                TokenKind::Delimiter(DelimiterId::LParen) => depth += 1,
                TokenKind::Delimiter(DelimiterId::RParen) => depth = depth.saturating_sub(1),
                _ => {}
            }
            args.push(token.clone());
            self.advance();
        }
        if args.is_empty() {
            SymbolValue::None
        } else {
            SymbolValue::Text(join_token_text(&args))
        }
    }

    /// `TARGET name`: the value is the next token on the line.
    fn target_directive(&mut self, directive: &'a Token) {
        self.advance();
        let value = match self.peek() {
            Some(t) if !t.kind.ends_line() && !t.is_delimiter(DelimiterId::Comma) => {
                self.advance();
                SymbolValue::Text(t.text.clone())
            }
            _ => SymbolValue::None,
        };
        self.insert_directive(directive, directives::as_str(DirectiveId::Target), value);
    }

    /// `SOURCE file [(section, ...)]`.
    ///
    /// ## Notes
    /// - The file name is the source text up to `(`, a depth-zero `,`, or the end of the line.
    /// - The section list may continue over `?`-prefixed continuation lines.
    fn source_directive(&mut self, directive: &'a Token) {
        self.advance();

        let mut file_tokens = Vec::new();
        while let Some(token) = self.peek() {
            if token.kind.ends_line()
                || token.is_delimiter(DelimiterId::LParen)
                || token.is_delimiter(DelimiterId::Comma)
            {
                break;
            }
            file_tokens.push(token.clone());
            self.advance();
        }
        let file = join_token_text(&file_tokens);
        let value = if file.is_empty() {
            SymbolValue::None
        } else {
            SymbolValue::Text(file.clone())
        };
        self.insert_directive(directive, directives::as_str(DirectiveId::Source), value);

        if !self.check_delimiter(DelimiterId::LParen) {
            return;
        }
        self.advance();

        let mut depth = 1usize;
        while let Some(token) = self.peek() {
            match &token.kind {
                // A section list only continues onto `?`-prefixed lines; otherwise the line ends here.
                kind if kind.ends_line() => {
                    let continued = self
                        .tokens
                        .get(self.pos + 1)
                        .is_some_and(|t| t.kind.is_directive_marker());
                    if !continued {
                        return;
                    }
                    self.advance();
                }
                TokenKind::Delimiter(DelimiterId::LParen) => depth += 1,
                TokenKind::Delimiter(DelimiterId::RParen) => {
                    depth -= 1;
                    if depth == 0 {
                        self.advance();
                        return;
                    }
                }
                _ if token.kind.is_word() && depth == 1 => {
                    let entry = SymbolEntry::at(token, SymbolKind::Function, SymbolType::External, &file);
                    self.insert(entry);
                }
                _ => {}
            }
            self.advance();
        }
    }
}
