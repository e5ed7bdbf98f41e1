/// Declaration handlers.
///
/// This chunk implements:
/// - `LITERAL name = value, ...;`
/// - `DEFINE name [(params)] = body #, ...;`
/// - `[type] PROC|SUBPROC name [(params)] [attributes];`
/// - `STRUCT [.]name [(*) | (template)] [bounds];`
/// - `type [(width)] [.]name [[bounds]] [:= init], ...;`
impl<'a> SymbolParser<'a> {
    // ========================================================================
    // LITERAL
    // ========================================================================

    fn literal_declaration(&mut self) {
        self.advance();

        loop {
            // Skip to the next name; a `;` ends the declaration.
            let name = loop {
                match self.peek() {
                    None => return,
                    Some(t) if t.is_delimiter(DelimiterId::Semicolon) => {
                        self.advance();
                        self.statement_start = true;
                        return;
                    }
                    Some(t) if matches!(t.kind, TokenKind::Name(_)) => break t,
                    Some(_) => {
                        self.advance();
                    }
                }
            };
            self.advance();

            self.skip_layout();
            if self.check_delimiter(DelimiterId::Equal) {
                self.advance();
            }
            let value = join_token_text(&self.collect_value());

            let context = self.context().to_string();
            let entry = SymbolEntry::at(name, SymbolKind::Literal, SymbolType::Value, &context)
                .with_value(SymbolValue::Text(value));
            self.insert(entry);

            if !self.list_continues() {
                return;
            }
        }
    }

    // ========================================================================
    // DEFINE
    // ========================================================================

    fn define_declaration(&mut self) {
        self.advance();

        loop {
            let Some(name) = self.skip_to_name() else {
                return;
            };
            let context = self.context().to_string();
            let define_key = SymbolKey::new(&context, name.text.as_str());

            let entry = SymbolEntry::at(name, SymbolKind::Define, SymbolType::Identifier, &context)
                .with_value(SymbolValue::Text(name.text.clone()));
            self.insert(entry);

            self.skip_layout();
            if self.check_delimiter(DelimiterId::LParen) {
                let params = self.tokens_between(DelimiterId::LParen, DelimiterId::RParen);
                for param in params.iter().filter(|t| matches!(t.kind, TokenKind::Name(_))) {
                    let key = define_key
                        .clone()
                        .with_suffix(KeySuffix::Parameter(param.text.clone()));
                    let entry = SymbolEntry::at(param, SymbolKind::Define, SymbolType::Parameter, &context)
                        .with_key(key);
                    self.insert(entry);
                }
            }

            // Everything up to `=` is noise; a DEFINE without `=` has no body.
            while let Some(token) = self.peek() {
                if token.is_delimiter(DelimiterId::Equal) || token.is_delimiter(DelimiterId::Semicolon) {
                    break;
                }
                self.advance();
            }
            if !self.check_delimiter(DelimiterId::Equal) {
                self.list_continues();
                return;
            }
            self.advance();

            let (body, terminated) = self.tokens_until_delimiter(DelimiterId::Hash);
            if !terminated {
                self.diagnose(errors::unterminated_define(&name.text, name.span));
            }
            let key = define_key.with_suffix(KeySuffix::Body);
            let entry = SymbolEntry::at(name, SymbolKind::Define, SymbolType::Body, &context)
                .with_key(key)
                .with_value(SymbolValue::Tokens(body));
            self.insert(entry);

            if !self.list_continues() {
                return;
            }
        }
    }

    /// Advance to the next name token and consume it. Stops (consuming it) at `;`.
    fn skip_to_name(&mut self) -> Option<&'a Token> {
        while let Some(token) = self.advance() {
            match &token.kind {
                TokenKind::Name(_) => return Some(token),
                TokenKind::Delimiter(DelimiterId::Semicolon) => {
                    self.statement_start = true;
                    return None;
                }
                _ => {}
            }
        }
        None
    }

    // ========================================================================
    // PROC / SUBPROC
    // ========================================================================

    /// Return `true` if the data type at the cursor is the return type of a `PROC`/`SUBPROC` header.
    fn typed_procedure_follows(&self) -> bool {
        let mut rest = self.tokens[self.pos + 1..].iter().filter(|t| !t.kind.is_layout());
        let mut next = rest.next();
        if next.is_some_and(|t| t.is_delimiter(DelimiterId::LParen)) {
            // Skip a width qualifier: `INT(32) PROC`.
            next = rest.find(|t| t.is_delimiter(DelimiterId::RParen)).and_then(|_| rest.next());
        }
        next.is_some_and(|t| matches!(t.keyword_id(), Some(KeywordId::Proc | KeywordId::Subproc)))
    }

    fn procedure_declaration(&mut self, return_type: Option<DataTypeId>) {
        if return_type.is_some() {
            // Type word plus optional width.
            self.advance();
            self.skip_layout();
            self.tokens_between(DelimiterId::LParen, DelimiterId::RParen);
            self.skip_layout();
        }
        let Some(keyword) = self.advance() else {
            return;
        };
        let (ty, scope_kind) = if keyword.kind.is_keyword(KeywordId::Subproc) {
            (SymbolType::Subprocedure, ScopeKind::Subprocedure)
        } else {
            (SymbolType::Procedure, ScopeKind::Procedure)
        };

        match scope_kind {
            ScopeKind::Procedure => self.close_bodiless(&[ScopeKind::Procedure, ScopeKind::Subprocedure]),
            _ => self.close_bodiless(&[ScopeKind::Subprocedure]),
        }

        self.skip_layout();
        let Some(name) = self.peek().filter(|t| matches!(t.kind, TokenKind::Name(_))) else {
            let label = keywords::as_str(keyword.keyword_id().unwrap_or(KeywordId::Proc));
            self.diagnose(errors::missing_declaration_name(label, keyword.span));
            self.skip_past_semicolon();
            return;
        };
        self.advance();

        let context = self.context().to_string();
        let value = return_type.map_or(SymbolValue::None, |id| {
            SymbolValue::Text(data_types::as_str(id).to_string())
        });
        let entry = SymbolEntry::at(name, SymbolKind::Function, ty, &context).with_value(value);
        self.insert(entry);

        self.push_scope(&name.text, scope_kind);

        self.skip_layout();
        if self.check_delimiter(DelimiterId::LParen) {
            let params = self.tokens_between(DelimiterId::LParen, DelimiterId::RParen);
            let mut depth = 0usize;
            for param in &params {
                match param.delimiter_id() {
                    Some(DelimiterId::LParen) => depth += 1,
                    Some(DelimiterId::RParen) => depth = depth.saturating_sub(1),
                    _ => {}
                }
                if depth == 0 && matches!(param.kind, TokenKind::Name(_)) {
                    let entry = SymbolEntry::at(param, SymbolKind::Variable, SymbolType::Parameter, &name.text);
                    self.insert(entry);
                }
            }
        }

        // Attributes (MAIN, INTERRUPT, = "ext-name", ...) run to the end of the header.
        self.skip_past_semicolon();
    }

    // ========================================================================
    // STRUCT
    // ========================================================================

    fn struct_declaration(&mut self) {
        let Some(keyword) = self.advance() else {
            return;
        };
        self.skip_layout();
        while self.peek().is_some_and(|t| t.kind.is_indirection_marker()) {
            self.advance();
        }
        let Some(name) = self.peek().filter(|t| matches!(t.kind, TokenKind::Name(_))) else {
            self.diagnose(errors::missing_declaration_name("STRUCT", keyword.span));
            self.skip_past_semicolon();
            return;
        };
        self.advance();

        let context = self.context().to_string();
        let entry = SymbolEntry::at(name, SymbolKind::Variable, SymbolType::Struct, &context);
        self.insert(entry);

        self.skip_past_semicolon();
        if self
            .peek_significant()
            .is_some_and(|t| t.kind.is_keyword(KeywordId::Begin))
        {
            self.push_scope(&name.text, ScopeKind::Struct);
        }
    }

    // ========================================================================
    // Variables
    // ========================================================================

    fn variable_declaration(&mut self, data_type: DataTypeId) {
        self.advance();
        self.skip_layout();
        // Width qualifier: `INT(32)`, `FIXED(3)`, `INT(*)`.
        if self.check_delimiter(DelimiterId::LParen) {
            self.tokens_between(DelimiterId::LParen, DelimiterId::RParen);
        } else if self.check_delimiter(DelimiterId::TemplateStar) {
            self.advance();
        }

        loop {
            self.skip_layout();
            while self.peek().is_some_and(|t| t.kind.is_indirection_marker()) {
                self.advance();
            }
            let Some(name) = self.peek().filter(|t| matches!(t.kind, TokenKind::Name(_))) else {
                // `INT;`, `INT PROC`-like noise or end of input.
                if let Some(token) = self.peek().filter(|t| !t.is_delimiter(DelimiterId::Semicolon)) {
                    self.diagnose(errors::missing_declaration_name(
                        data_types::as_str(data_type),
                        token.span,
                    ));
                }
                self.skip_past_semicolon();
                return;
            };
            self.advance();

            // Structure referral: `INT .EXT rec(template)[0:9]`.
            self.skip_layout();
            if self.check_delimiter(DelimiterId::LParen) {
                self.tokens_between(DelimiterId::LParen, DelimiterId::RParen);
            }

            self.skip_layout();
            if self.check_delimiter(DelimiterId::LBracket) {
                self.tokens_between(DelimiterId::LBracket, DelimiterId::RBracket);
            }

            self.skip_layout();
            let has_init = self
                .peek()
                .is_some_and(|t| t.kind.is_operator(OperatorId::Assign) || t.is_delimiter(DelimiterId::Equal));
            let value = if has_init {
                self.advance();
                SymbolValue::Text(join_token_text(&self.collect_value()))
            } else {
                SymbolValue::None
            };

            let context = self.context().to_string();
            let entry = SymbolEntry::at(name, SymbolKind::Variable, SymbolType::Typed(data_type), &context)
                .with_value(value);
            self.insert(entry);

            if !self.list_continues() {
                return;
            }
        }
    }
}
