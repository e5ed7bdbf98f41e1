/// What opened a scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScopeKind {
    Global,
    Procedure,
    Subprocedure,
    Struct,
}

/// One frame of the lexical scope stack.
#[derive(Debug, Clone)]
struct Scope {
    label: String,
    kind: ScopeKind,
    /// Block depth of the `BEGIN` that opened this scope's body, once seen.
    begin_depth: Option<usize>,
}

impl Scope {
    fn global() -> Self {
        Self {
            label: GLOBAL_CONTEXT.to_string(),
            kind: ScopeKind::Global,
            begin_depth: None,
        }
    }

    fn awaiting_body(&self) -> bool {
        self.kind != ScopeKind::Global && self.begin_depth.is_none()
    }
}

/// Scope bookkeeping: `BEGIN`/`END` depth, procedure and structure scopes.
///
/// A procedure or structure scope is pushed at its header. Its `BEGIN` pins the block depth, and the
/// `END` at that depth pops it. `FORWARD`/`EXTERNAL` in place of a body pop it straight away.
impl<'a> SymbolParser<'a> {
    /// Label of the innermost scope.
    fn context(&self) -> &str {
        self.scopes.last().map_or(GLOBAL_CONTEXT, |s| s.label.as_str())
    }

    fn push_scope(&mut self, label: &str, kind: ScopeKind) {
        tracing::debug!(label, ?kind, "enter scope");
        self.scopes.push(Scope {
            label: label.to_string(),
            kind,
            begin_depth: None,
        });
    }

    fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            if let Some(scope) = self.scopes.pop() {
                tracing::debug!(label = %scope.label, "leave scope");
            }
        }
    }

    /// Drop headers that never got a body (a new procedure starts before the previous one's `BEGIN`).
    fn close_bodiless(&mut self, kinds: &[ScopeKind]) {
        while self
            .scopes
            .last()
            .is_some_and(|s| s.awaiting_body() && kinds.contains(&s.kind))
        {
            self.pop_scope();
        }
    }

    fn begin_block(&mut self) {
        self.advance();
        self.block_depth += 1;
        let depth = self.block_depth;
        if let Some(scope) = self.scopes.last_mut().filter(|s| s.awaiting_body()) {
            scope.begin_depth = Some(depth);
        }
        self.statement_start = true;
    }

    fn end_block(&mut self) {
        let Some(token) = self.advance() else {
            return;
        };
        self.statement_start = false;

        if self.block_depth == 0 {
            self.diagnose(errors::unbalanced_end(token.span));
            return;
        }
        if self
            .scopes
            .last()
            .is_some_and(|s| s.begin_depth == Some(self.block_depth))
        {
            self.pop_scope();
        }
        self.block_depth -= 1;
    }

    /// `FORWARD` / `EXTERNAL`: the pending procedure's body lives elsewhere.
    fn body_elsewhere(&mut self) {
        self.advance();
        if self.scopes.last().is_some_and(|s| {
            s.awaiting_body() && matches!(s.kind, ScopeKind::Procedure | ScopeKind::Subprocedure)
        }) {
            self.pop_scope();
        }
        self.statement_start = false;
    }
}
