/// Symbol parser state.
///
/// ## Notes
/// - One instance per pass: the token index, scope stack and table are all owned here, so two documents
///   parsed concurrently never share state.
/// - The parser is total. It never rejects input; it steps over anything it does not recognise and records
///   a [`SyntaxDiagnostic`] where it had to guess.
pub struct SymbolParser<'a> {
    tokens: &'a [Token],
    pos: usize,
    scopes: Vec<Scope>,
    /// Open `BEGIN`s.
    block_depth: usize,
    /// `true` at the start of input and after `;` / `BEGIN`, where a data type opens a declaration.
    statement_start: bool,
    table: SymbolTable,
    diagnostics: Vec<SyntaxDiagnostic>,
}

/// Output of one symbol-parser pass.
#[derive(Debug, Clone, Default)]
pub struct Parsed {
    pub symbols: SymbolTable,
    pub diagnostics: Vec<SyntaxDiagnostic>,
}

impl<'a> SymbolParser<'a> {
    /// Create a parser over a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by `tal_syntax::lexer`.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            scopes: vec![Scope::global()],
            block_depth: 0,
            statement_start: true,
            table: SymbolTable::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Parse the whole token stream into a symbol table.
    pub fn parse(mut self) -> Parsed {
        while let Some(token) = self.peek() {
            match &token.kind {
                TokenKind::NewLine | TokenKind::Comment | TokenKind::CommentLine => {
                    self.advance();
                }
                TokenKind::Directive | TokenKind::DirectiveLine => self.directive_line(),
                TokenKind::Keyword(KeywordId::Literal) => self.literal_declaration(),
                TokenKind::Keyword(KeywordId::Define) => self.define_declaration(),
                TokenKind::Keyword(KeywordId::Proc | KeywordId::Subproc) => self.procedure_declaration(None),
                TokenKind::Keyword(KeywordId::Struct) => self.struct_declaration(),
                TokenKind::DataType(id) if self.statement_start => {
                    let id = *id;
                    if self.typed_procedure_follows() {
                        self.procedure_declaration(Some(id));
                    } else {
                        self.variable_declaration(id);
                    }
                }
                TokenKind::Keyword(KeywordId::Begin) => self.begin_block(),
                TokenKind::Keyword(KeywordId::End) => self.end_block(),
                TokenKind::Keyword(KeywordId::Forward | KeywordId::External) => self.body_elsewhere(),
                TokenKind::Delimiter(DelimiterId::Semicolon) => {
                    self.advance();
                    self.statement_start = true;
                }
                _ => {
                    self.advance();
                    self.statement_start = false;
                }
            }
        }

        tracing::debug!(
            symbols = self.table.len(),
            diagnostics = self.diagnostics.len(),
            open_scopes = self.scopes.len() - 1,
            "parsed symbols"
        );
        Parsed {
            symbols: self.table,
            diagnostics: self.diagnostics,
        }
    }
}
