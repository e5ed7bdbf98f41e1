/// Parse a token stream into a symbol table, keeping the diagnostics.
///
/// Every call starts from an empty table, so parsing the same tokens twice yields the same result.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Parsed {
    SymbolParser::new(tokens).parse()
}

/// Parse a token stream and return the entries in declaration order.
pub fn parse_tokens(tokens: &[Token]) -> Vec<SymbolEntry> {
    parse(tokens).symbols.into_entries()
}
