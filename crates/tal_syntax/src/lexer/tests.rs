//! Tokenizer unit tests.

use super::*;
use crate::diagnostics::DiagnosticKind;
use tal_core::lang::data_types::DataTypeId;
use tal_core::lang::delimiters::DelimiterId;
use tal_core::lang::indirection::IndirectionId;
use tal_core::lang::keywords::KeywordId;
use tal_core::lang::operators::OperatorId;

const KEEP_COMMENTS: LexOptions = LexOptions {
    keep_comments: true,
    multi_word_names: false,
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).into_iter().map(|t| t.kind).collect()
}

fn kinds_with_comments(source: &str) -> Vec<TokenKind> {
    Lexer::with_options(source, KEEP_COMMENTS)
        .tokenize()
        .tokens
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

fn name(s: &str) -> TokenKind {
    TokenKind::Name(s.to_string())
}

#[test]
fn test_keywords_ignore_case() {
    assert_eq!(
        kinds("begin Begin BEGIN"),
        vec![TokenKind::Keyword(KeywordId::Begin); 3]
    );
}

#[test]
fn test_data_types_win_over_keywords() {
    let tokens = kinds("INT int(32) string");
    assert_eq!(
        tokens,
        vec![
            TokenKind::DataType(DataTypeId::Int),
            TokenKind::DataType(DataTypeId::Int),
            TokenKind::Delimiter(DelimiterId::LParen),
            TokenKind::Number(32),
            TokenKind::Delimiter(DelimiterId::RParen),
            TokenKind::DataType(DataTypeId::String),
        ]
    );
}

#[test]
fn test_word_operators() {
    assert_eq!(
        kinds("a LAND b or c"),
        vec![
            name("a"),
            TokenKind::Operator(OperatorId::Land),
            name("b"),
            TokenKind::Operator(OperatorId::Or),
            name("c"),
        ]
    );
}

#[test]
fn test_longest_symbol_wins() {
    assert_eq!(
        kinds("a<=b"),
        vec![name("a"), TokenKind::Operator(OperatorId::LessEq), name("b")]
    );
    assert_eq!(
        kinds("x := y ':=' z"),
        vec![
            name("x"),
            TokenKind::Operator(OperatorId::Assign),
            name("y"),
            TokenKind::Operator(OperatorId::MoveLeft),
            name("z"),
        ]
    );
    assert_eq!(
        kinds("a << 2"),
        vec![name("a"), TokenKind::Operator(OperatorId::ShiftLeft), TokenKind::Number(2)]
    );
}

#[test]
fn test_dot_after_data_type_is_indirection() {
    assert_eq!(
        kinds("INT .p;"),
        vec![
            TokenKind::DataType(DataTypeId::Int),
            TokenKind::Indirection(IndirectionId::Standard),
            name("p"),
            TokenKind::Delimiter(DelimiterId::Semicolon),
        ]
    );
    assert_eq!(
        kinds("s.f"),
        vec![name("s"), TokenKind::Delimiter(DelimiterId::Dot), name("f")]
    );
}

#[test]
fn test_named_indirection() {
    assert_eq!(
        kinds("INT .EXT p"),
        vec![
            TokenKind::DataType(DataTypeId::Int),
            TokenKind::Indirection(IndirectionId::Extended),
            name("p"),
        ]
    );
    assert_eq!(
        kinds("a.EXTRA"),
        vec![name("a"), TokenKind::Delimiter(DelimiterId::Dot), name("EXTRA")]
    );
}

#[test]
fn test_comments_are_dropped_by_default() {
    assert_eq!(
        kinds("a -- trailing\nb ! inline ! c"),
        vec![name("a"), name("b"), name("c")]
    );
}

#[test]
fn test_line_comment_consumes_its_terminator() {
    assert_eq!(kinds("X -- note\r\nY"), vec![name("X"), name("Y")]);
    assert_eq!(kinds("X -- note\rY\n"), vec![name("X"), name("Y"), TokenKind::NewLine]);

    // Kept, the comment token spans the terminator and the next line starts fresh.
    let lexed = Lexer::with_options("X -- note\r\nY", KEEP_COMMENTS).tokenize();
    let comment = &lexed.tokens[1];
    assert_eq!((comment.kind.clone(), comment.text.as_str()), (TokenKind::CommentLine, "-- note\r\n"));
    let y = &lexed.tokens[2];
    assert_eq!((y.line, y.start_char), (1, 0));
}

#[test]
fn test_unclosed_bang_comment_stops_at_line_end() {
    let lexed = lex("a ! open\nb");
    let kinds: Vec<_> = lexed.tokens.iter().map(|t| t.kind.clone()).collect();
    assert_eq!(kinds, vec![name("a"), TokenKind::NewLine, name("b")]);
    assert_eq!(lexed.diagnostics.len(), 1);
    assert_eq!(lexed.diagnostics[0].kind, DiagnosticKind::UnterminatedComment);
}

#[test]
fn test_keep_comments_emits_comment_tokens() {
    assert_eq!(
        kinds_with_comments("a -- x\n! y ! b"),
        vec![
            name("a"),
            TokenKind::CommentLine,
            TokenKind::Comment,
            name("b"),
        ]
    );
}

#[test]
fn test_multi_word_names() {
    let options = LexOptions {
        multi_word_names: true,
        ..LexOptions::default()
    };
    let kinds_joined = |source: &str| -> Vec<TokenKind> {
        Lexer::with_options(source, options)
            .tokenize()
            .tokens
            .into_iter()
            .map(|t| t.kind)
            .collect()
    };

    assert_eq!(kinds("my var"), vec![name("my"), name("var")]);
    assert_eq!(kinds_joined("my var := 1"), vec![
        name("my var"),
        TokenKind::Operator(OperatorId::Assign),
        TokenKind::Number(1),
    ]);
    assert_eq!(kinds_joined("old  total"), vec![name("old"), name("total")]);

    // The run stops before reserved words and never starts from one.
    assert_eq!(kinds_joined("total cost END"), vec![
        name("total cost"),
        TokenKind::Keyword(KeywordId::End),
    ]);
    assert_eq!(kinds_joined("INT my var;"), vec![
        TokenKind::DataType(DataTypeId::Int),
        name("my var"),
        TokenKind::Delimiter(DelimiterId::Semicolon),
    ]);
    assert_eq!(kinds_joined("a LOR b"), vec![
        name("a"),
        TokenKind::Operator(OperatorId::Lor),
        name("b"),
    ]);

    // A directive name keeps its arguments apart.
    assert_eq!(kinds_joined("?SOURCE lib"), vec![TokenKind::Directive, name("SOURCE"), name("lib")]);
}

#[test]
fn test_directive_marker() {
    assert_eq!(
        kinds("?NOLIST, SOURCE"),
        vec![
            TokenKind::Directive,
            name("NOLIST"),
            TokenKind::Delimiter(DelimiterId::Comma),
            name("SOURCE"),
        ]
    );

    let kept = kinds_with_comments("  ?LIST\na ?X");
    assert_eq!(kept[0], TokenKind::DirectiveLine);
    assert_eq!(kept[4], TokenKind::Directive);
}

#[test]
fn test_numbers_with_bases_and_suffixes() {
    assert_eq!(
        kinds("42 %17 %B101 %H1F 100D 3%F"),
        vec![
            TokenKind::Number(42),
            TokenKind::Number(15),
            TokenKind::Number(5),
            TokenKind::Number(31),
            TokenKind::Number(100),
            TokenKind::Number(3),
        ]
    );

    let tokens = tokenize("100D 3%F");
    assert_eq!(tokens[0].text, "100D");
    assert_eq!(tokens[1].text, "3%F");
}

#[test]
fn test_suffix_needs_word_boundary() {
    assert_eq!(kinds("12DAYS"), vec![TokenKind::Number(12), name("DAYS")]);
}

#[test]
fn test_fraction_is_not_joined() {
    assert_eq!(
        kinds("1.5"),
        vec![
            TokenKind::Number(1),
            TokenKind::Delimiter(DelimiterId::Dot),
            TokenKind::Number(5),
        ]
    );
}

#[test]
fn test_integer_overflow_saturates() {
    let lexed = lex("99999999999999999999");
    assert_eq!(lexed.tokens[0].kind, TokenKind::Number(i64::MAX));
    assert_eq!(lexed.diagnostics[0].kind, DiagnosticKind::IntegerOutOfRange);
}

#[test]
fn test_strings() {
    assert_eq!(kinds(r#""hi there""#), vec![TokenKind::String("hi there".into())]);

    let lexed = lex("x := \"abc");
    let last = lexed.tokens.last().unwrap();
    assert_eq!(last.kind, TokenKind::String("abc".into()));
    assert_eq!(last.text, "\"abc");
    assert_eq!(lexed.diagnostics[0].kind, DiagnosticKind::UnterminatedString);
}

#[test]
fn test_unknown_character_is_dropped() {
    let lexed = lex("a ~ b");
    let kinds: Vec<_> = lexed.tokens.iter().map(|t| t.kind.clone()).collect();
    assert_eq!(kinds, vec![name("a"), name("b")]);
    assert_eq!(lexed.diagnostics[0].kind, DiagnosticKind::UnknownCharacter);
    assert_eq!(lexed.diagnostics[0].span, Span::new(2, 3));
}

#[test]
fn test_std_functions_and_caret_names() {
    assert_eq!(
        kinds("$LEN(buf^in)"),
        vec![
            name("$LEN"),
            TokenKind::Delimiter(DelimiterId::LParen),
            name("buf^in"),
            TokenKind::Delimiter(DelimiterId::RParen),
        ]
    );
}

#[test]
fn test_crlf_is_one_newline() {
    let tokens = tokenize("a\r\nb");
    assert_eq!(tokens[1].kind, TokenKind::NewLine);
    assert_eq!(tokens[1].text, "\r\n");
    assert_eq!((tokens[2].line, tokens[2].start_char), (1, 0));
}

#[test]
fn test_positions() {
    let tokens = tokenize("INT a;\n  b := 1;");
    let b = tokens.iter().find(|t| t.text == "b").unwrap();
    assert_eq!((b.line, b.start_char, b.end_char), (1, 2, 3));
    assert_eq!(b.span, Span::new(9, 10));
}

#[test]
fn test_spans_are_lossless_and_ordered() {
    let source = "?SOURCE $SYSTEM.SYSTEM.EXTDECS (A, B)\nPROC p(x) MAIN; -- c\nBEGIN INT .EXT q := %H1F; ~ \"s\" END;";
    let lexed = Lexer::with_options(source, KEEP_COMMENTS).tokenize();

    let mut last_end = 0;
    for token in &lexed.tokens {
        assert!(token.span.start >= last_end, "overlap at {:?}", token);
        assert_eq!(&source[token.span.start..token.span.end], token.text);
        last_end = token.span.end;
    }
}

#[test]
fn test_each_lexer_owns_its_state() {
    let a = Lexer::new("INT x;");
    let b = Lexer::new("STRING s;");
    assert_eq!(b.tokenize().tokens.len(), 3);
    assert_eq!(a.tokenize().tokens.len(), 3);
}
