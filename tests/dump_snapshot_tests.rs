//! Snapshot tests for the CLI dump formats
//!
//! The `--lex` and `--symbols` outputs are what users paste into bug reports, so their shape is pinned here.
//!
//! Review changes: `cargo insta review`

use tal::cli::commands::{format_symbols, format_tokens};
use tal::lexer::{LexOptions, Lexer};

const KEEP_COMMENTS: LexOptions = LexOptions {
    keep_comments: true,
    multi_word_names: false,
};

#[test]
fn test_token_dump_snapshot() {
    let source = "INT .EXT p := @q;\n?NOLIST ! off !\n";
    let lexed = Lexer::with_options(source, KEEP_COMMENTS).tokenize();
    let dump = format_tokens(&lexed.tokens);
    insta::assert_snapshot!(dump.trim_end(), @r#"
    0:0-3	type INT	"INT"
    0:4-8	indirection .EXT	".EXT"
    0:9-10	name p	"p"
    0:11-13	operator :=	":="
    0:14-15	indirection @	"@"
    0:15-16	name q	"q"
    0:16-17	delimiter ;	";"
    0:17-18	newline	"\n"
    1:0-1	directive line	"?"
    1:1-7	name NOLIST	"NOLIST"
    1:8-15	comment	"! off !"
    1:15-16	newline	"\n"
    "#);
}

#[test]
fn test_symbol_dump_snapshot() {
    let source = "\
LITERAL max = 10;
DEFINE twice(v) = v * 2 #;
INT PROC f(a);
  INT a;
BEGIN
  INT .EXT buf[0:9] := \"abc\";
END;
";
    let analysis = tal::analyze(source, LexOptions::default());
    let dump = format_symbols(analysis.symbols.entries());
    insta::assert_snapshot!(dump.trim_end(), @r#"
    Global.max	Literal	Value	0:8-11	= 10
    Global.twice	Define	Identifier	1:7-12	= twice
    Global.twice.v	Define	Parameter	1:13-14
    Global.twice.Body	Define	Body	1:7-12	= v * 2
    Global.f	Function	Procedure	2:9-10	= INT
    f.a	Variable	INT	3:6-7
    f.buf	Variable	INT	5:11-14	= "abc"
    "#);
}
