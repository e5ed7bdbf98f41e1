//! Cursor and tokenizer tests over the public `tal_syntax` API.

use proptest::prelude::*;
use tal_syntax::lexer::{self, Cursor, Token};

fn dump(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| format!("{}:{}-{}\t{}\t{:?}", t.line, t.start_char, t.end_char, t.kind, t.text))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_continued_source_directive_tokens() {
    insta::assert_snapshot!(dump(&lexer::tokenize("?SOURCE lib (a,\n?  b)\n")), @r#"
    0:0-1	directive	"?"
    0:1-7	name SOURCE	"SOURCE"
    0:8-11	name lib	"lib"
    0:12-13	delimiter (	"("
    0:13-14	name a	"a"
    0:14-15	delimiter ,	","
    0:15-16	newline	"\n"
    1:0-1	directive	"?"
    1:3-4	name b	"b"
    1:4-5	delimiter )	")"
    1:5-6	newline	"\n"
    "#);
}

fn line_breaks(text: &str) -> usize {
    // A `\r\n` pair is one break, so it is counted by `\n` and subtracted for its `\r`.
    text.matches('\n').count() + text.matches('\r').count() - text.matches("\r\n").count()
}

proptest! {
    /// Property: consuming character by character rebuilds the input, and lookahead agrees with consumption.
    #[test]
    fn cursor_consumes_exactly_the_source(source in "[a-z \t\r\n\u{e9}\u{1F600}]{0,40}", n in 0usize..8) {
        let mut cursor = Cursor::new(&source);
        let ahead = cursor.peek_n(n);
        prop_assert_eq!(cursor.consume_n(n), ahead);

        let mut rebuilt = ahead.to_string();
        while let Some(c) = cursor.consume() {
            rebuilt.push(c);
        }
        prop_assert_eq!(rebuilt, source.clone());
        prop_assert!(cursor.is_at_end());
        prop_assert_eq!(cursor.peek(), None);

        cursor.reset();
        prop_assert_eq!(cursor.offset(), 0);
        prop_assert_eq!(cursor.rest(), source.as_str());
    }

    /// Property: `\r\n`, `\n` and a lone `\r` each end exactly one line.
    #[test]
    fn cursor_counts_each_line_break_once(source in "[ab\r\n]{0,30}") {
        let mut cursor = Cursor::new(&source);
        cursor.skip_while(|_| true);
        prop_assert_eq!(cursor.line(), line_breaks(&source));
    }
}
