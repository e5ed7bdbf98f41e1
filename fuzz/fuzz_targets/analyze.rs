#![no_main]

use libfuzzer_sys::fuzz_target;
use tal::syntax::{lexer::LexOptions, analyze};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Every pass is total: none may panic, whatever the lexer options
        let _ = analyze(s, LexOptions::default());
        let _ = analyze(
            s,
            LexOptions {
                keep_comments: true,
                multi_word_names: true,
            },
        );
    }
});
