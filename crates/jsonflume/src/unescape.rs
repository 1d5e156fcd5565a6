//! One-pass unescaping of accumulated string-literal text.
//!
//! The tokenizer's FSM has already validated every escape by the time a
//! closing quote arrives, so this pass only has to interpret them: the raw
//! buffered text (backslashes included) becomes the final string payload in
//! a single traversal.
//!
//! Surrogate policy: a `\uXXXX` high surrogate immediately followed by a
//! `\uXXXX` low surrogate combines into the code point the pair encodes; an
//! unpaired surrogate escape becomes U+FFFD, since Rust strings are UTF-8
//! and cannot hold a lone surrogate.

use alloc::string::String;
use core::str::Chars;

const HIGH_SURROGATES: core::ops::Range<u32> = 0xD800..0xDC00;
const LOW_SURROGATES: core::ops::Range<u32> = 0xDC00..0xE000;

/// Interprets the escapes in `raw`, producing the decoded string.
pub(crate) fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('b') => out.push('\u{0008}'),
            Some('f') => out.push('\u{000C}'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('u') => push_unicode_escape(&mut out, &mut chars),
            // `"`, `\` and `/` escape to themselves.
            Some(other) => out.push(other),
            None => {}
        }
    }

    out
}

fn push_unicode_escape(out: &mut String, chars: &mut Chars<'_>) {
    let code = hex4(chars);

    if LOW_SURROGATES.contains(&code) {
        out.push(char::REPLACEMENT_CHARACTER);
        return;
    }

    if HIGH_SURROGATES.contains(&code) {
        // Pair with an immediately following `\uXXXX` low surrogate, if any.
        let mut lookahead = chars.clone();
        if lookahead.next() == Some('\\') && lookahead.next() == Some('u') {
            let low = hex4(&mut lookahead);
            if LOW_SURROGATES.contains(&low) {
                *chars = lookahead;
                let combined = 0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00);
                out.push(char::from_u32(combined).unwrap_or(char::REPLACEMENT_CHARACTER));
                return;
            }
        }
        out.push(char::REPLACEMENT_CHARACTER);
        return;
    }

    out.push(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER));
}

/// Reads the four hex digits of a `\uXXXX` escape. The FSM guarantees they
/// are present and valid.
fn hex4(chars: &mut Chars<'_>) -> u32 {
    let mut code = 0;
    for _ in 0..4 {
        let digit = chars.next().and_then(|c| c.to_digit(16)).unwrap_or(0);
        code = code * 16 + digit;
    }
    code
}
