use alloc::{string::ToString, vec, vec::Vec};

use rstest::rstest;

use crate::{Event, ParseError, Tokenizer};

fn first_error(text: &str) -> ParseError {
    let mut tokenizer = Tokenizer::new();
    tokenizer.feed(text);
    tokenizer
        .finish()
        .find_map(Result::err)
        .expect("input should be rejected")
}

#[rstest]
#[case::empty_input("", "ValueStart", 0)]
#[case::bare_minus("-", "NegLiteral", 1)]
#[case::unclosed_array("[1", "IntLiteral", 2)]
#[case::unclosed_array_after_value("[\"spam\"", "Ok", 7)]
#[case::unterminated_string("\"abc", "StrLiteral", 4)]
#[case::missing_exponent_digits("1e", "ExpSeparator", 2)]
#[case::truncated_keyword("tru", "TrueU", 3)]
fn rejects_at_end_of_data(#[case] text: &str, #[case] state: &str, #[case] offset: usize) {
    match first_error(text) {
        ParseError::Unexpected {
            found: crate::Found::EndOfData,
            state: got_state,
            offset: got_offset,
            ..
        } => {
            assert_eq!(got_state, state, "state for {text:?}");
            assert_eq!(got_offset, offset, "offset for {text:?}");
        }
        other => panic!("expected end-of-data rejection for {text:?}, got {other:?}"),
    }
}

#[rstest]
#[case::extra_closing_bracket("[]]", "Ok", 3)]
#[case::colon_after_number("[42:", "IntLiteral", 4)]
#[case::comma_in_empty_object("{,", "ObjectBody", 2)]
#[case::comma_at_top_level("42,", "IntLiteral", 3)]
#[case::trailing_comma_in_array("[1,]", "ValueStart", 4)]
#[case::trailing_comma_in_object("{\"a\":2,}", "ValueStart", 8)]
#[case::missing_colon("{\"a\" 2}", "KeyColon", 6)]
#[case::corrupt_keyword("truX", "TrueU", 4)]
#[case::second_document("true false", "Ok", 6)]
#[case::negative_nan("-NaN", "NegLiteral", 2)]
#[case::extended_literal_as_key("{NaN: 1}", "ObjectBody", 2)]
#[case::leading_zero("01", "IntZeroLiteral", 2)]
#[case::leading_plus("+1", "ValueStart", 1)]
#[case::fraction_without_digits("1.e3", "FloatSeparator", 3)]
#[case::invalid_escape("\"\\x\"", "StrLiteralEsc", 3)]
#[case::invalid_hex_digit("\"\\u12G\"", "HexDigit2", 6)]
#[case::control_character_in_string("\"a\u{0001}\"", "StrLiteral", 3)]
#[case::raw_newline_in_string("\"\n\"", "StrLiteral", 2)]
fn rejects_character(#[case] text: &str, #[case] state: &str, #[case] offset: usize) {
    match first_error(text) {
        ParseError::Unexpected {
            found: crate::Found::Char(_),
            state: got_state,
            offset: got_offset,
            local_offset,
        } => {
            assert_eq!(got_state, state, "state for {text:?}");
            assert_eq!(got_offset, offset, "offset for {text:?}");
            // Single-chunk input: chunk-local and stream offsets agree.
            assert_eq!(local_offset, offset, "local offset for {text:?}");
        }
        other => panic!("expected character rejection for {text:?}, got {other:?}"),
    }
}

#[test]
fn error_messages_name_the_character_and_state() {
    let message = first_error("[42:").to_string();
    assert!(message.contains("':'"), "{message}");
    assert!(message.contains("IntLiteral"), "{message}");
    assert!(message.contains("offset 4"), "{message}");
}

#[test]
fn leading_bom_is_rejected() {
    assert_eq!(first_error("\u{FEFF}{}"), ParseError::LeadingBom);
}

#[test]
fn bom_inside_a_string_is_data() {
    let mut tokenizer = Tokenizer::new();
    tokenizer.feed("\"\u{FEFF}\"");
    let events: Vec<Event> = tokenizer.finish().map(Result::unwrap).collect();
    assert_eq!(events, vec![Event::ValueEnd(crate::Value::from("\u{FEFF}"))]);
}

#[test]
fn an_errored_tokenizer_stays_dead() {
    let mut tokenizer = Tokenizer::new();
    tokenizer.feed("[,");
    assert_eq!(tokenizer.next(), Some(Ok(Event::ArrayStart)));
    assert!(matches!(tokenizer.next(), Some(Err(_))));
    assert_eq!(tokenizer.next(), None);

    // Later chunks are buffered but never parsed.
    tokenizer.feed("1]");
    assert_eq!(tokenizer.next(), None);
}

#[test]
fn invalid_utf8_bytes_are_fatal() {
    let mut tokenizer = Tokenizer::new();
    assert_eq!(tokenizer.feed_bytes(&[0xFF, 0xFE]), Err(ParseError::InvalidUtf8));
}

#[test]
fn input_ending_mid_utf8_sequence_is_fatal() {
    let mut tokenizer = Tokenizer::new();
    // The first two bytes of a three-byte sequence.
    tokenizer.feed_bytes(&[b'"', 0xE4, 0xB8]).unwrap();
    let err = tokenizer
        .finish()
        .find_map(Result::err)
        .expect("truncated sequence should be rejected");
    assert_eq!(err, ParseError::InvalidUtf8);
}

#[test]
fn overlong_and_stray_continuation_bytes_are_fatal() {
    let mut tokenizer = Tokenizer::new();
    assert_eq!(tokenizer.feed_bytes(&[b'"', 0xC0, 0xAF]), Err(ParseError::InvalidUtf8));

    let mut tokenizer = Tokenizer::new();
    assert_eq!(tokenizer.feed_bytes(&[b'"', 0x80, b'"']), Err(ParseError::InvalidUtf8));
}
