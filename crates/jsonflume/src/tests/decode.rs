use alloc::{
    format,
    string::{String, ToString},
    vec,
    vec::Vec,
};

use crate::{Decoder, Found, Map, ParseError, Tokenizer, Value, decode_chunks, decode_str};

#[test]
fn scalar_documents() {
    assert_eq!(decode_str("null"), Ok(Value::Null));
    assert_eq!(decode_str("true"), Ok(Value::Boolean(true)));
    assert_eq!(decode_str("\"string\""), Ok(Value::from("string")));
    assert_eq!(decode_str("42"), Ok(Value::from(42i64)));
    assert_eq!(decode_str("1.00"), Ok(Value::Float(1.0)));
    assert_eq!(decode_str("1e2"), Ok(Value::Float(100.0)));
    assert_eq!(decode_str("1e-2"), Ok(Value::Float(0.01)));
    assert_eq!(decode_str("1.34e+3"), Ok(Value::Float(1340.0)));
}

#[test]
fn containers() {
    assert_eq!(decode_str("{}"), Ok(Value::Object(Map::new())));
    assert_eq!(decode_str("[  ]"), Ok(Value::Array(Vec::new())));
    assert_eq!(
        decode_str("[1, 2, true]"),
        Ok(Value::Array(vec![1i64.into(), 2i64.into(), true.into()]))
    );
}

#[test]
fn nested_structure() {
    let value = decode_str(r#"{"a": [1, {"b": null}], "c": "d"}"#).unwrap();
    assert_eq!(value.to_string(), r#"{"a":[1,{"b":null}],"c":"d"}"#);
}

#[test]
fn duplicate_keys_last_write_wins() {
    assert_eq!(
        decode_str(r#"{"a": 1, "a": 2}"#),
        Ok(Value::Object(Map::from([("a".to_string(), Value::from(2i64))])))
    );
}

#[test]
fn unicode_escapes_decode() {
    assert_eq!(decode_str(r#""世界""#), Ok(Value::from("世界")));
    assert_eq!(decode_str(r#""aé""#), Ok(Value::from("aé")));
    assert_eq!(decode_str(r#""😀""#), Ok(Value::from("😀")));
}

#[test]
fn extended_literals_decode() {
    assert!(decode_str("NaN").unwrap().as_float().unwrap().is_nan());
    assert_eq!(decode_str("Infinity"), Ok(Value::Float(f64::INFINITY)));
    assert_eq!(decode_str("-Infinity"), Ok(Value::Float(f64::NEG_INFINITY)));
    assert_eq!(decode_str("23456789012E666"), Ok(Value::Float(f64::INFINITY)));
    assert_eq!(decode_str("-23456789012E666"), Ok(Value::Float(f64::NEG_INFINITY)));
}

#[test]
fn chunked_input_decodes_identically() {
    assert_eq!(
        decode_chunks(["[tr", "ue]"]),
        Ok(Value::Array(vec![Value::Boolean(true)]))
    );

    let text = r#"{"a": [1, {"b": null}], "c": "d"}"#;
    let char_chunks: Vec<String> = text.chars().map(String::from).collect();
    assert_eq!(decode_chunks(char_chunks), decode_str(text));
}

#[test]
fn large_streamed_array() {
    let text = format!(
        "[{}]",
        (0..1000).map(|n| n.to_string()).collect::<Vec<_>>().join(",")
    );
    let chunks: Vec<&str> = text
        .as_bytes()
        .chunks(7)
        .map(|chunk| core::str::from_utf8(chunk).unwrap())
        .collect();

    let expected = Value::Array((0i64..1000).map(Value::from).collect());
    assert_eq!(decode_chunks(chunks), Ok(expected));
}

#[test]
fn byte_chunks_may_split_multibyte_characters() {
    let bytes = r#"["世界"]"#.as_bytes();
    let mut tokenizer = Tokenizer::new();
    // Split inside the first three-byte character.
    tokenizer.feed_bytes(&bytes[..4]).unwrap();
    tokenizer.feed_bytes(&bytes[4..]).unwrap();

    assert_eq!(
        Decoder::from_tokenizer(tokenizer).decode(),
        Ok(Value::Array(vec![Value::from("世界")]))
    );
}

#[test]
fn from_tokenizer_decodes_prefed_input() {
    let mut tokenizer = Tokenizer::new();
    tokenizer.feed(r#"{"a": 2}"#);
    assert_eq!(
        Decoder::from_tokenizer(tokenizer).decode(),
        Ok(Value::Object(Map::from([("a".to_string(), Value::from(2i64))])))
    );
}

#[test]
fn unterminated_documents_error() {
    assert!(matches!(
        decode_str("[\"spam\""),
        Err(ParseError::Unexpected {
            found: Found::EndOfData,
            ..
        })
    ));
    assert!(decode_str("{\"a\":").is_err());
    assert!(decode_str("").is_err());
}

#[test]
fn trailing_data_errors() {
    assert!(decode_str("42,").is_err());
    assert!(decode_str("{} {}").is_err());
    assert!(decode_str("[1] 2").is_err());
}

#[test]
fn number_at_root_is_flushed_by_end_of_input() {
    // No delimiter ever follows a bare root number.
    assert_eq!(decode_chunks(["4", "2"]), Ok(Value::from(42i64)));
}

#[test]
fn serialized_trees_reparse_to_the_same_value() {
    let original = decode_str(r#"{"a": [1, 2.5, "x\ny"], "b": {"c": -0.125}}"#).unwrap();
    assert_eq!(decode_str(&original.to_string()), Ok(original));
}
