use alloc::{
    string::{String, ToString},
    vec::Vec,
};

use quickcheck::QuickCheck;

use crate::{Decoder, Tokenizer, Value, decode_chunks};

fn test_count() -> u64 {
    if is_ci::cached() { 10_000 } else { 1_000 }
}

/// Property: feeding a serialized document in arbitrary chunk sizes must
/// decode to the original value, regardless of where the boundaries fall.
#[test]
fn partition_roundtrip_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(value: Value, splits: Vec<usize>) -> bool {
        let src = value.to_string();
        let chars: Vec<char> = src.chars().collect();

        let mut chunks: Vec<String> = Vec::new();
        let mut idx = 0;
        let mut remaining = chars.len();
        for s in splits {
            if remaining == 0 {
                break;
            }
            let size = 1 + (s % remaining);
            chunks.push(chars[idx..idx + size].iter().collect());
            idx += size;
            remaining -= size;
        }
        if remaining > 0 {
            chunks.push(chars[idx..].iter().collect());
        }

        decode_chunks(chunks) == Ok(value)
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Value, Vec<usize>) -> bool);
}

/// Property: the same holds for byte chunks, including boundaries that fall
/// in the middle of a multi-byte UTF-8 sequence.
#[test]
fn byte_partition_roundtrip_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(value: Value, splits: Vec<usize>) -> bool {
        let src = value.to_string();
        let bytes = src.as_bytes();

        let mut tokenizer = Tokenizer::new();
        let mut idx = 0;
        let mut remaining = bytes.len();
        for s in splits {
            if remaining == 0 {
                break;
            }
            let size = 1 + (s % remaining);
            if tokenizer.feed_bytes(&bytes[idx..idx + size]).is_err() {
                return false;
            }
            idx += size;
            remaining -= size;
        }
        if remaining > 0 && tokenizer.feed_bytes(&bytes[idx..]).is_err() {
            return false;
        }

        Decoder::from_tokenizer(tokenizer).decode() == Ok(value)
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Value, Vec<usize>) -> bool);
}
