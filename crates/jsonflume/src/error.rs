//! The single fatal error kind.

use core::fmt;

use thiserror::Error;

/// What the tokenizer was looking at when it rejected the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Found {
    /// A concrete input character.
    Char(char),
    /// The synthetic end-of-data marker.
    EndOfData,
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Char(ch) => write!(f, "character '{ch}' (U+{:04X})", *ch as u32),
            Found::EndOfData => f.write_str("end of data"),
        }
    }
}

/// The one error kind covering all syntax and post-structural violations.
///
/// A `ParseError` is always fatal: the tokenizer/decoder pair that raised it
/// must be discarded, and a partially built tree is not guaranteed valid
/// even as a prefix. Syntax rejections carry the offending character (or the
/// end-of-data marker), the symbolic FSM state name, and both the chunk-local
/// and whole-stream character offsets (1-based), so callers can build their
/// own diagnostics without a hierarchy of error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A `(state, character class)` pair outside the grammar, a structural
    /// character whose required mode-stack top did not match, or input that
    /// ended while a structure or literal was still open.
    #[error(
        "unexpected {found} in state {state} (chunk offset {local_offset}, stream offset {offset})"
    )]
    Unexpected {
        /// The rejected character, or end of data.
        found: Found,
        /// Symbolic name of the FSM state at the time of rejection.
        state: &'static str,
        /// 1-based character position within the current chunk.
        local_offset: usize,
        /// 1-based character position within the whole stream.
        offset: usize,
    },

    /// JSON text must not begin with a UTF-8 byte order mark.
    #[error("unexpected UTF-8 byte order mark at start of input")]
    LeadingBom,

    /// A byte chunk contained an invalid UTF-8 sequence, or input ended in
    /// the middle of a multi-byte sequence.
    #[error("invalid UTF-8 in input")]
    InvalidUtf8,

    /// The event stream produced another event after the root value closed.
    #[error("extra data after close")]
    ExtraData,

    /// The event stream ended before the value under construction was
    /// complete.
    #[error("unexpected end of event stream")]
    EndOfEvents,

    /// The decoder received an event that cannot occur at this position in a
    /// well-formed stream.
    #[error("unexpected {0} event")]
    UnexpectedEvent(&'static str),
}
