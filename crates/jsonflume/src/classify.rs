//! Input character classification.
//!
//! The transition table is indexed by `(state, class)` rather than by raw
//! character, so every character first collapses into one of these classes.
//! Letters that appear in keywords (`true`, `false`, `null`, `NaN`,
//! `Infinity`) and in hex escapes each get their own class; everything else
//! that can legally appear only inside strings is `Etc`.

/// One class per distinguishable input character.
///
/// `EndOfData` is synthetic: it is never produced by [`classify`], and is
/// fed through the table exactly once after the final chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub(crate) enum CharClass {
    /// Code points below U+0020 that are not whitespace. Rejected
    /// everywhere, including inside strings.
    Control,
    Space,
    /// Whitespace other than the space character (`\t`, `\n`, `\r`, and the
    /// rest of Unicode whitespace).
    Whitespace,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Colon,
    Comma,
    Quote,
    Backslash,
    Slash,
    Plus,
    Minus,
    Point,
    Zero,
    /// `1` through `9`.
    Digit,
    LowA,
    LowB,
    LowC,
    LowD,
    LowE,
    UpperE,
    LowF,
    LowI,
    UpperI,
    LowL,
    LowN,
    UpperN,
    LowR,
    LowS,
    LowT,
    LowU,
    LowY,
    /// `A` `B` `C` `D` `F`: hex digits with no keyword role.
    UpperAbcdf,
    /// Any other character. Legal only inside string literals.
    Etc,
    /// Synthetic end-of-input marker.
    EndOfData,
}

impl CharClass {
    pub(crate) const COUNT: usize = CharClass::EndOfData as usize + 1;
}

/// Maps a character to its class.
///
/// Whitespace is checked before the control range: `\t`, `\n` and `\r` are
/// below U+0020 but classify as `Whitespace`, which keeps them legal between
/// tokens while every other control character stays rejected.
pub(crate) fn classify(ch: char) -> CharClass {
    match ch {
        ' ' => CharClass::Space,
        '{' => CharClass::LeftBrace,
        '}' => CharClass::RightBrace,
        '[' => CharClass::LeftBracket,
        ']' => CharClass::RightBracket,
        ':' => CharClass::Colon,
        ',' => CharClass::Comma,
        '"' => CharClass::Quote,
        '\\' => CharClass::Backslash,
        '/' => CharClass::Slash,
        '+' => CharClass::Plus,
        '-' => CharClass::Minus,
        '.' => CharClass::Point,
        '0' => CharClass::Zero,
        '1'..='9' => CharClass::Digit,
        'a' => CharClass::LowA,
        'b' => CharClass::LowB,
        'c' => CharClass::LowC,
        'd' => CharClass::LowD,
        'e' => CharClass::LowE,
        'E' => CharClass::UpperE,
        'f' => CharClass::LowF,
        'i' => CharClass::LowI,
        'I' => CharClass::UpperI,
        'l' => CharClass::LowL,
        'n' => CharClass::LowN,
        'N' => CharClass::UpperN,
        'r' => CharClass::LowR,
        's' => CharClass::LowS,
        't' => CharClass::LowT,
        'u' => CharClass::LowU,
        'y' => CharClass::LowY,
        'A' | 'B' | 'C' | 'D' | 'F' => CharClass::UpperAbcdf,
        _ if ch.is_whitespace() => CharClass::Whitespace,
        _ if (ch as u32) < 0x20 => CharClass::Control,
        _ => CharClass::Etc,
    }
}
