//! Tokenizer FSM states.

/// One state of the tokenizer FSM.
///
/// Multi-character tokens get a chain of states, one per character consumed
/// so far, which is what lets a chunk boundary fall anywhere — the state
/// alone records how far into a literal the input got. [`name`](State::name)
/// is the symbolic form embedded in parse errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub(crate) enum State {
    /// A value just completed; expecting a delimiter, a closer, or the end
    /// of input.
    Ok,
    /// Expecting the first character of a value.
    ValueStart,
    /// Directly inside `[`: a value or the closing bracket.
    ArrayBody,
    /// Directly inside `{`: a key or the closing brace.
    ObjectBody,
    /// An object key completed; expecting `:`.
    KeyColon,

    /// Consumed `-`; a numeric literal or `Infinity` must follow.
    NegLiteral,
    /// In the integer digits of a number.
    IntLiteral,
    /// The integer part is exactly `0`; no further digits may follow.
    IntZeroLiteral,
    /// Consumed `.`; a fraction digit must follow.
    FloatSeparator,
    /// In the fraction digits.
    FloatLiteral,
    /// Consumed `e`/`E`; a sign or exponent digit must follow.
    ExpSeparator,
    /// Consumed the exponent sign; an exponent digit must follow.
    ExpSign,
    /// In the exponent digits.
    ExpLiteral,

    /// Inside a string literal.
    StrLiteral,
    /// Consumed `\` inside a string.
    StrLiteralEsc,
    /// Consumed `\u`; four hex digits must follow.
    HexEsc,
    HexDigit1,
    HexDigit2,
    HexDigit3,

    // Keyword chains: one state per consumed character.
    TrueT,
    TrueR,
    TrueU,
    FalseF,
    FalseA,
    FalseL,
    FalseS,
    NullN,
    NullU,
    NullL,
    NanN,
    NanA,
    PosInfI,
    PosInfN,
    PosInfF,
    PosInfI2,
    PosInfN2,
    PosInfI3,
    PosInfT,
    NegInfI,
    NegInfN,
    NegInfF,
    NegInfI2,
    NegInfN2,
    NegInfI3,
    NegInfT,
}

impl State {
    pub(crate) const COUNT: usize = State::NegInfT as usize + 1;

    /// Symbolic name, for error messages.
    pub(crate) fn name(self) -> &'static str {
        match self {
            State::Ok => "Ok",
            State::ValueStart => "ValueStart",
            State::ArrayBody => "ArrayBody",
            State::ObjectBody => "ObjectBody",
            State::KeyColon => "KeyColon",
            State::NegLiteral => "NegLiteral",
            State::IntLiteral => "IntLiteral",
            State::IntZeroLiteral => "IntZeroLiteral",
            State::FloatSeparator => "FloatSeparator",
            State::FloatLiteral => "FloatLiteral",
            State::ExpSeparator => "ExpSeparator",
            State::ExpSign => "ExpSign",
            State::ExpLiteral => "ExpLiteral",
            State::StrLiteral => "StrLiteral",
            State::StrLiteralEsc => "StrLiteralEsc",
            State::HexEsc => "HexEsc",
            State::HexDigit1 => "HexDigit1",
            State::HexDigit2 => "HexDigit2",
            State::HexDigit3 => "HexDigit3",
            State::TrueT => "TrueT",
            State::TrueR => "TrueR",
            State::TrueU => "TrueU",
            State::FalseF => "FalseF",
            State::FalseA => "FalseA",
            State::FalseL => "FalseL",
            State::FalseS => "FalseS",
            State::NullN => "NullN",
            State::NullU => "NullU",
            State::NullL => "NullL",
            State::NanN => "NanN",
            State::NanA => "NanA",
            State::PosInfI => "PosInfI",
            State::PosInfN => "PosInfN",
            State::PosInfF => "PosInfF",
            State::PosInfI2 => "PosInfI2",
            State::PosInfN2 => "PosInfN2",
            State::PosInfI3 => "PosInfI3",
            State::PosInfT => "PosInfT",
            State::NegInfI => "NegInfI",
            State::NegInfN => "NegInfN",
            State::NegInfF => "NegInfF",
            State::NegInfI2 => "NegInfI2",
            State::NegInfN2 => "NegInfN2",
            State::NegInfI3 => "NegInfI3",
            State::NegInfT => "NegInfT",
        }
    }
}
