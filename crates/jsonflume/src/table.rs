//! The static transition table.
//!
//! A dense `(state, character class)` matrix built at compile time. Each
//! cell is either a plain state change, a state change that also appends the
//! character to the token buffer, an action the tokenizer interprets (mode
//! stack manipulation and event emission), or a rejection.

use crate::{classify::CharClass, state::State};

/// What a `(state, class)` cell tells the tokenizer to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Transition {
    /// The character is not in the grammar here.
    Reject,
    /// Move to the state.
    Goto(State),
    /// Append the character to the token buffer, then move to the state.
    Accum(State),
    /// Run an action; the action decides the next state.
    Act(Action),
}

/// Actions are the transitions that touch the mode stack or emit events;
/// they live in the tokenizer, the table only names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    OpenObject,
    OpenArray,
    /// `}` after a value.
    CloseObject,
    /// `}` directly after `{`.
    CloseEmptyObject,
    CloseArray,
    Comma,
    Colon,
    /// The closing quote of a string or key.
    CloseString,
    /// Whitespace ended a numeric literal.
    FlushNumber,
    /// End of input while a numeric literal was open.
    EndOfData,
    True,
    False,
    Null,
    Nan,
    PosInf,
    NegInf,
}

type Cells = [[Transition; CharClass::COUNT]; State::COUNT];

pub(crate) struct TransitionTable(Cells);

pub(crate) static TABLE: TransitionTable = TransitionTable::new();

const fn set(cells: &mut Cells, state: State, class: CharClass, transition: Transition) {
    cells[state as usize][class as usize] = transition;
}

/// The entries shared by every position that expects a value.
const fn fill_value_start(cells: &mut Cells, state: State) {
    set(cells, state, CharClass::Space, Transition::Goto(state));
    set(cells, state, CharClass::Whitespace, Transition::Goto(state));
    set(
        cells,
        state,
        CharClass::LeftBrace,
        Transition::Act(Action::OpenObject),
    );
    set(
        cells,
        state,
        CharClass::LeftBracket,
        Transition::Act(Action::OpenArray),
    );
    set(cells, state, CharClass::Quote, Transition::Goto(State::StrLiteral));
    set(
        cells,
        state,
        CharClass::Zero,
        Transition::Accum(State::IntZeroLiteral),
    );
    set(cells, state, CharClass::Digit, Transition::Accum(State::IntLiteral));
    set(cells, state, CharClass::Minus, Transition::Accum(State::NegLiteral));
    set(cells, state, CharClass::LowT, Transition::Goto(State::TrueT));
    set(cells, state, CharClass::LowF, Transition::Goto(State::FalseF));
    set(cells, state, CharClass::LowN, Transition::Goto(State::NullN));
    set(cells, state, CharClass::UpperN, Transition::Goto(State::NanN));
    set(cells, state, CharClass::UpperI, Transition::Goto(State::PosInfI));
}

/// The delimiters that may legally terminate a numeric literal. Numbers have
/// no closing character, so the delimiter's cell is an action that flushes
/// the buffered literal first.
const fn fill_number_end(cells: &mut Cells, state: State) {
    set(cells, state, CharClass::Space, Transition::Act(Action::FlushNumber));
    set(
        cells,
        state,
        CharClass::Whitespace,
        Transition::Act(Action::FlushNumber),
    );
    set(cells, state, CharClass::Comma, Transition::Act(Action::Comma));
    set(
        cells,
        state,
        CharClass::RightBrace,
        Transition::Act(Action::CloseObject),
    );
    set(
        cells,
        state,
        CharClass::RightBracket,
        Transition::Act(Action::CloseArray),
    );
    set(cells, state, CharClass::EndOfData, Transition::Act(Action::EndOfData));
}

/// One hex digit of a `\uXXXX` escape, advancing to `next`.
const fn fill_hex(cells: &mut Cells, state: State, next: State) {
    let tr = Transition::Accum(next);
    set(cells, state, CharClass::Zero, tr);
    set(cells, state, CharClass::Digit, tr);
    set(cells, state, CharClass::LowA, tr);
    set(cells, state, CharClass::LowB, tr);
    set(cells, state, CharClass::LowC, tr);
    set(cells, state, CharClass::LowD, tr);
    set(cells, state, CharClass::LowE, tr);
    set(cells, state, CharClass::LowF, tr);
    set(cells, state, CharClass::UpperAbcdf, tr);
    set(cells, state, CharClass::UpperE, tr);
}

impl TransitionTable {
    pub(crate) fn get(&self, state: State, class: CharClass) -> Transition {
        self.0[state as usize][class as usize]
    }

    const fn new() -> Self {
        let mut cells: Cells = [[Transition::Reject; CharClass::COUNT]; State::COUNT];
        let c = &mut cells;

        // Value positions. Inside `[` the closing bracket is additionally
        // legal; after a comma it is not, which rejects trailing commas.
        fill_value_start(c, State::ValueStart);
        fill_value_start(c, State::ArrayBody);
        set(
            c,
            State::ArrayBody,
            CharClass::RightBracket,
            Transition::Act(Action::CloseArray),
        );

        // Directly inside `{`: a key or the closing brace.
        set(
            c,
            State::ObjectBody,
            CharClass::Space,
            Transition::Goto(State::ObjectBody),
        );
        set(
            c,
            State::ObjectBody,
            CharClass::Whitespace,
            Transition::Goto(State::ObjectBody),
        );
        set(
            c,
            State::ObjectBody,
            CharClass::RightBrace,
            Transition::Act(Action::CloseEmptyObject),
        );
        set(
            c,
            State::ObjectBody,
            CharClass::Quote,
            Transition::Goto(State::StrLiteral),
        );

        // Between a key and its value.
        set(
            c,
            State::KeyColon,
            CharClass::Space,
            Transition::Goto(State::KeyColon),
        );
        set(
            c,
            State::KeyColon,
            CharClass::Whitespace,
            Transition::Goto(State::KeyColon),
        );
        set(c, State::KeyColon, CharClass::Colon, Transition::Act(Action::Colon));

        // After a completed value.
        set(c, State::Ok, CharClass::Space, Transition::Goto(State::Ok));
        set(c, State::Ok, CharClass::Whitespace, Transition::Goto(State::Ok));
        set(
            c,
            State::Ok,
            CharClass::RightBrace,
            Transition::Act(Action::CloseObject),
        );
        set(
            c,
            State::Ok,
            CharClass::RightBracket,
            Transition::Act(Action::CloseArray),
        );
        set(c, State::Ok, CharClass::Comma, Transition::Act(Action::Comma));

        // Numbers. A leading zero takes no further integer digits and no
        // exponent; only a fraction may follow it.
        set(
            c,
            State::NegLiteral,
            CharClass::Zero,
            Transition::Accum(State::IntZeroLiteral),
        );
        set(
            c,
            State::NegLiteral,
            CharClass::Digit,
            Transition::Accum(State::IntLiteral),
        );
        set(
            c,
            State::NegLiteral,
            CharClass::UpperI,
            Transition::Goto(State::NegInfI),
        );

        set(
            c,
            State::IntLiteral,
            CharClass::Zero,
            Transition::Accum(State::IntLiteral),
        );
        set(
            c,
            State::IntLiteral,
            CharClass::Digit,
            Transition::Accum(State::IntLiteral),
        );
        set(
            c,
            State::IntLiteral,
            CharClass::Point,
            Transition::Accum(State::FloatSeparator),
        );
        set(
            c,
            State::IntLiteral,
            CharClass::LowE,
            Transition::Accum(State::ExpSeparator),
        );
        set(
            c,
            State::IntLiteral,
            CharClass::UpperE,
            Transition::Accum(State::ExpSeparator),
        );
        fill_number_end(c, State::IntLiteral);

        set(
            c,
            State::IntZeroLiteral,
            CharClass::Point,
            Transition::Accum(State::FloatSeparator),
        );
        fill_number_end(c, State::IntZeroLiteral);

        set(
            c,
            State::FloatSeparator,
            CharClass::Zero,
            Transition::Accum(State::FloatLiteral),
        );
        set(
            c,
            State::FloatSeparator,
            CharClass::Digit,
            Transition::Accum(State::FloatLiteral),
        );

        set(
            c,
            State::FloatLiteral,
            CharClass::Zero,
            Transition::Accum(State::FloatLiteral),
        );
        set(
            c,
            State::FloatLiteral,
            CharClass::Digit,
            Transition::Accum(State::FloatLiteral),
        );
        set(
            c,
            State::FloatLiteral,
            CharClass::LowE,
            Transition::Accum(State::ExpSeparator),
        );
        set(
            c,
            State::FloatLiteral,
            CharClass::UpperE,
            Transition::Accum(State::ExpSeparator),
        );
        fill_number_end(c, State::FloatLiteral);

        set(
            c,
            State::ExpSeparator,
            CharClass::Zero,
            Transition::Accum(State::ExpLiteral),
        );
        set(
            c,
            State::ExpSeparator,
            CharClass::Digit,
            Transition::Accum(State::ExpLiteral),
        );
        set(
            c,
            State::ExpSeparator,
            CharClass::Minus,
            Transition::Accum(State::ExpSign),
        );
        set(
            c,
            State::ExpSeparator,
            CharClass::Plus,
            Transition::Accum(State::ExpSign),
        );

        set(
            c,
            State::ExpSign,
            CharClass::Zero,
            Transition::Accum(State::ExpLiteral),
        );
        set(
            c,
            State::ExpSign,
            CharClass::Digit,
            Transition::Accum(State::ExpLiteral),
        );

        set(
            c,
            State::ExpLiteral,
            CharClass::Zero,
            Transition::Accum(State::ExpLiteral),
        );
        set(
            c,
            State::ExpLiteral,
            CharClass::Digit,
            Transition::Accum(State::ExpLiteral),
        );
        fill_number_end(c, State::ExpLiteral);

        // Strings accept every class except raw control characters and raw
        // whitespace other than the space character.
        cells[State::StrLiteral as usize] = [Transition::Accum(State::StrLiteral); CharClass::COUNT];
        let c = &mut cells;
        set(c, State::StrLiteral, CharClass::Control, Transition::Reject);
        set(c, State::StrLiteral, CharClass::Whitespace, Transition::Reject);
        set(c, State::StrLiteral, CharClass::EndOfData, Transition::Reject);
        set(
            c,
            State::StrLiteral,
            CharClass::Quote,
            Transition::Act(Action::CloseString),
        );
        set(
            c,
            State::StrLiteral,
            CharClass::Backslash,
            Transition::Accum(State::StrLiteralEsc),
        );

        set(
            c,
            State::StrLiteralEsc,
            CharClass::Quote,
            Transition::Accum(State::StrLiteral),
        );
        set(
            c,
            State::StrLiteralEsc,
            CharClass::Slash,
            Transition::Accum(State::StrLiteral),
        );
        set(
            c,
            State::StrLiteralEsc,
            CharClass::Backslash,
            Transition::Accum(State::StrLiteral),
        );
        set(
            c,
            State::StrLiteralEsc,
            CharClass::LowB,
            Transition::Accum(State::StrLiteral),
        );
        set(
            c,
            State::StrLiteralEsc,
            CharClass::LowF,
            Transition::Accum(State::StrLiteral),
        );
        set(
            c,
            State::StrLiteralEsc,
            CharClass::LowN,
            Transition::Accum(State::StrLiteral),
        );
        set(
            c,
            State::StrLiteralEsc,
            CharClass::LowR,
            Transition::Accum(State::StrLiteral),
        );
        set(
            c,
            State::StrLiteralEsc,
            CharClass::LowT,
            Transition::Accum(State::StrLiteral),
        );
        set(
            c,
            State::StrLiteralEsc,
            CharClass::LowU,
            Transition::Accum(State::HexEsc),
        );

        fill_hex(c, State::HexEsc, State::HexDigit1);
        fill_hex(c, State::HexDigit1, State::HexDigit2);
        fill_hex(c, State::HexDigit2, State::HexDigit3);
        fill_hex(c, State::HexDigit3, State::StrLiteral);

        // Keywords, one character per state. The final character's action
        // emits the value.
        set(c, State::TrueT, CharClass::LowR, Transition::Goto(State::TrueR));
        set(c, State::TrueR, CharClass::LowU, Transition::Goto(State::TrueU));
        set(c, State::TrueU, CharClass::LowE, Transition::Act(Action::True));

        set(c, State::FalseF, CharClass::LowA, Transition::Goto(State::FalseA));
        set(c, State::FalseA, CharClass::LowL, Transition::Goto(State::FalseL));
        set(c, State::FalseL, CharClass::LowS, Transition::Goto(State::FalseS));
        set(c, State::FalseS, CharClass::LowE, Transition::Act(Action::False));

        set(c, State::NullN, CharClass::LowU, Transition::Goto(State::NullU));
        set(c, State::NullU, CharClass::LowL, Transition::Goto(State::NullL));
        set(c, State::NullL, CharClass::LowL, Transition::Act(Action::Null));

        set(c, State::NanN, CharClass::LowA, Transition::Goto(State::NanA));
        set(c, State::NanA, CharClass::UpperN, Transition::Act(Action::Nan));

        set(c, State::PosInfI, CharClass::LowN, Transition::Goto(State::PosInfN));
        set(c, State::PosInfN, CharClass::LowF, Transition::Goto(State::PosInfF));
        set(c, State::PosInfF, CharClass::LowI, Transition::Goto(State::PosInfI2));
        set(c, State::PosInfI2, CharClass::LowN, Transition::Goto(State::PosInfN2));
        set(c, State::PosInfN2, CharClass::LowI, Transition::Goto(State::PosInfI3));
        set(c, State::PosInfI3, CharClass::LowT, Transition::Goto(State::PosInfT));
        set(c, State::PosInfT, CharClass::LowY, Transition::Act(Action::PosInf));

        set(c, State::NegInfI, CharClass::LowN, Transition::Goto(State::NegInfN));
        set(c, State::NegInfN, CharClass::LowF, Transition::Goto(State::NegInfF));
        set(c, State::NegInfF, CharClass::LowI, Transition::Goto(State::NegInfI2));
        set(c, State::NegInfI2, CharClass::LowN, Transition::Goto(State::NegInfN2));
        set(c, State::NegInfN2, CharClass::LowI, Transition::Goto(State::NegInfI3));
        set(c, State::NegInfI3, CharClass::LowT, Transition::Goto(State::NegInfT));
        set(c, State::NegInfT, CharClass::LowY, Transition::Act(Action::NegInf));

        Self(cells)
    }
}
