//! The incremental, table-driven JSON tokenizer.
//!
//! Input arrives as arbitrarily-sized chunks; events come out of the
//! [`Iterator`] impl as soon as they are complete. All literal-in-progress
//! state (the token buffer, the FSM state, the mode stack) lives on the
//! [`Tokenizer`] instance, so a chunk boundary in the middle of a literal,
//! an escape, or a keyword just suspends until the next chunk arrives.
//!
//! # Examples
//!
//! ```
//! use jsonflume::{Event, Tokenizer, Value};
//!
//! let mut tokenizer = Tokenizer::new();
//! tokenizer.feed("[tr");
//! tokenizer.feed("ue]");
//! let events: Vec<Event> = tokenizer.finish().map(Result::unwrap).collect();
//! assert_eq!(
//!     events,
//!     vec![
//!         Event::ArrayStart,
//!         Event::ValueEnd(Value::Boolean(true)),
//!         Event::ArrayEnd,
//!     ]
//! );
//! ```

use alloc::{collections::VecDeque, string::String, vec, vec::Vec};

use num_bigint::BigInt;

use crate::{
    buffer::ChunkBuffer,
    classify::{CharClass, classify},
    error::{Found, ParseError},
    event::Event,
    state::State,
    table::{Action, TABLE, Transition},
    unescape::unescape,
    value::Value,
};

/// Syntactic nesting context, tracked on a stack separate from the FSM
/// state. The stack's depth equals the structural nesting depth; the top
/// decides whether `,` `:` `}` `]` are legal and what they mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Top level: on the stack before parsing starts; popped when the root
    /// value closes.
    Done,
    /// Inside an object, a value pending or just completed.
    Object,
    /// Inside an array.
    Array,
    /// Inside an object, expecting a key (or the closing brace).
    Key,
}

/// The incremental tokenizer.
///
/// Feed it chunks with [`feed`](Tokenizer::feed) or
/// [`feed_bytes`](Tokenizer::feed_bytes) and pull events through the
/// `Iterator` impl; `next` returns `None` when every buffered character has
/// been consumed and more input is needed. Feeding and pulling may be
/// interleaved freely. Call [`finish`](Tokenizer::finish) after the final
/// chunk and drain the rest.
///
/// A tokenizer that has returned an error is spent: it yields no further
/// events and must be discarded.
#[derive(Debug)]
pub struct Tokenizer {
    source: ChunkBuffer,
    end_of_input: bool,
    end_of_data_done: bool,
    errored: bool,

    state: State,
    modes: Vec<Mode>,
    token: String,
    events: VecDeque<Event>,

    /// Global 1-based position of the most recently consumed character.
    pos: usize,

    /// Bytes of a multi-byte UTF-8 sequence split across byte chunks.
    pending: [u8; 4],
    pending_len: u8,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Tokenizer {
    type Item = Result<Event, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_event()
    }
}

/// A [`Tokenizer`] whose input has ended.
///
/// Returned by [`Tokenizer::finish`]; iterating it drains the remaining
/// events, applies the end-of-data checks, and then ends.
#[derive(Debug)]
pub struct ClosedTokenizer {
    tokenizer: Tokenizer,
}

impl Iterator for ClosedTokenizer {
    type Item = Result<Event, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.tokenizer.next_event()
    }
}

impl Tokenizer {
    /// Creates a tokenizer expecting a single top-level JSON value.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: ChunkBuffer::new(),
            end_of_input: false,
            end_of_data_done: false,
            errored: false,

            state: State::ValueStart,
            modes: vec![Mode::Done],
            token: String::new(),
            events: VecDeque::new(),

            pos: 0,

            pending: [0; 4],
            pending_len: 0,
        }
    }

    /// Buffers the next chunk of JSON text.
    ///
    /// Chunk boundaries carry no meaning: the same input split differently
    /// produces identical events. Parsing is lazy; drive the `Iterator` to
    /// consume what the chunk made available.
    pub fn feed(&mut self, chunk: &str) {
        self.source.push(chunk);
    }

    /// Buffers the next chunk of UTF-8 encoded bytes.
    ///
    /// A multi-byte sequence may be split across chunks; the partial tail is
    /// held until the bytes that complete it arrive. Invalid UTF-8 is fatal.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidUtf8`] if the chunk contains an invalid
    /// sequence.
    pub fn feed_bytes(&mut self, chunk: &[u8]) -> Result<(), ParseError> {
        let mut text = String::with_capacity(chunk.len() + 4);
        let mut rest = chunk;

        if self.pending_len > 0 {
            let need = utf8_sequence_len(self.pending[0]).unwrap_or(1);
            while (self.pending_len as usize) < need && !rest.is_empty() {
                self.pending[self.pending_len as usize] = rest[0];
                self.pending_len += 1;
                rest = &rest[1..];
            }
            if (self.pending_len as usize) < need {
                // Chunk exhausted while still mid-sequence.
                return Ok(());
            }
            let (decoded, size) = bstr::decode_utf8(&self.pending[..need]);
            match decoded {
                Some(ch) if size == need => text.push(ch),
                _ => {
                    self.errored = true;
                    return Err(ParseError::InvalidUtf8);
                }
            }
            self.pending_len = 0;
        }

        // Hold back a trailing incomplete sequence for the next chunk.
        let mut end = rest.len();
        for i in (rest.len().saturating_sub(3)..rest.len()).rev() {
            let byte = rest[i];
            if byte < 0x80 {
                break;
            }
            if let Some(need) = utf8_sequence_len(byte) {
                if need > rest.len() - i {
                    end = i;
                }
                break;
            }
            // Continuation byte; keep scanning backwards for the lead.
        }

        match core::str::from_utf8(&rest[..end]) {
            Ok(s) => text.push_str(s),
            Err(_) => {
                self.errored = true;
                return Err(ParseError::InvalidUtf8);
            }
        }
        for (i, &byte) in rest[end..].iter().enumerate() {
            self.pending[i] = byte;
        }
        self.pending_len = (rest.len() - end) as u8;

        self.source.push_owned(text);
        Ok(())
    }

    /// Marks the end of input and returns the closed tokenizer.
    ///
    /// Draining the closed tokenizer emits any deferred `ValueEnd` for a
    /// numeric literal that was still open (numbers have no closing
    /// character), and rejects input that ends inside an unterminated
    /// structure or literal.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonflume::{Event, Tokenizer, Value};
    ///
    /// let mut tokenizer = Tokenizer::new();
    /// tokenizer.feed("1.34e+3");
    /// let events: Vec<Event> = tokenizer.finish().map(Result::unwrap).collect();
    /// assert_eq!(events, vec![Event::ValueEnd(Value::Float(1340.0))]);
    /// ```
    #[must_use]
    pub fn finish(mut self) -> ClosedTokenizer {
        self.end_of_input = true;
        ClosedTokenizer { tokenizer: self }
    }

    /// End-of-input without the type-state wrapper; the decoder drives the
    /// same instance across the boundary.
    pub(crate) fn close_in_place(&mut self) {
        self.end_of_input = true;
    }

    /// Drives the FSM until one event is ready, input is exhausted, or the
    /// grammar rejects a character.
    fn next_event(&mut self) -> Option<Result<Event, ParseError>> {
        loop {
            if let Some(event) = self.events.pop_front() {
                return Some(Ok(event));
            }
            if self.errored {
                return None;
            }

            let Some(ch) = self.source.next_char() else {
                if !self.end_of_input || self.end_of_data_done {
                    return None;
                }
                self.end_of_data_done = true;
                if let Err(err) = self.process_end_of_data() {
                    self.errored = true;
                    return Some(Err(err));
                }
                continue;
            };

            self.pos += 1;
            if self.pos == 1 && ch == '\u{FEFF}' {
                self.errored = true;
                return Some(Err(ParseError::LeadingBom));
            }
            if let Err(err) = self.process_char(ch) {
                self.errored = true;
                return Some(Err(err));
            }
        }
    }

    fn process_char(&mut self, ch: char) -> Result<(), ParseError> {
        let class = classify(ch);
        if class == CharClass::Control {
            return Err(self.unexpected(Found::Char(ch)));
        }
        match TABLE.get(self.state, class) {
            Transition::Reject => Err(self.unexpected(Found::Char(ch))),
            Transition::Goto(next) => {
                self.state = next;
                Ok(())
            }
            Transition::Accum(next) => {
                self.token.push(ch);
                self.state = next;
                Ok(())
            }
            Transition::Act(action) => self.apply(action, Found::Char(ch)),
        }
    }

    /// Feeds the synthetic end-of-data marker through the table once the
    /// input stream is closed and the buffer is drained.
    fn process_end_of_data(&mut self) -> Result<(), ParseError> {
        if self.pending_len > 0 {
            // Input ended in the middle of a multi-byte sequence.
            return Err(ParseError::InvalidUtf8);
        }
        if self.state == State::Ok {
            // Between values: the root must have closed every structure.
            return self.pop_expect(Mode::Done, Found::EndOfData);
        }
        match TABLE.get(self.state, CharClass::EndOfData) {
            Transition::Act(action) => self.apply(action, Found::EndOfData),
            _ => Err(self.unexpected(Found::EndOfData)),
        }
    }

    fn apply(&mut self, action: Action, found: Found) -> Result<(), ParseError> {
        match action {
            Action::OpenObject => {
                self.modes.push(Mode::Key);
                self.state = State::ObjectBody;
                self.events.push_back(Event::ObjectStart);
                Ok(())
            }
            Action::OpenArray => {
                self.modes.push(Mode::Array);
                self.state = State::ArrayBody;
                self.events.push_back(Event::ArrayStart);
                Ok(())
            }
            Action::CloseEmptyObject => {
                self.pop_expect(Mode::Key, found)?;
                self.state = State::Ok;
                self.events.push_back(Event::ObjectEnd);
                Ok(())
            }
            Action::CloseObject => {
                self.pop_expect(Mode::Object, found)?;
                self.flush_number();
                self.state = State::Ok;
                self.events.push_back(Event::ObjectEnd);
                Ok(())
            }
            Action::CloseArray => {
                self.pop_expect(Mode::Array, found)?;
                self.flush_number();
                self.state = State::Ok;
                self.events.push_back(Event::ArrayEnd);
                Ok(())
            }
            Action::Comma => match self.modes.last() {
                Some(Mode::Object) => {
                    self.flush_number();
                    self.modes.pop();
                    self.modes.push(Mode::Key);
                    self.state = State::ValueStart;
                    Ok(())
                }
                Some(Mode::Array) => {
                    self.flush_number();
                    self.state = State::ValueStart;
                    Ok(())
                }
                _ => Err(self.unexpected(found)),
            },
            Action::Colon => {
                self.pop_expect(Mode::Key, found)?;
                self.modes.push(Mode::Object);
                self.state = State::ValueStart;
                Ok(())
            }
            Action::CloseString => {
                let decoded = unescape(&self.token);
                self.token.clear();
                match self.modes.last() {
                    Some(Mode::Key) => {
                        self.state = State::KeyColon;
                        self.events.push_back(Event::ObjectKeyEnd(decoded));
                        Ok(())
                    }
                    Some(Mode::Object | Mode::Array | Mode::Done) => {
                        self.state = State::Ok;
                        self.events.push_back(Event::ValueEnd(Value::String(decoded)));
                        Ok(())
                    }
                    None => Err(self.unexpected(found)),
                }
            }
            Action::FlushNumber => {
                self.flush_number();
                self.state = State::Ok;
                Ok(())
            }
            Action::EndOfData => {
                self.pop_expect(Mode::Done, found)?;
                self.flush_number();
                Ok(())
            }
            Action::True => self.emit_scalar(Value::Boolean(true)),
            Action::False => self.emit_scalar(Value::Boolean(false)),
            Action::Null => self.emit_scalar(Value::Null),
            Action::Nan => self.emit_scalar(Value::Float(f64::NAN)),
            Action::PosInf => self.emit_scalar(Value::Float(f64::INFINITY)),
            Action::NegInf => {
                // The leading `-` was buffered before the keyword began.
                self.token.clear();
                self.emit_scalar(Value::Float(f64::NEG_INFINITY))
            }
        }
    }

    /// Emits a deferred `ValueEnd` if the current state is mid-numeric.
    /// Numbers are only known to be complete when a delimiter (or end of
    /// data) arrives, so the delimiter's action calls this first.
    fn flush_number(&mut self) {
        match self.state {
            State::IntLiteral | State::IntZeroLiteral => {
                let text = core::mem::take(&mut self.token);
                // The grammar only lets digit sequences reach these states.
                let n = text.parse::<BigInt>().unwrap_or_default();
                self.events.push_back(Event::ValueEnd(Value::Integer(n)));
            }
            State::FloatLiteral | State::ExpLiteral => {
                let text = core::mem::take(&mut self.token);
                // Out-of-range magnitudes parse to the matching infinity.
                let n = text.parse::<f64>().unwrap_or(f64::NAN);
                self.events.push_back(Event::ValueEnd(Value::Float(n)));
            }
            _ => {}
        }
    }

    fn emit_scalar(&mut self, value: Value) -> Result<(), ParseError> {
        self.state = State::Ok;
        self.events.push_back(Event::ValueEnd(value));
        Ok(())
    }

    fn pop_expect(&mut self, mode: Mode, found: Found) -> Result<(), ParseError> {
        if self.modes.last() == Some(&mode) {
            self.modes.pop();
            Ok(())
        } else {
            Err(self.unexpected(found))
        }
    }

    fn unexpected(&self, found: Found) -> ParseError {
        ParseError::Unexpected {
            found,
            state: self.state.name(),
            local_offset: self.source.local_pos(),
            offset: self.pos,
        }
    }
}

/// Expected length of a UTF-8 sequence from its lead byte; `None` for bytes
/// that cannot start a sequence.
fn utf8_sequence_len(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}
