//! Tree assembly on top of the event stream.
//!
//! The [`Decoder`] pulls chunks from any iterator of string-like items,
//! drives a [`Tokenizer`] over them, and folds the resulting events into a
//! single [`Value`]. Nesting in the input maps directly onto recursion
//! depth here, so pathologically deep documents can exhaust the call stack;
//! the tokenizer alone has no such limit.

use crate::{
    error::ParseError,
    event::Event,
    tokenizer::Tokenizer,
    value::{Array, Map, Value},
};

/// Decodes a complete JSON document held in a single string.
///
/// # Examples
///
/// ```
/// use jsonflume::{Value, decode_str};
///
/// let value = decode_str("[1, 2, true]").unwrap();
/// assert_eq!(
///     value,
///     Value::Array(vec![1i64.into(), 2i64.into(), true.into()])
/// );
/// ```
///
/// # Errors
///
/// Returns the tokenizer's [`ParseError`] for any syntax violation.
pub fn decode_str(text: &str) -> Result<Value, ParseError> {
    Decoder::new(core::iter::once(text)).decode()
}

/// Decodes a complete JSON document split into chunks.
///
/// Chunk boundaries carry no meaning; any split of the same text decodes to
/// the same value.
///
/// # Errors
///
/// Returns the tokenizer's [`ParseError`] for any syntax violation.
pub fn decode_chunks<T>(chunks: T) -> Result<Value, ParseError>
where
    T: IntoIterator,
    T::Item: AsRef<str>,
{
    Decoder::new(chunks).decode()
}

/// What one recursive descent step produced.
enum Assembled {
    /// A complete value.
    Value(Value),
    /// The `]` of the array the caller is collecting.
    ArrayClose,
}

/// Builds a [`Value`] tree from a chunk source.
///
/// The chunk iterator is pulled lazily: a chunk is only consumed once the
/// tokenizer has starved on everything fed so far.
pub struct Decoder<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    chunks: I,
    tokenizer: Tokenizer,
    closed: bool,
}

impl Decoder<core::iter::Empty<&'static str>> {
    /// Wraps a tokenizer that has already been fed (or will not be fed
    /// further); [`decode`](Decoder::decode) closes it.
    #[must_use]
    pub fn from_tokenizer(tokenizer: Tokenizer) -> Self {
        Decoder {
            chunks: core::iter::empty(),
            tokenizer,
            closed: false,
        }
    }
}

impl<I> Decoder<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    /// Creates a decoder over a chunk source.
    pub fn new<T>(chunks: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Decoder {
            chunks: chunks.into_iter(),
            tokenizer: Tokenizer::new(),
            closed: false,
        }
    }

    /// Consumes the chunk source and returns the single document it holds.
    ///
    /// # Errors
    ///
    /// Any [`ParseError`] from the tokenizer; [`ParseError::EndOfEvents`] if
    /// the events run out mid-tree; [`ParseError::ExtraData`] if another
    /// event follows the completed root.
    pub fn decode(mut self) -> Result<Value, ParseError> {
        let first = self.next_event()?.ok_or(ParseError::EndOfEvents)?;
        let root = match self.parse_subtree(first)? {
            Assembled::Value(value) => value,
            Assembled::ArrayClose => return Err(ParseError::UnexpectedEvent("ArrayEnd")),
        };
        match self.next_event()? {
            None => Ok(root),
            Some(_) => Err(ParseError::ExtraData),
        }
    }

    /// The next event, feeding chunks (and finally closing the tokenizer)
    /// whenever it starves. `Ok(None)` means the stream is over.
    fn next_event(&mut self) -> Result<Option<Event>, ParseError> {
        loop {
            match self.tokenizer.next() {
                Some(Ok(event)) => return Ok(Some(event)),
                Some(Err(err)) => return Err(err),
                None => {
                    if let Some(chunk) = self.chunks.next() {
                        self.tokenizer.feed(chunk.as_ref());
                    } else if self.closed {
                        return Ok(None);
                    } else {
                        self.closed = true;
                        self.tokenizer.close_in_place();
                    }
                }
            }
        }
    }

    /// Assembles the subtree that `event` begins.
    fn parse_subtree(&mut self, event: Event) -> Result<Assembled, ParseError> {
        match event {
            Event::ValueEnd(value) => Ok(Assembled::Value(value)),
            Event::ArrayEnd => Ok(Assembled::ArrayClose),
            Event::ArrayStart => {
                let mut items = Array::new();
                loop {
                    let event = self.next_event()?.ok_or(ParseError::EndOfEvents)?;
                    match self.parse_subtree(event)? {
                        Assembled::Value(value) => items.push(value),
                        Assembled::ArrayClose => {
                            return Ok(Assembled::Value(Value::Array(items)));
                        }
                    }
                }
            }
            Event::ObjectStart => {
                let mut map = Map::new();
                loop {
                    match self.next_event()?.ok_or(ParseError::EndOfEvents)? {
                        Event::ObjectEnd => return Ok(Assembled::Value(Value::Object(map))),
                        Event::ObjectKeyEnd(key) => {
                            let event = self.next_event()?.ok_or(ParseError::EndOfEvents)?;
                            match self.parse_subtree(event)? {
                                Assembled::Value(value) => {
                                    // Duplicate keys: last write wins.
                                    map.insert(key, value);
                                }
                                Assembled::ArrayClose => {
                                    return Err(ParseError::UnexpectedEvent("ArrayEnd"));
                                }
                            }
                        }
                        Event::ArrayEnd => return Err(ParseError::UnexpectedEvent("ArrayEnd")),
                        Event::ArrayStart => {
                            return Err(ParseError::UnexpectedEvent("ArrayStart"));
                        }
                        Event::ObjectStart => {
                            return Err(ParseError::UnexpectedEvent("ObjectStart"));
                        }
                        Event::ValueEnd(_) => return Err(ParseError::UnexpectedEvent("ValueEnd")),
                    }
                }
            }
            Event::ObjectKeyEnd(_) => Err(ParseError::UnexpectedEvent("ObjectKeyEnd")),
            Event::ObjectEnd => Err(ParseError::UnexpectedEvent("ObjectEnd")),
        }
    }
}
