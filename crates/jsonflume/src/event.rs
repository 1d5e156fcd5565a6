//! Structural events emitted by the tokenizer.

use alloc::string::String;

use crate::value::Value;

/// One structural or value notification.
///
/// Events arrive in document order and form a depth-first walk of the
/// input's structure: a container's start precedes its children, a key
/// precedes its value, and a container's end follows all of its children.
///
/// # Examples
///
/// ```
/// use jsonflume::{Event, Tokenizer, Value};
///
/// let mut tokenizer = Tokenizer::new();
/// tokenizer.feed(r#"{"a":2}"#);
/// let events: Vec<Event> = tokenizer.finish().map(Result::unwrap).collect();
/// assert_eq!(
///     events,
///     vec![
///         Event::ObjectStart,
///         Event::ObjectKeyEnd("a".into()),
///         Event::ValueEnd(Value::Integer(2.into())),
///         Event::ObjectEnd,
///     ]
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A `{` opened an object.
    ObjectStart,
    /// The matching `}` closed it.
    ObjectEnd,
    /// A `[` opened an array.
    ArrayStart,
    /// The matching `]` closed it.
    ArrayEnd,
    /// An object key finished; carries the decoded (unescaped) key text.
    ObjectKeyEnd(String),
    /// A scalar finished; the payload is always a scalar [`Value`]
    /// (string, integer, float, boolean, or null).
    ValueEnd(Value),
}
