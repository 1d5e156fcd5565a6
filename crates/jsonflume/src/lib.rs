//! An incremental, event-driven JSON parser.
//!
//! `jsonflume` tokenizes JSON text fed in arbitrarily-sized chunks, emitting
//! structural events the moment they are complete, and optionally folds the
//! events into a [`Value`] tree. The grammar is JSON extended with the
//! literals `NaN`, `Infinity` and `-Infinity`; integers are arbitrary
//! precision, and floats beyond `f64` range overflow to the infinity of
//! their sign.
//!
//! The crate is `no_std` (with `alloc`).
//!
//! # Streaming events
//!
//! ```
//! use jsonflume::{Event, Tokenizer, Value};
//!
//! let mut tokenizer = Tokenizer::new();
//! tokenizer.feed(r#"{"a":"#);
//! tokenizer.feed(r#" 2}"#);
//!
//! let events: Vec<Event> = tokenizer.finish().map(Result::unwrap).collect();
//! assert_eq!(
//!     events,
//!     vec![
//!         Event::ObjectStart,
//!         Event::ObjectKeyEnd("a".into()),
//!         Event::ValueEnd(Value::Integer(2.into())),
//!         Event::ObjectEnd,
//!     ]
//! );
//! ```
//!
//! # Decoding to a tree
//!
//! ```
//! use jsonflume::{Value, decode_chunks};
//!
//! let value = decode_chunks(["[1, ", "2, true]"]).unwrap();
//! assert_eq!(value.to_string(), "[1,2,true]");
//! ```

#![no_std]

extern crate alloc;
#[cfg(test)]
extern crate std;

mod buffer;
mod classify;
mod decoder;
mod error;
mod event;
mod state;
mod table;
mod tokenizer;
mod unescape;
mod value;

#[cfg(test)]
mod tests;

pub use num_bigint::BigInt;

pub use crate::{
    decoder::{Decoder, decode_chunks, decode_str},
    error::{Found, ParseError},
    event::Event,
    tokenizer::{ClosedTokenizer, Tokenizer},
    value::{Array, Map, Value},
};
