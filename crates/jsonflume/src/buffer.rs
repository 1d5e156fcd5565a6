//! FIFO of fed input chunks.
//!
//! Chunks queue up as owned strings and are consumed one character at a
//! time; a literal that spans a chunk boundary simply keeps reading when the
//! next chunk arrives. The buffer also tracks how many characters of the
//! current chunk have been consumed, which is the chunk-local offset parse
//! errors report.

use alloc::{
    collections::VecDeque,
    string::{String, ToString},
};

#[derive(Debug, Default)]
pub(crate) struct ChunkBuffer {
    chunks: VecDeque<String>,
    /// Byte offset of the next unread character in the front chunk.
    head: usize,
    /// Characters consumed from the front chunk so far.
    consumed: usize,
}

impl ChunkBuffer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, text: &str) {
        if !text.is_empty() {
            self.chunks.push_back(text.to_string());
        }
    }

    pub(crate) fn push_owned(&mut self, text: String) {
        if !text.is_empty() {
            self.chunks.push_back(text);
        }
    }

    /// Next character across chunk boundaries, or `None` if starved.
    pub(crate) fn next_char(&mut self) -> Option<char> {
        loop {
            let front_len = self.chunks.front().map(String::len)?;
            if self.head < front_len {
                let ch = self.chunks[0][self.head..].chars().next()?;
                self.head += ch.len_utf8();
                self.consumed += 1;
                return Some(ch);
            }
            self.chunks.pop_front();
            self.head = 0;
            self.consumed = 0;
        }
    }

    /// 1-based position, within its chunk, of the most recently read
    /// character. Zero before anything has been read.
    pub(crate) fn local_pos(&self) -> usize {
        self.consumed
    }
}
