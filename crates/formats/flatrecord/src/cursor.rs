use crate::error::{Error, Result};
use crate::{Word, SENTINEL};

/// Sequential reader over a flat record.
///
/// Every read is bounds-checked; running off the end yields
/// [`Error::InvalidFormat`] tagged with the caller's context.
pub struct Cursor<'a> {
    data: &'a [Word],
    pos: usize,
    context: &'static str,
}

impl<'a> Cursor<'a> {
    pub fn new(data: &'a [Word], context: &'static str) -> Self {
        Self {
            data,
            pos: 0,
            context,
        }
    }

    /// Current read position.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of words left to read.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    pub fn read_word(&mut self) -> Result<Word> {
        let word = self.data.get(self.pos).copied().ok_or_else(|| {
            Error::invalid(
                self.context,
                format!("unexpected end of record at offset {}", self.pos),
            )
        })?;
        self.pos += 1;
        Ok(word)
    }

    /// Read a non-negative size or length word.
    pub fn read_size(&mut self, what: &str) -> Result<u32> {
        let offset = self.pos;
        let word = self.read_word()?;
        u32::try_from(word).map_err(|_| {
            Error::invalid(
                self.context,
                format!("negative {what} {word} at offset {offset}"),
            )
        })
    }

    /// Borrow the next `len` words.
    pub fn read_words(&mut self, len: usize) -> Result<&'a [Word]> {
        if len > self.remaining() {
            return Err(Error::invalid(
                self.context,
                format!(
                    "expected {len} words at offset {}, found {}",
                    self.pos,
                    self.remaining()
                ),
            ));
        }
        let words = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(words)
    }
}

/// Append-only builder for a flat record.
#[derive(Debug, Default)]
pub struct Writer {
    buf: Vec<Word>,
}

impl Writer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    pub fn write_word(&mut self, word: Word) {
        self.buf.push(word);
    }

    pub fn write_words(&mut self, words: &[Word]) {
        self.buf.extend_from_slice(words);
    }

    /// Write a size or length word.
    ///
    /// # Panics
    ///
    /// If `size` exceeds `Word::MAX`; such a length has no record encoding.
    pub fn write_size(&mut self, size: usize) {
        let word = Word::try_from(size).expect("size does not fit in a record word");
        self.buf.push(word);
    }

    pub fn write_sentinel(&mut self) {
        self.buf.push(SENTINEL);
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn into_record(self) -> Vec<Word> {
        self.buf
    }
}
