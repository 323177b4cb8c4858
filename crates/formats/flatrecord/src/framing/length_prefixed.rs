//! `[count, len_1, data_1.., len_2, data_2..]` framing.

use crate::cursor::{Cursor, Writer};
use crate::error::{Error, Result};
use crate::Word;

/// Encode `items`, each flattened by `encode_item`.
pub fn encode<T, F>(items: &[T], mut encode_item: F) -> Vec<Word>
where
    F: FnMut(&T) -> Vec<Word>,
{
    let mut w = Writer::new();
    w.write_size(items.len());
    for item in items {
        let data = encode_item(item);
        w.write_size(data.len());
        w.write_words(&data);
    }
    w.into_record()
}

/// Split a length-prefixed record into its item payloads.
///
/// The record must hold exactly the declared items: truncation, negative
/// lengths, and trailing words are all [`Error::InvalidFormat`].
pub fn decode(record: &[Word]) -> Result<Vec<&[Word]>> {
    let mut c = Cursor::new(record, "length-prefixed");
    let count = c.read_size("item count")? as usize;
    // Every item needs at least its length word.
    if count > c.remaining() {
        return Err(Error::invalid(
            "length-prefixed",
            format!("{count} items declared but only {} words follow", c.remaining()),
        ));
    }
    let mut items = Vec::with_capacity(count);
    for _ in 0..count {
        let len = c.read_size("item length")? as usize;
        items.push(c.read_words(len)?);
    }
    if !c.is_at_end() {
        return Err(Error::invalid(
            "length-prefixed",
            format!("{} trailing words after last item", c.remaining()),
        ));
    }
    Ok(items)
}
