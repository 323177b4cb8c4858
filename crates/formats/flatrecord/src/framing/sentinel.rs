use crate::cursor::Writer;
use crate::{Word, SENTINEL};

/// How an empty record splits into segments.
///
/// Splitting cannot tell "no items" from "one empty item" on its own, so each
/// codec states which one an empty record means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyRecord {
    /// An empty record holds no items.
    NoSegments,
    /// An empty record holds one empty item.
    OneSegment,
}

/// Write each item with `write_item`, placing a sentinel between consecutive
/// items. The last item has no trailing sentinel.
pub fn join<I, F>(items: I, mut write_item: F) -> Vec<Word>
where
    I: IntoIterator,
    F: FnMut(&mut Writer, I::Item),
{
    let mut w = Writer::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            w.write_sentinel();
        }
        write_item(&mut w, item);
    }
    w.into_record()
}

/// Split a record at every sentinel.
///
/// A single left-to-right pass: a sentinel ends the current segment (which
/// may be empty) and the end of a non-empty record flushes the last one.
pub fn segments(record: &[Word], on_empty: EmptyRecord) -> Vec<&[Word]> {
    if record.is_empty() {
        return match on_empty {
            EmptyRecord::NoSegments => Vec::new(),
            EmptyRecord::OneSegment => vec![record],
        };
    }
    record.split(|&w| w == SENTINEL).collect()
}

/// Offset of each segment's first word within the record it was split from.
pub fn segment_offsets(segments: &[&[Word]]) -> Vec<usize> {
    let mut offsets = Vec::with_capacity(segments.len());
    let mut offset = 0;
    for seg in segments {
        offsets.push(offset);
        offset += seg.len() + 1;
    }
    offsets
}
