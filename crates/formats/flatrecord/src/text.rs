use crate::error::{Error, Result};
use crate::framing::length_prefixed;
use crate::framing::sentinel::{self, EmptyRecord};
use crate::Word;

/// Encode strings as UTF-16 code units, separated by the sentinel.
///
/// Characters outside the Basic Multilingual Plane take two words (a
/// surrogate pair), matching records written by `charCodeAt`-based hosts.
///
/// `[]` and `[""]` both encode to an empty record; decoding always yields
/// `[]`. Use [`encode_strings_prefixed`] where the two must stay distinct.
pub fn encode_strings<S: AsRef<str>>(strings: &[S]) -> Vec<Word> {
    sentinel::join(strings, |w, s| {
        for unit in s.as_ref().encode_utf16() {
            w.write_word(Word::from(unit));
        }
    })
}

/// Decode a sentinel-framed text record.
///
/// Every sentinel closes the current string, empty or not. A non-empty record
/// always ends with one more string; an empty record has none.
pub fn decode_strings(record: &[Word]) -> Result<Vec<String>> {
    let segments = sentinel::segments(record, EmptyRecord::NoSegments);
    let offsets = sentinel::segment_offsets(&segments);
    segments
        .iter()
        .zip(offsets)
        .map(|(seg, offset)| decode_chars(seg, offset))
        .collect()
}

/// Length-prefixed alternative to [`encode_strings`].
pub fn encode_strings_prefixed<S: AsRef<str>>(strings: &[S]) -> Vec<Word> {
    length_prefixed::encode(strings, |s| s.as_ref().encode_utf16().map(Word::from).collect())
}

pub fn decode_strings_prefixed(record: &[Word]) -> Result<Vec<String>> {
    let items = length_prefixed::decode(record)?;
    // Item payloads are reported relative to their own start.
    items.iter().map(|item| decode_chars(item, 0)).collect()
}

/// Decode UTF-16 code units. Words outside `0..=0xFFFF` and unpaired
/// surrogates are [`Error::InvalidCharCode`], reported at their offset.
fn decode_chars(codes: &[Word], base_offset: usize) -> Result<String> {
    let mut units = Vec::with_capacity(codes.len());
    for (i, &code) in codes.iter().enumerate() {
        let unit = u16::try_from(code).map_err(|_| Error::InvalidCharCode {
            code,
            offset: base_offset + i,
        })?;
        units.push(unit);
    }

    let mut out = String::with_capacity(units.len());
    let mut offset = base_offset;
    for decoded in char::decode_utf16(units.iter().copied()) {
        match decoded {
            Ok(ch) => {
                out.push(ch);
                offset += ch.len_utf16();
            }
            Err(e) => {
                return Err(Error::InvalidCharCode {
                    code: Word::from(e.unpaired_surrogate()),
                    offset,
                })
            }
        }
    }
    Ok(out)
}
