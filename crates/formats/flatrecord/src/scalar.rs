use crate::Word;

/// Encode a boolean as `1` (true) or `0` (false).
pub fn encode_boolean(value: bool) -> Word {
    if value {
        1
    } else {
        0
    }
}

/// Decode a boolean: only `1` is true.
///
/// Total and lossy. Any other word, including the store's default for a
/// missing setting, reads as `false`.
pub fn decode_boolean(word: Word) -> bool {
    word == 1
}

/// Encode each boolean independently. No framing is involved.
pub fn encode_booleans(values: &[bool]) -> Vec<Word> {
    values.iter().copied().map(encode_boolean).collect()
}

pub fn decode_booleans(record: &[Word]) -> Vec<bool> {
    record.iter().copied().map(decode_boolean).collect()
}
