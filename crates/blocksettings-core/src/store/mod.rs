mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use flatrecord::Word;
use serde::{Deserialize, Serialize};

/// A value as the store holds it.
///
/// Serialized externally tagged: `{"number": 3}` or `{"array": [1, 2]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoredValue {
    Number(Word),
    Array(Vec<Word>),
}
