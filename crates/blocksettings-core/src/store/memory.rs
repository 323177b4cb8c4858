use std::collections::BTreeMap;

use flatrecord::Word;

use crate::store::StoredValue;
use crate::system::storage::Storage;

/// In-memory [`Storage`], ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    values: BTreeMap<String, StoredValue>,
    default_number: Word,
}

impl MemoryStore {
    /// An empty store whose missing numbers read as 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty store whose missing numbers read as `default_number`.
    pub fn with_default_number(default_number: Word) -> Self {
        Self {
            values: BTreeMap::new(),
            default_number,
        }
    }

    pub(crate) fn from_values(values: BTreeMap<String, StoredValue>, default_number: Word) -> Self {
        Self {
            values,
            default_number,
        }
    }

    pub(crate) fn values(&self) -> &BTreeMap<String, StoredValue> {
        &self.values
    }

    /// The raw stored value under `name`.
    pub fn get(&self, name: &str) -> Option<&StoredValue> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Remove `name`. Returns whether anything was stored under it.
    pub fn remove(&mut self, name: &str) -> bool {
        self.values.remove(name).is_some()
    }

    /// All stored names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl Storage for MemoryStore {
    fn write_number(&mut self, name: &str, value: Word) {
        self.values
            .insert(name.to_string(), StoredValue::Number(value));
    }

    fn read_number(&self, name: &str) -> Word {
        match self.values.get(name) {
            Some(StoredValue::Number(n)) => *n,
            _ => self.default_number,
        }
    }

    fn write_number_array(&mut self, name: &str, values: &[Word]) {
        self.values
            .insert(name.to_string(), StoredValue::Array(values.to_vec()));
    }

    fn read_number_array(&self, name: &str) -> Option<Vec<Word>> {
        match self.values.get(name) {
            Some(StoredValue::Array(values)) => Some(values.clone()),
            _ => None,
        }
    }
}
