use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use flatrecord::Word;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{CoreError, Result};
use crate::store::{MemoryStore, StoredValue};
use crate::system::storage::Storage;

/// Current on-disk document version.
const FORMAT_VERSION: u32 = 1;

/// On-disk settings document.
#[derive(Debug, Serialize, Deserialize)]
struct Document {
    version: u32,
    #[serde(default)]
    settings: BTreeMap<String, StoredValue>,
}

/// [`Storage`] persisted as a JSON document.
///
/// Reads and writes go to memory; [`flush`](Self::flush) writes the whole
/// document back to disk.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    inner: MemoryStore,
    dirty: bool,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>, default_number: Word) -> Result<Self> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(text) => {
                let doc: Document =
                    serde_json::from_str(&text).map_err(CoreError::json(&path))?;
                if doc.version != FORMAT_VERSION {
                    return Err(CoreError::UnsupportedVersion {
                        path,
                        found: doc.version,
                    });
                }
                doc.settings
            }
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(CoreError::io(&path)(e)),
        };
        info!(path = %path.display(), settings = values.len(), "opened settings store");
        Ok(Self {
            path,
            inner: MemoryStore::from_values(values, default_number),
            dirty: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether there are writes not yet flushed to disk.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Write the document to disk, replacing the previous file atomically.
    ///
    /// Parent directories are created as needed. A clean store is not
    /// rewritten.
    pub fn flush(&mut self) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(CoreError::io(parent))?;
        }
        let doc = Document {
            version: FORMAT_VERSION,
            settings: self.inner.values().clone(),
        };
        let text = serde_json::to_string_pretty(&doc).map_err(CoreError::json(&self.path))?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, text).map_err(CoreError::io(&tmp))?;
        fs::rename(&tmp, &self.path).map_err(CoreError::io(&self.path))?;
        self.dirty = false;
        info!(path = %self.path.display(), settings = self.inner.len(), "flushed settings store");
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&StoredValue> {
        self.inner.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.inner.contains(name)
    }

    pub fn remove(&mut self, name: &str) -> bool {
        let removed = self.inner.remove(name);
        self.dirty |= removed;
        removed
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.inner.names()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn clear(&mut self) {
        self.dirty |= !self.inner.is_empty();
        self.inner.clear();
    }
}

impl Storage for JsonFileStore {
    fn write_number(&mut self, name: &str, value: Word) {
        debug!(name, value, "write number");
        self.inner.write_number(name, value);
        self.dirty = true;
    }

    fn read_number(&self, name: &str) -> Word {
        self.inner.read_number(name)
    }

    fn write_number_array(&mut self, name: &str, values: &[Word]) {
        debug!(name, len = values.len(), "write number array");
        self.inner.write_number_array(name, values);
        self.dirty = true;
    }

    fn read_number_array(&self, name: &str) -> Option<Vec<Word>> {
        self.inner.read_number_array(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("none.json"), 0).unwrap();
        assert!(store.is_empty());
        assert!(!store.is_dirty());
    }

    #[test]
    fn flush_then_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut store = JsonFileStore::open(&path, 0).unwrap();
        store.write_number("volume", 7);
        store.write_number_array("empty", &[]);
        store.write_number_array("img", &[1, 1, 3]);
        assert!(store.is_dirty());
        store.flush().unwrap();
        assert!(!store.is_dirty());

        let reopened = JsonFileStore::open(&path, 0).unwrap();
        assert_eq!(reopened.read_number("volume"), 7);
        assert_eq!(reopened.read_number_array("empty"), Some(vec![]));
        assert_eq!(reopened.read_number_array("img"), Some(vec![1, 1, 3]));
        assert_eq!(reopened.read_number_array("missing"), None);
    }

    #[test]
    fn document_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut store = JsonFileStore::open(&path, 0).unwrap();
        store.write_number("n", 2);
        store.write_number_array("a", &[0, -1]);
        store.flush().unwrap();

        let doc: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            doc,
            serde_json::json!({
                "version": 1,
                "settings": { "a": { "array": [0, -1] }, "n": { "number": 2 } }
            })
        );
    }

    #[test]
    fn rejects_unknown_version() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"version": 9, "settings": {}}"#).unwrap();
        assert!(matches!(
            JsonFileStore::open(&path, 0),
            Err(CoreError::UnsupportedVersion { found: 9, .. })
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(
            JsonFileStore::open(&path, 0),
            Err(CoreError::Json { .. })
        ));
    }

    #[test]
    fn clear_persists_an_empty_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("s.json");
        let mut store = JsonFileStore::open(&path, 0).unwrap();
        store.clear();
        assert!(!store.is_dirty());
        store.write_number_array("a", &[1]);
        store.flush().unwrap();
        store.clear();
        assert!(store.is_dirty());
        store.flush().unwrap();
        assert!(JsonFileStore::open(&path, 0).unwrap().is_empty());
    }

    #[test]
    fn remove_marks_dirty_only_when_present() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::open(dir.path().join("s.json"), 0).unwrap();
        assert!(!store.remove("x"));
        assert!(!store.is_dirty());
        store.write_number("x", 1);
        store.flush().unwrap();
        assert!(store.remove("x"));
        assert!(store.is_dirty());
    }
}
