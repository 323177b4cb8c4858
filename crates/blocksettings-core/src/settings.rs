//! Typed read/write operations over a [`Storage`].
//!
//! Each write encodes its value into a flat record and stores it; each read
//! fetches the record and decodes it. Array-typed reads hand back `None`
//! untouched when nothing is stored under the name.

use flatrecord::{Image, Word};
use tracing::{debug, warn};

use crate::error::{CoreError, Result};
use crate::system::storage::Storage;

/// Typed settings backed by an injected [`Storage`].
#[derive(Debug, Default)]
pub struct Settings<S> {
    storage: S,
}

impl<S: Storage> Settings<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn into_inner(self) -> S {
        self.storage
    }

    // ── Numbers ─────────────────────────────────────────────────────

    pub fn write_number(&mut self, name: &str, value: Word) {
        debug!(name, value, "write number");
        self.storage.write_number(name, value);
    }

    pub fn read_number(&self, name: &str) -> Word {
        self.storage.read_number(name)
    }

    // ── Booleans ────────────────────────────────────────────────────

    pub fn write_boolean(&mut self, name: &str, value: bool) {
        debug!(name, value, "write boolean");
        self.storage
            .write_number(name, flatrecord::encode_boolean(value));
    }

    /// Missing settings read as the store's default number, which decodes
    /// to `false` unless that default is 1.
    pub fn read_boolean(&self, name: &str) -> bool {
        flatrecord::decode_boolean(self.storage.read_number(name))
    }

    pub fn write_booleans(&mut self, name: &str, values: &[bool]) {
        debug!(name, len = values.len(), "write boolean array");
        self.storage
            .write_number_array(name, &flatrecord::encode_booleans(values));
    }

    pub fn read_booleans(&self, name: &str) -> Option<Vec<bool>> {
        self.storage
            .read_number_array(name)
            .map(|record| flatrecord::decode_booleans(&record))
    }

    // ── Images ──────────────────────────────────────────────────────

    pub fn write_image(&mut self, name: &str, image: &Image) {
        let record = flatrecord::encode_image(image);
        debug!(name, len = record.len(), "write image");
        self.storage.write_number_array(name, &record);
    }

    /// Fails with an invalid-format error when the stored record is too short
    /// for its width and height or for the pixels they declare.
    pub fn read_image(&self, name: &str) -> Result<Option<Image>> {
        self.read_record(name, "image", flatrecord::decode_image)
    }

    pub fn write_images(&mut self, name: &str, images: &[Image]) {
        let record = flatrecord::encode_images(images);
        debug!(name, count = images.len(), len = record.len(), "write image array");
        self.storage.write_number_array(name, &record);
    }

    /// A stored empty record decodes to one 0x0 image, not to an empty list.
    pub fn read_images(&self, name: &str) -> Result<Option<Vec<Image>>> {
        self.read_record(name, "image array", flatrecord::decode_images)
    }

    // ── Strings ─────────────────────────────────────────────────────

    pub fn write_strings<T: AsRef<str>>(&mut self, name: &str, strings: &[T]) {
        let record = flatrecord::encode_strings(strings);
        debug!(name, count = strings.len(), len = record.len(), "write string array");
        self.storage.write_number_array(name, &record);
    }

    /// `[""]` is stored the same way as `[]` and reads back as `[]`.
    pub fn read_strings(&self, name: &str) -> Result<Option<Vec<String>>> {
        self.read_record(name, "string array", flatrecord::decode_strings)
    }

    fn read_record<T>(
        &self,
        name: &str,
        kind: &'static str,
        decode: impl FnOnce(&[Word]) -> flatrecord::Result<T>,
    ) -> Result<Option<T>> {
        let Some(record) = self.storage.read_number_array(name) else {
            debug!(name, kind, "setting absent");
            return Ok(None);
        };
        debug!(name, kind, len = record.len(), "read record");
        match decode(&record) {
            Ok(value) => Ok(Some(value)),
            Err(source) => {
                warn!(name, kind, error = %source, "failed to decode setting");
                Err(CoreError::Codec {
                    name: name.to_string(),
                    source,
                })
            }
        }
    }
}
