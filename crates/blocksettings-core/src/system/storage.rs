use flatrecord::Word;

/// Storage platform trait: a key-value store of numbers and number arrays.
///
/// This is the only persistence primitive the settings layer relies on.
/// Encoding richer values into numbers is the codec's job, not the
/// platform's, so the contract stays free of any value format.
///
/// Numbers and arrays share one namespace. Writing either kind under a name
/// replaces whatever was stored there before.
///
/// Implementations: [`MemoryStore`](crate::MemoryStore),
/// [`JsonFileStore`](crate::JsonFileStore).
pub trait Storage {
    /// Write a number under `name`.
    fn write_number(&mut self, name: &str, value: Word);

    /// Read a number by name. Returns the store's default when `name` is
    /// missing or holds an array.
    fn read_number(&self, name: &str) -> Word;

    /// Write a number array under `name`.
    fn write_number_array(&mut self, name: &str, values: &[Word]);

    /// Read a number array by name. Returns `None` if not found, which is
    /// distinct from a stored empty array.
    fn read_number_array(&self, name: &str) -> Option<Vec<Word>>;
}

impl<S: Storage + ?Sized> Storage for &mut S {
    fn write_number(&mut self, name: &str, value: Word) {
        (**self).write_number(name, value);
    }

    fn read_number(&self, name: &str) -> Word {
        (**self).read_number(name)
    }

    fn write_number_array(&mut self, name: &str, values: &[Word]) {
        (**self).write_number_array(name, values);
    }

    fn read_number_array(&self, name: &str) -> Option<Vec<Word>> {
        (**self).read_number_array(name)
    }
}
