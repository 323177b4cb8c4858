pub mod config;
pub mod error;
pub mod settings;
pub mod store;
pub mod system;

pub use config::StoreConfig;
pub use error::CoreError;
pub use settings::Settings;
pub use store::{JsonFileStore, MemoryStore, StoredValue};
pub use system::storage::Storage;

pub use flatrecord::{Image, Word};
