//! Storage layer: atomic JSON files behind a key-value interface.

mod atomic_json;
mod error;
mod key_value;

pub use atomic_json::AtomicJsonFile;
pub use error::StorageError;
pub use key_value::{JsonFileStore, KeyValueStore, MemoryStore};
