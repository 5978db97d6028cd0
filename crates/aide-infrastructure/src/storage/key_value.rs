//! Durable key-value storage.
//!
//! Records are JSON documents addressed by a flat string key. Values are kept
//! as `serde_json::Value` so the repositories above own their record shapes.

use super::atomic_json::AtomicJsonFile;
use super::error::StorageError;
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Key-value persistence backing the identity and history repositories.
pub trait KeyValueStore: Send + Sync {
    /// Reads the record stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<JsonValue>, StorageError>;

    /// Replaces the record stored under `key`.
    fn set(&self, key: &str, value: &JsonValue) -> Result<(), StorageError>;

    /// Deletes the record stored under `key`. Missing keys are not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Every stored key, sorted.
    fn keys(&self) -> Result<Vec<String>, StorageError>;
}

const RECORD_EXTENSION: &str = "json";

/// One `<key>.json` file per record inside a directory.
///
/// ```text
/// data_dir/
/// ├── ai_assistant_auth.json
/// └── ai_assistant_chats_<identity-id>.json
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Opens (and creates, if needed) a store rooted at `root`.
    pub fn open(root: impl AsRef<Path>) -> Result<Self, StorageError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        tracing::debug!("[Storage] Opened JSON store at {}", root.display());
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn file(&self, key: &str) -> Result<AtomicJsonFile<JsonValue>, StorageError> {
        validate_key(key)?;
        Ok(AtomicJsonFile::new(
            self.root.join(format!("{key}.{RECORD_EXTENSION}")),
        ))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<JsonValue>, StorageError> {
        self.file(key)?.load()
    }

    fn set(&self, key: &str, value: &JsonValue) -> Result<(), StorageError> {
        self.file(key)?.save(value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.file(key)?.remove()
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(RECORD_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                if validate_key(stem).is_ok() {
                    keys.push(stem.to_string());
                }
            }
        }
        keys.sort();
        Ok(keys)
    }
}

/// Process-local store, used for guests' throwaway state and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<String, JsonValue>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<JsonValue>, StorageError> {
        let records = self.records.lock().unwrap_or_else(|e| e.into_inner());
        Ok(records.get(key).cloned())
    }

    fn set(&self, key: &str, value: &JsonValue) -> Result<(), StorageError> {
        validate_key(key)?;
        let mut records = self.records.lock().unwrap_or_else(|e| e.into_inner());
        records.insert(key.to_string(), value.clone());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut records = self.records.lock().unwrap_or_else(|e| e.into_inner());
        records.remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        let records = self.records.lock().unwrap_or_else(|e| e.into_inner());
        let mut keys: Vec<String> = records.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }
}

/// Keys become file names, so only `[A-Za-z0-9_.-]` is allowed and a key may
/// not start with a dot.
fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn exercise(store: &dyn KeyValueStore) {
        assert!(store.get("ai_assistant_auth").unwrap().is_none());

        store.set("ai_assistant_auth", &json!({"isAuthenticated": true})).unwrap();
        store.set("ai_assistant_chats_abc", &json!([])).unwrap();
        assert_eq!(
            store.get("ai_assistant_auth").unwrap(),
            Some(json!({"isAuthenticated": true}))
        );
        assert_eq!(
            store.keys().unwrap(),
            vec!["ai_assistant_auth".to_string(), "ai_assistant_chats_abc".to_string()]
        );

        store.remove("ai_assistant_auth").unwrap();
        store.remove("ai_assistant_auth").unwrap();
        assert!(store.get("ai_assistant_auth").unwrap().is_none());
    }

    #[test]
    fn test_memory_store() {
        exercise(&MemoryStore::new());
    }

    #[test]
    fn test_json_file_store() {
        let temp_dir = TempDir::new().unwrap();
        exercise(&JsonFileStore::open(temp_dir.path()).unwrap());
    }

    #[test]
    fn test_json_file_store_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        JsonFileStore::open(temp_dir.path())
            .unwrap()
            .set("greeting", &json!("hello"))
            .unwrap();

        let reopened = JsonFileStore::open(temp_dir.path()).unwrap();
        assert_eq!(reopened.get("greeting").unwrap(), Some(json!("hello")));
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::open(temp_dir.path()).unwrap();

        for key in ["", "../escape", "a/b", ".hidden"] {
            let err = store.set(key, &json!(1)).unwrap_err();
            assert!(matches!(err, StorageError::InvalidKey(_)), "{key}");
        }
    }

    #[test]
    fn test_keys_ignore_foreign_files() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::open(temp_dir.path()).unwrap();
        store.set("kept", &json!(1)).unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "x").unwrap();
        fs::write(temp_dir.path().join(".kept.json.tmp"), "x").unwrap();

        assert_eq!(store.keys().unwrap(), vec!["kept".to_string()]);
    }
}
