//! Key-value backed `IdentityRepository`.

use crate::dto::{AUTH_KEY, AuthRecordDto};
use crate::storage::KeyValueStore;
use aide_core::Result;
use aide_core::identity::{Identity, IdentityRepository};
use async_trait::async_trait;
use std::sync::Arc;

/// Stores the active identity as an auth record under `ai_assistant_auth`.
pub struct KvIdentityRepository {
    store: Arc<dyn KeyValueStore>,
}

impl KvIdentityRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl IdentityRepository for KvIdentityRepository {
    async fn load_active(&self) -> Result<Option<Identity>> {
        let Some(value) = self.store.get(AUTH_KEY)? else {
            return Ok(None);
        };
        let record: AuthRecordDto = serde_json::from_value(value)?;
        Ok(record.into_domain())
    }

    async fn save_active(&self, identity: &Identity) -> Result<()> {
        let value = serde_json::to_value(AuthRecordDto::authenticated(identity))?;
        self.store.set(AUTH_KEY, &value)?;
        tracing::debug!("[Identity] Persisted {}", identity.id);
        Ok(())
    }

    async fn clear_active(&self) -> Result<()> {
        self.store.remove(AUTH_KEY)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{JsonFileStore, MemoryStore};
    use chrono::Utc;
    use serde_json::json;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_round_trip_through_files() {
        let temp_dir = TempDir::new().unwrap();
        let store = Arc::new(JsonFileStore::open(temp_dir.path()).unwrap());
        let repo = KvIdentityRepository::new(store.clone());

        let mut identity = Identity::named("ada", Some("pw"), Utc::now());
        identity.upload_count = 3;
        repo.save_active(&identity).await.unwrap();

        let reopened = KvIdentityRepository::new(Arc::new(
            JsonFileStore::open(temp_dir.path()).unwrap(),
        ));
        assert_eq!(reopened.load_active().await.unwrap(), Some(identity));
    }

    #[tokio::test]
    async fn test_clear_active() {
        let repo = KvIdentityRepository::new(Arc::new(MemoryStore::new()));
        repo.save_active(&Identity::named("ada", Some("pw"), Utc::now()))
            .await
            .unwrap();
        repo.clear_active().await.unwrap();
        assert!(repo.load_active().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_malformed_record_is_an_error() {
        let store = Arc::new(MemoryStore::new());
        store.set(AUTH_KEY, &json!({"user": 42, "isAuthenticated": true})).unwrap();

        let err = KvIdentityRepository::new(store).load_active().await.unwrap_err();
        assert!(err.is_persistence());
    }
}
