//! Key-value backed `ChatHistoryRepository`.

use crate::dto::chats_key;
use crate::storage::KeyValueStore;
use aide_core::Result;
use aide_core::history::{ChatHistoryEntry, ChatHistoryRepository};
use async_trait::async_trait;
use std::sync::Arc;

/// Stores each identity's history as one array under
/// `ai_assistant_chats_<identity id>`.
pub struct KvChatHistoryRepository {
    store: Arc<dyn KeyValueStore>,
}

impl KvChatHistoryRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ChatHistoryRepository for KvChatHistoryRepository {
    async fn load(&self, identity_id: &str) -> Result<Vec<ChatHistoryEntry>> {
        match self.store.get(&chats_key(identity_id))? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(Vec::new()),
        }
    }

    async fn save(&self, identity_id: &str, entries: &[ChatHistoryEntry]) -> Result<()> {
        let value = serde_json::to_value(entries)?;
        self.store.set(&chats_key(identity_id), &value)?;
        tracing::debug!(
            "[ChatHistory] Saved {} entries for {}",
            entries.len(),
            identity_id
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{JsonFileStore, MemoryStore};
    use aide_core::session::{ConversationSession, Sender};
    use chrono::Utc;
    use serde_json::json;
    use tempfile::TempDir;

    fn entry_with(content: &str) -> ChatHistoryEntry {
        let mut session = ConversationSession::new();
        session.add_message(content, Sender::User);
        session.add_message("```js\nfunction f() {}\n```", Sender::Assistant);

        let mut entry = ChatHistoryEntry::new(Utc::now());
        entry.update_messages(session.messages().to_vec(), Utc::now());
        entry
    }

    #[tokio::test]
    async fn test_round_trip_preserves_everything() {
        let temp_dir = TempDir::new().unwrap();
        let repo = KvChatHistoryRepository::new(Arc::new(
            JsonFileStore::open(temp_dir.path()).unwrap(),
        ));
        let entries = vec![entry_with("second"), entry_with("first")];
        repo.save("user-1", &entries).await.unwrap();

        let reopened = KvChatHistoryRepository::new(Arc::new(
            JsonFileStore::open(temp_dir.path()).unwrap(),
        ));
        let loaded = reopened.load("user-1").await.unwrap();
        assert_eq!(loaded, entries);
        assert!(loaded[0].messages[1].has_code);
    }

    #[tokio::test]
    async fn test_histories_are_per_identity() {
        let repo = KvChatHistoryRepository::new(Arc::new(MemoryStore::new()));
        repo.save("a", &[entry_with("mine")]).await.unwrap();

        assert!(repo.load("b").await.unwrap().is_empty());
        assert_eq!(repo.load("a").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_records_without_has_code_still_load() {
        let store = Arc::new(MemoryStore::new());
        store
            .set(
                "ai_assistant_chats_legacy",
                &json!([{
                    "id": "c1",
                    "title": "hi",
                    "createdAt": "2024-03-01T10:00:00Z",
                    "updatedAt": "2024-03-01T10:05:00Z",
                    "messages": [{
                        "id": "m1",
                        "content": "hi",
                        "sender": "user",
                        "timestamp": "2024-03-01T10:00:00Z"
                    }]
                }]),
            )
            .unwrap();

        let loaded = KvChatHistoryRepository::new(store).load("legacy").await.unwrap();
        assert_eq!(loaded[0].title, "hi");
        assert!(!loaded[0].messages[0].has_code);
    }
}
