//! Per-identity chat history.

use aide_core::Result;
use aide_core::clock::Clock;
use aide_core::history::{ChatHistoryEntry, ChatHistoryRepository};
use aide_core::identity::Identity;
use aide_core::session::Message;
use std::sync::Arc;

/// Whose history is loaded and whether it may be written.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Partition {
    identity_id: String,
    persistent: bool,
}

/// The history collection of the active identity, newest entry first.
///
/// Every mutation is applied in memory first and then written through the
/// repository. Guests (and a store with no identity attached) never write.
/// A failed write is returned to the caller but the in-memory collection is
/// kept as is.
pub struct ChatHistoryStore {
    entries: Vec<ChatHistoryEntry>,
    current_id: Option<String>,
    partition: Option<Partition>,
    repository: Arc<dyn ChatHistoryRepository>,
    clock: Arc<dyn Clock>,
}

impl ChatHistoryStore {
    pub fn new(repository: Arc<dyn ChatHistoryRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Vec::new(),
            current_id: None,
            partition: None,
            repository,
            clock,
        }
    }

    /// Switches to `identity`'s history.
    ///
    /// Guests start from an empty collection. A named identity's collection
    /// is loaded; an unreadable record is logged and replaced by an empty one.
    pub async fn attach(&mut self, identity: &Identity) {
        self.current_id = None;
        self.partition = Some(Partition {
            identity_id: identity.id.clone(),
            persistent: !identity.is_guest,
        });

        if identity.is_guest {
            self.entries.clear();
            return;
        }

        self.entries = match self.repository.load(&identity.id).await {
            Ok(entries) => {
                tracing::debug!(
                    "[ChatHistory] Loaded {} entries for {}",
                    entries.len(),
                    identity.id
                );
                entries
            }
            Err(e) => {
                tracing::warn!(
                    "[ChatHistory] Failed to load history for {}: {}",
                    identity.id,
                    e
                );
                Vec::new()
            }
        };
    }

    /// Forgets the collection without touching storage.
    pub fn detach(&mut self) {
        self.entries.clear();
        self.current_id = None;
        self.partition = None;
    }

    /// Creates an empty entry at the front and makes it current.
    ///
    /// # Returns
    ///
    /// - `Ok(id)`: The new entry's id
    /// - `Err(_)`: Persisting failed; the entry exists and is current anyway
    pub async fn create_session(&mut self) -> Result<String> {
        let entry = ChatHistoryEntry::new(self.clock.now());
        let id = entry.id.clone();
        self.entries.insert(0, entry);
        self.current_id = Some(id.clone());
        self.persist().await?;
        Ok(id)
    }

    /// Stores `messages` into the current entry.
    ///
    /// Does nothing when there is no current entry or `messages` is empty.
    pub async fn save_current(&mut self, messages: &[Message]) -> Result<()> {
        if messages.is_empty() {
            return Ok(());
        }
        let now = self.clock.now();
        let Some(entry) = self.current_entry_mut() else {
            return Ok(());
        };
        entry.update_messages(messages.to_vec(), now);
        self.persist().await
    }

    /// Looks up an entry and makes it current.
    ///
    /// A miss returns `None` and leaves the current pointer alone.
    pub fn load_session(&mut self, id: &str) -> Option<&ChatHistoryEntry> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        self.current_id = Some(id.to_string());
        self.entries.get(index)
    }

    /// Removes an entry. Clears the current pointer if it pointed there.
    ///
    /// # Returns
    ///
    /// - `Ok(true)`: The entry existed and was removed
    /// - `Ok(false)`: No entry with that id
    /// - `Err(_)`: Removed in memory, but persisting failed
    pub async fn delete_session(&mut self, id: &str) -> Result<bool> {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() == before {
            return Ok(false);
        }

        if self.current_id.as_deref() == Some(id) {
            self.current_id = None;
        }
        self.persist().await?;
        Ok(true)
    }

    pub fn entries(&self) -> &[ChatHistoryEntry] {
        &self.entries
    }

    pub fn current_id(&self) -> Option<&str> {
        self.current_id.as_deref()
    }

    pub fn current_entry(&self) -> Option<&ChatHistoryEntry> {
        let id = self.current_id.as_deref()?;
        self.entries.iter().find(|e| e.id == id)
    }

    /// Entries whose title contains `query`, ignoring case.
    pub fn search(&self, query: &str) -> Vec<&ChatHistoryEntry> {
        self.entries
            .iter()
            .filter(|e| e.title_matches(query))
            .collect()
    }

    fn current_entry_mut(&mut self) -> Option<&mut ChatHistoryEntry> {
        let id = self.current_id.as_deref()?;
        self.entries.iter_mut().find(|e| e.id == id)
    }

    async fn persist(&self) -> Result<()> {
        let Some(partition) = self.partition.as_ref().filter(|p| p.persistent) else {
            return Ok(());
        };
        self.repository
            .save(&partition.identity_id, &self.entries)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aide_core::AideError;
    use aide_core::clock::ManualClock;
    use aide_core::history::DEFAULT_TITLE;
    use aide_core::session::{ConversationSession, Sender};
    use async_trait::async_trait;
    use chrono::{Duration, Utc};
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockHistoryRepository {
        partitions: Mutex<HashMap<String, Vec<ChatHistoryEntry>>>,
        fail_writes: bool,
    }

    impl MockHistoryRepository {
        fn failing() -> Self {
            Self {
                fail_writes: true,
                ..Self::default()
            }
        }

        fn stored(&self, identity_id: &str) -> Option<Vec<ChatHistoryEntry>> {
            self.partitions.lock().unwrap().get(identity_id).cloned()
        }
    }

    #[async_trait]
    impl ChatHistoryRepository for MockHistoryRepository {
        async fn load(&self, identity_id: &str) -> Result<Vec<ChatHistoryEntry>> {
            Ok(self.stored(identity_id).unwrap_or_default())
        }

        async fn save(&self, identity_id: &str, entries: &[ChatHistoryEntry]) -> Result<()> {
            if self.fail_writes {
                return Err(AideError::persistence("disk full"));
            }
            self.partitions
                .lock()
                .unwrap()
                .insert(identity_id.to_string(), entries.to_vec());
            Ok(())
        }
    }

    struct Fixture {
        store: ChatHistoryStore,
        repo: Arc<MockHistoryRepository>,
        clock: Arc<ManualClock>,
        identity: Identity,
    }

    async fn fixture(repo: MockHistoryRepository, guest: bool) -> Fixture {
        let repo = Arc::new(repo);
        let clock = Arc::new(ManualClock::new(Utc::now()));
        let mut store = ChatHistoryStore::new(repo.clone(), clock.clone());
        let identity = if guest {
            Identity::guest(clock.now())
        } else {
            Identity::named("ada", Some("pw"), clock.now())
        };
        store.attach(&identity).await;
        Fixture {
            store,
            repo,
            clock,
            identity,
        }
    }

    fn messages(contents: &[&str]) -> Vec<Message> {
        let mut session = ConversationSession::new();
        for content in contents {
            session.add_message(*content, Sender::User);
        }
        session.messages().to_vec()
    }

    #[tokio::test]
    async fn test_create_prepends_and_persists() {
        let mut f = fixture(MockHistoryRepository::default(), false).await;
        let first = f.store.create_session().await.unwrap();
        let second = f.store.create_session().await.unwrap();

        let ids: Vec<&str> = f.store.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec![second.as_str(), first.as_str()]);
        assert_eq!(f.store.current_id(), Some(second.as_str()));
        assert_eq!(f.repo.stored(&f.identity.id).unwrap().len(), 2);
        assert_eq!(f.store.current_entry().unwrap().title, DEFAULT_TITLE);
    }

    #[tokio::test]
    async fn test_save_current_updates_title_and_timestamp() {
        let mut f = fixture(MockHistoryRepository::default(), false).await;
        f.store.create_session().await.unwrap();
        let created = f.clock.now();

        f.clock.advance(Duration::minutes(3));
        f.store
            .save_current(&messages(&["Plan a trip to Kyoto", "and Osaka"]))
            .await
            .unwrap();

        let entry = f.store.current_entry().unwrap();
        assert_eq!(entry.title, "Plan a trip to Kyoto");
        assert_eq!(entry.created_at, created);
        assert_eq!(entry.updated_at, f.clock.now());
        assert_eq!(f.repo.stored(&f.identity.id).unwrap()[0], *entry);
    }

    #[tokio::test]
    async fn test_save_current_with_no_messages_is_noop() {
        let mut f = fixture(MockHistoryRepository::default(), false).await;
        f.store.create_session().await.unwrap();
        f.store.save_current(&messages(&["first"])).await.unwrap();
        let before = f.store.current_entry().unwrap().clone();

        f.clock.advance(Duration::hours(1));
        f.store.save_current(&[]).await.unwrap();

        assert_eq!(f.store.current_entry().unwrap(), &before);
    }

    #[tokio::test]
    async fn test_save_without_current_is_noop() {
        let mut f = fixture(MockHistoryRepository::default(), false).await;
        f.store.save_current(&messages(&["orphan"])).await.unwrap();
        assert!(f.store.entries().is_empty());
        assert!(f.repo.stored(&f.identity.id).is_none());
    }

    #[tokio::test]
    async fn test_load_session() {
        let mut f = fixture(MockHistoryRepository::default(), false).await;
        let older = f.store.create_session().await.unwrap();
        f.store.create_session().await.unwrap();

        assert_eq!(f.store.load_session(&older).unwrap().id, older);
        assert_eq!(f.store.current_id(), Some(older.as_str()));

        assert!(f.store.load_session("missing").is_none());
        assert_eq!(f.store.current_id(), Some(older.as_str()));
    }

    #[tokio::test]
    async fn test_delete_current_clears_pointer() {
        let mut f = fixture(MockHistoryRepository::default(), false).await;
        let id = f.store.create_session().await.unwrap();

        assert!(f.store.delete_session(&id).await.unwrap());
        assert!(f.store.current_id().is_none());
        assert!(f.store.entries().is_empty());
        assert!(f.repo.stored(&f.identity.id).unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_other_keeps_pointer() {
        let mut f = fixture(MockHistoryRepository::default(), false).await;
        let other = f.store.create_session().await.unwrap();
        let current = f.store.create_session().await.unwrap();

        assert!(f.store.delete_session(&other).await.unwrap());
        assert_eq!(f.store.current_id(), Some(current.as_str()));
        assert!(!f.store.delete_session("missing").await.unwrap());
    }

    #[tokio::test]
    async fn test_guest_history_stays_in_memory() {
        let mut f = fixture(MockHistoryRepository::default(), true).await;
        f.store.create_session().await.unwrap();
        f.store.save_current(&messages(&["secret"])).await.unwrap();

        assert_eq!(f.store.entries().len(), 1);
        assert!(f.repo.partitions.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_attach_reloads_named_and_resets_guest() {
        let mut f = fixture(MockHistoryRepository::default(), false).await;
        f.store.create_session().await.unwrap();
        f.store.save_current(&messages(&["kept"])).await.unwrap();

        f.store.attach(&Identity::guest(Utc::now())).await;
        assert!(f.store.entries().is_empty());

        f.store.attach(&f.identity).await;
        assert_eq!(f.store.entries()[0].title, "kept");
        assert!(f.store.current_id().is_none());
    }

    #[tokio::test]
    async fn test_write_failure_keeps_memory_state() {
        let mut f = fixture(MockHistoryRepository::failing(), false).await;

        let err = f.store.create_session().await.unwrap_err();
        assert!(err.is_persistence());
        assert_eq!(f.store.entries().len(), 1);
        assert!(f.store.current_id().is_some());

        assert!(f.store.save_current(&messages(&["hello"])).await.is_err());
        assert_eq!(f.store.current_entry().unwrap().title, "hello");
    }

    #[tokio::test]
    async fn test_search() {
        let mut f = fixture(MockHistoryRepository::default(), false).await;
        for title in ["Python decorators", "Travel to Peru", "python packaging"] {
            f.store.create_session().await.unwrap();
            f.store.save_current(&messages(&[title])).await.unwrap();
        }

        let titles: Vec<&str> = f
            .store
            .search("PYTHON")
            .into_iter()
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(titles, vec!["python packaging", "Python decorators"]);
        assert_eq!(f.store.search("").len(), 3);
    }
}
