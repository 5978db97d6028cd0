//! Chat history repository trait.

use super::model::ChatHistoryEntry;
use crate::error::Result;
use async_trait::async_trait;

/// Persistence for the chat history of one identity.
///
/// The whole collection is read and written at once, newest entry first.
#[async_trait]
pub trait ChatHistoryRepository: Send + Sync {
    /// Loads the collection stored for `identity_id`.
    ///
    /// # Returns
    ///
    /// - `Ok(entries)`: Stored entries, empty when nothing was saved yet
    /// - `Err(_)`: The record exists but could not be read or parsed
    async fn load(&self, identity_id: &str) -> Result<Vec<ChatHistoryEntry>>;

    /// Replaces the collection stored for `identity_id`.
    async fn save(&self, identity_id: &str, entries: &[ChatHistoryEntry]) -> Result<()>;
}
