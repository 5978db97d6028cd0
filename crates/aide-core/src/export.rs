//! Conversation export.

use crate::error::Result;
use crate::session::Message;
use crate::settings::Settings;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Self-contained dump of the current conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationSnapshot {
    pub messages: Vec<Message>,
    pub settings: Settings,
    /// When the snapshot was taken
    pub timestamp: DateTime<Utc>,
}

impl ConversationSnapshot {
    pub fn new(messages: Vec<Message>, settings: Settings, timestamp: DateTime<Utc>) -> Self {
        Self {
            messages,
            settings,
            timestamp,
        }
    }

    /// Default file name: `ai-chat-<unix millis>.json`.
    pub fn file_name(&self) -> String {
        format!("ai-chat-{}.json", self.timestamp.timestamp_millis())
    }
}

/// Writes snapshots somewhere the user can pick them up.
#[async_trait]
pub trait ConversationExporter: Send + Sync {
    /// Exports `snapshot` into `dir`.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Location of the written file
    /// - `Err(_)`: The file could not be written
    async fn export(&self, snapshot: &ConversationSnapshot, dir: &Path) -> Result<PathBuf>;
}
