//! Conversation message types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Sender {
    /// Message from the user.
    User,
    /// Message from the assistant.
    Assistant,
}

/// A single message in a conversation.
///
/// Immutable once created. The id and timestamp are assigned by the
/// conversation session when the message is appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    /// Whether the content carries a code sample
    #[serde(default)]
    pub has_code: bool,
}

/// Markers that flag an assistant reply as containing code.
const CODE_MARKERS: [&str; 4] = ["```", "function", "class ", "def "];

impl Message {
    pub(crate) fn new(content: impl Into<String>, sender: Sender) -> Self {
        let content = content.into();
        let has_code = sender == Sender::Assistant && Self::detect_code(&content);
        Self {
            id: Uuid::new_v4().to_string(),
            content,
            sender,
            timestamp: Utc::now(),
            has_code,
        }
    }

    /// Heuristic used to decide whether a reply should be rendered with code blocks.
    pub fn detect_code(content: &str) -> bool {
        CODE_MARKERS.iter().any(|marker| content.contains(marker))
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}
