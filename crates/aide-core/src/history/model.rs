//! Chat history entry model.

use crate::session::Message;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Title of an entry that has not been saved with messages yet.
pub const DEFAULT_TITLE: &str = "New Conversation";

/// Number of characters of the first message kept in a title.
pub const TITLE_MAX_CHARS: usize = 50;

const ELLIPSIS: &str = "...";

/// A persisted, named conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatHistoryEntry {
    pub id: String,
    pub title: String,
    pub messages: Vec<Message>,
    /// Fixed when the entry is created
    pub created_at: DateTime<Utc>,
    /// Refreshed on every save
    pub updated_at: DateTime<Utc>,
}

impl ChatHistoryEntry {
    /// Creates an empty entry titled [`DEFAULT_TITLE`].
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: DEFAULT_TITLE.to_string(),
            messages: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Stores `messages`, re-deriving the title and refreshing `updated_at`.
    pub fn update_messages(&mut self, messages: Vec<Message>, now: DateTime<Utc>) {
        self.title = derive_title(&messages);
        self.messages = messages;
        self.updated_at = now;
    }

    /// Case-insensitive title match. An empty query matches everything.
    pub fn title_matches(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(&query.to_lowercase())
    }
}

/// Title for a conversation: the first message's first 50 characters,
/// followed by `...` when it was longer.
pub fn derive_title(messages: &[Message]) -> String {
    let Some(first) = messages.first() else {
        return DEFAULT_TITLE.to_string();
    };

    let mut chars = first.content.chars();
    let head: String = chars.by_ref().take(TITLE_MAX_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}{ELLIPSIS}")
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Sender;

    fn message(content: &str) -> Message {
        Message::new(content, Sender::User)
    }

    #[test]
    fn test_new_entry() {
        let now = Utc::now();
        let entry = ChatHistoryEntry::new(now);
        assert_eq!(entry.title, DEFAULT_TITLE);
        assert!(entry.messages.is_empty());
        assert_eq!(entry.created_at, now);
        assert_eq!(entry.updated_at, now);
    }

    #[test]
    fn test_long_title_is_truncated() {
        let content =
            "Please help me understand quantum computing and its applications in cryptography";
        let title = derive_title(&[message(content)]);
        assert_eq!(title, format!("{}...", &content[..50]));
        assert_eq!(title.chars().count(), 53);
    }

    #[test]
    fn test_short_title_is_kept() {
        assert_eq!(derive_title(&[message("hi")]), "hi");
    }

    #[test]
    fn test_exactly_fifty_chars_has_no_ellipsis() {
        let content = "x".repeat(50);
        assert_eq!(derive_title(&[message(&content)]), content);
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        let content = "é".repeat(60);
        let title = derive_title(&[message(&content)]);
        assert_eq!(title, format!("{}...", "é".repeat(50)));
    }

    #[test]
    fn test_empty_messages_use_default_title() {
        assert_eq!(derive_title(&[]), DEFAULT_TITLE);
    }

    #[test]
    fn test_update_messages_keeps_created_at() {
        let created = Utc::now();
        let mut entry = ChatHistoryEntry::new(created);
        let later = created + chrono::Duration::minutes(5);
        entry.update_messages(vec![message("first question"), message("second")], later);

        assert_eq!(entry.title, "first question");
        assert_eq!(entry.created_at, created);
        assert_eq!(entry.updated_at, later);
        assert_eq!(entry.messages.len(), 2);
    }

    #[test]
    fn test_title_matches() {
        let mut entry = ChatHistoryEntry::new(Utc::now());
        entry.update_messages(vec![message("Travel plans for Lisbon")], Utc::now());
        assert!(entry.title_matches("lisbon"));
        assert!(entry.title_matches(""));
        assert!(!entry.title_matches("python"));
    }
}
