//! The current conversation.

use super::message::{Message, Sender};
use std::collections::VecDeque;

/// Number of recent message contents kept as conversational memory.
pub const CONTEXT_WINDOW: usize = 10;

/// In-memory state of the conversation being displayed.
///
/// `context` always holds the contents of the last `min(10, len)` messages,
/// oldest first. `is_typing` is raised between a user submission and the
/// arrival of its reply; the session does not stop a second submission while
/// it is raised.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationSession {
    messages: Vec<Message>,
    is_typing: bool,
    context: VecDeque<String>,
}

impl ConversationSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message, assigning its id and timestamp.
    pub fn add_message(&mut self, content: impl Into<String>, sender: Sender) -> Message {
        let message = Message::new(content, sender);
        self.push_context(message.content.clone());
        self.messages.push(message.clone());
        message
    }

    pub fn set_typing(&mut self, is_typing: bool) {
        self.is_typing = is_typing;
    }

    /// Empties the conversation and lowers the typing indicator.
    pub fn clear_chat(&mut self) {
        self.messages.clear();
        self.context.clear();
        self.is_typing = false;
    }

    /// Replaces the message log wholesale and rebuilds the context window.
    ///
    /// The typing indicator is left as it was.
    pub fn load_messages(&mut self, messages: Vec<Message>) {
        let skip = messages.len().saturating_sub(CONTEXT_WINDOW);
        self.context = messages
            .iter()
            .skip(skip)
            .map(|m| m.content.clone())
            .collect();
        self.messages = messages;
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_typing(&self) -> bool {
        self.is_typing
    }

    /// Recent message contents, oldest first.
    pub fn context(&self) -> Vec<String> {
        self.context.iter().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn push_context(&mut self, content: String) {
        if self.context.len() == CONTEXT_WINDOW {
            self.context.pop_front();
        }
        self.context.push_back(content);
    }
}
