//! The send cycle: user message, typing indicator, reply, save.

use crate::chat_history_store::ChatHistoryStore;
use aide_core::history::ChatHistoryEntry;
use aide_core::responder::{APOLOGY, Responder, ResponseRequest};
use aide_core::session::{ConversationSession, Message, Sender};
use aide_core::settings::PersonalityMode;
use aide_core::{AideError, Result};
use std::sync::Arc;

/// A user message that has been appended and is waiting for its reply.
#[derive(Debug)]
pub struct PendingReply {
    pub user_message: Message,
    pub request: ResponseRequest,
    save_error: Option<AideError>,
}

impl PendingReply {
    /// Awaits the reply, substituting the apology when the responder fails.
    pub async fn resolve(&self, responder: &dyn Responder) -> String {
        match responder.respond(&self.request).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!("[Chat] Response generation failed: {}", e);
                APOLOGY.to_string()
            }
        }
    }
}

/// Result of a completed send cycle.
#[derive(Debug)]
pub struct SendOutcome {
    pub user_message: Message,
    pub reply: Message,
    /// First history write failure during the cycle, if any. The conversation
    /// itself is complete either way.
    pub save_error: Option<AideError>,
}

/// Owns the current conversation and the history it is saved into.
///
/// A cycle can be driven in one call with [`ChatService::send`], or in three
/// steps ([`begin_send`](Self::begin_send), [`PendingReply::resolve`],
/// [`complete_send`](Self::complete_send)) when the caller wants to observe
/// the typing indicator while the reply is pending.
pub struct ChatService {
    session: ConversationSession,
    history: ChatHistoryStore,
    responder: Arc<dyn Responder>,
}

impl ChatService {
    pub fn new(history: ChatHistoryStore, responder: Arc<dyn Responder>) -> Self {
        Self {
            session: ConversationSession::new(),
            history,
            responder,
        }
    }

    pub fn session(&self) -> &ConversationSession {
        &self.session
    }

    pub fn history(&self) -> &ChatHistoryStore {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut ChatHistoryStore {
        &mut self.history
    }

    pub fn responder(&self) -> Arc<dyn Responder> {
        self.responder.clone()
    }

    /// Appends the user message and raises the typing indicator.
    ///
    /// Creates a history entry first when none is current. The request
    /// carries the context as it was before this message.
    pub async fn begin_send(
        &mut self,
        content: &str,
        personality: PersonalityMode,
    ) -> Result<PendingReply> {
        if content.trim().is_empty() {
            return Err(AideError::invalid_argument("message must not be empty"));
        }

        let mut save_error = None;
        if self.history.current_id().is_none() {
            if let Err(e) = self.history.create_session().await {
                tracing::warn!("[Chat] Failed to persist new conversation: {}", e);
                save_error = Some(e);
            }
        }

        let context = self.session.context();
        let user_message = self.session.add_message(content, Sender::User);
        self.session.set_typing(true);
        if let Err(e) = self.save().await {
            save_error.get_or_insert(e);
        }

        Ok(PendingReply {
            request: ResponseRequest::new(content, personality, context),
            user_message,
            save_error,
        })
    }

    /// Appends the reply, lowers the typing indicator and saves.
    pub async fn complete_send(&mut self, pending: PendingReply, reply: String) -> SendOutcome {
        let reply = self.session.add_message(reply, Sender::Assistant);
        self.session.set_typing(false);

        let mut save_error = pending.save_error;
        if let Err(e) = self.save().await {
            save_error.get_or_insert(e);
        }

        SendOutcome {
            user_message: pending.user_message,
            reply,
            save_error,
        }
    }

    /// Runs a whole send cycle.
    pub async fn send(
        &mut self,
        content: &str,
        personality: PersonalityMode,
    ) -> Result<SendOutcome> {
        let pending = self.begin_send(content, personality).await?;
        let responder = self.responder();
        let reply = pending.resolve(responder.as_ref()).await;
        Ok(self.complete_send(pending, reply).await)
    }

    /// Clears the conversation and starts a fresh history entry.
    pub async fn new_chat(&mut self) -> Result<String> {
        self.session.clear_chat();
        self.history.create_session().await
    }

    /// Makes a stored conversation current and shows its messages.
    ///
    /// Returns `None`, leaving everything untouched, for an unknown id.
    pub fn open_chat(&mut self, id: &str) -> Option<&ChatHistoryEntry> {
        let messages = self.history.load_session(id)?.messages.clone();
        self.session.load_messages(messages);
        self.history.current_entry()
    }

    /// Drops the conversation on screen without touching history.
    pub fn reset(&mut self) {
        self.session.clear_chat();
    }

    async fn save(&mut self) -> Result<()> {
        self.history.save_current(self.session.messages()).await
    }
}
