//! Application layer for AIDE.
//!
//! Stateful stores and the send cycle, wired together by [`AppContext`].
//! Storage and the assistant backend are reached only through the traits
//! in `aide-core`.

pub mod app_context;
pub mod chat_history_store;
pub mod chat_service;
pub mod identity_store;
pub mod settings_store;
pub mod simulated_responder;

pub use app_context::{AppContext, AppParts};
pub use chat_history_store::ChatHistoryStore;
pub use chat_service::{ChatService, PendingReply, SendOutcome};
pub use identity_store::IdentityStore;
pub use settings_store::SettingsStore;
pub use simulated_responder::SimulatedResponder;
