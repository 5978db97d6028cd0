//! Session domain module.
//!
//! This module contains the in-memory conversation state: the message log,
//! the typing indicator and the rolling context window.
//!
//! # Module Structure
//!
//! - `message`: Conversation message types (`Sender`, `Message`)
//! - `model`: The current conversation (`ConversationSession`)
//! - `quick_start`: Starter prompts offered before the first message
//!
//! # Usage
//!
//! ```ignore
//! use aide_core::session::{ConversationSession, Message, Sender};
//! ```

mod message;
mod model;
mod quick_start;

// Re-export public API
pub use message::{Message, Sender};
pub use model::{CONTEXT_WINDOW, ConversationSession};
pub use quick_start::{QUICK_START_PROMPTS, QuickStart};
