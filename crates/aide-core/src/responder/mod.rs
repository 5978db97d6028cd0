//! Response generation.
//!
//! Turns a user message into the assistant's reply. The reply text is a pure
//! function of the message, the personality, the prior conversation context
//! and a random source; the async [`Responder`] trait is the seam where
//! latency and failures are layered on.
//!
//! # Module Structure
//!
//! - `generator`: Classification rules and reply composition
//! - `personality`: Greetings, lead-ins and thanks per personality
//! - `templates`: Fixed reply bodies and code samples
//!
//! # Usage
//!
//! ```ignore
//! use aide_core::responder::{generate, ResponseRequest};
//! use aide_core::settings::PersonalityMode;
//!
//! let request = ResponseRequest::new("hello", PersonalityMode::Casual, vec![]);
//! let reply = generate(&request, &mut rand::thread_rng());
//! ```

mod generator;
mod personality;
mod templates;

use crate::error::Result;
use async_trait::async_trait;

// Re-export public API
pub use generator::{CodeSample, ResponseKind, ResponseRequest, Topic, classify, generate};
pub use personality::{Voice, thanks, voice};

/// Reply shown in place of a generated one when generation fails.
pub const APOLOGY: &str = "I apologize, but I'm having trouble processing your request right now. Please try again in a moment.";

/// Asynchronous source of assistant replies.
#[async_trait]
pub trait Responder: Send + Sync {
    /// Produces a reply for `request`.
    ///
    /// # Returns
    ///
    /// - `Ok(String)`: The reply text
    /// - `Err(_)`: Generation failed; callers substitute [`APOLOGY`]
    async fn respond(&self, request: &ResponseRequest) -> Result<String>;
}
