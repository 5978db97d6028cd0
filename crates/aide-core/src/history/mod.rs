//! Chat history domain module.
//!
//! Named, timestamped conversation records kept per identity.
//!
//! # Module Structure
//!
//! - `model`: `ChatHistoryEntry` and title derivation
//! - `repository`: Repository trait for per-identity history persistence
//!
//! # Usage
//!
//! ```ignore
//! use aide_core::history::{ChatHistoryEntry, ChatHistoryRepository};
//! ```

mod model;
mod repository;

// Re-export public API
pub use model::{ChatHistoryEntry, DEFAULT_TITLE, TITLE_MAX_CHARS, derive_title};
pub use repository::ChatHistoryRepository;
