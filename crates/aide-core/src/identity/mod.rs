//! Identity domain module.
//!
//! The principal a conversation belongs to: a named account or a guest.
//!
//! # Module Structure
//!
//! - `model`: `Identity` and the upload quota rules
//! - `repository`: Repository trait for persisting the active named identity
//!
//! # Usage
//!
//! ```ignore
//! use aide_core::identity::{Identity, IdentityRepository, UPLOAD_LIMIT};
//! ```

mod model;
mod repository;

// Re-export public API
pub use model::{Identity, UPLOAD_LIMIT, UPLOAD_WINDOW_HOURS};
pub use repository::IdentityRepository;
