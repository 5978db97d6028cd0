pub mod clock;
pub mod config;
pub mod error;
pub mod export;
pub mod history;
pub mod identity;
pub mod responder;
pub mod session;
pub mod settings;
pub mod upload;

// Re-export common error type
pub use error::{AideError, Result};
