//! Upload domain module.
//!
//! Accepts or rejects a candidate file and, once accepted, builds the chat
//! prompt that announces it.
//!
//! # Module Structure
//!
//! - `gate`: `UploadGate`, the `UploadSource` abstraction and the upload prompt
//!
//! # Usage
//!
//! ```ignore
//! use aide_core::upload::{UploadGate, UploadedFile, upload_message, PDF_MIME};
//!
//! let file = UploadedFile::new("report.pdf", PDF_MIME, bytes);
//! UploadGate::validate(&file, identity.can_upload_at(now)).into_result()?;
//! let prompt = upload_message(&file);
//! ```

mod gate;

// Re-export public API
pub use gate::{
    MAX_UPLOAD_BYTES, PDF_MIME, RejectReason, UploadDecision, UploadGate, UploadSource,
    UploadedFile, upload_message,
};
