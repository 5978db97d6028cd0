//! Settings domain module.
//!
//! User-chosen preferences. Held for the duration of an application run and
//! never persisted.
//!
//! # Module Structure
//!
//! - `model`: `Settings` and its enum-valued fields
//!
//! # Usage
//!
//! ```ignore
//! use aide_core::settings::{Settings, ThemeMode, PersonalityMode, AnimationMode};
//! ```

mod model;

// Re-export public API
pub use model::{AnimationMode, PersonalityMode, Settings, ThemeMode};
