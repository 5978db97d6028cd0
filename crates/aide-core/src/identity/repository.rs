//! Identity repository trait.

use super::model::Identity;
use crate::error::Result;
use async_trait::async_trait;

/// Persistence for the active named identity.
///
/// There is a single slot: saving replaces whatever was stored before.
/// Guests are never handed to this repository.
#[async_trait]
pub trait IdentityRepository: Send + Sync {
    /// Loads the persisted identity.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Identity))`: A named identity was persisted
    /// - `Ok(None)`: Nothing persisted
    /// - `Err(_)`: The record exists but could not be read or parsed
    async fn load_active(&self) -> Result<Option<Identity>>;

    /// Persists `identity` into the slot.
    async fn save_active(&self, identity: &Identity) -> Result<()>;

    /// Removes the persisted record, if any.
    async fn clear_active(&self) -> Result<()>;
}
