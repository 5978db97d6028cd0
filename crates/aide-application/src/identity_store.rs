//! The active identity and its upload quota.

use aide_core::clock::Clock;
use aide_core::identity::{Identity, IdentityRepository};
use aide_core::{AideError, Result};
use std::sync::Arc;
use std::time::Duration;

/// Owns the single active identity.
///
/// Named identities are written through the repository on every change;
/// guests live only in memory.
pub struct IdentityStore {
    active: Option<Identity>,
    repository: Arc<dyn IdentityRepository>,
    clock: Arc<dyn Clock>,
    login_delay: Duration,
}

impl IdentityStore {
    pub fn new(
        repository: Arc<dyn IdentityRepository>,
        clock: Arc<dyn Clock>,
        login_delay: Duration,
    ) -> Self {
        Self {
            active: None,
            repository,
            clock,
            login_delay,
        }
    }

    /// Reloads the persisted named identity, if any.
    ///
    /// An unreadable record is logged and treated as "nobody logged in".
    pub async fn restore(&mut self) -> Option<&Identity> {
        match self.repository.load_active().await {
            Ok(Some(identity)) => {
                tracing::info!("[Identity] Restored {}", identity.display_name);
                self.active = Some(identity);
            }
            Ok(None) => self.active = None,
            Err(e) => {
                tracing::warn!("[Identity] Failed to load persisted identity: {}", e);
                self.active = None;
            }
        }
        self.active.as_ref()
    }

    /// Logs in by name after the simulated delay. Credentials are not checked.
    ///
    /// Without a password the identity is a guest and nothing is persisted;
    /// any previously persisted record is removed so a restart does not bring
    /// it back.
    ///
    /// # Returns
    ///
    /// - `Ok(&Identity)`: The new active identity
    /// - `Err(InvalidArgument)`: Blank username
    /// - `Err(_)`: The identity is active but could not be persisted
    pub async fn login_named(
        &mut self,
        username: &str,
        password: Option<&str>,
    ) -> Result<&Identity> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AideError::invalid_argument("username must not be empty"));
        }

        self.simulate_delay().await;

        let identity = Identity::named(username, password, self.clock.now());
        let persisted = if identity.is_guest {
            self.repository.clear_active().await
        } else {
            self.repository.save_active(&identity).await
        };
        tracing::info!(
            "[Identity] Logged in as {} (guest: {})",
            identity.display_name,
            identity.is_guest
        );

        let identity = self.active.insert(identity);
        persisted.map(|()| &*identity)
    }

    /// Starts an anonymous guest session at once. Nothing is persisted.
    pub fn login_as_guest(&mut self) -> &Identity {
        let identity = Identity::guest(self.clock.now());
        tracing::info!("[Identity] Logged in as guest {}", identity.id);
        self.active.insert(identity)
    }

    /// Clears the active identity and the persisted record.
    ///
    /// The identity is gone from memory even when removing the record fails.
    pub async fn logout(&mut self) -> Result<()> {
        if let Some(identity) = self.active.take() {
            tracing::info!("[Identity] Logged out {}", identity.display_name);
        }
        self.repository.clear_active().await
    }

    pub fn active(&self) -> Option<&Identity> {
        self.active.as_ref()
    }

    /// Whether the active identity may upload another file now.
    pub fn can_upload(&self) -> Result<bool> {
        Ok(self.require_active()?.can_upload_at(self.clock.now()))
    }

    /// Uploads left in the current window.
    pub fn remaining_uploads(&self) -> Result<u32> {
        Ok(self.require_active()?.remaining_uploads_at(self.clock.now()))
    }

    /// Counts one accepted upload. Call only after [`Self::can_upload`] said yes.
    ///
    /// The in-memory count is updated even when persisting it fails.
    pub async fn record_upload(&mut self) -> Result<()> {
        let now = self.clock.now();
        let identity = self
            .active
            .as_mut()
            .ok_or_else(|| AideError::not_found("identity", "active"))?;
        identity.record_upload_at(now);
        tracing::debug!(
            "[Upload] {} has used {} uploads",
            identity.id,
            identity.upload_count
        );

        if identity.is_guest {
            return Ok(());
        }
        self.repository.save_active(identity).await
    }

    fn require_active(&self) -> Result<&Identity> {
        self.active
            .as_ref()
            .ok_or_else(|| AideError::not_found("identity", "active"))
    }

    async fn simulate_delay(&self) {
        if !self.login_delay.is_zero() {
            tokio::time::sleep(self.login_delay).await;
        }
    }
}
