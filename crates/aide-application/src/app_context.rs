//! Application wiring.
//!
//! `AppContext` is built once at start-up and owns every piece of state the
//! UI reads: settings, the active identity, the conversation and its history.

use crate::chat_history_store::ChatHistoryStore;
use crate::chat_service::{ChatService, SendOutcome};
use crate::identity_store::IdentityStore;
use crate::settings_store::SettingsStore;
use crate::simulated_responder::SimulatedResponder;
use aide_core::clock::{Clock, SystemClock};
use aide_core::config::AideConfig;
use aide_core::export::{ConversationExporter, ConversationSnapshot};
use aide_core::identity::{Identity, IdentityRepository};
use aide_core::history::ChatHistoryRepository;
use aide_core::responder::Responder;
use aide_core::upload::{UploadGate, UploadSource, upload_message};
use aide_core::{AideError, Result};
use aide_infrastructure::{
    JsonFileExporter, KeyValueStore, KvChatHistoryRepository, KvIdentityRepository,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// Collaborators an [`AppContext`] is assembled from.
pub struct AppParts {
    pub identity_repository: Arc<dyn IdentityRepository>,
    pub history_repository: Arc<dyn ChatHistoryRepository>,
    pub responder: Arc<dyn Responder>,
    pub exporter: Arc<dyn ConversationExporter>,
    pub clock: Arc<dyn Clock>,
    pub login_delay: Duration,
}

pub struct AppContext {
    settings: SettingsStore,
    identity: IdentityStore,
    chat: ChatService,
    exporter: Arc<dyn ConversationExporter>,
    clock: Arc<dyn Clock>,
}

impl AppContext {
    pub fn new(parts: AppParts) -> Self {
        let history = ChatHistoryStore::new(parts.history_repository, parts.clock.clone());
        Self {
            settings: SettingsStore::new(),
            identity: IdentityStore::new(
                parts.identity_repository,
                parts.clock.clone(),
                parts.login_delay,
            ),
            chat: ChatService::new(history, parts.responder),
            exporter: parts.exporter,
            clock: parts.clock,
        }
    }

    /// Standard wiring: key-value repositories over `store`, the simulated
    /// responder and the wall clock.
    pub fn bootstrap(config: &AideConfig, store: Arc<dyn KeyValueStore>) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(AppParts {
            identity_repository: Arc::new(KvIdentityRepository::new(store.clone())),
            history_repository: Arc::new(KvChatHistoryRepository::new(store)),
            responder: Arc::new(SimulatedResponder::new(&config.responder)?),
            exporter: Arc::new(JsonFileExporter),
            clock: Arc::new(SystemClock),
            login_delay: config.login.delay(),
        }))
    }

    /// Brings back the persisted identity and its history.
    pub async fn restore(&mut self) -> Option<&Identity> {
        let identity = self.identity.restore().await.cloned()?;
        self.chat.history_mut().attach(&identity).await;
        self.identity.active()
    }

    /// Logs in by name and switches to that identity's history.
    ///
    /// A persistence failure is returned after the switch has happened.
    pub async fn login(&mut self, username: &str, password: Option<&str>) -> Result<Identity> {
        let result = self
            .identity
            .login_named(username, password)
            .await
            .cloned();
        if result.as_ref().is_err_and(|e| !e.is_persistence()) {
            return result;
        }

        self.switch_history().await;
        result
    }

    /// Starts a guest session with an empty, volatile history.
    pub async fn login_as_guest(&mut self) -> Identity {
        let identity = self.identity.login_as_guest().clone();
        self.switch_history().await;
        identity
    }

    pub async fn logout(&mut self) -> Result<()> {
        self.chat.reset();
        self.chat.history_mut().detach();
        self.identity.logout().await
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.active()
    }

    pub fn identity_store(&self) -> &IdentityStore {
        &self.identity
    }

    pub fn settings(&self) -> &SettingsStore {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut SettingsStore {
        &mut self.settings
    }

    pub fn chat(&self) -> &ChatService {
        &self.chat
    }

    pub fn chat_mut(&mut self) -> &mut ChatService {
        &mut self.chat
    }

    /// Sends a message with the current personality.
    pub async fn send_message(&mut self, content: &str) -> Result<SendOutcome> {
        self.require_identity()?;
        let personality = self.settings.get().personality;
        self.chat.send(content, personality).await
    }

    /// Validates a file, sends the upload prompt and counts the upload.
    ///
    /// # Returns
    ///
    /// - `Ok(SendOutcome)`: The upload was accepted and answered
    /// - `Err(InvalidArgument)`: Not a PDF, or larger than 10 MiB
    /// - `Err(QuotaExceeded)`: Upload limit reached
    /// - `Err(NotFound)`: The file passes type and size checks but no identity
    ///   is active
    /// - `Err(_)`: The file could not be read
    pub async fn upload(&mut self, file: &dyn UploadSource) -> Result<SendOutcome> {
        UploadGate::check_file(file).into_result()?;
        let can_upload = self.identity.can_upload()?;
        UploadGate::validate(file, can_upload).into_result()?;

        let content = file.read_text()?;
        tracing::info!(
            "[Upload] Accepted {} ({} bytes, {} chars of text)",
            file.name(),
            file.size_bytes(),
            content.chars().count()
        );

        let mut outcome = self.send_message(&upload_message(file)).await?;
        if let Err(e) = self.identity.record_upload().await {
            tracing::warn!("[Upload] Failed to persist upload count: {}", e);
            outcome.save_error.get_or_insert(e);
        }
        Ok(outcome)
    }

    /// Captures the conversation on screen together with the settings.
    pub fn snapshot(&self) -> ConversationSnapshot {
        ConversationSnapshot::new(
            self.chat.session().messages().to_vec(),
            self.settings.get(),
            self.clock.now(),
        )
    }

    /// Writes a snapshot into `dir` and returns the file's path.
    pub async fn export(&self, dir: &Path) -> Result<PathBuf> {
        self.exporter.export(&self.snapshot(), dir).await
    }

    async fn switch_history(&mut self) {
        self.chat.reset();
        match self.identity.active() {
            Some(identity) => self.chat.history_mut().attach(identity).await,
            None => self.chat.history_mut().detach(),
        }
    }

    fn require_identity(&self) -> Result<&Identity> {
        self.identity
            .active()
            .ok_or_else(|| AideError::not_found("identity", "active"))
    }
}
