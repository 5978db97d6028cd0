//! Identity domain model.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum uploads accepted inside one rolling window.
pub const UPLOAD_LIMIT: u32 = 10;

/// Length of the rolling upload window.
pub const UPLOAD_WINDOW_HOURS: i64 = 24;

/// The active user or guest principal.
///
/// Field names on the wire follow the persisted auth record
/// (`username`, `isGuest`, `uploadCount`, ...); timestamps are RFC 3339.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Unique identity identifier (UUID, or `guest_<millis>` for guests)
    pub id: String,
    /// Name shown in the UI
    #[serde(rename = "username")]
    pub display_name: String,
    /// Contact address, only known for accounts that logged in with a password
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub is_guest: bool,
    pub created_at: DateTime<Utc>,
    /// Uploads recorded in the current window
    pub upload_count: u32,
    /// Start of the current upload window
    pub last_upload_reset: DateTime<Utc>,
}

impl Identity {
    /// Builds the identity produced by a named login.
    ///
    /// Without a password the account is treated as a guest and gets no email.
    pub fn named(username: &str, password: Option<&str>, now: DateTime<Utc>) -> Self {
        let has_password = password.is_some();
        Self {
            id: Uuid::new_v4().to_string(),
            display_name: username.to_string(),
            email: has_password.then(|| format!("{username}@example.com")),
            is_guest: !has_password,
            created_at: now,
            upload_count: 0,
            last_upload_reset: now,
        }
    }

    /// Builds an anonymous guest identity with a time-based id.
    pub fn guest(now: DateTime<Utc>) -> Self {
        Self {
            id: format!("guest_{}", now.timestamp_millis()),
            display_name: "Guest User".to_string(),
            email: None,
            is_guest: true,
            created_at: now,
            upload_count: 0,
            last_upload_reset: now,
        }
    }

    /// Whether the rolling window has lapsed at `now`.
    pub fn window_elapsed(&self, now: DateTime<Utc>) -> bool {
        now - self.last_upload_reset >= Duration::hours(UPLOAD_WINDOW_HOURS)
    }

    /// Whether another upload may be accepted at `now`.
    ///
    /// A lapsed window always allows the upload: the counter is reset by the
    /// upload itself, not by the passage of time.
    pub fn can_upload_at(&self, now: DateTime<Utc>) -> bool {
        self.window_elapsed(now) || self.upload_count < UPLOAD_LIMIT
    }

    /// Counts one accepted upload at `now`.
    ///
    /// When the window has lapsed the counter restarts at 1 and the window
    /// restarts at `now` in the same step.
    pub fn record_upload_at(&mut self, now: DateTime<Utc>) {
        if self.window_elapsed(now) {
            self.upload_count = 1;
            self.last_upload_reset = now;
        } else {
            self.upload_count += 1;
        }
    }

    /// Uploads still available at `now`.
    pub fn remaining_uploads_at(&self, now: DateTime<Utc>) -> u32 {
        if self.window_elapsed(now) {
            UPLOAD_LIMIT
        } else {
            UPLOAD_LIMIT.saturating_sub(self.upload_count)
        }
    }
}
