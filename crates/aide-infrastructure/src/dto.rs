//! Persisted record shapes.

use aide_core::identity::Identity;
use serde::{Deserialize, Serialize};

/// Storage key of the active identity record.
pub const AUTH_KEY: &str = "ai_assistant_auth";

/// Prefix of the per-identity chat history keys.
pub const CHATS_KEY_PREFIX: &str = "ai_assistant_chats_";

pub fn chats_key(identity_id: &str) -> String {
    format!("{CHATS_KEY_PREFIX}{identity_id}")
}

/// Record stored under [`AUTH_KEY`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthRecordDto {
    #[serde(default)]
    pub user: Option<Identity>,
    #[serde(default)]
    pub is_authenticated: bool,
    #[serde(default)]
    pub is_loading: bool,
}

impl AuthRecordDto {
    pub fn authenticated(identity: &Identity) -> Self {
        Self {
            user: Some(identity.clone()),
            is_authenticated: true,
            is_loading: false,
        }
    }

    /// The identity, when the record describes a completed login.
    pub fn into_domain(self) -> Option<Identity> {
        if self.is_authenticated { self.user } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_wire_shape() {
        let identity = Identity::named("ada", Some("pw"), Utc::now());
        let value = serde_json::to_value(AuthRecordDto::authenticated(&identity)).unwrap();

        assert_eq!(value["isAuthenticated"], true);
        assert_eq!(value["isLoading"], false);
        assert_eq!(value["user"]["username"], "ada");
        assert_eq!(value["user"]["isGuest"], false);
        assert_eq!(value["user"]["uploadCount"], 0);
    }

    #[test]
    fn test_unauthenticated_record_has_no_identity() {
        let record: AuthRecordDto =
            serde_json::from_str(r#"{"user": null, "isAuthenticated": false}"#).unwrap();
        assert!(record.into_domain().is_none());
    }

    #[test]
    fn test_chats_key() {
        assert_eq!(chats_key("abc"), "ai_assistant_chats_abc");
    }
}
