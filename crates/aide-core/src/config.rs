//! Application configuration (`aide.toml`).

use crate::error::{AideError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root of `aide.toml`. Every key is optional.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AideConfig {
    /// Tracing filter directive; `RUST_LOG` takes precedence
    pub log_level: Option<String>,
    /// Where persisted records live
    pub data_dir: Option<PathBuf>,
    pub responder: ResponderConfig,
    pub login: LoginConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ResponderConfig {
    pub min_latency_ms: u64,
    pub max_latency_ms: u64,
    /// Probability that a reply fails and the apology is shown instead
    pub failure_rate: f64,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            min_latency_ms: 1000,
            max_latency_ms: 3000,
            failure_rate: 0.0,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoginConfig {
    pub delay_ms: u64,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self { delay_ms: 1000 }
    }
}

impl LoginConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl AideConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let responder = &self.responder;
        if responder.min_latency_ms > responder.max_latency_ms {
            return Err(AideError::invalid_argument(format!(
                "responder.min_latency_ms ({}) exceeds responder.max_latency_ms ({})",
                responder.min_latency_ms, responder.max_latency_ms
            )));
        }
        if !(0.0..=1.0).contains(&responder.failure_rate) {
            return Err(AideError::invalid_argument(format!(
                "responder.failure_rate must be within 0.0..=1.0, got {}",
                responder.failure_rate
            )));
        }
        Ok(())
    }

    /// Configuration with every artificial delay removed.
    pub fn instant() -> Self {
        Self {
            responder: ResponderConfig {
                min_latency_ms: 0,
                max_latency_ms: 0,
                failure_rate: 0.0,
            },
            login: LoginConfig { delay_ms: 0 },
            ..Self::default()
        }
    }
}
