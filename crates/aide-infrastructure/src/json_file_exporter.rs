//! Pretty-printed JSON conversation export.

use aide_core::Result;
use aide_core::export::{ConversationExporter, ConversationSnapshot};
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes `ai-chat-<millis>.json` files.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFileExporter;

#[async_trait]
impl ConversationExporter for JsonFileExporter {
    async fn export(&self, snapshot: &ConversationSnapshot, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(snapshot.file_name());
        let json = serde_json::to_string_pretty(snapshot)?;
        fs::write(&path, json)?;
        tracing::info!(
            "[Export] Wrote {} messages to {}",
            snapshot.messages.len(),
            path.display()
        );
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aide_core::session::{ConversationSession, Sender};
    use aide_core::settings::{PersonalityMode, Settings};
    use chrono::Utc;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_export_writes_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = ConversationSession::new();
        session.add_message("hello", Sender::User);
        session.add_message("Hey there!", Sender::Assistant);
        let settings = Settings {
            personality: PersonalityMode::Casual,
            ..Settings::default()
        };
        let snapshot =
            ConversationSnapshot::new(session.messages().to_vec(), settings, Utc::now());

        let dir = temp_dir.path().join("exports");
        let path = JsonFileExporter.export(&snapshot, &dir).await.unwrap();

        assert_eq!(path, dir.join(snapshot.file_name()));
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("\n  \"messages\""));
        let parsed: ConversationSnapshot = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, snapshot);
    }
}
