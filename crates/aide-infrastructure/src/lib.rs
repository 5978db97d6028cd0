pub mod config_service;
pub mod dto;
pub mod json_file_exporter;
pub mod kv_chat_history_repository;
pub mod kv_identity_repository;
pub mod local_file;
pub mod paths;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::json_file_exporter::JsonFileExporter;
pub use crate::kv_chat_history_repository::KvChatHistoryRepository;
pub use crate::kv_identity_repository::KvIdentityRepository;
pub use crate::local_file::LocalFile;
pub use crate::paths::AidePaths;
pub use crate::storage::{JsonFileStore, KeyValueStore, MemoryStore};
