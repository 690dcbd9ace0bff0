//! Infrastructure layer with external service adapters.

/// Book-network API client.
pub mod booknet;
/// Application configuration.
pub mod config;
/// Token storage adapters.
pub mod storage;

pub use booknet::{BooknetClient, RequestBuilder};
pub use config::{AppConfig, CliArgs, LogLevel, StorageManager};
pub use storage::KeyringTokenStorage;
