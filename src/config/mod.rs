//! Configuration management module
//!
//! Responsible for loading and managing application configuration, including environment variables and the optional JSON file

pub mod file;
pub mod settings;

pub use file::{AppConfig, ServerConfig};
pub use settings::{CredentialPlacement, GeminiConfig, Settings};
