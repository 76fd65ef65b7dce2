//! Application configuration settings
//! 
//! Environment-driven settings for the generation backend, request limits, CORS and logging

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gemini API base URL
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used for plan generation
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Generation backend configuration
    pub gemini: GeminiConfig,
    /// Request configuration
    pub request: RequestConfig,
    /// Security configuration
    pub security: SecurityConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Generation backend configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// Server-side fallback key, used only when a request carries none
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// API base URL, without the `/models/...` suffix
    pub base_url: String,
    /// Model name
    pub model: String,
    /// Transport timeout in seconds
    pub timeout: u64,
    /// Where the credential goes on the outbound request
    pub credential_placement: CredentialPlacement,
}

impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .field("credential_placement", &self.credential_placement)
            .finish()
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: 120,
            credential_placement: CredentialPlacement::Query,
        }
    }
}

/// Credential placement on the outbound request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialPlacement {
    /// `?key=<credential>`
    #[default]
    Query,
    /// `x-goog-api-key: <credential>`; keeps the key out of URLs and proxy logs
    Header,
}

impl FromStr for CredentialPlacement {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "query" => Ok(Self::Query),
            "header" => Ok(Self::Header),
            other => anyhow::bail!("Invalid credential placement: {}", other),
        }
    }
}

/// Request configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestConfig {
    /// Maximum request size in bytes
    pub max_request_size: usize,
}

/// Security configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Allowed origins for CORS
    pub allowed_origins: Vec<String>,
    /// Whether CORS is enabled
    pub cors_enabled: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    pub level: String,
    /// Log format (text/json)
    pub format: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gemini: GeminiConfig::default(),
            request: RequestConfig {
                max_request_size: 65536,
            },
            security: SecurityConfig {
                allowed_origins: vec!["*".to_string()],
                cors_enabled: true,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "text".to_string(),
            },
        }
    }
}

impl Settings {
    /// Create a new configuration instance
    pub fn new() -> Result<Self> {
        // Load .env file if it exists
        dotenv::dotenv().ok();
        
        let settings = Self {
            gemini: GeminiConfig {
                api_key: std::env::var("GEMINI_API_KEY")
                    .ok()
                    .filter(|key| !key.trim().is_empty()),
                base_url: get_env_or_default("GEMINI_BASE_URL", DEFAULT_BASE_URL),
                model: get_env_or_default("GEMINI_MODEL", DEFAULT_MODEL),
                timeout: get_env_or_default("GEMINI_TIMEOUT", "120")
                    .parse()
                    .context("Invalid timeout value")?,
                credential_placement: get_env_or_default("GEMINI_CREDENTIAL_PLACEMENT", "query")
                    .parse()
                    .context("Invalid GEMINI_CREDENTIAL_PLACEMENT")?,
            },
            request: RequestConfig {
                max_request_size: get_env_or_default("MAX_REQUEST_SIZE", "65536")
                    .parse()
                    .context("Invalid maximum request size")?,
            },
            security: SecurityConfig {
                allowed_origins: get_env_or_default("ALLOWED_ORIGINS", "*")
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
                cors_enabled: get_env_or_default("CORS_ENABLED", "true")
                    .parse()
                    .context("Invalid CORS enabled flag")?,
            },
            logging: LoggingConfig {
                level: get_env_or_default("RUST_LOG", "info"),
                format: get_env_or_default("LOG_FORMAT", "text"),
            },
        };
        
        settings.validate()?;
        
        Ok(settings)
    }
    
    /// Validate configuration validity
    pub fn validate(&self) -> Result<()> {
        if let Some(key) = &self.gemini.api_key {
            if key.contains(char::is_whitespace) {
                anyhow::bail!("GEMINI_API_KEY cannot contain whitespace characters");
            }
        }
        
        if !self.gemini.base_url.starts_with("http") {
            anyhow::bail!("Invalid Gemini base URL format, should start with 'http'");
        }
        
        if self.gemini.model.trim().is_empty() {
            anyhow::bail!("Gemini model name cannot be empty");
        }
        
        if self.gemini.timeout == 0 {
            anyhow::bail!("Timeout value cannot be 0");
        }
        
        if self.request.max_request_size == 0 {
            anyhow::bail!("Maximum request size cannot be 0");
        }
        
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            anyhow::bail!("Invalid log level: {}", self.logging.level);
        }
        
        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            anyhow::bail!("Invalid log format: {}", self.logging.format);
        }
        
        Ok(())
    }
    
    /// Full `generateContent` endpoint URL, without credential
    pub fn generate_content_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.gemini.base_url.trim_end_matches('/'),
            self.gemini.model
        )
    }
}

/// Get environment variable or default value
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
