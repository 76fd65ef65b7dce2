//! File-based configuration loading
//!
//! Loads the optional JSON configuration file

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen host (default: "127.0.0.1" - localhost only)
    #[serde(default = "default_host")]
    pub host: String,
    
    /// Listen port (default: 8082)
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8082
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Application configuration loaded from JSON file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration (optional, defaults to localhost:8082)
    #[serde(default)]
    pub server: ServerConfig,
}

impl AppConfig {
    /// Load configuration from JSON file
    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading configuration from: {:?}", path);
        
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        
        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| "Failed to parse config JSON")?;
        
        config.validate()?;
        
        debug!("Server will listen on {}", config.listen_addr());
        Ok(config)
    }
    
    /// Load configuration from default locations
    /// Searches in order:
    /// 1. ~/.config/tripplanner/tripplanner.json
    /// 2. ./tripplanner.json
    /// 
    /// Falls back to defaults when neither exists.
    pub fn load_default() -> Result<Self> {
        match Self::default_paths().into_iter().find(|p| p.exists()) {
            Some(path) => Self::load(&path),
            None => {
                info!("No configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }
    
    fn default_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("tripplanner").join("tripplanner.json"));
        }
        paths.push(PathBuf::from("tripplanner.json"));
        paths
    }
    
    fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            anyhow::bail!("Server host cannot be empty");
        }
        
        if self.server.port == 0 {
            anyhow::bail!("Port number cannot be 0");
        }
        
        Ok(())
    }
    
    /// `host:port` to bind
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;
    
    #[test]
    fn test_load_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "server": {{ "host": "0.0.0.0", "port": 9090 }} }}"#).unwrap();
        
        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.listen_addr(), "0.0.0.0:9090");
    }
    
    #[test]
    fn test_missing_fields_use_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{}}").unwrap();
        
        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.listen_addr(), "127.0.0.1:8082");
    }
    
    #[test]
    fn test_zero_port_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "server": {{ "port": 0 }} }}"#).unwrap();
        
        assert!(AppConfig::load(file.path()).is_err());
    }
}
