use serde::Deserialize;
use std::fs;
use std::io;
use std::net::SocketAddr;
use thiserror::Error;
use tracing::warn;

pub const DEFAULT_CONFIG_PATH: &str = "config.json";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Base URL of the DexScreener REST API.
    pub api_base_url: String,
    /// Base URL of the embedded chart widget.
    pub chart_base_url: String,
    pub chain: String,
    pub request_timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            api_base_url: "https://api.dexscreener.com".into(),
            chart_base_url: "https://dexscreener.com".into(),
            chain: "solana".into(),
            request_timeout_seconds: 10,
            user_agent: "Mozilla/5.0 (X11; Linux x86_64) DexSignalBot/0.1".into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Loads the configuration file. A missing file yields the defaults.
pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    match fs::read_to_string(path) {
        Ok(content) => parse_config(&content),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!("⚠️ Config file {} not found, using defaults", path);
            Ok(AppConfig::default())
        }
        Err(source) => Err(ConfigError::Io {
            path: path.to_string(),
            source,
        }),
    }
}

pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = serde_json::from_str(content)?;
    Ok(config)
}
