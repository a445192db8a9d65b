//! # Configuration
//!
//! Manages the loading and parsing of the application's configuration file (`config.yaml`).
//! Defines the structs for connected services and system settings. The parsed
//! value is handed to the router and service clients at construction time.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Main application configuration structure.
/// Matches the layout of `data/config.yaml`.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub services: ServicesConfig,
    #[serde(default)]
    pub system: SystemConfig,
}

impl AppConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}

/// Configuration for various connected services.
#[derive(Debug, Deserialize, Clone)]
pub struct ServicesConfig {
    pub matrix: MatrixConfig,
    pub news: NewsConfig,
    #[serde(default)]
    pub jobs: JobsConfig,
}

/// Specific configuration for the Matrix service.
#[derive(Debug, Deserialize, Clone)]
pub struct MatrixConfig {
    pub username: String,
    pub password: String,
    pub homeserver: String,
}

/// News search API access (NewsAPI-compatible `everything` endpoint).
#[derive(Debug, Deserialize, Clone)]
pub struct NewsConfig {
    pub api_key: String,
    #[serde(default = "default_news_endpoint")]
    pub endpoint: String,
}

/// Remote-jobs listing API (Remotive-compatible, no auth).
#[derive(Debug, Deserialize, Clone)]
pub struct JobsConfig {
    #[serde(default = "default_jobs_endpoint")]
    pub endpoint: String,
}

impl Default for JobsConfig {
    fn default() -> Self {
        Self {
            endpoint: default_jobs_endpoint(),
        }
    }
}

/// System-level settings for the bot.
#[derive(Debug, Deserialize, Clone)]
pub struct SystemConfig {
    /// Timeout applied to each outbound HTTP request, in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    /// Rooms the bot answers in. Empty means all joined rooms.
    #[serde(default)]
    pub allowed_rooms: Vec<String>,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: default_request_timeout(),
            allowed_rooms: Vec::new(),
        }
    }
}

fn default_news_endpoint() -> String {
    "https://newsapi.org/v2/everything".to_string()
}

fn default_jobs_endpoint() -> String {
    "https://remotive.io/api/remote-jobs".to_string()
}

fn default_request_timeout() -> u64 {
    30
}
