use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::loader::DEFAULT_MAX_UPLOAD_BYTES;

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = "rusty-ro5.toml";

/// Environment variable overriding [`AppConfig::api_base_url`].
pub const API_URL_ENV: &str = "RO5_API_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the descriptor service; `/ro5` is appended.
    pub api_base_url: String,

    /// Allowed rule violations before a molecule fails.
    pub vmax: u32,

    /// Upload size limit in bytes.
    pub max_upload_bytes: u64,

    pub request_timeout_secs: u64,

    /// Result rows per table page.
    pub page_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
            vmax: 1,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            request_timeout_secs: 120,
            page_size: 5,
        }
    }
}

impl AppConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("parsing config file {}", path.display()))
    }

    /// Defaults, then [`CONFIG_FILE`] if present, then the environment.
    ///
    /// A broken config file is logged and ignored.
    pub fn load() -> Self {
        let mut config = if Path::new(CONFIG_FILE).exists() {
            Self::load_from_file(CONFIG_FILE).unwrap_or_else(|e| {
                log::error!("Ignoring config: {e:#}");
                Self::default()
            })
        } else {
            Self::default()
        };
        config.apply_env(std::env::var(API_URL_ENV).ok());
        config
    }

    fn apply_env(&mut self, api_url: Option<String>) {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            log::info!("Using descriptor service at {url} ({API_URL_ENV})");
            self.api_base_url = url.trim().to_string();
        }
    }
}
