use std::env;
use std::path::PathBuf;

use anyhow::{bail, Result};

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL the `data/*.json` documents are served under
    pub data_base_url: String,

    /// Local directory holding `data/*.json`; takes precedence over the URL
    pub data_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let data_base_url = env::var("DATA_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
            .trim_end_matches('/')
            .to_string();

        if !data_base_url.starts_with("http://") && !data_base_url.starts_with("https://") {
            bail!("DATA_BASE_URL must be an http(s) URL, got {}", data_base_url);
        }

        Ok(Config {
            data_base_url,
            data_dir: env::var("DATA_DIR")
                .ok()
                .filter(|d| !d.trim().is_empty())
                .map(PathBuf::from),
        })
    }
}
