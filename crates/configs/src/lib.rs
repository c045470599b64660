use std::time::Duration;

use anyhow::{anyhow, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub base_url: String,
    /// Bearer token; filled from `API_TOKEN` when absent.
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: None,
            connect_timeout_secs: default_connect_timeout(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LoggingConfig {
    #[serde(default)]
    pub json: bool,
}

fn default_base_url() -> String { "http://127.0.0.1:3333".into() }
fn default_connect_timeout() -> u64 { 5 }
fn default_request_timeout() -> u64 { 30 }

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

/// Read and parse `path`. A missing file is `Ok(None)`; unreadable or
/// malformed files are errors.
pub fn load_optional(path: &str) -> Result<Option<AppConfig>> {
    match std::fs::read_to_string(path) {
        Ok(content) => parse(&content).map(Some),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(anyhow!("reading {path}: {e}")),
    }
}

impl AppConfig {
    /// Load `CONFIG_PATH` (default `config.toml`), falling back to defaults
    /// plus environment only when the file does not exist.
    pub fn load_or_default() -> Result<Self> {
        let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        Self::load_or_default_from(&path, |key| std::env::var(key).ok())
    }

    pub fn load_or_default_from<F>(path: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = load_optional(path)?.unwrap_or_default();
        cfg.api.normalize_from(lookup);
        cfg.api.validate()?;
        Ok(cfg)
    }
}

impl ApiConfig {
    /// Fill blanks from the given variable lookup (`API_BASE_URL`, `API_TOKEN`).
    pub fn normalize_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        self.base_url = self.base_url.trim().trim_end_matches('/').to_string();
        if self.base_url.is_empty() {
            self.base_url = lookup("API_BASE_URL")
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(default_base_url);
        }
        if self.token.as_deref().map_or(true, |t| t.trim().is_empty()) {
            self.token = lookup("API_TOKEN").filter(|t| !t.trim().is_empty());
        }
    }

    pub fn validate(&self) -> Result<()> {
        let lower = self.base_url.to_lowercase();
        if !(lower.starts_with("http://") || lower.starts_with("https://")) {
            return Err(anyhow!("api.base_url must start with http:// or https://"));
        }
        if self.connect_timeout_secs == 0 || self.request_timeout_secs == 0 {
            return Err(anyhow!("api timeouts must be positive seconds"));
        }
        Ok(())
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
