//! Advisor configuration
//!
//! Layers: built-in defaults, then an optional JSON file, then environment
//! overrides (`CROP_ADVISOR_PREDICT_URL`, `CROP_ADVISOR_TIMEOUT_SECS`).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

pub const ENV_PREDICT_URL: &str = "CROP_ADVISOR_PREDICT_URL";
pub const ENV_TIMEOUT_SECS: &str = "CROP_ADVISOR_TIMEOUT_SECS";

/// Settings for reaching the remote scoring service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    /// Full URL of the prediction endpoint
    pub prediction_url: String,

    /// Whole-request timeout
    pub timeout_secs: u64,

    pub user_agent: String,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            prediction_url: "http://127.0.0.1:8000/api/predict".to_string(),
            timeout_secs: 10,
            user_agent: format!("crop_advisor/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl AdvisorConfig {
    /// Load from a JSON file; missing fields keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read advisor config: {:?}", path))?;

        let config: AdvisorConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse advisor config JSON: {:?}", path))?;

        tracing::debug!(url = %config.prediction_url, "Loaded advisor config from {:?}", path);
        Ok(config)
    }

    /// Defaults plus environment overrides
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    pub fn with_env_overrides(self) -> Self {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup (environment, test fixtures)
    pub fn apply_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_PREDICT_URL).filter(|u| !u.trim().is_empty()) {
            self.prediction_url = url.trim().to_string();
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => self.timeout_secs = secs,
                _ => tracing::warn!("Ignoring invalid {}={:?}", ENV_TIMEOUT_SECS, raw),
            }
        }

        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
