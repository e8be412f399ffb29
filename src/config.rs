//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default signup endpoint
pub const DEFAULT_SIGNUP_URL: &str = "https://stunner.com/signup";

/// Environment variable overriding the signup endpoint
const SIGNUP_URL_ENV: &str = "STUNNER_SIGNUP_URL";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StunnerConfig {
    /// Signup endpoint URL
    pub signup_url: Option<String>,
}

impl StunnerConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "stunner", "stunner-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: StunnerConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Resolve the signup endpoint: env var, then config file, then default
    pub fn signup_url(&self) -> String {
        std::env::var(SIGNUP_URL_ENV)
            .ok()
            .or_else(|| self.signup_url.clone())
            .unwrap_or_else(|| DEFAULT_SIGNUP_URL.to_string())
    }
}
