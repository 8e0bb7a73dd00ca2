// src/settings.rs
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "https://claimsmart-api.onrender.com/api/predict";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Endpoint of the scoring service the view submits datasets to.
    pub api_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl Settings {
    /// Built-in defaults, overlaid with the optional user config file and
    /// any CLAIMSMART_* environment variables (e.g. CLAIMSMART_API_URL).
    pub fn load() -> Result<Self> {
        let mut builder = Config::builder().set_default("api_url", DEFAULT_API_URL)?;

        if let Some(path) = Self::config_file() {
            builder = builder.add_source(File::from(path).required(false));
        }

        builder
            .add_source(Environment::with_prefix("CLAIMSMART"))
            .build()?
            .try_deserialize()
            .context("Invalid configuration")
    }

    fn config_file() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("claimsmart").join("config.toml"))
    }
}
