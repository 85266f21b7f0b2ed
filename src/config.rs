use crate::error::{AlgoMatchError, Result};
use algomatch_common::ServiceConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const ENDPOINT_ENV: &str = "ALGOMATCH_ENDPOINT";
pub const TOP_K_ENV: &str = "ALGOMATCH_TOP_K";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
}

impl Config {
    /// Loads `~/.config/algomatch/config.json`, then applies environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path()?)?;
        config.apply_overrides(
            std::env::var(ENDPOINT_ENV).ok(),
            std::env::var(TOP_K_ENV).ok(),
        )?;
        Ok(config)
    }

    /// Reads `path`, or returns the defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.service.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| AlgoMatchError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("algomatch").join("config.json"))
    }

    /// Environment values win over the file.
    pub fn apply_overrides(&mut self, endpoint: Option<String>, top_k: Option<String>) -> Result<()> {
        if let Some(endpoint) = endpoint.filter(|e| !e.trim().is_empty()) {
            self.service.base_url = endpoint.trim().to_string();
        }
        if let Some(top_k) = top_k {
            self.service.top_k = top_k
                .trim()
                .parse()
                .map_err(|_| AlgoMatchError::Config(format!("{} is not a number: {}", TOP_K_ENV, top_k)))?;
        }
        self.service.validate()?;
        Ok(())
    }
}
