use crate::application::generation::GeneratorConfig;
use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::path::Path;

const SEED_VAR: &str = "CONTRACT_DSL_SEED";
const LOG_VAR: &str = "CONTRACT_DSL_LOG";

/// Profile-based configuration for the command line tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub generator: GeneratorConfig,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig::default(),
            log_filter: "warn".to_string(),
        }
    }
}

impl Config {
    /// Loads a JSON profile; missing keys keep their defaults
    pub fn load_profile(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("Invalid profile {}", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| anyhow!("Invalid JSON: {}", e))
    }

    /// Applies `CONTRACT_DSL_SEED` and `CONTRACT_DSL_LOG` from the environment
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(seed) = lookup(SEED_VAR) {
            let seed = seed
                .trim()
                .parse::<u64>()
                .map_err(|e| anyhow!("{} must be an unsigned integer: {}", SEED_VAR, e))?;
            self.generator.seed = Some(seed);
        }
        if let Some(filter) = lookup(LOG_VAR) {
            self.log_filter = filter;
        }
        Ok(self)
    }
}
