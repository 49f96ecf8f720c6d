use crate::classifier::CategoryPolicy;
use crate::error::{JobReclassError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Persisted run defaults; CLI flags override these per invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub default_policy: CategoryPolicy,
    pub top_combinations: usize,
    pub snippet_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_policy: CategoryPolicy::WorkTypeOnly,
            top_combinations: 20,
            snippet_chars: 200,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| JobReclassError::Config("Home directory not found".into()))?;
        Ok(home.join(".config").join("job-reclass").join("config.json"))
    }

    pub fn set_policy(&mut self, policy: CategoryPolicy) -> Result<()> {
        self.default_policy = policy;
        self.save()
    }

    pub fn set_top_combinations(&mut self, top: usize) -> Result<()> {
        self.top_combinations = top;
        self.save()
    }

    pub fn set_snippet_chars(&mut self, chars: usize) -> Result<()> {
        self.snippet_chars = chars;
        self.save()
    }
}
