use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PREFIX: &str = "ARSIP";

/// Configuration for surat, stored next to the register documents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuratConfig {
    /// Prefix for automatically generated letter numbers.
    #[serde(default = "default_prefix")]
    pub number_prefix: String,
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

impl Default for SuratConfig {
    fn default() -> Self {
        Self {
            number_prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

impl SuratConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: SuratConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn number_prefix(&self) -> &str {
        &self.number_prefix
    }

    /// Set the number prefix, trimming surrounding whitespace.
    pub fn set_number_prefix(&mut self, prefix: &str) {
        self.number_prefix = prefix.trim().to_string();
    }
}
