use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_WORDS_PER_LINE: usize = 5;

/// Configuration for lexicat, stored as config.json in the config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LexicatConfig {
    /// Words shown per line when a category is printed
    #[serde(default = "default_words_per_line")]
    pub words_per_line: usize,
}

fn default_words_per_line() -> usize {
    DEFAULT_WORDS_PER_LINE
}

impl Default for LexicatConfig {
    fn default() -> Self {
        Self {
            words_per_line: DEFAULT_WORDS_PER_LINE,
        }
    }
}

impl LexicatConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: LexicatConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory, creating it if needed
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

    /// Words per line for display, floored at 1.
    pub fn words_per_line(&self) -> usize {
        self.words_per_line.max(1)
    }
}
