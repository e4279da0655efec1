use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from `config.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Branch a feature branch is compared against when no
    /// `glyph.branch.<name>.parent` is set
    #[serde(default = "default_parent")]
    pub default_parent: String,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_parent: default_parent(),
            ui: UiConfig::default(),
        }
    }
}

fn default_parent() -> String {
    "main".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Theme color overrides, e.g. `highlight = "#FB4196"`
    #[serde(default)]
    pub colors: HashMap<String, String>,
}
