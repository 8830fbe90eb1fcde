use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::i18n::Language;

/// Catalog configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Base URL the per-language recipe documents are served from
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Language selected at startup
    #[serde(default = "default_language")]
    pub default_language: Language,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// File the theme preference is persisted to
    #[serde(default = "default_theme_file")]
    pub theme_file: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            default_language: default_language(),
            timeout: default_timeout(),
            theme_file: default_theme_file(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "http://localhost:8000/data".to_string()
}

fn default_language() -> Language {
    Language::Cn
}

fn default_timeout() -> u64 {
    30
}

fn default_theme_file() -> String {
    "theme.json".to_string()
}

impl CatalogConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE__BASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`CatalogConfig::load`].
pub fn load_config() -> Result<CatalogConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Environment variables with RECIPE_ prefix
        // Use double underscore for nested: RECIPE__BASE_URL
        .add_source(
            Environment::with_prefix("RECIPE")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
