use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Importer configuration loaded from an optional `config.toml` plus
/// environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ImportConfig {
    /// Connection timeout for page fetches, in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,
    /// User-Agent header sent with page fetches
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            connect_timeout: default_connect_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (compatible; RecipeImportBot/1.0)".to_string()
}

impl ImportConfig {
    /// Load configuration with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_IMPORT__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_IMPORT__CONNECT_TIMEOUT
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("RECIPE_IMPORT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
