mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Environment variable that overrides `imdb.api_key`.
pub const API_KEY_ENV: &str = "REELNAME_API_KEY";

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    apply_env_overrides(&mut config);
    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = [
        "./reelname.toml",
        "./config.toml",
        "~/.config/reelname/config.toml",
        "/etc/reelname/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Using config file: {:?}", path);
            return load_config(path);
        }
    }

    // Return default config if no file found
    let mut config = Config::default();
    apply_env_overrides(&mut config);
    Ok(config)
}

fn apply_env_overrides(config: &mut Config) {
    if let Ok(key) = std::env::var(API_KEY_ENV) {
        if !key.trim().is_empty() {
            config.imdb.api_key = key;
        }
    }
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    if !config.rename.advanced_search && !config.rename.basic_search {
        anyhow::bail!("At least one of advanced_search and basic_search must be enabled");
    }

    if config.rename.extensions.is_empty() {
        anyhow::bail!("No video extensions configured");
    }

    if config.imdb.api_key.is_empty() {
        tracing::warn!(
            "No IMDb API key configured; set imdb.api_key or {}",
            API_KEY_ENV
        );
    }

    Ok(())
}
