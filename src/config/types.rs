use serde::{Deserialize, Serialize};

use crate::metadata::providers::IMDB_BASE_URL;
use crate::metadata::SearchModes;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub imdb: ImdbConfig,

    #[serde(default)]
    pub rename: RenameConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ImdbConfig {
    /// imdb-api.com API key (overridden by `REELNAME_API_KEY`)
    #[serde(default)]
    pub api_key: String,

    /// Language segment used for title and search requests
    #[serde(default = "default_language")]
    pub language: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_base_url() -> String {
    IMDB_BASE_URL.to_string()
}

impl Default for ImdbConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            language: default_language(),
            base_url: default_base_url(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RenameConfig {
    #[serde(default = "default_true")]
    pub advanced_search: bool,

    #[serde(default = "default_true")]
    pub basic_search: bool,

    /// Report renames without touching the filesystem
    #[serde(default)]
    pub simulate: bool,

    /// Added to every episode number before naming
    #[serde(default)]
    pub offset: i64,

    /// Accepted video extensions, with or without the leading dot
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Ask on the terminal when a search stays ambiguous
    #[serde(default = "default_true")]
    pub interactive: bool,
}

fn default_true() -> bool {
    true
}

fn default_extensions() -> Vec<String> {
    reelname_common::paths::video_extensions()
        .iter()
        .map(|e| e.to_string())
        .collect()
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self {
            advanced_search: true,
            basic_search: true,
            simulate: false,
            offset: 0,
            extensions: default_extensions(),
            interactive: true,
        }
    }
}

impl RenameConfig {
    pub fn search_modes(&self) -> SearchModes {
        SearchModes {
            advanced: self.advanced_search,
            basic: self.basic_search,
        }
    }
}
