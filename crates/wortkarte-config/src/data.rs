use std::env;

use serde::{Deserialize, Serialize};

fn default_data_dir() -> String {
    "data".to_string()
}

fn default_vocabulary_path() -> String {
    "vocabulary.json".to_string()
}

fn default_examples_path() -> String {
    "examples.json".to_string()
}

/// Where the vocabulary and example resources come from
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DataConfig {
    /// Fetch over HTTP from this base URL; when unset, read from `data_dir`
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_vocabulary_path")]
    pub vocabulary_path: String,
    #[serde(default = "default_examples_path")]
    pub examples_path: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            data_dir: default_data_dir(),
            vocabulary_path: default_vocabulary_path(),
            examples_path: default_examples_path(),
        }
    }
}

impl DataConfig {
    pub fn new() -> Self {
        let base_url = env::var("WORTKARTE_BASE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty());

        let data_dir = env::var("WORTKARTE_DATA_DIR").unwrap_or_else(|_| default_data_dir());

        let vocabulary_path =
            env::var("WORTKARTE_VOCABULARY_PATH").unwrap_or_else(|_| default_vocabulary_path());

        let examples_path =
            env::var("WORTKARTE_EXAMPLES_PATH").unwrap_or_else(|_| default_examples_path());

        Self {
            base_url,
            data_dir,
            vocabulary_path,
            examples_path,
        }
    }

    pub fn uses_http(&self) -> bool {
        self.base_url.is_some()
    }
}
