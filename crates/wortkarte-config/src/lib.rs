use std::env;

use serde::{Deserialize, Serialize};

use self::data::DataConfig;
use self::quiz::QuizConfig;
use self::ui::UiConfig;

pub mod data;
pub mod quiz;
pub mod ui;

fn default_channel_capacity() -> usize {
    64
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub data: DataConfig,
    pub quiz: QuizConfig,
    pub ui: UiConfig,

    /// Capacity of the app <-> UI channels
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            quiz: QuizConfig::default(),
            ui: UiConfig::default(),
            channel_capacity: default_channel_capacity(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        let channel_capacity = env::var("WORTKARTE_CHANNEL_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|capacity| *capacity > 0)
            .unwrap_or_else(default_channel_capacity);

        Config {
            data: DataConfig::new(),
            quiz: QuizConfig::new(),
            ui: UiConfig::default(),

            channel_capacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use wortkarte_core::types::Tier;

    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let json = r#"{ "quiz": { "default_tier": "B" }, "data": { "base_url": "http://localhost:3000" } }"#;
        let config: Config = serde_json::from_str(json).unwrap();

        assert_eq!(config.quiz.default_tier, Tier::B);
        assert!(config.quiz.show_romanization);
        assert!(config.data.uses_http());
        assert_eq!(config.data.vocabulary_path, "vocabulary.json");
        assert_eq!(config.data.examples_path, "examples.json");
        assert_eq!(config.channel_capacity, 64);
        assert!(config.ui.color);
    }

    #[test]
    fn empty_json_is_default() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert!(!config.data.uses_http());
        assert_eq!(config.data.data_dir, "data");
    }
}
