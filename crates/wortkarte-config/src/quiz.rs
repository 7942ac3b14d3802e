use std::env;

use serde::{Deserialize, Serialize};
use wortkarte_core::types::Tier;

fn default_show_romanization() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct QuizConfig {
    /// Tier preselected on the start screen
    #[serde(default)]
    pub default_tier: Tier,
    #[serde(default = "default_show_romanization")]
    pub show_romanization: bool,
    /// Show the plural form in the answer feedback
    #[serde(default)]
    pub show_plural: bool,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            default_tier: Tier::default(),
            show_romanization: default_show_romanization(),
            show_plural: false,
        }
    }
}

impl QuizConfig {
    pub fn new() -> Self {
        let default_tier = env::var("WORTKARTE_TIER")
            .ok()
            .and_then(|v| Tier::from_code(&v))
            .unwrap_or_default();

        Self {
            default_tier,
            ..Self::default()
        }
    }
}
