use serde::{Deserialize, Serialize};

fn default_color() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct UiConfig {
    /// Color articles and verdicts with ANSI escapes
    #[serde(default = "default_color")]
    pub color: bool,
    /// Clear the terminal before each new question
    #[serde(default)]
    pub clear_screen: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            clear_screen: false,
        }
    }
}
