use serde::{Deserialize, Serialize};

/// German definite article (nominative singular)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Article {
    Der, // masculine
    Die, // feminine
    Das, // neuter
}

impl Article {
    pub const ALL: [Article; 3] = [Article::Der, Article::Die, Article::Das];

    /// Parse article, accepting any letter case
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "der" => Some(Article::Der),
            "die" => Some(Article::Die),
            "das" => Some(Article::Das),
            _ => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Article::Der => "der",
            Article::Die => "die",
            Article::Das => "das",
        }
    }

    /// Grammatical gender
    pub fn gender(&self) -> &'static str {
        match self {
            Article::Der => "masculine",
            Article::Die => "feminine",
            Article::Das => "neuter",
        }
    }

    /// Terminal color code used when printing the article
    pub fn ansi_color(&self) -> &'static str {
        match self {
            Article::Der => "\x1b[34m",
            Article::Die => "\x1b[31m",
            Article::Das => "\x1b[32m",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_any_case() {
        assert_eq!(Article::from_str("Der"), Some(Article::Der));
        assert_eq!(Article::from_str(" DAS "), Some(Article::Das));
        assert_eq!(Article::from_str("den"), None);
    }

    #[test]
    fn genders() {
        let genders: Vec<&str> = Article::ALL.iter().map(Article::gender).collect();
        assert_eq!(genders, ["masculine", "feminine", "neuter"]);
    }
}
