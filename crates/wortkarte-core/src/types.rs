use std::collections::HashMap;
use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Example id -> example sentence
pub type ExampleMap = HashMap<String, String>;

/// Vocabulary entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub id: String,
    pub word: String,
    pub translation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub romanization: Option<String>,
    /// Grammatical article, nouns only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plural: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example_id: Option<String>,
}

impl Word {
    pub fn new(
        id: impl Into<String>,
        word: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            word: word.into(),
            translation: translation.into(),
            romanization: None,
            article: None,
            plural: None,
            level: None,
            example_id: None,
        }
    }

    pub fn with_article(mut self, article: impl Into<String>) -> Self {
        self.article = Some(article.into());
        self
    }

    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    pub fn with_example(mut self, example_id: impl Into<String>) -> Self {
        self.example_id = Some(example_id.into());
        self
    }

    /// An empty or blank article does not count
    pub fn requires_article(&self) -> bool {
        self.article
            .as_deref()
            .is_some_and(|article| !article.trim().is_empty())
    }

    /// Headword with its article, e.g. "das Haus"
    pub fn display_form(&self) -> String {
        match self.article.as_deref() {
            Some(article) if self.requires_article() => format!("{} {}", article, self.word),
            _ => self.word.clone(),
        }
    }
}

/// Difficulty tier
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Tier {
    #[default]
    A, // A1-A2
    B, // B1-B2
    C, // C1-C2
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::A, Tier::B, Tier::C];

    /// Parse tier from its code
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "A" => Some(Tier::A),
            "B" => Some(Tier::B),
            "C" => Some(Tier::C),
            _ => None,
        }
    }

    /// Code used as the grouping key and `level` value in the vocabulary resource
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::A => "A",
            Tier::B => "B",
            Tier::C => "C",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::A => "A (A1-A2)",
            Tier::B => "B (B1-B2)",
            Tier::C => "C (C1-C2)",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Tier::A => "Beginner",
            Tier::B => "Intermediate",
            Tier::C => "Advanced",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tier::from_code(s).ok_or_else(|| format!("unknown tier '{s}', expected one of A, B, C"))
    }
}

/// Words of one tier. Never empty.
#[derive(Debug, Clone)]
pub struct VocabularyPool {
    tier: Tier,
    words: Vec<Word>,
}

impl VocabularyPool {
    pub fn new(tier: Tier, words: Vec<Word>) -> Result<Self, StoreError> {
        if words.is_empty() {
            return Err(StoreError::EmptyPool {
                tier: tier.to_string(),
            });
        }

        Ok(Self { tier, words })
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Uniform pick, with replacement across calls
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        &self.words[rng.gen_range(0..self.words.len())]
    }

    pub fn get(&self, id: &str) -> Option<&Word> {
        self.words.iter().find(|w| w.id == id)
    }
}
