use wortkarte_core::language::LanguagePack;
use wortkarte_core::preprocess::{DefaultPreprocessor, Preprocessor};

use crate::article::Article;

const ARTICLES: [&str; 3] = [
    Article::Der.as_str(),
    Article::Die.as_str(),
    Article::Das.as_str(),
];

/// German target language, English base language
#[derive(Debug, Clone, Copy, Default)]
pub struct GermanLanguage;

impl GermanLanguage {
    pub fn new() -> Self {
        Self
    }
}

impl LanguagePack for GermanLanguage {
    fn code(&self) -> &str {
        "de"
    }

    fn base_code(&self) -> &str {
        "en"
    }

    fn articles(&self) -> &[&'static str] {
        &ARTICLES
    }

    fn normalize(&self, text: &str) -> String {
        DefaultPreprocessor.process(text)
    }

    fn fallback_example(&self, word: &str, translation: &str) -> String {
        format!(
            "\"{word}\" bedeutet \"{translation}\" auf Englisch. (\"{word}\" means \"{translation}\" in English.)"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_mentions_both_words() {
        let sentence = GermanLanguage.fallback_example("gut", "good");
        assert_eq!(
            sentence,
            "\"gut\" bedeutet \"good\" auf Englisch. (\"gut\" means \"good\" in English.)"
        );
    }

    #[test]
    fn article_set() {
        let german = GermanLanguage::new();
        assert_eq!(german.articles(), ["der", "die", "das"]);
        assert!(german.is_article("Die"));
        assert!(!german.is_article("dem"));
    }

    #[test]
    fn normalizes_to_nfc() {
        assert_eq!(GermanLanguage.normalize(" Fu\u{0308}r "), "F\u{00fc}r");
    }
}
