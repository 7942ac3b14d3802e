/// Language-specific pieces of a quiz: target language, base language, articles and the
/// fallback example sentence.
pub trait LanguagePack: Send + Sync {
    /// Target language identifier (ISO 639-1 code: "de", ...)
    fn code(&self) -> &str;

    /// Language the translations are written in
    fn base_code(&self) -> &str;

    /// Closed set of grammatical articles offered for nouns
    fn articles(&self) -> &[&'static str];

    /// Normalize text read from vocabulary resources
    fn normalize(&self, text: &str) -> String;

    /// Sentence shown when no example exists for a word
    fn fallback_example(&self, word: &str, translation: &str) -> String;

    /// Whether `article` belongs to the closed article set
    fn is_article(&self, article: &str) -> bool {
        let article = article.trim();
        self.articles()
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(article))
    }
}
