use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Deserialize;
use wortkarte_core::error::{LoadError, StoreError};
use wortkarte_core::language::LanguagePack;
use wortkarte_core::types::{ExampleMap, Tier, VocabularyPool, Word};

use crate::cache::ResourceCache;
use crate::fetch::{ResourceFetcher, fetch_json};

/// Relative paths of the two resources
#[derive(Debug, Clone)]
pub struct ResourcePaths {
    pub vocabulary: String,
    pub examples: String,
}

impl Default for ResourcePaths {
    fn default() -> Self {
        Self {
            vocabulary: "vocabulary.json".to_string(),
            examples: "examples.json".to_string(),
        }
    }
}

/// Vocabulary file shape: `{ "A": [record, ...], "B": [...], ... }`
type VocabularyFile = BTreeMap<String, Vec<RawWord>>;

// Some vocabulary files spell the example key `exampleID`
#[derive(Debug, Deserialize)]
struct RawWord {
    id: String,
    word: String,
    translation: String,
    #[serde(default)]
    romanization: Option<String>,
    #[serde(default)]
    article: Option<String>,
    #[serde(default)]
    plural: Option<String>,
    #[serde(default)]
    level: Option<String>,
    #[serde(default, rename = "exampleId")]
    example_id: Option<String>,
    #[serde(default, rename = "exampleID")]
    legacy_example_id: Option<String>,
}

impl RawWord {
    /// `group` is the tier key the record was listed under
    fn into_word(self, group: &str, language: &dyn LanguagePack) -> Word {
        let normalize = |value: Option<String>| {
            value
                .map(|v| language.normalize(&v))
                .filter(|v| !v.is_empty())
        };

        Word {
            id: self.id,
            word: language.normalize(&self.word),
            translation: language.normalize(&self.translation),
            romanization: normalize(self.romanization),
            // an empty article stays Some("") and never asks for an article
            article: self.article.map(|a| language.normalize(&a)),
            plural: normalize(self.plural),
            level: normalize(self.level).or_else(|| Some(group.to_string())),
            example_id: self.example_id.or(self.legacy_example_id),
        }
    }
}

/// Loads and memoizes the vocabulary and example resources.
///
/// One store per application; construct a fresh one to start from a clean cache.
pub struct VocabularyStore {
    fetcher: Arc<dyn ResourceFetcher>,
    language: Arc<dyn LanguagePack>,
    paths: ResourcePaths,
    words: ResourceCache<Vec<Word>>,
    examples: ResourceCache<ExampleMap>,
}

impl VocabularyStore {
    pub fn new(
        fetcher: Arc<dyn ResourceFetcher>,
        language: Arc<dyn LanguagePack>,
        paths: ResourcePaths,
    ) -> Self {
        Self {
            fetcher,
            language,
            paths,
            words: ResourceCache::new(),
            examples: ResourceCache::new(),
        }
    }

    pub fn language(&self) -> &Arc<dyn LanguagePack> {
        &self.language
    }

    /// Words of `tier`, loading the vocabulary on first use
    pub async fn load(&self, tier: Tier) -> Result<VocabularyPool, StoreError> {
        let words = self.words().await?;

        let selected: Vec<Word> = words
            .iter()
            .filter(|w| w.level.as_deref() == Some(tier.as_str()))
            .cloned()
            .collect();

        tracing::info!(
            "Selected {} of {} words for level {}",
            selected.len(),
            words.len(),
            tier
        );

        VocabularyPool::new(tier, selected)
    }

    /// All words of every tier
    pub async fn words(&self) -> Result<Arc<Vec<Word>>, LoadError> {
        let fetcher = Arc::clone(&self.fetcher);
        let language = Arc::clone(&self.language);
        let path = self.paths.vocabulary.clone();

        self.words
            .load(move || async move {
                tracing::info!("Loading vocabulary from {} ({})", path, fetcher.describe());
                let file: VocabularyFile = fetch_json(fetcher.as_ref(), &path).await?;

                let words: Vec<Word> = file
                    .into_iter()
                    .flat_map(|(group, records)| {
                        let language = Arc::clone(&language);
                        records
                            .into_iter()
                            .map(move |raw| raw.into_word(&group, language.as_ref()))
                    })
                    .collect();

                tracing::info!("Loaded {} vocabulary entries", words.len());
                Ok(words)
            })
            .await
    }

    /// Word by id, loading the vocabulary if needed
    pub async fn lookup(&self, id: &str) -> Result<Option<Word>, LoadError> {
        let words = self.words().await?;
        Ok(words.iter().find(|w| w.id == id).cloned())
    }

    /// Example map, loading it on first use
    pub async fn examples(&self) -> Result<Arc<ExampleMap>, LoadError> {
        let fetcher = Arc::clone(&self.fetcher);
        let path = self.paths.examples.clone();

        self.examples
            .load(move || async move {
                tracing::info!("Loading examples from {} ({})", path, fetcher.describe());
                let examples: ExampleMap = fetch_json(fetcher.as_ref(), &path).await?;
                tracing::info!("Loaded {} example sentences", examples.len());
                Ok(examples)
            })
            .await
    }

    /// Example map if already loaded
    pub async fn cached_examples(&self) -> Option<Arc<ExampleMap>> {
        self.examples.get().await
    }

    /// Load vocabulary and examples concurrently
    pub async fn load_all(&self) -> Result<(Arc<Vec<Word>>, Arc<ExampleMap>), LoadError> {
        tokio::try_join!(self.words(), self.examples())
    }

    /// Forget both resources; the next access fetches again
    pub async fn invalidate(&self) {
        self.words.invalidate().await;
        self.examples.invalidate().await;
        tracing::debug!("Vocabulary caches cleared");
    }
}

#[cfg(test)]
mod tests {
    use wortkarte_lang_german::GermanLanguage;

    use super::*;
    use crate::fetch::MemoryFetcher;

    const VOCABULARY: &str = r#"{
        "A": [
            {"id": "a1", "word": "Haus", "translation": "house", "article": "das", "level": "A", "exampleId": "ex1"},
            {"id": "a2", "word": "gut", "translation": "good", "level": "A", "exampleID": "ex2"},
            {"id": "a3", "word": "Hund", "translation": "dog", "article": "der", "exampleId": "ex3", "exampleID": "legacy"},
            {"id": "a4", "word": "Ding", "translation": "thing", "article": ""}
        ],
        "B": [
            {"id": "b1", "word": "Erfahrung", "translation": "experience", "article": "die", "level": "B"}
        ],
        "C": []
    }"#;

    const EXAMPLES: &str = r#"{ "ex1": "Das Haus ist groß." }"#;

    fn store_with(fetcher: MemoryFetcher) -> (Arc<MemoryFetcher>, VocabularyStore) {
        let fetcher = Arc::new(fetcher);
        let store = VocabularyStore::new(
            fetcher.clone(),
            Arc::new(GermanLanguage),
            ResourcePaths::default(),
        );
        (fetcher, store)
    }

    fn default_store() -> (Arc<MemoryFetcher>, VocabularyStore) {
        store_with(
            MemoryFetcher::new()
                .with_resource("vocabulary.json", VOCABULARY)
                .with_resource("examples.json", EXAMPLES),
        )
    }

    #[tokio::test]
    async fn load_selects_tier_and_memoizes() {
        let (fetcher, store) = default_store();

        let pool = store.load(Tier::A).await.unwrap();
        assert_eq!(pool.len(), 4);
        assert_eq!(pool.tier(), Tier::A);

        let pool = store.load(Tier::B).await.unwrap();
        assert_eq!(pool.words()[0].word, "Erfahrung");

        assert_eq!(fetcher.fetch_count(), 1);
    }

    #[tokio::test]
    async fn empty_tier_is_an_error() {
        let (_, store) = default_store();

        let err = store.load(Tier::C).await.unwrap_err();
        assert_eq!(
            err,
            StoreError::EmptyPool {
                tier: "C".to_string()
            }
        );
        assert_eq!(err.to_string(), "No words found for level C");
    }

    #[tokio::test]
    async fn fetch_failure_propagates() {
        let (_, store) = store_with(MemoryFetcher::new());

        let err = store.load(Tier::A).await.unwrap_err();
        assert!(matches!(err, StoreError::Load(LoadError::Status { status: 404, .. })));
    }

    #[tokio::test]
    async fn malformed_vocabulary_is_load_error() {
        let (_, store) =
            store_with(MemoryFetcher::new().with_resource("vocabulary.json", r#"{"A": [{"id": 1}]}"#));

        let err = store.load(Tier::A).await.unwrap_err();
        assert!(matches!(err, StoreError::Load(LoadError::Parse { .. })));
    }

    #[tokio::test]
    async fn example_keys_are_normalized() {
        let (_, store) = default_store();

        let gut = store.lookup("a2").await.unwrap().unwrap();
        assert_eq!(gut.example_id.as_deref(), Some("ex2"));

        // canonical spelling wins when both are present
        let hund = store.lookup("a3").await.unwrap().unwrap();
        assert_eq!(hund.example_id.as_deref(), Some("ex3"));

        assert!(store.lookup("zz").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn missing_level_falls_back_to_group() {
        let (_, store) = default_store();

        let hund = store.lookup("a3").await.unwrap().unwrap();
        assert_eq!(hund.level.as_deref(), Some("A"));
    }

    #[tokio::test]
    async fn empty_article_does_not_require_one() {
        let (_, store) = default_store();

        let ding = store.lookup("a4").await.unwrap().unwrap();
        assert!(!ding.requires_article());
    }

    #[tokio::test]
    async fn bundled_data_loads_every_level() {
        let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data");
        let store = VocabularyStore::new(
            Arc::new(crate::fetch::FileFetcher::new(root)),
            Arc::new(GermanLanguage),
            ResourcePaths::default(),
        );

        for tier in Tier::ALL {
            assert!(!store.load(tier).await.unwrap().is_empty());
        }

        let examples = store.examples().await.unwrap();
        for word in store.words().await.unwrap().iter() {
            if let Some(id) = &word.example_id {
                assert!(examples.contains_key(id), "missing example {}", id);
            }
        }
    }

    #[tokio::test]
    async fn invalidate_forces_refetch() {
        let (fetcher, store) = default_store();

        store.load_all().await.unwrap();
        assert_eq!(fetcher.fetch_count(), 2);
        assert!(store.cached_examples().await.is_some());

        store.invalidate().await;
        assert!(store.cached_examples().await.is_none());

        store.load(Tier::A).await.unwrap();
        assert_eq!(fetcher.fetch_count(), 3);
    }
}
