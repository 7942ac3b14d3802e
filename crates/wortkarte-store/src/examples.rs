use std::sync::Arc;

use crate::vocabulary::VocabularyStore;

/// Turns a word's example id into a sentence for the feedback card.
///
/// Never fails: a missing id, a failed load or an unknown id all produce the language's
/// fallback sentence.
#[derive(Clone)]
pub struct ExampleResolver {
    store: Arc<VocabularyStore>,
}

impl ExampleResolver {
    pub fn new(store: Arc<VocabularyStore>) -> Self {
        Self { store }
    }

    /// Resolve, loading the example resource on first use. Concurrent callers share a
    /// single load.
    pub async fn resolve(&self, example_id: Option<&str>, translation: &str, word: &str) -> String {
        let Some(id) = example_id.filter(|id| !id.is_empty()) else {
            return self.fallback(word, translation);
        };

        match self.store.examples().await {
            Ok(examples) => match examples.get(id) {
                Some(sentence) => sentence.clone(),
                None => {
                    tracing::debug!("No example sentence for id {}", id);
                    self.fallback(word, translation)
                }
            },
            Err(e) => {
                tracing::warn!("Examples unavailable, using fallback: {}", e);
                self.fallback(word, translation)
            }
        }
    }

    /// Resolve against whatever is cached, never fetching
    pub async fn resolve_cached(
        &self,
        example_id: Option<&str>,
        translation: &str,
        word: &str,
    ) -> String {
        let cached = match example_id.filter(|id| !id.is_empty()) {
            Some(id) => self
                .store
                .cached_examples()
                .await
                .and_then(|examples| examples.get(id).cloned()),
            None => None,
        };

        cached.unwrap_or_else(|| self.fallback(word, translation))
    }

    fn fallback(&self, word: &str, translation: &str) -> String {
        self.store.language().fallback_example(word, translation)
    }
}
