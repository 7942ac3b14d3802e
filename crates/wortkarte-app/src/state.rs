use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::RwLock;
use wortkarte_config::Config;
use wortkarte_core::language::LanguagePack;
use wortkarte_lang_german::GermanLanguage;
use wortkarte_store::{
    ExampleResolver, FileFetcher, HttpFetcher, ResourceFetcher, ResourcePaths, VocabularyStore,
};

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub store: Arc<VocabularyStore>,
    pub resolver: ExampleResolver,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let fetcher: Arc<dyn ResourceFetcher> = match &config.data.base_url {
            Some(base_url) => {
                tracing::info!("Fetching vocabulary from {}", base_url);
                Arc::new(HttpFetcher::new(base_url.clone()))
            }
            None => {
                tracing::info!("Reading vocabulary from {}", config.data.data_dir);
                Arc::new(FileFetcher::new(PathBuf::from(&config.data.data_dir)))
            }
        };

        Self::with_fetcher(config, fetcher)
    }

    pub fn with_fetcher(config: Config, fetcher: Arc<dyn ResourceFetcher>) -> Self {
        let paths = ResourcePaths {
            vocabulary: config.data.vocabulary_path.clone(),
            examples: config.data.examples_path.clone(),
        };
        let store = Arc::new(VocabularyStore::new(
            fetcher,
            Arc::new(GermanLanguage::new()),
            paths,
        ));

        Self {
            config: Arc::new(RwLock::new(config)),
            resolver: ExampleResolver::new(Arc::clone(&store)),
            store,
        }
    }

    pub fn language(&self) -> &Arc<dyn LanguagePack> {
        self.store.language()
    }
}
