pub mod cache;
pub mod examples;
pub mod fetch;
pub mod vocabulary;

pub use cache::ResourceCache;
pub use examples::ExampleResolver;
pub use fetch::{FileFetcher, HttpFetcher, MemoryFetcher, ResourceFetcher, fetch_json};
pub use vocabulary::{ResourcePaths, VocabularyStore};
