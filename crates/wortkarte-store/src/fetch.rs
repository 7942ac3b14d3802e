use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use wortkarte_core::error::LoadError;

/// Source of raw JSON resources, addressed by relative path
#[async_trait]
pub trait ResourceFetcher: Send + Sync {
    /// Fetch the resource body
    async fn fetch(&self, path: &str) -> Result<String, LoadError>;

    /// Human readable origin, for logs
    fn describe(&self) -> String;
}

/// Fetch `path` and decode it as JSON
pub async fn fetch_json<T: DeserializeOwned>(
    fetcher: &dyn ResourceFetcher,
    path: &str,
) -> Result<T, LoadError> {
    let body = fetcher.fetch(path).await?;

    serde_json::from_str(&body).map_err(|e| LoadError::Parse {
        path: path.to_string(),
        message: e.to_string(),
    })
}

/// Fetches resources relative to a base URL
#[derive(Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFetcher {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches("./").trim_start_matches('/')
        )
    }
}

#[async_trait]
impl ResourceFetcher for HttpFetcher {
    async fn fetch(&self, path: &str) -> Result<String, LoadError> {
        let url = self.url_for(path);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::CACHE_CONTROL, "no-cache")
            .send()
            .await
            .map_err(|e| LoadError::Fetch {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(LoadError::Status {
                path: path.to_string(),
                status: response.status().as_u16(),
            });
        }

        response.text().await.map_err(|e| LoadError::Fetch {
            path: path.to_string(),
            message: format!("Failed to read response body: {}", e),
        })
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}

/// Reads resources below a root directory
#[derive(Debug, Clone)]
pub struct FileFetcher {
    root: PathBuf,
}

impl FileFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl ResourceFetcher for FileFetcher {
    async fn fetch(&self, path: &str) -> Result<String, LoadError> {
        let file = self.root.join(path.trim_start_matches("./"));
        tracing::debug!("Reading {}", file.display());

        tokio::fs::read_to_string(&file)
            .await
            .map_err(|e| LoadError::Fetch {
                path: path.to_string(),
                message: format!("{}: {}", file.display(), e),
            })
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

/// Serves resources from memory. Counts fetches per path and can simulate latency.
#[derive(Debug, Default)]
pub struct MemoryFetcher {
    resources: HashMap<String, String>,
    delay: Option<Duration>,
    fetches: AtomicUsize,
}

impl MemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resource(mut self, path: impl Into<String>, body: impl Into<String>) -> Self {
        self.resources.insert(path.into(), body.into());
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Total number of fetch calls, successful or not
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ResourceFetcher for MemoryFetcher {
    async fn fetch(&self, path: &str) -> Result<String, LoadError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.resources
            .get(path)
            .cloned()
            .ok_or_else(|| LoadError::Status {
                path: path.to_string(),
                status: 404,
            })
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
