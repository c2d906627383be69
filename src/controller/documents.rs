use async_trait::async_trait;
use reqwest::{Client, Url};
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::LoadError;

pub const PICKS_DOCUMENT: &str = "picks.json";
pub const SCORES_DOCUMENT: &str = "scores.json";
pub const UPDATES_DOCUMENT: &str = "updates.json";

/// Where the static JSON documents live. Documents are addressed by a relative name.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    async fn fetch(&self, name: &str) -> Result<String, LoadError>;

    /// Human-readable location, for logs.
    fn location(&self) -> String;
}

/// Fetches `name` from `source` and decodes it.
///
/// # Errors
///
/// Returns `LoadError` if the document is missing, unreachable or not valid JSON for `T`.
pub async fn fetch_json<T: DeserializeOwned>(
    source: &dyn DocumentSource,
    name: &str,
) -> Result<T, LoadError> {
    let body = source.fetch(name).await?;
    serde_json::from_str(&body).map_err(|source| LoadError::Parse {
        path: name.to_string(),
        source,
    })
}

pub struct DirectoryDocuments {
    root: PathBuf,
}

impl DirectoryDocuments {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl DocumentSource for DirectoryDocuments {
    async fn fetch(&self, name: &str) -> Result<String, LoadError> {
        let path = self.root.join(name);
        debug!(path = %path.display(), "reading document");
        tokio::fs::read_to_string(&path).await.map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                LoadError::NotFound(path.display().to_string())
            } else {
                LoadError::Io {
                    path: path.display().to_string(),
                    source,
                }
            }
        })
    }

    fn location(&self) -> String {
        self.root.display().to_string()
    }
}

/// Documents published on a static host, e.g. the site the pool is normally served from.
pub struct HttpDocuments {
    client: Client,
    base_url: Url,
}

impl HttpDocuments {
    /// `base_url` is treated as a directory even without a trailing slash.
    #[must_use]
    pub fn new(client: Client, base_url: &Url) -> Self {
        let mut base_url = base_url.clone();
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Self { client, base_url }
    }

    /// # Errors
    ///
    /// Returns `LoadError::BadUrl` if `name` cannot be joined onto the base URL.
    pub fn url_for(&self, name: &str) -> Result<Url, LoadError> {
        self.base_url
            .join(name.trim_start_matches('/'))
            .map_err(|e| LoadError::BadUrl {
                base: self.base_url.to_string(),
                name: name.to_string(),
                message: e.to_string(),
            })
    }
}

#[async_trait]
impl DocumentSource for HttpDocuments {
    async fn fetch(&self, name: &str) -> Result<String, LoadError> {
        let url = self.url_for(name)?;
        debug!(%url, "fetching document");
        let resp = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| LoadError::network(url.as_str(), &e))?;

        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LoadError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            return Err(LoadError::Status {
                path: url.to_string(),
                status: status.as_u16(),
            });
        }
        resp.text()
            .await
            .map_err(|e| LoadError::network(url.as_str(), &e))
    }

    fn location(&self) -> String {
        self.base_url.to_string()
    }
}
