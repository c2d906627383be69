use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use super::documents::{
    DocumentSource, PICKS_DOCUMENT, SCORES_DOCUMENT, UPDATES_DOCUMENT, fetch_json,
};
use crate::error::{FeedError, LoadError};
use crate::model::{LoadedScores, PicksDocument, ScoreOrigin, ScoresDocument, UpdatesDocument};

pub const DEFAULT_FEED_TIMEOUT: Duration = Duration::from_secs(10);

/// Anything that can produce a full score set.
#[async_trait]
pub trait ScoreSource: Send + Sync {
    async fn load(&self) -> Result<LoadedScores, FeedError>;

    fn name(&self) -> &'static str;
}

/// The `scores.json` snapshot kept next to the picks.
pub struct SnapshotScores {
    documents: Arc<dyn DocumentSource>,
}

impl SnapshotScores {
    #[must_use]
    pub fn new(documents: Arc<dyn DocumentSource>) -> Self {
        Self { documents }
    }
}

#[async_trait]
impl ScoreSource for SnapshotScores {
    async fn load(&self) -> Result<LoadedScores, FeedError> {
        let document: ScoresDocument = fetch_json(self.documents.as_ref(), SCORES_DOCUMENT).await?;
        Ok(LoadedScores {
            document,
            origin: ScoreOrigin::Snapshot,
        })
    }

    fn name(&self) -> &'static str {
        "snapshot"
    }
}

/// Tries `primary` within `timeout`; on any failure the whole score set comes from
/// `fallback` instead. The two are never merged.
pub struct FallbackScores {
    primary: Option<Arc<dyn ScoreSource>>,
    fallback: Arc<dyn ScoreSource>,
    timeout: Duration,
}

impl FallbackScores {
    #[must_use]
    pub fn new(
        primary: Option<Arc<dyn ScoreSource>>,
        fallback: Arc<dyn ScoreSource>,
        timeout: Duration,
    ) -> Self {
        Self {
            primary,
            fallback,
            timeout,
        }
    }
}

#[async_trait]
impl ScoreSource for FallbackScores {
    async fn load(&self) -> Result<LoadedScores, FeedError> {
        if let Some(primary) = &self.primary {
            match tokio::time::timeout(self.timeout, primary.load()).await {
                Ok(Ok(scores)) => {
                    info!(source = primary.name(), golfers = scores.document.scores.len(), "scores loaded");
                    return Ok(scores);
                }
                Ok(Err(err)) => {
                    warn!(source = primary.name(), error = %err, "falling back to {}", self.fallback.name());
                }
                Err(_) => {
                    let err = LoadError::Timeout {
                        path: primary.name().to_string(),
                        after: self.timeout,
                    };
                    warn!(source = primary.name(), error = %err, "falling back to {}", self.fallback.name());
                }
            }
        }

        let scores = self.fallback.load().await?;
        info!(source = self.fallback.name(), golfers = scores.document.scores.len(), "scores loaded");
        Ok(scores)
    }

    /// Which inner source answered is logged per load; this names the strategy.
    fn name(&self) -> &'static str {
        "fallback"
    }
}

/// Fetches the three documents a load cycle needs. Nothing is cached between calls.
#[derive(Clone)]
pub struct Loader {
    documents: Arc<dyn DocumentSource>,
    scores: Arc<dyn ScoreSource>,
}

impl Loader {
    #[must_use]
    pub fn new(documents: Arc<dyn DocumentSource>, scores: Arc<dyn ScoreSource>) -> Self {
        Self { documents, scores }
    }

    /// # Errors
    ///
    /// Returns `LoadError` if `picks.json` cannot be fetched or parsed.
    pub async fn load_picks(&self) -> Result<PicksDocument, LoadError> {
        fetch_json(self.documents.as_ref(), PICKS_DOCUMENT).await
    }

    /// # Errors
    ///
    /// Returns an error only if the last-resort score source fails as well.
    pub async fn load_scores(&self) -> Result<LoadedScores, FeedError> {
        self.scores.load().await
    }

    /// # Errors
    ///
    /// Returns `LoadError` if `updates.json` cannot be fetched or parsed.
    pub async fn load_updates(&self) -> Result<UpdatesDocument, LoadError> {
        fetch_json(self.documents.as_ref(), UPDATES_DOCUMENT).await
    }

    #[must_use]
    pub fn documents(&self) -> &Arc<dyn DocumentSource> {
        &self.documents
    }
}
