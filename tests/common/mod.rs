#![allow(dead_code)]

use async_trait::async_trait;
use chrono::FixedOffset;
use serde_json::{Value, json};
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tempfile::TempDir;

use golf_pool::controller::documents::{
    DirectoryDocuments, DocumentSource, PICKS_DOCUMENT, SCORES_DOCUMENT, UPDATES_DOCUMENT,
};
use golf_pool::controller::http_handlers::{AppState, SiteSettings};
use golf_pool::controller::loader::{FallbackScores, Loader, ScoreSource, SnapshotScores};
use golf_pool::controller::navigator::Navigator;
use golf_pool::error::{FeedError, LoadError, TransformError};
use golf_pool::model::{LoadedScores, ScoreOrigin, ScoresDocument};

/// Participants A (golfer1, golfer2) and B (golfer2); golfer1 is -5, golfer2 is +3.
pub fn example_picks() -> Value {
    json!({
        "participants": [
            {"name": "B", "picks": [{"golferId": "golfer2"}]},
            {"name": "A", "picks": [{"golferId": "golfer1"}, {"golferId": "golfer2"}]}
        ]
    })
}

pub fn example_scores() -> Value {
    json!({
        "lastUpdated": "2025-04-12T19:45:00Z",
        "tournamentStatus": "In Progress",
        "currentRound": "Round 3",
        "scores": {
            "golfer1": {"name": "Golfer One", "score": -5, "position": "1", "thru": "F"},
            "golfer2": {"name": "Golfer Two", "score": 3, "position": "T20", "thru": "12"}
        }
    })
}

pub fn example_updates() -> Value {
    json!({
        "updates": [
            {"title": "Picks locked", "date": "2025-04-09", "content": "Good luck."},
            {"title": "Round 3 <recap>", "date": "2025-04-12", "content": "A leads.\n\nB chases."}
        ]
    })
}

/// Writes whichever documents are given into a fresh directory.
pub fn data_dir(picks: Option<&Value>, scores: Option<&Value>, updates: Option<&Value>) -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    for (name, doc) in [
        (PICKS_DOCUMENT, picks),
        (SCORES_DOCUMENT, scores),
        (UPDATES_DOCUMENT, updates),
    ] {
        if let Some(doc) = doc {
            write_document(dir.path(), name, doc);
        }
    }
    dir
}

pub fn example_data_dir() -> TempDir {
    data_dir(
        Some(&example_picks()),
        Some(&example_scores()),
        Some(&example_updates()),
    )
}

pub fn write_document(dir: &Path, name: &str, doc: &Value) {
    std::fs::write(dir.join(name), serde_json::to_string_pretty(doc).expect("json"))
        .expect("write document");
}

pub fn documents(dir: &Path) -> Arc<dyn DocumentSource> {
    Arc::new(DirectoryDocuments::new(dir))
}

pub fn loader_for(dir: &Path, primary: Option<Arc<dyn ScoreSource>>, timeout: Duration) -> Loader {
    let docs = documents(dir);
    let snapshot: Arc<dyn ScoreSource> = Arc::new(SnapshotScores::new(docs.clone()));
    Loader::new(docs, Arc::new(FallbackScores::new(primary, snapshot, timeout)))
}

pub fn state_for(loader: Loader) -> AppState {
    AppState::new(
        loader,
        Navigator::standard(),
        SiteSettings {
            title: "Test Pool".to_string(),
            refresh_secs: 300,
            utc_offset: FixedOffset::east_opt(0).expect("offset"),
        },
    )
}

pub fn live_document() -> ScoresDocument {
    serde_json::from_value(json!({
        "lastUpdated": "2025-04-13T20:00:00.000Z",
        "tournamentStatus": "Official",
        "currentRound": "Round 4",
        "scores": {
            "golfer1": {"name": "Golfer One", "score": -11, "position": "1", "thru": "F"}
        }
    }))
    .expect("live document")
}

/// Always answers with the same score set, counting calls.
pub struct FixedScores {
    pub document: ScoresDocument,
    pub calls: Arc<AtomicUsize>,
}

impl FixedScores {
    pub fn new(document: ScoresDocument) -> Self {
        Self {
            document,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl ScoreSource for FixedScores {
    async fn load(&self) -> Result<LoadedScores, FeedError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(LoadedScores {
            document: self.document.clone(),
            origin: ScoreOrigin::LiveFeed,
        })
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

pub struct FailingScores;

#[async_trait]
impl ScoreSource for FailingScores {
    async fn load(&self) -> Result<LoadedScores, FeedError> {
        Err(LoadError::Network {
            path: "https://feed.invalid/2025/scores.json".to_string(),
            message: "connection refused".to_string(),
        }
        .into())
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

pub struct MalformedScores;

#[async_trait]
impl ScoreSource for MalformedScores {
    async fn load(&self) -> Result<LoadedScores, FeedError> {
        Err(TransformError::PlayersNotArray.into())
    }

    fn name(&self) -> &'static str {
        "malformed"
    }
}

pub struct SlowScores(pub Duration);

#[async_trait]
impl ScoreSource for SlowScores {
    async fn load(&self) -> Result<LoadedScores, FeedError> {
        tokio::time::sleep(self.0).await;
        Ok(LoadedScores {
            document: live_document(),
            origin: ScoreOrigin::LiveFeed,
        })
    }

    fn name(&self) -> &'static str {
        "slow"
    }
}
