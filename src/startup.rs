use anyhow::{Context, Result};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::args::{DataLocation, Settings};
use crate::controller::documents::{DirectoryDocuments, DocumentSource, HttpDocuments};
use crate::controller::feed::{LiveFeedScores, MastersFeed};
use crate::controller::http_handlers::{AppState, SiteSettings};
use crate::controller::loader::{FallbackScores, Loader, ScoreSource, SnapshotScores};
use crate::controller::navigator::Navigator;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Shared HTTP client for the feed and remote documents.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialised.
pub fn build_http_client() -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .connect_timeout(Duration::from_secs(5))
        .build()
        .context("build http client")
}

/// Wires document source, score sources and loader into the state every handler shares.
#[must_use]
pub fn build_app_state(settings: &Settings, client: &Client) -> AppState {
    let documents: Arc<dyn DocumentSource> = match &settings.data {
        DataLocation::Directory(dir) => Arc::new(DirectoryDocuments::new(dir.clone())),
        DataLocation::Remote(url) => Arc::new(HttpDocuments::new(client.clone(), url)),
    };
    info!(data = %documents.location(), "serving pool documents");

    let snapshot: Arc<dyn ScoreSource> = Arc::new(SnapshotScores::new(documents.clone()));
    let live: Option<Arc<dyn ScoreSource>> = settings.feed_url.as_deref().map(|url| {
        info!(feed = url, timeout = ?settings.feed_timeout, "live scoring enabled");
        Arc::new(LiveFeedScores::new(MastersFeed::new(client.clone(), url), settings.year))
            as Arc<dyn ScoreSource>
    });
    let scores = Arc::new(FallbackScores::new(live, snapshot, settings.feed_timeout));

    AppState::new(
        Loader::new(documents, scores),
        Navigator::standard(),
        SiteSettings {
            title: settings.title.clone(),
            refresh_secs: settings.refresh_secs,
            utc_offset: settings.utc_offset,
        },
    )
}
