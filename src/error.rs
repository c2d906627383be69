use std::time::Duration;
use thiserror::Error;

/// Failure to obtain one of the JSON documents the site is built from.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("document not found: {0}")]
    NotFound(String),
    #[error("{path} returned status {status}")]
    Status { path: String, status: u16 },
    #[error("cannot address {name} under {base}: {message}")]
    BadUrl {
        base: String,
        name: String,
        message: String,
    },
    #[error("network error loading {path}: {message}")]
    Network { path: String, message: String },
    #[error("timed out after {after:?} loading {path}")]
    Timeout { path: String, after: Duration },
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    pub(crate) fn network(path: &str, err: &reqwest::Error) -> Self {
        Self::Network {
            path: path.to_string(),
            message: err.to_string(),
        }
    }
}

/// The live feed answered, but not in a shape we can map.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    #[error("feed root is not a JSON object")]
    NotAnObject,
    #[error("feed `player` field is not an array")]
    PlayersNotArray,
    #[error("feed player #{0} has no id")]
    MissingPlayerId(usize),
    #[error("feed player id {0} appears more than once")]
    DuplicatePlayerId(String),
}

#[derive(Error, Debug)]
pub enum FeedError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Transform(#[from] TransformError),
}
