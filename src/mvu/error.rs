use thiserror::Error;

use crate::error::{FeedError, LoadError, TransformError};

/// Failure of a whole view cycle. Cloned into the model, so it carries text only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("load error: {0}")]
    Load(String),
    #[error("feed error: {0}")]
    Feed(String),
    #[error("{0}")]
    Other(String),
}

impl From<LoadError> for AppError {
    fn from(e: LoadError) -> Self {
        Self::Load(e.to_string())
    }
}

impl From<TransformError> for AppError {
    fn from(e: TransformError) -> Self {
        Self::Feed(e.to_string())
    }
}

impl From<FeedError> for AppError {
    fn from(e: FeedError) -> Self {
        match e {
            FeedError::Load(e) => e.into(),
            FeedError::Transform(e) => e.into(),
        }
    }
}
