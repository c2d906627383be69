use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct GolferScore {
    #[serde(default, deserialize_with = "super::de_label")]
    pub name: String,
    /// Strokes relative to par; lower is better.
    #[serde(default, deserialize_with = "super::de_score")]
    pub score: i32,
    #[serde(default, deserialize_with = "super::de_label")]
    pub position: String,
    #[serde(default, deserialize_with = "super::de_label")]
    pub thru: String,
}

/// One score set, from either the live feed or the `scores.json` snapshot.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScoresDocument {
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub tournament_status: Option<String>,
    #[serde(default)]
    pub current_round: Option<String>,
    #[serde(default)]
    pub scores: HashMap<String, GolferScore>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScoreOrigin {
    LiveFeed,
    Snapshot,
}

impl fmt::Display for ScoreOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreOrigin::LiveFeed => write!(f, "live feed"),
            ScoreOrigin::Snapshot => write!(f, "snapshot"),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct LoadedScores {
    pub document: ScoresDocument,
    pub origin: ScoreOrigin,
}
