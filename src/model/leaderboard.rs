use serde::Serialize;

use super::{GolferScore, LoadedScores, Pick, ScoreOrigin};

/// A resolved pick as shown on the standings table.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct GolferRow {
    pub name: String,
    pub score: i32,
    pub position: String,
    pub thru: String,
}

impl From<&GolferScore> for GolferRow {
    fn from(golfer: &GolferScore) -> Self {
        Self {
            name: golfer.name.clone(),
            score: golfer.score,
            position: golfer.position.clone(),
            thru: golfer.thru.clone(),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub participant: String,
    pub total_score: i32,
    pub golfers: Vec<GolferRow>,
    pub picks: Vec<Pick>,
}

/// JSON shape of `/leaderboard?json=1`.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Standings {
    pub last_updated: Option<String>,
    pub tournament_status: Option<String>,
    pub current_round: Option<String>,
    pub origin: ScoreOrigin,
    pub entries: Vec<LeaderboardEntry>,
}

impl Standings {
    #[must_use]
    pub fn new(scores: &LoadedScores, entries: Vec<LeaderboardEntry>) -> Self {
        Self {
            last_updated: scores.document.last_updated.clone(),
            tournament_status: scores.document.tournament_status.clone(),
            current_round: scores.document.current_round.clone(),
            origin: scores.origin,
            entries,
        }
    }
}
