use std::collections::HashMap;

use crate::model::{GolferRow, GolferScore, LeaderboardEntry, Participant, PicksDocument, ScoresDocument};

/// Joins picks with the current scores and ranks participants, lowest total first.
///
/// A pick with no matching golfer score adds nothing to the total and is left out
/// of the golfer list. Participants with equal totals keep their order from the
/// picks document.
#[must_use]
pub fn build_leaderboard(picks: &PicksDocument, scores: &ScoresDocument) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = picks
        .participants
        .iter()
        .map(|participant| score_participant(participant, &scores.scores))
        .collect();

    // sort_by_key is stable
    entries.sort_by_key(|entry| entry.total_score);
    entries
}

fn score_participant(
    participant: &Participant,
    scores: &HashMap<String, GolferScore>,
) -> LeaderboardEntry {
    let golfers: Vec<GolferRow> = participant
        .picks
        .iter()
        .filter_map(|pick| scores.get(&pick.golfer_id))
        .map(GolferRow::from)
        .collect();

    LeaderboardEntry {
        participant: participant.name.clone(),
        total_score: golfers
            .iter()
            .fold(0_i32, |total, g| total.saturating_add(g.score)),
        golfers,
        picks: participant.picks.clone(),
    }
}
