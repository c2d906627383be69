use chrono::FixedOffset;
use maud::{Markup, html};

use super::format::{format_last_updated, signed_score};
use crate::model::{LeaderboardEntry, LoadedScores};

pub const LEADERBOARD_ERROR: &str = "Failed to load leaderboard data";

#[must_use]
pub fn rank_class(rank: usize) -> &'static str {
    match rank {
        1 => "first",
        2 => "second",
        3 => "third",
        _ => "",
    }
}

/// `Scottie Scheffler (-8), Rory McIlroy (+2)`
#[must_use]
pub fn golfer_summary(entry: &LeaderboardEntry) -> String {
    entry
        .golfers
        .iter()
        .map(|g| format!("{} ({})", g.name, signed_score(g.score)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn or_dash(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => "-",
    }
}

/// Whole content of `#leaderboard-container`: tournament status, then standings.
#[must_use]
pub fn render_leaderboard(
    entries: &[LeaderboardEntry],
    scores: &LoadedScores,
    offset: FixedOffset,
) -> Markup {
    let doc = &scores.document;
    html! {
        div class="tournament-status" {
            div class="status-item" {
                span class="status-label" { "Round" }
                span id="current-round" { (or_dash(doc.current_round.as_deref())) }
            }
            div class="status-item" {
                span class="status-label" { "Status" }
                span id="tournament-status" { (or_dash(doc.tournament_status.as_deref())) }
            }
            div class="status-item" {
                span class="status-label" { "Last update" }
                span id="last-update-time" { (format_last_updated(doc.last_updated.as_deref(), offset)) }
                span class="score-origin" { " (" (scores.origin.to_string()) ")" }
            }
        }
        div class="leaderboard-table" {
            table {
                thead {
                    tr {
                        th { "Rank" }
                        th { "Player" }
                        th { "Golfers" }
                        th { "Total Score" }
                    }
                }
                tbody {
                    @for (idx, entry) in entries.iter().enumerate() {
                        @let rank = idx + 1;
                        tr {
                            td { span class={ "rank " (rank_class(rank)) } { (rank) } }
                            td {
                                div class="player-name" { (entry.participant) }
                                div class="golfer-picks" { (golfer_summary(entry)) }
                            }
                            td { (entry.golfers.len()) " golfers" }
                            td { span class="score" { (signed_score(entry.total_score)) } }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GolferRow, ScoreOrigin, ScoresDocument};

    fn entry(name: &str, golfers: &[(&str, i32)]) -> LeaderboardEntry {
        LeaderboardEntry {
            participant: name.to_string(),
            total_score: golfers.iter().map(|(_, s)| s).sum(),
            golfers: golfers
                .iter()
                .map(|(n, s)| GolferRow {
                    name: (*n).to_string(),
                    score: *s,
                    position: "-".to_string(),
                    thru: "F".to_string(),
                })
                .collect(),
            picks: vec![],
        }
    }

    #[test]
    fn renders_ranks_scores_and_status() {
        let scores = LoadedScores {
            document: ScoresDocument {
                current_round: Some("Round 2".to_string()),
                ..ScoresDocument::default()
            },
            origin: ScoreOrigin::Snapshot,
        };
        let entries = vec![
            entry("A", &[("One", -5), ("Two", 3)]),
            entry("B", &[("Two", 3)]),
            entry("C", &[]),
            entry("D", &[("Three", 7)]),
        ];
        let html = render_leaderboard(&entries, &scores, FixedOffset::east_opt(0).unwrap())
            .into_string();

        assert!(html.contains(r#"<span id="current-round">Round 2</span>"#));
        assert!(html.contains(r#"<span id="tournament-status">-</span>"#));
        assert!(html.contains(r#"<span id="last-update-time">Unknown</span>"#));
        assert!(html.contains("(snapshot)"));
        assert!(html.contains(r#"<span class="rank first">1</span>"#));
        assert!(html.contains(r#"<span class="rank second">2</span>"#));
        assert!(html.contains(r#"<span class="rank third">3</span>"#));
        assert!(html.contains(r#"<span class="rank ">4</span>"#));
        assert!(html.contains("One (-5), Two (+3)"));
        assert!(html.contains("2 golfers"));
        assert!(html.contains(r#"<span class="score">-2</span>"#));
        assert!(html.contains(r#"<span class="score">+7</span>"#));
        assert!(html.find(">A<").unwrap() < html.find(">B<").unwrap());
    }

    #[test]
    fn participant_names_are_escaped() {
        let scores = LoadedScores {
            document: ScoresDocument::default(),
            origin: ScoreOrigin::LiveFeed,
        };
        let html = render_leaderboard(
            &[entry("<b>Bobby</b>", &[])],
            &scores,
            FixedOffset::east_opt(0).unwrap(),
        )
        .into_string();
        assert!(html.contains("&lt;b&gt;Bobby&lt;/b&gt;"));
        assert!(!html.contains("<b>Bobby"));
    }
}
