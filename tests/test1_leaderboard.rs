mod common;

use chrono::FixedOffset;
use std::time::Duration;

use golf_pool::mvu::leaderboard::{Deps, LeaderboardModel, Msg};
use golf_pool::mvu::runtime::run_leaderboard;

use common::{data_dir, example_data_dir, example_picks, example_scores, loader_for};

fn utc() -> FixedOffset {
    FixedOffset::east_opt(0).unwrap()
}

#[tokio::test]
async fn example_pool_ranks_a_before_b() {
    let dir = example_data_dir();
    let loader = loader_for(dir.path(), None, Duration::from_secs(1));

    let mut model = LeaderboardModel::new(false, utc());
    run_leaderboard(&mut model, Msg::PageLoad, Deps { loader: &loader })
        .await
        .unwrap();

    let standings = model.standings().unwrap();
    let totals: Vec<(&str, i32)> = standings
        .entries
        .iter()
        .map(|e| (e.participant.as_str(), e.total_score))
        .collect();
    assert_eq!(totals, vec![("A", -2), ("B", 3)]);
    assert_eq!(standings.current_round.as_deref(), Some("Round 3"));

    let html = model.into_markup().into_string();
    let a = html.find(r#"<div class="player-name">A</div>"#).unwrap();
    let b = html.find(r#"<div class="player-name">B</div>"#).unwrap();
    assert!(a < b);
    assert!(html.contains("Golfer One (-5), Golfer Two (+3)"));
    assert!(html.contains(r#"<span class="score">+3</span>"#));
    assert!(html.contains("Apr 12, 7:45 PM"));
}

#[tokio::test]
async fn every_cycle_reloads_from_disk() {
    let dir = example_data_dir();
    let loader = loader_for(dir.path(), None, Duration::from_secs(1));
    let mut model = LeaderboardModel::new(true, utc());

    run_leaderboard(&mut model, Msg::PageLoad, Deps { loader: &loader })
        .await
        .unwrap();
    assert_eq!(model.standings().unwrap().entries[0].total_score, -2);

    let mut scores = example_scores();
    scores["scores"]["golfer1"]["score"] = serde_json::json!(4);
    common::write_document(dir.path(), "scores.json", &scores);

    run_leaderboard(&mut model, Msg::PageLoad, Deps { loader: &loader })
        .await
        .unwrap();
    let standings = model.standings().unwrap();
    // B (+3) now leads A (+7)
    assert_eq!(standings.entries[0].participant, "B");
    assert_eq!(standings.entries[1].total_score, 7);
}

#[tokio::test]
async fn missing_picks_becomes_inline_error() {
    let dir = data_dir(None, Some(&example_scores()), None);
    let loader = loader_for(dir.path(), None, Duration::from_secs(1));

    let mut model = LeaderboardModel::new(false, utc());
    let err = run_leaderboard(&mut model, Msg::PageLoad, Deps { loader: &loader })
        .await
        .unwrap_err();
    assert!(err.to_string().contains("picks.json"), "{err}");
    // scores were never requested
    assert!(model.scores.is_none());
    assert_eq!(
        model.into_markup().into_string(),
        r#"<div class="error">Failed to load leaderboard data</div>"#
    );
}

#[tokio::test]
async fn missing_snapshot_without_feed_is_an_error() {
    let dir = data_dir(Some(&example_picks()), None, None);
    let loader = loader_for(dir.path(), None, Duration::from_secs(1));

    let mut model = LeaderboardModel::new(false, utc());
    assert!(
        run_leaderboard(&mut model, Msg::PageLoad, Deps { loader: &loader })
            .await
            .is_err()
    );
    assert!(model.picks.is_some());
    assert!(model.error.is_some());
}
