use async_trait::async_trait;
use chrono::{DateTime, Datelike, SecondsFormat, Utc};
use reqwest::Client;
use reqwest::header::ACCEPT;
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

use super::loader::ScoreSource;
use crate::error::{FeedError, LoadError, TransformError};
use crate::model::{GolferScore, LoadedScores, ScoreOrigin, ScoresDocument, id_from_value, leading_int};

pub const DEFAULT_FEED_URL: &str = "https://www.masters.com/en_US/scores/feeds/{year}/scores.json";

const DEFAULT_STATUS: &str = "In Progress";
const DEFAULT_ROUND: &str = "Round 1";
const DEFAULT_THRU: &str = "F";
const DEFAULT_POSITION: &str = "-";

/// Client for the tournament's own scoring feed. The feed is unofficial and its
/// shape changes between years, so everything is mapped best effort.
pub struct MastersFeed {
    client: Client,
    url_template: String,
}

impl MastersFeed {
    #[must_use]
    pub fn new(client: Client, url_template: &str) -> Self {
        Self {
            client,
            url_template: url_template.to_string(),
        }
    }

    #[must_use]
    pub fn url_for(&self, year: i32) -> String {
        self.url_template.replace("{year}", &year.to_string())
    }

    /// # Errors
    ///
    /// Returns `FeedError::Load` on network failure, a non-success status or a body
    /// that is not JSON, and `FeedError::Transform` when the JSON is not a feed.
    pub async fn fetch(&self, year: i32) -> Result<ScoresDocument, FeedError> {
        let url = self.url_for(year);
        debug!(%url, "requesting live feed");
        let resp = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| LoadError::network(&url, &e))?;

        if !resp.status().is_success() {
            return Err(LoadError::Status {
                path: url,
                status: resp.status().as_u16(),
            }
            .into());
        }

        let body = resp.text().await.map_err(|e| LoadError::network(&url, &e))?;
        let json: Value =
            serde_json::from_str(&body).map_err(|source| LoadError::Parse { path: url, source })?;
        Ok(transform_masters_feed(&json, Utc::now())?)
    }
}

/// Maps the feed's `{tournament, player[]}` payload onto our score document.
///
/// # Errors
///
/// Returns `TransformError` if the payload is not an object, `player` is not a
/// list, or a player is missing its id or repeats one.
pub fn transform_masters_feed(
    feed: &Value,
    fetched_at: DateTime<Utc>,
) -> Result<ScoresDocument, TransformError> {
    let root = feed.as_object().ok_or(TransformError::NotAnObject)?;
    let tournament = root.get("tournament");

    let mut scores = HashMap::new();
    match root.get("player") {
        None | Some(Value::Null) => {}
        Some(Value::Array(players)) => {
            for (idx, player) in players.iter().enumerate() {
                let id = player
                    .get("id")
                    .and_then(id_from_value)
                    .ok_or(TransformError::MissingPlayerId(idx))?;
                let golfer = golfer_from_player(player);
                if scores.insert(id.clone(), golfer).is_some() {
                    return Err(TransformError::DuplicatePlayerId(id));
                }
            }
        }
        Some(_) => return Err(TransformError::PlayersNotArray),
    }

    Ok(ScoresDocument {
        last_updated: Some(fetched_at.to_rfc3339_opts(SecondsFormat::Millis, true)),
        tournament_status: Some(text_or(tournament.and_then(|t| t.get("status")), DEFAULT_STATUS)),
        current_round: Some(text_or(tournament.and_then(|t| t.get("round")), DEFAULT_ROUND)),
        scores,
    })
}

fn golfer_from_player(player: &Value) -> GolferScore {
    let first = text_or(player.get("first_name"), "");
    let last = text_or(player.get("last_name"), "");
    GolferScore {
        name: format!("{first} {last}").trim().to_string(),
        score: player.get("total_strokes").and_then(leading_int).unwrap_or(0),
        position: text_or(player.get("current_position"), DEFAULT_POSITION),
        thru: text_or(player.get("thru"), DEFAULT_THRU),
    }
}

/// Non-empty text of a string or number field, else `default`.
fn text_or(value: Option<&Value>, default: &str) -> String {
    match value {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Number(n)) if n.as_f64() != Some(0.0) => n.to_string(),
        _ => default.to_string(),
    }
}

/// The live feed as a score source. With no pinned year the current year is used.
pub struct LiveFeedScores {
    feed: MastersFeed,
    year: Option<i32>,
}

impl LiveFeedScores {
    #[must_use]
    pub fn new(feed: MastersFeed, year: Option<i32>) -> Self {
        Self { feed, year }
    }
}

#[async_trait]
impl ScoreSource for LiveFeedScores {
    async fn load(&self) -> Result<LoadedScores, FeedError> {
        let year = self.year.unwrap_or_else(|| Utc::now().year());
        let document = self.feed.fetch(year).await?;
        Ok(LoadedScores {
            document,
            origin: ScoreOrigin::LiveFeed,
        })
    }

    fn name(&self) -> &'static str {
        "live feed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn fetched_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 4, 12, 19, 45, 0).unwrap()
    }

    #[test]
    fn maps_players_and_tournament_fields() {
        let feed = json!({
            "tournament": {"status": "Official", "round": "Round 3"},
            "player": [
                {"id": "46046", "first_name": "Scottie", "last_name": "Scheffler",
                 "total_strokes": "-8", "thru": "14", "current_position": "1"},
                {"id": 28237, "first_name": "Rory", "last_name": "McIlroy",
                 "total_strokes": "+2", "thru": "F", "current_position": "T12"}
            ]
        });

        let doc = transform_masters_feed(&feed, fetched_at()).unwrap();
        assert_eq!(doc.tournament_status.as_deref(), Some("Official"));
        assert_eq!(doc.current_round.as_deref(), Some("Round 3"));
        assert_eq!(doc.last_updated.as_deref(), Some("2025-04-12T19:45:00.000Z"));

        let scheffler = &doc.scores["46046"];
        assert_eq!(scheffler.name, "Scottie Scheffler");
        assert_eq!(scheffler.score, -8);
        assert_eq!(scheffler.thru, "14");
        assert_eq!(scheffler.position, "1");
        assert_eq!(doc.scores["28237"].score, 2);
    }

    #[test]
    fn missing_player_fields_fall_back_to_placeholders() {
        let feed = json!({"player": [{"id": "1", "first_name": "Solo", "total_strokes": "E"}]});

        let doc = transform_masters_feed(&feed, fetched_at()).unwrap();
        let golfer = &doc.scores["1"];
        assert_eq!(golfer.name, "Solo");
        assert_eq!(golfer.score, 0);
        assert_eq!(golfer.thru, "F");
        assert_eq!(golfer.position, "-");
        assert_eq!(doc.tournament_status.as_deref(), Some("In Progress"));
        assert_eq!(doc.current_round.as_deref(), Some("Round 1"));
    }

    #[test]
    fn feed_without_players_is_an_empty_score_set() {
        let doc = transform_masters_feed(&json!({"tournament": {}}), fetched_at()).unwrap();
        assert!(doc.scores.is_empty());
    }

    #[test]
    fn unexpected_shapes_are_transform_errors() {
        assert_eq!(
            transform_masters_feed(&json!([1, 2]), fetched_at()),
            Err(TransformError::NotAnObject)
        );
        assert_eq!(
            transform_masters_feed(&json!({"player": {"id": "1"}}), fetched_at()),
            Err(TransformError::PlayersNotArray)
        );
        assert_eq!(
            transform_masters_feed(&json!({"player": [{"first_name": "No"}]}), fetched_at()),
            Err(TransformError::MissingPlayerId(0))
        );
        assert_eq!(
            transform_masters_feed(&json!({"player": [{"id": 7}, {"id": "7"}]}), fetched_at()),
            Err(TransformError::DuplicatePlayerId("7".to_string()))
        );
    }

    #[test]
    fn url_template_takes_the_year() {
        let feed = MastersFeed::new(Client::new(), DEFAULT_FEED_URL);
        assert_eq!(
            feed.url_for(2025),
            "https://www.masters.com/en_US/scores/feeds/2025/scores.json"
        );
    }
}
