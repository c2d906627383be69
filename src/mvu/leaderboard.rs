use chrono::FixedOffset;
use maud::Markup;

use super::error::AppError;
use crate::controller::leaderboard::build_leaderboard;
use crate::controller::loader::Loader;
use crate::model::{LeaderboardEntry, LoadedScores, PicksDocument, Standings};
use crate::view::leaderboard::{LEADERBOARD_ERROR, render_leaderboard};
use crate::view::render_inline_error;

#[derive(Debug, Clone)]
pub struct LeaderboardModel {
    pub want_json: bool,
    pub utc_offset: FixedOffset,
    pub picks: Option<PicksDocument>,
    pub scores: Option<LoadedScores>,
    pub entries: Option<Vec<LeaderboardEntry>>,
    pub markup: Option<Markup>,
    pub error: Option<AppError>,
}

impl LeaderboardModel {
    #[must_use]
    pub fn new(want_json: bool, utc_offset: FixedOffset) -> Self {
        Self {
            want_json,
            utc_offset,
            picks: None,
            scores: None,
            entries: None,
            markup: None,
            error: None,
        }
    }

    /// Standings for the JSON view, once scores are in.
    #[must_use]
    pub fn standings(&self) -> Option<Standings> {
        match (&self.scores, &self.entries) {
            (Some(scores), Some(entries)) => Some(Standings::new(scores, entries.clone())),
            _ => None,
        }
    }

    /// What goes into the leaderboard container: the table, or the inline error.
    #[must_use]
    pub fn into_markup(self) -> Markup {
        match (self.error, self.markup) {
            (None, Some(markup)) => markup,
            _ => render_inline_error(LEADERBOARD_ERROR),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Msg {
    PageLoad,
    PicksLoaded(PicksDocument),
    ScoresLoaded(LoadedScores),
    Rendered(Markup),
    Failed(AppError),
}

#[derive(Debug, Clone)]
pub enum Effect {
    LoadPicks,
    LoadScores,
    RenderTemplate,
}

pub fn update(model: &mut LeaderboardModel, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::PageLoad => {
            // full reload: nothing from a previous cycle survives
            model.picks = None;
            model.scores = None;
            model.entries = None;
            model.markup = None;
            model.error = None;
            vec![Effect::LoadPicks]
        }
        Msg::PicksLoaded(picks) => {
            model.picks = Some(picks);
            vec![Effect::LoadScores]
        }
        Msg::ScoresLoaded(scores) => {
            if let Some(picks) = &model.picks {
                model.entries = Some(build_leaderboard(picks, &scores.document));
            }
            model.scores = Some(scores);
            if model.want_json {
                vec![]
            } else {
                vec![Effect::RenderTemplate]
            }
        }
        Msg::Rendered(markup) => {
            model.markup = Some(markup);
            vec![]
        }
        Msg::Failed(e) => {
            model.error = Some(e);
            vec![]
        }
    }
}

#[derive(Clone, Copy)]
pub struct Deps<'a> {
    pub loader: &'a Loader,
}

pub async fn run_effect(effect: Effect, model: &LeaderboardModel, deps: Deps<'_>) -> Msg {
    match effect {
        Effect::LoadPicks => match deps.loader.load_picks().await {
            Ok(picks) => Msg::PicksLoaded(picks),
            Err(e) => Msg::Failed(AppError::from(e)),
        },
        Effect::LoadScores => match deps.loader.load_scores().await {
            Ok(scores) => Msg::ScoresLoaded(scores),
            Err(e) => Msg::Failed(AppError::from(e)),
        },
        Effect::RenderTemplate => {
            if let (Some(entries), Some(scores)) = (model.entries.as_ref(), model.scores.as_ref()) {
                Msg::Rendered(render_leaderboard(entries, scores, model.utc_offset))
            } else {
                Msg::Failed(AppError::Other("Render requested without data".into()))
            }
        }
    }
}
