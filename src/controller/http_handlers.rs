use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use chrono::FixedOffset;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;

use super::loader::Loader;
use super::navigator::Navigator;
use crate::mvu::leaderboard::{self, LeaderboardModel};
use crate::mvu::runtime::{run_leaderboard, run_updates};
use crate::mvu::updates::{self, UpdatesModel};
use crate::view::index::{render_index_template, render_view};

/// Display settings shared by every request.
#[derive(Debug, Clone)]
pub struct SiteSettings {
    pub title: String,
    pub refresh_secs: u64,
    pub utc_offset: FixedOffset,
}

/// Everything a handler needs, built once by the composition root.
#[derive(Clone)]
pub struct AppState {
    pub loader: Loader,
    pub navigator: Arc<Navigator>,
    pub site: Arc<SiteSettings>,
}

impl AppState {
    #[must_use]
    pub fn new(loader: Loader, navigator: Navigator, site: SiteSettings) -> Self {
        Self {
            loader,
            navigator: Arc::new(navigator),
            site: Arc::new(site),
        }
    }
}

/// Routes that only need `AppState`; static files are mounted by the caller.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/view", web::get().to(view))
        .route("/leaderboard", web::get().to(leaderboard_fragment))
        .route("/updates", web::get().to(updates_fragment))
        .route("/health", web::get().to(HttpResponse::Ok));
}

fn html_response(body: String) -> HttpResponse {
    HttpResponse::Ok().content_type("text/html").body(body)
}

fn get_param_str<'a>(query: &'a HashMap<String, String>, key: &str) -> &'a str {
    query.get(key).map_or("", String::as_str)
}

pub async fn index(state: Data<AppState>) -> impl Responder {
    let markup = render_index_template(&state.site.title, &state.navigator, state.site.refresh_secs);
    html_response(markup.into_string())
}

/// Nav bar and sections for `?section=<fragment>`.
pub async fn view(query: web::Query<HashMap<String, String>>, state: Data<AppState>) -> impl Responder {
    let nav_state = state.navigator.handle_fragment(get_param_str(&query, "section"));
    html_response(render_view(&state.navigator, &nav_state, state.site.refresh_secs).into_string())
}

pub async fn leaderboard_fragment(
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    let want_json = match get_param_str(&query, "json") {
        "1" => true,
        "0" | "" => false,
        other => other.parse().unwrap_or(false),
    };

    let mut model = LeaderboardModel::new(want_json, state.site.utc_offset);
    let deps = leaderboard::Deps {
        loader: &state.loader,
    };
    let result = run_leaderboard(&mut model, leaderboard::Msg::PageLoad, deps).await;

    if want_json {
        return match (result, model.standings()) {
            (Ok(()), Some(standings)) => HttpResponse::Ok().json(standings),
            (Err(e), _) => HttpResponse::InternalServerError().json(json!({"error": e.to_string()})),
            (Ok(()), None) => HttpResponse::InternalServerError()
                .json(json!({"error": "standings were not computed"})),
        };
    }

    // errors are shown inline, so htmx still swaps them in
    html_response(model.into_markup().into_string())
}

pub async fn updates_fragment(state: Data<AppState>) -> impl Responder {
    let mut model = UpdatesModel::default();
    let deps = updates::Deps {
        loader: &state.loader,
    };
    // a failure is already recorded on the model
    let _ = run_updates(&mut model, updates::Msg::PageLoad, deps).await;
    html_response(model.into_markup().into_string())
}
