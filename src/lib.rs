pub mod args;
pub mod error;
pub mod model;
pub mod mvu;
pub mod startup;
pub mod controller {
    pub mod documents;
    pub mod feed;
    pub mod http_handlers;
    pub mod leaderboard;
    pub mod loader;
    pub mod navigator;
}
pub mod view;

pub const HTMX_PATH: &str = "https://unpkg.com/htmx.org@1.9.12";
