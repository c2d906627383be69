use chrono::FixedOffset;
use clap::Parser;
use reqwest::Url;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug, Default)]
#[command(author, version, about = "Serves the golf pool standings and updates", long_about = None)]
pub struct Args {
    /// Optional TOML file with any of the settings below. Command-line flags win.
    #[arg(long, value_name = "CONFIG_TOML")]
    pub config_toml: Option<PathBuf>,
    /// Address to listen on.
    #[arg(long, value_name = "BIND")]
    pub bind: Option<String>,
    #[arg(short = 'p', long, value_name = "PORT")]
    pub port: Option<u16>,
    /// Directory holding picks.json, scores.json and updates.json, or an http(s) base URL serving them.
    #[arg(short = 'd', long, value_name = "DATA")]
    pub data: Option<String>,
    #[arg(long, value_name = "STATIC_DIR")]
    pub static_dir: Option<PathBuf>,
    /// Live scoring feed; `{year}` is replaced with the tournament year.
    #[arg(long, value_name = "FEED_URL")]
    pub feed_url: Option<String>,
    /// Never call the live feed, always use scores.json.
    #[arg(long)]
    pub no_feed: bool,
    #[arg(long, value_name = "SECONDS")]
    pub feed_timeout_secs: Option<u64>,
    /// How often an open leaderboard reloads itself.
    #[arg(long, value_name = "SECONDS")]
    pub refresh_secs: Option<u64>,
    /// Tournament year for the feed URL. Defaults to the current year.
    #[arg(long, value_name = "YEAR")]
    pub year: Option<i32>,
    /// Offset applied to displayed times, e.g. -5 for US Central daylight time.
    #[arg(long, value_name = "HOURS", allow_negative_numbers = true)]
    pub utc_offset_hours: Option<i32>,
    #[arg(long, value_name = "TITLE")]
    pub title: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub bind: Option<String>,
    pub port: Option<u16>,
    pub data: Option<String>,
    pub static_dir: Option<PathBuf>,
    pub feed_url: Option<String>,
    pub no_feed: Option<bool>,
    pub feed_timeout_secs: Option<u64>,
    pub refresh_secs: Option<u64>,
    pub year: Option<i32>,
    pub utc_offset_hours: Option<i32>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataLocation {
    Directory(PathBuf),
    Remote(Url),
}

/// Resolved settings: flags over file over defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    pub bind: String,
    pub port: u16,
    pub data: DataLocation,
    pub static_dir: PathBuf,
    /// `None` when the live feed is disabled.
    pub feed_url: Option<String>,
    pub feed_timeout: Duration,
    pub refresh_secs: u64,
    pub year: Option<i32>,
    pub utc_offset: FixedOffset,
    pub title: String,
}
