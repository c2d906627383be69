use anyhow::{Context, Result, anyhow, bail};
use chrono::FixedOffset;
use reqwest::Url;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use super::types::{Args, DataLocation, FileConfig, Settings};
use crate::controller::feed::DEFAULT_FEED_URL;
use crate::controller::loader::DEFAULT_FEED_TIMEOUT;
use crate::view::index::DEFAULT_INDEX_TITLE;

pub const DEFAULT_BIND: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8081;
pub const DEFAULT_DATA_DIR: &str = "./data";
pub const DEFAULT_STATIC_DIR: &str = "./static";
pub const DEFAULT_REFRESH_SECS: u64 = 5 * 60;

/// Merge CLI flags with the optional TOML file and check the result.
///
/// # Errors
///
/// Returns an error if the config file is unreadable or invalid, or a setting is out of range.
pub fn load_config(args: Args) -> Result<Settings> {
    let file_config = match args.config_toml.as_ref() {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("read config toml {}", path.display()))?;
            toml::from_str::<FileConfig>(&contents)
                .with_context(|| format!("parse config toml {}", path.display()))?
        }
        None => FileConfig::default(),
    };

    let data = parse_data_location(
        &args
            .data
            .or(file_config.data)
            .unwrap_or_else(|| DEFAULT_DATA_DIR.to_string()),
    )?;

    let no_feed = args.no_feed || file_config.no_feed.unwrap_or(false);
    let feed_url = if no_feed {
        None
    } else {
        let url = args
            .feed_url
            .or(file_config.feed_url)
            .unwrap_or_else(|| DEFAULT_FEED_URL.to_string());
        // the template only becomes a URL once a year is filled in
        check_http_url(&url.replace("{year}", "2025")).context("feed_url")?;
        Some(url)
    };

    let feed_timeout = match args.feed_timeout_secs.or(file_config.feed_timeout_secs) {
        Some(0) => bail!("feed_timeout_secs must be greater than zero"),
        Some(secs) => Duration::from_secs(secs),
        None => DEFAULT_FEED_TIMEOUT,
    };

    let refresh_secs = args
        .refresh_secs
        .or(file_config.refresh_secs)
        .unwrap_or(DEFAULT_REFRESH_SECS);
    if refresh_secs == 0 {
        bail!("refresh_secs must be greater than zero");
    }

    let offset_hours = args
        .utc_offset_hours
        .or(file_config.utc_offset_hours)
        .unwrap_or(0);
    let utc_offset = offset_hours
        .checked_mul(3600)
        .and_then(FixedOffset::east_opt)
        .ok_or_else(|| anyhow!("utc_offset_hours {offset_hours} is out of range"))?;

    Ok(Settings {
        bind: args
            .bind
            .or(file_config.bind)
            .unwrap_or_else(|| DEFAULT_BIND.to_string()),
        port: args.port.or(file_config.port).unwrap_or(DEFAULT_PORT),
        data,
        static_dir: args
            .static_dir
            .or(file_config.static_dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
        feed_url,
        feed_timeout,
        refresh_secs,
        year: args.year.or(file_config.year),
        utc_offset,
        title: args
            .title
            .or(file_config.title)
            .unwrap_or_else(|| DEFAULT_INDEX_TITLE.to_string()),
    })
}

/// An `http(s)://` value is a remote base URL; anything else must be an existing directory.
///
/// # Errors
///
/// Returns an error if a directory value does not exist.
pub fn parse_data_location(value: &str) -> Result<DataLocation> {
    let value = value.trim();
    if value.starts_with("http://") || value.starts_with("https://") {
        return Ok(DataLocation::Remote(check_http_url(value)?));
    }
    let path = PathBuf::from(value);
    if !path.is_dir() {
        bail!("The data directory '{value}' does not exist.");
    }
    Ok(DataLocation::Directory(path))
}

fn check_http_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url).with_context(|| format!("'{url}' is not a valid URL"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        bail!("'{url}' is not an http(s) URL");
    }
    parsed
        .host_str()
        .filter(|host| !host.is_empty())
        .ok_or_else(|| anyhow!("'{url}' has no host"))?;
    Ok(parsed)
}
