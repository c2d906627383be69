use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

/// Par-relative score with an explicit `+` for over par.
#[must_use]
pub fn signed_score(score: i32) -> String {
    if score > 0 {
        format!("+{score}")
    } else {
        score.to_string()
    }
}

/// `Apr 12, 3:45 PM` in the display offset; `Unknown` if absent or unreadable.
#[must_use]
pub fn format_last_updated(iso: Option<&str>, offset: FixedOffset) -> String {
    iso.and_then(|s| parse_timestamp(s, offset))
        .map(|dt| dt.format("%b %-d, %-I:%M %p").to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

fn parse_timestamp(text: &str, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&offset));
    }
    // no offset given: already local to the display
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M"))
        .ok()
        .and_then(|naive| naive.and_local_timezone(offset).single())
}

/// Sort key for update dates. Date-only values are midnight.
#[must_use]
pub fn parse_update_date(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    DateTime::parse_from_rfc3339(text)
        .map(|dt| dt.naive_utc())
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f"))
        .ok()
}

/// `Thursday, April 10, 2025`. Unreadable dates are shown as written.
#[must_use]
pub fn format_update_date(text: &str) -> String {
    match parse_update_date(text) {
        Some(dt) => dt.format("%A, %B %-d, %Y").to_string(),
        None => text.to_string(),
    }
}

/// Splits free text into paragraphs on blank lines.
#[must_use]
pub fn paragraphs(content: &str) -> Vec<String> {
    content
        .replace("\r\n", "\n")
        .split("\n\n")
        .map(str::to_string)
        .collect()
}
