pub mod leaderboard;
pub mod picks;
pub mod scores;
pub mod updates;

pub use leaderboard::*;
pub use picks::*;
pub use scores::*;
pub use updates::*;

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// Golfer ids show up as strings in our documents and as numbers in some feeds.
#[must_use]
pub fn id_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Leading integer of a score-ish value, the way a browser's `parseInt` reads it:
/// `"+3"` is 3, `"-5 (F)"` is -5, `"E"` has none.
#[must_use]
pub fn leading_int(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .and_then(|v| i32::try_from(v).ok()),
        Value::String(s) => parse_leading_int(s),
        _ => None,
    }
}

fn parse_leading_int(text: &str) -> Option<i32> {
    let text = text.trim_start();
    let (sign, rest) = match text.as_bytes().first() {
        Some(b'-') => (-1i64, &text[1..]),
        Some(b'+') => (1, &text[1..]),
        _ => (1, text),
    };
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    let magnitude: i64 = digits.parse().ok()?;
    i32::try_from(sign * magnitude).ok()
}

pub(crate) fn de_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    id_from_value(&value)
        .ok_or_else(|| de::Error::custom(format!("expected a string or number id, got {value}")))
}

pub(crate) fn de_label<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

pub(crate) fn de_score<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(leading_int(&value).unwrap_or(0))
}
