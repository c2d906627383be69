use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdatesDocument {
    #[serde(default)]
    pub updates: Vec<Update>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Update {
    #[serde(default)]
    pub title: String,
    /// ISO date, `2025-04-10` or a full RFC 3339 timestamp.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub content: String,
}
