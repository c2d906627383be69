use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct PicksDocument {
    #[serde(default)]
    pub participants: Vec<Participant>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Participant {
    pub name: String,
    #[serde(default)]
    pub picks: Vec<Pick>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pick {
    #[serde(deserialize_with = "super::de_id")]
    pub golfer_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub golfer_name: Option<String>,
}

impl Pick {
    #[must_use]
    pub fn new(golfer_id: impl Into<String>) -> Self {
        Self {
            golfer_id: golfer_id.into(),
            golfer_name: None,
        }
    }
}

impl Participant {
    #[must_use]
    pub fn new(name: impl Into<String>, golfer_ids: &[&str]) -> Self {
        Self {
            name: name.into(),
            picks: golfer_ids.iter().map(|id| Pick::new(*id)).collect(),
        }
    }
}
