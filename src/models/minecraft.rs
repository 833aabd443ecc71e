use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use super::Verdict;

pub const ORIGINAL_NAME: &str = "Original Name";

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MinecraftProfile {
    pub status: Verdict,
    pub username: String,
    pub uuid: String,
    pub name_history: Vec<NameChange>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NameChange {
    pub name: String,
    #[serde(rename = "changedToAt")]
    pub changed_to_at: ChangedAt,
}

/// Millisecond timestamp of the rename, or the literal "Original Name" for the first entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ChangedAt {
    Timestamp(i64),
    Label(String),
}

impl ChangedAt {
    pub fn original() -> Self {
        ChangedAt::Label(ORIGINAL_NAME.to_string())
    }
}
