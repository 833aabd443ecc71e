use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use super::Verdict;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RobloxReport {
    pub status: Verdict,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    pub reason: String,
}
