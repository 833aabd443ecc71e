use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TwitterStatus {
    Active,
    Terminated,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TwitterReport {
    pub status: TwitterStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl TwitterReport {
    pub fn new(status: TwitterStatus) -> Self {
        Self { status, message: None }
    }

    pub fn with_message(status: TwitterStatus, message: impl Into<String>) -> Self {
        Self { status, message: Some(message.into()) }
    }
}
