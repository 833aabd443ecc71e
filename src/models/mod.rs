use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod minecraft;
pub mod roblox;
pub mod steam;
pub mod tiktok;
pub mod twitter;

/// Two-way outcome used by the Minecraft, Reddit, Roblox, Steam and YouTube checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Good,
    Bad,
}

impl Verdict {
    pub fn from_good(good: bool) -> Self {
        if good {
            Verdict::Good
        } else {
            Verdict::Bad
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StatusReport {
    pub status: Verdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl StatusReport {
    pub fn of(status: Verdict) -> Self {
        Self { status, username: None, reason: None }
    }

    pub fn good() -> Self {
        Self::of(Verdict::Good)
    }

    pub fn bad(reason: impl Into<String>) -> Self {
        Self { status: Verdict::Bad, username: None, reason: Some(reason.into()) }
    }

    pub fn for_user(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
