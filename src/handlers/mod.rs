pub mod health;
pub mod minecraft;
pub mod reddit;
pub mod roblox;
pub mod steam;
pub mod tiktok;
pub mod twitter;
pub mod youtube;

use serde::Deserialize;
use utoipa::IntoParams;
use crate::error::{CheckError, CheckResult};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UsernameQuery {
    /// Account name on the platform.
    pub username: Option<String>,
}

/// Pulls a required query value, treating blank as missing.
pub(crate) fn required(value: Option<String>, name: &'static str) -> CheckResult<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(CheckError::MissingParam(name))
}
