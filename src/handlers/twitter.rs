use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;
use crate::error::{CheckError, CheckResult};
use crate::handlers::{required, UsernameQuery};
use crate::models::twitter::TwitterReport;
use crate::utils::strip_at;
use crate::AppState;

/// Upstream rejections come back as HTTP 200 with `status: "error"` so the
/// batch client can surface the message.
#[utoipa::path(
    get,
    path = "/api/check-twitter",
    params(UsernameQuery),
    responses(
        (status = 200, description = "Account status", body = TwitterReport),
        (status = 500, description = "Bearer token missing or Twitter unreachable")
    )
)]
pub async fn check_twitter(
    State(state): State<Arc<AppState>>,
    Query(params): Query<UsernameQuery>,
) -> CheckResult<Json<TwitterReport>> {
    // A missing token is a server problem whatever the request looks like.
    state.services.twitter.ensure_configured()?;
    let raw = required(params.username, "username")?;
    let handle = strip_at(&raw);
    if handle.is_empty() {
        return Err(CheckError::MissingParam("username"));
    }

    let report = state.services.twitter.check(handle).await?;
    Ok(Json(report))
}
