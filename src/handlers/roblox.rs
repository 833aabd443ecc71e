use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;
use crate::error::CheckResult;
use crate::handlers::{required, UsernameQuery};
use crate::models::roblox::RobloxReport;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/check-roblox",
    params(UsernameQuery),
    responses(
        (status = 200, description = "Account verdict with reason", body = RobloxReport)
    )
)]
pub async fn check_roblox(
    State(state): State<Arc<AppState>>,
    Query(params): Query<UsernameQuery>,
) -> CheckResult<Json<RobloxReport>> {
    let username = required(params.username, "username")?;
    let report = state.services.roblox.check(&username).await;
    tracing::debug!("Roblox {} -> {:?} ({})", username, report.status, report.reason);
    Ok(Json(report))
}
