use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;
use crate::error::CheckResult;
use crate::handlers::{required, UsernameQuery};
use crate::models::StatusReport;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/check-reddit",
    params(UsernameQuery),
    responses(
        (status = 200, description = "Account verdict", body = StatusReport)
    )
)]
pub async fn check_reddit(
    State(state): State<Arc<AppState>>,
    Query(params): Query<UsernameQuery>,
) -> CheckResult<Json<StatusReport>> {
    let username = required(params.username, "username")?;
    let report = state.services.reddit.check(&username).await?;
    tracing::debug!("Reddit {} -> {:?}", username, report.status);
    Ok(Json(report))
}
