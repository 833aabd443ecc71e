use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;
use crate::error::{CheckError, CheckResult};
use crate::handlers::UsernameQuery;
use crate::models::tiktok::TikTokReport;
use crate::utils::is_valid_tiktok_username;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/check-tiktok",
    params(UsernameQuery),
    responses(
        (status = 200, description = "Profile status", body = TikTokReport),
        (status = 400, description = "Username missing or has characters TikTok doesn't allow")
    )
)]
pub async fn check_tiktok(
    State(state): State<Arc<AppState>>,
    Query(params): Query<UsernameQuery>,
) -> CheckResult<Json<TikTokReport>> {
    let username = params.username.unwrap_or_default();
    if !is_valid_tiktok_username(&username) {
        return Err(CheckError::InvalidInput("A valid username is required.".to_string()));
    }

    let report = state.services.tiktok.check(&username).await?;
    Ok(Json(report))
}
