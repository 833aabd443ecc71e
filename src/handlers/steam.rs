use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;
use crate::error::{CheckError, CheckResult};
use crate::handlers::required;
use crate::models::steam::SteamCheck;
use crate::utils::parse_steam_input;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SteamQuery {
    /// SteamID64, profile URL, vanity URL or vanity name.
    pub user_input: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/check-steam",
    params(SteamQuery),
    responses(
        (status = 200, description = "Ban record, or a bad status when the profile can't be resolved", body = SteamCheck),
        (status = 500, description = "Steam API key missing or Steam unreachable")
    )
)]
pub async fn check_steam(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SteamQuery>,
) -> CheckResult<Json<SteamCheck>> {
    let raw = required(params.user_input, "user_input")?;
    let input = parse_steam_input(&raw)
        .ok_or_else(|| CheckError::InvalidInput("User input is required.".to_string()))?;

    let result = state.services.steam.check(&input).await?;
    Ok(Json(result))
}
