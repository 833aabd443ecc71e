use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use crate::error::{CheckError, CheckResult};
use crate::handlers::{required, UsernameQuery};
use crate::models::minecraft::MinecraftProfile;
use crate::models::StatusReport;
use crate::utils::MINECRAFT_MAX_USERNAME_LEN;
use crate::AppState;

// Unregistered names answer 404 so a caller can read "available" straight off the status.
#[utoipa::path(
    get,
    path = "/api/check-minecraft",
    params(UsernameQuery),
    responses(
        (status = 200, description = "Name is registered", body = MinecraftProfile),
        (status = 404, description = "Name is not registered", body = StatusReport),
        (status = 400, description = "Missing or over-long username")
    )
)]
pub async fn check_minecraft(
    State(state): State<Arc<AppState>>,
    Query(params): Query<UsernameQuery>,
) -> CheckResult<Response> {
    let username = required(params.username, "username")?;
    if username.chars().count() > MINECRAFT_MAX_USERNAME_LEN {
        return Err(CheckError::InvalidInput(format!(
            "Minecraft usernames are at most {} characters.",
            MINECRAFT_MAX_USERNAME_LEN
        )));
    }

    match state.services.minecraft.lookup(&username).await? {
        Some(profile) => Ok(Json(profile).into_response()),
        None => Ok((StatusCode::NOT_FOUND, Json(StatusReport::bad("User not found"))).into_response()),
    }
}
