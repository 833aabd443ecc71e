use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;
use crate::error::{CheckError, CheckResult};
use crate::handlers::required;
use crate::models::{StatusReport, Verdict};
use crate::utils::parse_channel_input;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ChannelParams {
    /// Channel URL, @handle, channel ID or legacy custom name.
    pub channel: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/check-youtube",
    params(ChannelParams),
    responses(
        (status = 200, description = "Channel exists", body = StatusReport),
        (status = 404, description = "Channel terminated, deleted or never existed", body = StatusReport),
        (status = 500, description = "API key missing or YouTube unreachable")
    )
)]
pub async fn check_youtube(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ChannelParams>,
) -> CheckResult<(StatusCode, Json<StatusReport>)> {
    state.services.youtube.ensure_configured()?;
    let raw = required(params.channel, "channel")?;
    let query = parse_channel_input(&raw).ok_or_else(|| {
        CheckError::InvalidInput(format!("Could not read a channel from {:?}.", raw))
    })?;

    if state.services.youtube.channel_exists(&query).await? {
        Ok((StatusCode::OK, Json(StatusReport::good())))
    } else {
        Ok((StatusCode::NOT_FOUND, Json(StatusReport::of(Verdict::Bad))))
    }
}
