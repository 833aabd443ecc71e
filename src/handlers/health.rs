use axum::Json;
use crate::models::HealthResponse;

pub async fn root() -> &'static str {
    "Ban Checker API"
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
