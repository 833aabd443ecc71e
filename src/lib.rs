use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod batch;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

use config::Config;
use services::Services;

// Application State
pub struct AppState {
    pub config: Config,
    pub services: Services,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()?;
        let services = Services::new(client, &config);
        Ok(Self { config, services })
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::minecraft::check_minecraft,
        handlers::reddit::check_reddit,
        handlers::roblox::check_roblox,
        handlers::steam::check_steam,
        handlers::tiktok::check_tiktok,
        handlers::twitter::check_twitter,
        handlers::youtube::check_youtube,
    ),
    tags((name = "ban-checker", description = "Account status lookups across platforms"))
)]
pub struct ApiDoc;

pub fn app(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/api/check-minecraft", get(handlers::minecraft::check_minecraft))
        .route("/api/check-reddit", get(handlers::reddit::check_reddit))
        .route("/api/check-roblox", get(handlers::roblox::check_roblox))
        .route("/api/check-steam", get(handlers::steam::check_steam))
        .route("/api/check-tiktok", get(handlers::tiktok::check_tiktok))
        .route("/api/check-twitter", get(handlers::twitter::check_twitter))
        .route("/api/check-youtube", get(handlers::youtube::check_youtube));

    Router::new()
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::health_check))
        .merge(api)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
