pub mod api;
pub mod config;
pub mod data;
pub mod error;
pub mod health;
pub mod page;
pub mod state;

use axum::Router;
use axum::routing::get;
use tower_http::services::ServeDir;

use config::ServerConfig;
use state::AppState;

/// Build the Axum router and application state from a config.
pub fn build_app(config: ServerConfig) -> (Router<()>, AppState) {
    let data_dir = config.data_dir.clone();
    let state = AppState::new(config);

    let api_routes = Router::new().route("/leaderboard", get(api::get_leaderboard));

    let app = Router::new()
        .route("/", get(page::leaderboard_page))
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .nest("/api/v1", api_routes)
        .fallback_service(ServeDir::new(&data_dir))
        .with_state(state.clone());

    (app, state)
}
