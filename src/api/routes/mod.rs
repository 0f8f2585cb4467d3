pub mod health;
pub mod home;
pub mod info;

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::api::AppState;

/// Create the application router
pub fn create_app_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home::home_handler))
        .route("/health", get(health::health_handler))
        .nest("/api", create_api_router(state.clone()))
        .with_state(state)
}

/// Create the /api router
fn create_api_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/info", get(info::info_handler))
        .with_state(state)
}
