//! Runtime info route - build and process details for the running server

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::api::AppState;

/// Application name reported by the info endpoint
pub const APP_NAME: &str = "Rust Docker App";

#[derive(Debug, Serialize)]
pub struct RuntimeInfo {
    pub app_name: &'static str,
    pub rust_version: &'static str,
    pub os: &'static str,
    pub arch: &'static str,
    pub uptime_seconds: f64,
    pub timestamp: String,
}

/// GET /api/info - Toolchain, platform, and uptime of the running process
pub async fn info_handler(State(state): State<Arc<AppState>>) -> Json<RuntimeInfo> {
    Json(RuntimeInfo {
        app_name: APP_NAME,
        rust_version: env!("INFO_SERVER_RUSTC_VERSION"),
        os: std::env::consts::OS,
        arch: std::env::consts::ARCH,
        uptime_seconds: state.uptime_seconds(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
