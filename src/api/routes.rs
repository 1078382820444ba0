use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::dashboard::serve_dashboard;
use super::health::health_check;

/// Shared request state: the page is rendered once at startup and served
/// unchanged afterwards.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub page: String,
}

pub fn create_routes(state: Arc<DashboardState>) -> Router {
    Router::new()
        .route("/", get(serve_dashboard))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
