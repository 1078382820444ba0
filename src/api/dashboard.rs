use std::sync::Arc;

use axum::{extract::State, response::Html};

use super::routes::DashboardState;

pub async fn serve_dashboard(State(state): State<Arc<DashboardState>>) -> Html<String> {
    Html(state.page.clone())
}
