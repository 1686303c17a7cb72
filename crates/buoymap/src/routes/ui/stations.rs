use std::sync::Arc;

use axum::{extract::State, response::Html};

use crate::{templates::stations_page, AppState};

/// Handler for the station table page (GET /stations)
pub async fn stations_handler(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(stations_page(&state.remote_url, &state.feed_path, &state.dataset).into_string())
}
