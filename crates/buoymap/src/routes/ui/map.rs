use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{parse_selection, templates::map_page, AppState, MapContext};

/// Current value of the two selectors, as column names or `None`
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct SelectionQuery {
    pub color: Option<String>,
    pub size: Option<String>,
}

impl SelectionQuery {
    pub fn context(&self, state: &AppState) -> MapContext {
        MapContext::new(
            state.dataset.clone(),
            parse_selection(self.color.as_deref(), &state.columns),
            parse_selection(self.size.as_deref(), &state.columns),
        )
    }
}

/// Handler for the map page (GET /)
pub async fn map_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SelectionQuery>,
) -> Html<String> {
    let context = query.context(&state);
    let layer = context.redraw();
    Html(map_page(&state.remote_url, &state.columns, &context, &layer).into_string())
}
