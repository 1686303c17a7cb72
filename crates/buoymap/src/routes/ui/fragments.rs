use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Html,
};
use log::info;

use crate::{templates::fragments::map_layer, AppState, SelectionQuery};

/// Handler for the marker layer fragment (GET /fragments/map)
///
/// Both selectors post here on change; the whole layer is rebuilt each time.
pub async fn map_fragment_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SelectionQuery>,
) -> Html<String> {
    let context = query.context(&state);
    info!(
        "selection changed to {:?} (color: {:?}, size: {:?})",
        context.state(),
        context.color.map(|c| c.name()),
        context.size.map(|c| c.name())
    );

    let layer = context.redraw();
    Html(map_layer(&context, &layer).into_string())
}
