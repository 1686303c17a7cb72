use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct ColumnView {
    /// Value to pass as `color` or `size`
    pub name: String,
    pub label: String,
}

#[utoipa::path(
    get,
    path = "/api/columns",
    responses(
        (status = OK, description = "Columns offered by the color and size selectors", content_type = "application/json", body = Vec<ColumnView>),
    ))]
pub async fn columns_handler(State(state): State<Arc<AppState>>) -> Json<Vec<ColumnView>> {
    Json(
        state
            .columns
            .iter()
            .map(|column| ColumnView {
                name: column.name().to_string(),
                label: column.label().to_string(),
            })
            .collect(),
    )
}
