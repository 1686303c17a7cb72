use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use buoy_map_core::{Column, UnknownColumn};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::{AppState, MapContext, Marker, SelectionQuery};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{0}")]
    UnknownColumn(#[from] UnknownColumn),
    #[error("column {0} is not offered by this map")]
    NotOffered(Column),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::UnknownColumn(_) | Error::NotOffered(_) => {
                (StatusCode::BAD_REQUEST, self.to_string()).into_response()
            }
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MarkerView {
    pub row: usize,
    pub station: String,
    pub latitude: f64,
    pub longitude: f64,
    pub color: String,
    pub size: u32,
    /// Palette index, null when the marker keeps the default color
    pub color_bucket: Option<usize>,
    /// Palette index, null when the marker keeps the default size
    pub size_bucket: Option<usize>,
}

impl From<&Marker> for MarkerView {
    fn from(marker: &Marker) -> Self {
        Self {
            row: marker.row,
            station: marker.station.clone(),
            latitude: marker.latitude,
            longitude: marker.longitude,
            color: marker.color.to_string(),
            size: marker.size,
            color_bucket: marker.color_bucket.level(),
            size_bucket: marker.size_bucket.level(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MarkersResponse {
    pub color_column: Option<String>,
    pub size_column: Option<String>,
    /// Rows without coordinates, left off the map
    pub unplaced: usize,
    pub markers: Vec<MarkerView>,
}

/// Unlike the map fragment, the API rejects names it does not know or offer
fn strict_selection(raw: Option<&str>, offered: &[Column]) -> Result<Option<Column>, Error> {
    let column = match raw.map(str::trim) {
        None | Some("") => return Ok(None),
        Some(s) if s.eq_ignore_ascii_case("none") => return Ok(None),
        Some(s) => s.parse::<Column>()?,
    };
    if offered.contains(&column) {
        Ok(Some(column))
    } else {
        Err(Error::NotOffered(column))
    }
}

#[utoipa::path(
    get,
    path = "/api/markers",
    params(SelectionQuery),
    responses(
        (status = OK, description = "Markers with their palette color and size", content_type = "application/json", body = MarkersResponse),
        (status = BAD_REQUEST, description = "Unknown or unoffered color or size column")
    ))]
pub async fn markers_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SelectionQuery>,
) -> Result<Json<MarkersResponse>, Error> {
    let color = strict_selection(query.color.as_deref(), &state.columns)?;
    let size = strict_selection(query.size.as_deref(), &state.columns)?;

    let layer = MapContext::new(state.dataset.clone(), color, size).redraw();

    Ok(Json(MarkersResponse {
        color_column: color.map(|c| c.name().to_string()),
        size_column: size.map(|c| c.name().to_string()),
        unplaced: layer.unplaced,
        markers: layer.markers.iter().map(MarkerView::from).collect(),
    }))
}
