use axum::{extract::State, Json};
use buoy_map_core::{ObservationRecord, RejectedLine};
use serde::Serialize;
use std::sync::Arc;
use time::format_description::well_known::Rfc3339;
use utoipa::ToSchema;

use crate::AppState;

/// One parsed feed row, flattened for JSON consumers
#[derive(Debug, Serialize, ToSchema)]
pub struct ObservationView {
    pub row: usize,
    pub station: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// RFC 3339, UTC
    pub timestamp: String,
    pub wind_direction: Option<f64>,
    pub wind_speed: Option<f64>,
    pub wind_gust: Option<f64>,
    pub wave_height: Option<f64>,
    pub dominant_wave_period: Option<f64>,
    pub average_wave_period: Option<f64>,
    pub dominant_wave_direction: Option<f64>,
    pub pressure: Option<f64>,
    #[serde(rename = "3hr_pressure_tendency")]
    pub pressure_tendency: Option<f64>,
    pub temperature: Option<f64>,
    pub water_temperature: Option<f64>,
    pub dewpoint: Option<f64>,
    pub visibility: Option<f64>,
    pub tide: Option<f64>,
}

impl ObservationView {
    fn new(row: usize, record: &ObservationRecord) -> Self {
        Self {
            row,
            station: record.station.clone(),
            latitude: record.latitude,
            longitude: record.longitude,
            timestamp: record.timestamp.format(&Rfc3339).unwrap_or_default(),
            wind_direction: record.wind_direction,
            wind_speed: record.wind_speed,
            wind_gust: record.wind_gust,
            wave_height: record.wave_height,
            dominant_wave_period: record.dominant_wave_period,
            average_wave_period: record.average_wave_period,
            dominant_wave_direction: record.dominant_wave_direction,
            pressure: record.pressure,
            pressure_tendency: record.pressure_tendency,
            temperature: record.temperature,
            water_temperature: record.water_temperature,
            dewpoint: record.dewpoint,
            visibility: record.visibility,
            tide: record.tide,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RejectedLineView {
    pub line: usize,
    pub reason: String,
}

impl From<&RejectedLine> for RejectedLineView {
    fn from(rejected: &RejectedLine) -> Self {
        Self {
            line: rejected.line,
            reason: rejected.reason.to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ObservationsResponse {
    pub lines_read: usize,
    pub rejected: Vec<RejectedLineView>,
    pub observations: Vec<ObservationView>,
}

#[utoipa::path(
    get,
    path = "/api/observations",
    responses(
        (status = OK, description = "Every record loaded from the snapshot, in feed order", content_type = "application/json", body = ObservationsResponse),
    ))]
pub async fn observations_handler(State(state): State<Arc<AppState>>) -> Json<ObservationsResponse> {
    let report = state.dataset.report();
    Json(ObservationsResponse {
        lines_read: report.lines_read,
        rejected: report.rejected.iter().map(RejectedLineView::from).collect(),
        observations: state
            .dataset
            .iter()
            .enumerate()
            .map(|(row, record)| ObservationView::new(row, record))
            .collect(),
    })
}
