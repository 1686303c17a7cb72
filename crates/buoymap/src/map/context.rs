use std::sync::Arc;

use buoy_map_core::{Bucket, BucketAssignment, Column, Dataset};
use log::{debug, warn};

use super::palette::{DEFAULT_COLOR, DEFAULT_SIZE, MARKER_COLORS, MARKER_SIZES};

/// Which selectors currently drive the marker style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    Plain,
    ColorOnly,
    SizeOnly,
    ColorAndSize,
}

/// Read a selector value against the columns the selectors offer
///
/// `None`, blank, unknown and unoffered names all select nothing.
pub fn parse_selection(raw: Option<&str>, offered: &[Column]) -> Option<Column> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty())?;
    if raw.eq_ignore_ascii_case("none") {
        return None;
    }
    match raw.parse::<Column>() {
        Ok(column) if offered.contains(&column) => Some(column),
        Ok(column) => {
            warn!("ignoring selection: {} is not offered", column);
            None
        }
        Err(e) => {
            warn!("ignoring selection: {}", e);
            None
        }
    }
}

/// Everything one redraw needs: the loaded dataset and both selections
#[derive(Debug, Clone)]
pub struct MapContext {
    pub dataset: Arc<Dataset>,
    pub color: Option<Column>,
    pub size: Option<Column>,
}

/// One drawable station
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// Index of the row in the dataset
    pub row: usize,
    pub station: String,
    pub latitude: f64,
    pub longitude: f64,
    pub color: &'static str,
    pub size: u32,
    pub color_bucket: Bucket,
    pub size_bucket: Bucket,
    pub temperature: Option<f64>,
    pub dewpoint: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct MarkerLayer {
    pub color: BucketAssignment,
    pub size: BucketAssignment,
    pub markers: Vec<Marker>,
    /// Rows left off the map for lack of coordinates
    pub unplaced: usize,
}

impl MapContext {
    pub fn new(dataset: Arc<Dataset>, color: Option<Column>, size: Option<Column>) -> Self {
        Self {
            dataset,
            color,
            size,
        }
    }

    pub fn state(&self) -> SelectionState {
        match (self.color, self.size) {
            (None, None) => SelectionState::Plain,
            (Some(_), None) => SelectionState::ColorOnly,
            (None, Some(_)) => SelectionState::SizeOnly,
            (Some(_), Some(_)) => SelectionState::ColorAndSize,
        }
    }

    /// Recompute both bucket assignments and join them onto the rows
    pub fn redraw(&self) -> MarkerLayer {
        debug!(
            "redrawing {} rows, color: {}, size: {}",
            self.dataset.len(),
            describe(self.color),
            describe(self.size)
        );

        let color = BucketAssignment::for_selection(&self.dataset, self.color, MARKER_COLORS.len());
        let size = BucketAssignment::for_selection(&self.dataset, self.size, MARKER_SIZES.len());

        let mut markers = Vec::with_capacity(self.dataset.len());
        let mut unplaced = 0;
        for (row, record) in self.dataset.iter().enumerate() {
            let Some((latitude, longitude)) = record.position() else {
                unplaced += 1;
                continue;
            };
            let color_bucket = color.get(row);
            let size_bucket = size.get(row);
            markers.push(Marker {
                row,
                station: record.station.clone(),
                latitude,
                longitude,
                color: color_bucket.pick(&MARKER_COLORS, DEFAULT_COLOR),
                size: size_bucket.pick(&MARKER_SIZES, DEFAULT_SIZE),
                color_bucket,
                size_bucket,
                temperature: record.temperature,
                dewpoint: record.dewpoint,
            });
        }

        MarkerLayer {
            color,
            size,
            markers,
            unplaced,
        }
    }
}

fn describe(column: Option<Column>) -> &'static str {
    column.map(Column::name).unwrap_or("None")
}
