//! Marker layer for the buoy map
//!
//! Every selector change rebuilds the whole layer from the loaded dataset:
//! both bucket assignments are recomputed and joined back onto the rows.

mod context;
mod palette;
mod projection;

pub use context::{parse_selection, MapContext, Marker, MarkerLayer, SelectionState};
pub use palette::{DEFAULT_COLOR, DEFAULT_SIZE, MARKER_COLORS, MARKER_SIZES};
pub use projection::{format_reading, project, MAP_HEIGHT, MAP_WIDTH};
