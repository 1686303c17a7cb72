pub mod map;
pub mod routes;
mod startup;
pub mod templates;
mod utils;

pub use map::{
    format_reading, parse_selection, project, MapContext, Marker, MarkerLayer, SelectionState,
    DEFAULT_COLOR, DEFAULT_SIZE, MAP_HEIGHT, MAP_WIDTH, MARKER_COLORS, MARKER_SIZES,
};
pub use routes::*;
pub use startup::*;
pub use utils::*;
