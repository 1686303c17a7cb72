mod fragments;
mod map;
mod stations;

pub use fragments::map_fragment_handler;
pub use map::{map_handler, SelectionQuery};
pub use stations::stations_handler;
