pub mod map;
pub mod stations;

pub use map::{map_content, map_page};
pub use stations::{stations_content, stations_page};
