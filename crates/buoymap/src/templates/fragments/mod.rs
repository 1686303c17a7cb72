mod controls;
mod map_layer;
mod stations_table;

pub use controls::map_controls;
pub use map_layer::map_layer;
pub use stations_table::stations_table;
