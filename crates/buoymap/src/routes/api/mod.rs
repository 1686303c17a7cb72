pub mod columns;
pub mod markers;
pub mod observations;

pub use columns::columns_handler;
pub use markers::markers_handler;
pub use observations::observations_handler;
