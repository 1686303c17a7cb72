pub mod components;
pub mod fragments;
pub mod layouts;
pub mod pages;

pub use fragments::{map_controls, map_layer, stations_table};
pub use layouts::{CurrentPage, PageConfig};
pub use pages::{map_page, stations_page};
