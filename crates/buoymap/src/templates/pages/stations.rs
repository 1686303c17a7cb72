use buoy_map_core::Dataset;
use maud::{html, Markup};

use crate::templates::{
    fragments::stations_table,
    layouts::{base, CurrentPage, PageConfig},
};

/// Stations page - every loaded row as a table
pub fn stations_page(api_base: &str, feed_path: &str, dataset: &Dataset) -> Markup {
    let config = PageConfig {
        title: "Buoy Network - Stations",
        api_base,
        current_page: CurrentPage::Stations,
    };

    base(&config, stations_content(feed_path, dataset))
}

pub fn stations_content(feed_path: &str, dataset: &Dataset) -> Markup {
    html! {
        p class="is-size-7 has-text-grey mb-2" { "Source: " code { (feed_path) } }
        (stations_table(dataset))
    }
}
