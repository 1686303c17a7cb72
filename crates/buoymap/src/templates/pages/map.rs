use buoy_map_core::Column;
use maud::{html, Markup};

use crate::{
    templates::{
        fragments::{map_controls, map_layer},
        layouts::{base, CurrentPage, PageConfig},
    },
    MapContext, MarkerLayer,
};

/// Map page - selectors above the marker layer
pub fn map_page(
    api_base: &str,
    columns: &[Column],
    context: &MapContext,
    layer: &MarkerLayer,
) -> Markup {
    let config = PageConfig {
        title: "Buoy Network - Map",
        api_base,
        current_page: CurrentPage::Map,
    };

    base(&config, map_content(columns, context, layer))
}

pub fn map_content(columns: &[Column], context: &MapContext, layer: &MarkerLayer) -> Markup {
    html! {
        div class="box" {
            (map_controls(columns, context.color, context.size))
            div id="map-layer" {
                (map_layer(context, layer))
            }
        }
    }
}
