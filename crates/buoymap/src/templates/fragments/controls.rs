use buoy_map_core::Column;
use maud::{html, Markup};

/// The Color and Size selectors
///
/// A change to either select re-requests the marker layer with both values.
pub fn map_controls(columns: &[Column], color: Option<Column>, size: Option<Column>) -> Markup {
    html! {
        form id="map-controls" class="columns is-mobile mb-2"
            hx-get="/fragments/map"
            hx-target="#map-layer"
            hx-swap="innerHTML"
            hx-trigger="change" {
            div class="column is-narrow" {
                (selector("color", "Color", columns, color))
            }
            div class="column is-narrow" {
                (selector("size", "Size", columns, size))
            }
        }
    }
}

fn selector(name: &str, label: &str, columns: &[Column], current: Option<Column>) -> Markup {
    html! {
        div class="field" {
            label class="label is-small" for=(name) { (label) }
            div class="control" {
                div class="select is-small" {
                    select id=(name) name=(name) {
                        option value="None" selected[current.is_none()] { "None" }
                        @for column in columns {
                            option value=(column.name()) selected[current == Some(*column)] {
                                (column.label())
                            }
                        }
                    }
                }
            }
        }
    }
}
