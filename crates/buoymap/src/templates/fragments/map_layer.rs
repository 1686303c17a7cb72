use maud::{html, Markup};

use crate::{format_reading, project, MapContext, Marker, MarkerLayer, MAP_HEIGHT, MAP_WIDTH};

const MARKER_ALPHA: f64 = 0.8;
const OCEAN: &str = "#dfe9f3";
const GRID: &str = "#b8c7d6";

/// Marker layer swapped into `#map-layer` on every selector change
pub fn map_layer(context: &MapContext, layer: &MarkerLayer) -> Markup {
    html! {
        p class="is-size-7 has-text-grey mb-2" id="map-summary" {
            (layer.markers.len()) " stations plotted"
            @if layer.unplaced > 0 {
                ", " (layer.unplaced) " without coordinates"
            }
            @if let Some(column) = context.color {
                " | color: " (column.label())
            }
            @if let Some(column) = context.size {
                " | size: " (column.label())
            }
        }
        svg class="buoy-map" xmlns="http://www.w3.org/2000/svg"
            viewBox=(format!("0 0 {} {}", MAP_WIDTH, MAP_HEIGHT))
            preserveAspectRatio="xMidYMid meet" {
            rect x="0" y="0" width=(MAP_WIDTH) height=(MAP_HEIGHT) fill=(OCEAN) {}
            (graticule())
            @for marker in &layer.markers {
                (marker_circle(marker))
            }
        }
    }
}

/// Lines every 30 degrees
fn graticule() -> Markup {
    html! {
        g stroke=(GRID) stroke-width="0.5" {
            @for lon in (-150..=150).step_by(30) {
                @let (x, _) = project(0.0, lon as f64);
                line x1=(x) y1="0" x2=(x) y2=(MAP_HEIGHT) {}
            }
            @for lat in (-60..=60).step_by(30) {
                @let (_, y) = project(lat as f64, 0.0);
                line x1="0" y1=(y) x2=(MAP_WIDTH) y2=(y) {}
            }
        }
    }
}

fn marker_circle(marker: &Marker) -> Markup {
    let (x, y) = project(marker.latitude, marker.longitude);
    html! {
        circle class="station-marker"
            cx=(format!("{:.1}", x))
            cy=(format!("{:.1}", y))
            r=(format!("{:.1}", f64::from(marker.size) / 2.0))
            fill=(marker.color)
            fill-opacity=(MARKER_ALPHA)
            stroke="none"
            data-station=(marker.station) {
            title { (tooltip(marker)) }
        }
    }
}

fn tooltip(marker: &Marker) -> String {
    format!(
        "Buoy: {}\nTemperature: {}\nDewpoint: {}",
        marker.station,
        format_reading(marker.temperature),
        format_reading(marker.dewpoint)
    )
}
