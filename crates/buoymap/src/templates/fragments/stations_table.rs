use buoy_map_core::{Column, Dataset, ObservationRecord};
use maud::{html, Markup};
use time::macros::format_description;

const SHOWN: [Column; 8] = [
    Column::Latitude,
    Column::Longitude,
    Column::WindSpeed,
    Column::WaveHeight,
    Column::Pressure,
    Column::Temperature,
    Column::WaterTemperature,
    Column::Dewpoint,
];

/// Table of every loaded row, with the parse report on top
pub fn stations_table(dataset: &Dataset) -> Markup {
    let report = dataset.report();
    html! {
        div class="box" {
            div class="is-flex is-justify-content-space-between is-align-items-center mb-4" {
                h2 class="title is-5 mb-0" { "Stations" }
                span class="tag is-info is-light" {
                    (dataset.len()) " of " (report.lines_read) " lines loaded"
                }
            }

            @if !report.rejected.is_empty() {
                article class="message is-warning is-small" {
                    div class="message-body" {
                        (report.rejected.len()) " malformed lines were skipped"
                        ul {
                            @for rejected in &report.rejected {
                                li { "line " (rejected.line) ": " (rejected.reason.to_string()) }
                            }
                        }
                    }
                }
            }

            @if dataset.is_empty() {
                div class="has-text-centered has-text-grey py-4" {
                    p { "No observations loaded." }
                }
            } @else {
                div class="table-container" {
                    table class="table is-fullwidth is-striped is-hoverable is-narrow" {
                        thead {
                            tr {
                                th { "Station" }
                                th { "Observed (UTC)" }
                                @for column in SHOWN {
                                    th class="has-text-right" { (column.label()) }
                                }
                            }
                        }
                        tbody {
                            @for record in dataset {
                                (station_row(record))
                            }
                        }
                    }
                }
            }
        }
    }
}

fn station_row(record: &ObservationRecord) -> Markup {
    let observed = record
        .timestamp
        .format(format_description!("[year]-[month]-[day] [hour]:[minute]"))
        .unwrap_or_default();
    html! {
        tr {
            td { strong { (record.station) } }
            td { (observed) }
            @for column in SHOWN {
                td class="has-text-right" {
                    @match record.value(column) {
                        Some(value) => { (value) }
                        None => { span class="has-text-grey-light" { "MM" } }
                    }
                }
            }
        }
    }
}
