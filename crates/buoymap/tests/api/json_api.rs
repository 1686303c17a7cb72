use crate::helpers::{spawn_app, spawn_app_with_columns};
use buoy_map_core::Column;
use serde_json::Value;

#[tokio::test]
async fn observations_include_parse_report() {
    let test_app = spawn_app();

    let (status, body) = test_app.get("/api/observations").await;
    let json: Value = serde_json::from_str(&body).unwrap();

    assert_eq!(status, 200);
    assert_eq!(json["lines_read"], 5);
    assert_eq!(json["rejected"].as_array().unwrap().len(), 1);
    assert_eq!(json["rejected"][0]["line"], 5);

    let observations = json["observations"].as_array().unwrap();
    assert_eq!(observations.len(), 4);
    assert_eq!(observations[0]["station"], "41001");
    assert_eq!(observations[0]["timestamp"], "2017-07-04T16:50:00Z");
    assert!(observations[1]["temperature"].is_null());
    assert!(observations[3]["latitude"].is_null());
}

#[tokio::test]
async fn columns_lists_selectable_columns() {
    let test_app = spawn_app();

    let (status, body) = test_app.get("/api/columns").await;
    let json: Value = serde_json::from_str(&body).unwrap();

    assert_eq!(status, 200);
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names.len(), 16);
    assert!(names.contains(&"temperature"));
    assert!(names.contains(&"3hr_pressure_tendency"));
}

#[tokio::test]
async fn markers_mirror_the_fragment() {
    let test_app = spawn_app();

    let (status, body) = test_app.get("/api/markers?color=temperature").await;
    let json: Value = serde_json::from_str(&body).unwrap();

    assert_eq!(status, 200);
    assert_eq!(json["color_column"], "temperature");
    assert!(json["size_column"].is_null());
    assert_eq!(json["unplaced"], 1);

    let markers = json["markers"].as_array().unwrap();
    assert_eq!(markers.len(), 3);
    assert_eq!(markers[0]["station"], "41001");
    assert_eq!(markers[0]["color"], "#053061");
    assert_eq!(markers[0]["color_bucket"], 0);
    assert!(markers[1]["color_bucket"].is_null());
    assert_eq!(markers[1]["color"], "#000000");
    assert_eq!(markers[2]["color_bucket"], 10);
    assert_eq!(markers[2]["size"], 3);
    assert!(markers[2]["size_bucket"].is_null());
}

#[tokio::test]
async fn markers_reject_unknown_columns() {
    let test_app = spawn_app();

    let (status, body) = test_app.get("/api/markers?size=salinity").await;

    assert_eq!(status, 400);
    assert!(body.contains("salinity"));
}

#[tokio::test]
async fn markers_reject_columns_not_offered() {
    let test_app = spawn_app_with_columns(vec![Column::Temperature]);

    let (status, body) = test_app.get("/api/markers?color=wind_speed").await;
    assert_eq!(status, 400);
    assert!(body.contains("wind_speed"));

    let (status, _) = test_app.get("/api/markers?color=temperature").await;
    assert_eq!(status, 200);
}

#[tokio::test]
async fn docs_are_served() {
    let test_app = spawn_app();

    let (status, _) = test_app.get("/docs").await;

    assert_eq!(status, 200);
}
