use crate::helpers::{spawn_app, spawn_app_with_columns};
use buoy_map_core::Column;

#[tokio::test]
async fn map_page_offers_both_selectors() {
    let test_app = spawn_app();

    let (status, html) = test_app.get("/").await;

    assert_eq!(status, 200);
    assert!(html.contains(r#"name="color""#));
    assert!(html.contains(r#"name="size""#));
    assert!(html.contains(r#"hx-get="/fragments/map""#));
    assert!(html.contains(r#"<option value="temperature">"#));
    assert!(html.contains(r#"id="map-layer""#));
    // default state draws every placed station in the default style
    assert_eq!(html.matches("<circle").count(), 3);
}

#[tokio::test]
async fn plain_fragment_uses_default_style() {
    let test_app = spawn_app();

    let (status, html) = test_app.get("/fragments/map?color=None&size=None").await;

    assert_eq!(status, 200);
    assert_eq!(html.matches("<circle").count(), 3);
    assert_eq!(html.matches(r##"fill="#000000""##).count(), 3);
    assert_eq!(html.matches(r#"r="1.5""#).count(), 3);
    assert!(html.contains("1 without coordinates"));
    assert!(!html.contains("<html"));
}

#[tokio::test]
async fn coloring_by_temperature_uses_palette() {
    let test_app = spawn_app();

    let (status, html) = test_app.get("/fragments/map?color=temperature&size=None").await;

    assert_eq!(status, 200);
    // coldest and warmest placed stations take the palette ends
    assert!(html.contains(r##"fill="#053061""##));
    assert!(html.contains(r##"fill="#67001f""##));
    // 41002 reported no temperature
    assert_eq!(html.matches(r##"fill="#000000""##).count(), 1);
    assert!(html.contains("color: Air Temperature (degC)"));
}

#[tokio::test]
async fn size_column_is_independent_of_color() {
    let test_app = spawn_app();

    let (_, html) = test_app.get("/fragments/map?color=None&size=wind_speed").await;

    assert_eq!(html.matches(r##"fill="#000000""##).count(), 3);
    // wind speed 5.0, 6.0, 7.0 spread over the nine sizes
    assert!(html.contains(r#"r="0.5""#));
    assert!(html.contains(r#"r="4.5""#));
}

#[tokio::test]
async fn unknown_selection_falls_back_to_none() {
    let test_app = spawn_app();

    let (status, html) = test_app.get("/fragments/map?color=salinity").await;

    assert_eq!(status, 200);
    assert_eq!(html.matches(r##"fill="#000000""##).count(), 3);
}

#[tokio::test]
async fn tooltip_shows_station_readings() {
    let test_app = spawn_app();

    let (_, html) = test_app.get("/fragments/map").await;

    assert!(html.contains("Buoy: 41001\nTemperature: 10.0\nDewpoint: 22.4"));
    assert!(html.contains("Buoy: 41002\nTemperature: N/A\nDewpoint: 21.0"));
}

#[tokio::test]
async fn stations_page_lists_rows_and_rejects() {
    let test_app = spawn_app();

    let (status, html) = test_app.get("/stations").await;

    assert_eq!(status, 200);
    assert!(html.contains("4 of 5 lines loaded"));
    assert!(html.contains("46042"));
    assert!(html.contains("line 5:"));
    assert!(html.contains("2017-07-04 16:50"));
}

#[tokio::test]
async fn selection_is_limited_to_offered_columns() {
    let test_app = spawn_app_with_columns(vec![Column::Temperature]);

    let (_, page) = test_app.get("/").await;
    assert!(page.contains(r#"<option value="temperature">"#));
    assert!(!page.contains(r#"value="wind_speed""#));

    let (status, html) = test_app.get("/fragments/map?color=wind_speed").await;
    assert_eq!(status, 200);
    assert_eq!(html.matches(r##"fill="#000000""##).count(), 3);
}
