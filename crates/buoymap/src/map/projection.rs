/// Pixel size of the map surface
pub const MAP_WIDTH: f64 = 1080.0;
pub const MAP_HEIGHT: f64 = 540.0;

/// Equirectangular projection of lat/lon onto the map surface
///
/// Longitude -180..180 maps left to right across `MAP_WIDTH`, latitude
/// 90..-90 top to bottom across `MAP_HEIGHT`.
pub fn project(lat: f64, lon: f64) -> (f64, f64) {
    let x = (lon + 180.0) / 360.0 * MAP_WIDTH;
    let y = (90.0 - lat) / 180.0 * MAP_HEIGHT;
    (x.clamp(0.0, MAP_WIDTH), y.clamp(0.0, MAP_HEIGHT))
}

/// One decimal place, `N/A` when the reading is missing
pub fn format_reading(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.1}", v))
        .unwrap_or_else(|| "N/A".to_string())
}
