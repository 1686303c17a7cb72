/// Point sizes used when a size column is selected
pub const MARKER_SIZES: [u32; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];

/// Eleven step red-blue diverging palette, low values blue, high values red
pub const MARKER_COLORS: [&str; 11] = [
    "#053061", "#2166ac", "#4393c3", "#92c5de", "#d1e5f0", "#f7f7f7", "#fddbc7", "#f4a582",
    "#d6604d", "#b2182b", "#67001f",
];

pub const DEFAULT_SIZE: u32 = 3;

pub const DEFAULT_COLOR: &str = "#000000";
