use std::fmt;
use std::str::FromStr;

/// One slot of the fixed-width record layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub width: usize,
}

const fn field(name: &'static str, width: usize) -> FieldSpec {
    FieldSpec { name, width }
}

/// Record layout, in line order. Widths are character counts.
pub const FIELDS: [FieldSpec; 22] = [
    field("station", 5),
    field("latitude", 8),
    field("longitude", 9),
    field("year", 5),
    field("month", 3),
    field("day", 3),
    field("hour", 3),
    field("minute", 3),
    field("wind_direction", 4),
    field("wind_speed", 6),
    field("wind_gust", 6),
    field("wave_height", 5),
    field("dominant_wave_period", 4),
    field("average_wave_period", 5),
    field("dominant_wave_direction", 4),
    field("pressure", 7),
    field("3hr_pressure_tendency", 6),
    field("temperature", 6),
    field("water_temperature", 6),
    field("dewpoint", 6),
    field("visibility", 5),
    field("tide", 7),
];

/// Total characters covered by [`FIELDS`]
pub const RECORD_WIDTH: usize = {
    let mut total = 0;
    let mut i = 0;
    while i < FIELDS.len() {
        total += FIELDS[i].width;
        i += 1;
    }
    total
};

/// Numeric columns of a parsed record that can drive marker color or size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Latitude,
    Longitude,
    WindDirection,
    WindSpeed,
    WindGust,
    WaveHeight,
    DominantWavePeriod,
    AverageWavePeriod,
    DominantWaveDirection,
    Pressure,
    PressureTendency,
    Temperature,
    WaterTemperature,
    Dewpoint,
    Visibility,
    Tide,
}

impl Column {
    pub const ALL: [Column; 16] = [
        Column::Latitude,
        Column::Longitude,
        Column::WindDirection,
        Column::WindSpeed,
        Column::WindGust,
        Column::WaveHeight,
        Column::DominantWavePeriod,
        Column::AverageWavePeriod,
        Column::DominantWaveDirection,
        Column::Pressure,
        Column::PressureTendency,
        Column::Temperature,
        Column::WaterTemperature,
        Column::Dewpoint,
        Column::Visibility,
        Column::Tide,
    ];

    /// Column name as it appears in the feed layout
    pub fn name(self) -> &'static str {
        match self {
            Column::Latitude => "latitude",
            Column::Longitude => "longitude",
            Column::WindDirection => "wind_direction",
            Column::WindSpeed => "wind_speed",
            Column::WindGust => "wind_gust",
            Column::WaveHeight => "wave_height",
            Column::DominantWavePeriod => "dominant_wave_period",
            Column::AverageWavePeriod => "average_wave_period",
            Column::DominantWaveDirection => "dominant_wave_direction",
            Column::Pressure => "pressure",
            Column::PressureTendency => "3hr_pressure_tendency",
            Column::Temperature => "temperature",
            Column::WaterTemperature => "water_temperature",
            Column::Dewpoint => "dewpoint",
            Column::Visibility => "visibility",
            Column::Tide => "tide",
        }
    }

    /// Human readable label with the unit NDBC reports in
    pub fn label(self) -> &'static str {
        match self {
            Column::Latitude => "Latitude (deg)",
            Column::Longitude => "Longitude (deg)",
            Column::WindDirection => "Wind Direction (degT)",
            Column::WindSpeed => "Wind Speed (m/s)",
            Column::WindGust => "Wind Gust (m/s)",
            Column::WaveHeight => "Wave Height (m)",
            Column::DominantWavePeriod => "Dominant Wave Period (s)",
            Column::AverageWavePeriod => "Average Wave Period (s)",
            Column::DominantWaveDirection => "Dominant Wave Direction (degT)",
            Column::Pressure => "Pressure (hPa)",
            Column::PressureTendency => "3hr Pressure Tendency (hPa)",
            Column::Temperature => "Air Temperature (degC)",
            Column::WaterTemperature => "Water Temperature (degC)",
            Column::Dewpoint => "Dewpoint (degC)",
            Column::Visibility => "Visibility (nmi)",
            Column::Tide => "Tide (ft)",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("unknown column: {0}")]
pub struct UnknownColumn(pub String);

impl FromStr for Column {
    type Err = UnknownColumn;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Column::ALL
            .into_iter()
            .find(|column| column.name() == s)
            .ok_or_else(|| UnknownColumn(s.to_string()))
    }
}
