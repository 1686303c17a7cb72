use std::ops::Index;
use std::slice::Iter;

use time::OffsetDateTime;

use super::{Column, FormatErrorKind};

/// One station reading. Every measurement is independently nullable.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationRecord {
    pub station: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timestamp: OffsetDateTime,
    pub wind_direction: Option<f64>,
    pub wind_speed: Option<f64>,
    pub wind_gust: Option<f64>,
    pub wave_height: Option<f64>,
    pub dominant_wave_period: Option<f64>,
    pub average_wave_period: Option<f64>,
    pub dominant_wave_direction: Option<f64>,
    pub pressure: Option<f64>,
    pub pressure_tendency: Option<f64>,
    pub temperature: Option<f64>,
    pub water_temperature: Option<f64>,
    pub dewpoint: Option<f64>,
    pub visibility: Option<f64>,
    pub tide: Option<f64>,
}

impl ObservationRecord {
    pub fn value(&self, column: Column) -> Option<f64> {
        match column {
            Column::Latitude => self.latitude,
            Column::Longitude => self.longitude,
            Column::WindDirection => self.wind_direction,
            Column::WindSpeed => self.wind_speed,
            Column::WindGust => self.wind_gust,
            Column::WaveHeight => self.wave_height,
            Column::DominantWavePeriod => self.dominant_wave_period,
            Column::AverageWavePeriod => self.average_wave_period,
            Column::DominantWaveDirection => self.dominant_wave_direction,
            Column::Pressure => self.pressure,
            Column::PressureTendency => self.pressure_tendency,
            Column::Temperature => self.temperature,
            Column::WaterTemperature => self.water_temperature,
            Column::Dewpoint => self.dewpoint,
            Column::Visibility => self.visibility,
            Column::Tide => self.tide,
        }
    }

    /// Map position, only when both coordinates were reported
    pub fn position(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RejectedLine {
    /// 1-based line number in the source file, header included
    pub line: usize,
    pub reason: FormatErrorKind,
}

/// Summary of a parse run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseReport {
    /// Non-blank data lines seen after the header
    pub lines_read: usize,
    pub rejected: Vec<RejectedLine>,
}

/// Parsed snapshot, in feed line order and indexed from 0
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<ObservationRecord>,
    report: ParseReport,
}

impl Dataset {
    pub fn new(records: Vec<ObservationRecord>, report: ParseReport) -> Self {
        Self { records, report }
    }

    pub fn report(&self) -> &ParseReport {
        &self.report
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, ObservationRecord> {
        self.records.iter()
    }

    /// Values of one column for every row, in row order
    pub fn column(&self, column: Column) -> Vec<Option<f64>> {
        self.records.iter().map(|r| r.value(column)).collect()
    }

    /// Most recent observation time in the snapshot
    pub fn latest_timestamp(&self) -> Option<OffsetDateTime> {
        self.records.iter().map(|r| r.timestamp).max()
    }
}

impl Index<usize> for Dataset {
    type Output = ObservationRecord;

    fn index(&self, index: usize) -> &Self::Output {
        &self.records[index]
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a ObservationRecord;
    type IntoIter = Iter<'a, ObservationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
