use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use log::{debug, info, warn};
use serde::Deserialize;
use time::{Date, Month, OffsetDateTime, PrimitiveDateTime, Time};

use super::{
    Dataset, FeedError, FormatErrorKind, ObservationRecord, ParseReport, RejectedLine, FIELDS,
};

/// Lines at the top of the feed holding column names and units
pub const HEADER_LINES: usize = 2;

/// Token NDBC writes in place of a reading that was not taken
pub const MISSING_SENTINEL: &str = "MM";

/// Characters needed to reach the end of the `minute` field
const TIMESTAMP_END: usize = 39;

/// What to do with a line that does not fit the record layout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Drop the line, log it and keep it in the [`ParseReport`]
    #[default]
    Skip,
    /// Stop at the first malformed line
    Abort,
}

impl FromStr for MalformedPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "skip" => Ok(MalformedPolicy::Skip),
            "abort" => Ok(MalformedPolicy::Abort),
            other => Err(format!("unknown malformed line policy: {}", other)),
        }
    }
}

/// Parse a snapshot file from disk
pub fn parse(path: impl AsRef<Path>, policy: MalformedPolicy) -> Result<Dataset, FeedError> {
    let path = path.as_ref();
    info!("parsing observation feed {}", path.display());
    let file = File::open(path)?;
    parse_reader(BufReader::new(file), policy)
}

pub fn parse_str(contents: &str, policy: MalformedPolicy) -> Result<Dataset, FeedError> {
    parse_reader(contents.as_bytes(), policy)
}

pub fn parse_reader<R: BufRead>(reader: R, policy: MalformedPolicy) -> Result<Dataset, FeedError> {
    let mut records = Vec::new();
    let mut report = ParseReport::default();

    for (index, bytes) in reader.split(b'\n').enumerate().skip(HEADER_LINES) {
        let mut bytes = bytes?;
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }

        let parsed = match String::from_utf8(bytes) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => parse_line(&line),
            Err(e) => Err(FormatErrorKind::InvalidUtf8 {
                valid_up_to: e.utf8_error().valid_up_to(),
            }),
        };
        report.lines_read += 1;
        let line_number = index + 1;

        match parsed {
            Ok(record) => records.push(record),
            Err(reason) => match policy {
                MalformedPolicy::Abort => {
                    return Err(FeedError::Format {
                        line: line_number,
                        reason,
                    })
                }
                MalformedPolicy::Skip => {
                    warn!("skipping line {}: {}", line_number, reason);
                    report.rejected.push(RejectedLine {
                        line: line_number,
                        reason,
                    });
                }
            },
        }
    }

    debug!(
        "parsed {} records from {} lines, {} rejected",
        records.len(),
        report.lines_read,
        report.rejected.len()
    );
    Ok(Dataset::new(records, report))
}

/// Cut a line into trimmed fields by character count. Characters past the
/// layout are ignored and a short line yields empty trailing fields.
fn split_fields(line: &str) -> [&str; 22] {
    let mut rest = line;
    std::array::from_fn(|i| {
        let end = rest
            .char_indices()
            .nth(FIELDS[i].width)
            .map(|(pos, _)| pos)
            .unwrap_or(rest.len());
        let (value, tail) = rest.split_at(end);
        rest = tail;
        value.trim()
    })
}

fn parse_line(line: &str) -> Result<ObservationRecord, FormatErrorKind> {
    let found = line.chars().count();
    if found < TIMESTAMP_END {
        return Err(FormatErrorKind::TooShort {
            found,
            required: TIMESTAMP_END,
        });
    }

    let [
        station,
        latitude,
        longitude,
        year,
        month,
        day,
        hour,
        minute,
        wind_direction,
        wind_speed,
        wind_gust,
        wave_height,
        dominant_wave_period,
        average_wave_period,
        dominant_wave_direction,
        pressure,
        pressure_tendency,
        temperature,
        water_temperature,
        dewpoint,
        visibility,
        tide,
    ] = split_fields(line);

    if station.is_empty() || station == MISSING_SENTINEL {
        return Err(FormatErrorKind::EmptyStation);
    }

    let timestamp = combine_timestamp(year, month, day, hour, minute)?;

    Ok(ObservationRecord {
        station: station.to_string(),
        latitude: coordinate("latitude", latitude, 90.0)?,
        longitude: coordinate("longitude", longitude, 180.0)?,
        timestamp,
        wind_direction: measurement("wind_direction", wind_direction)?,
        wind_speed: measurement("wind_speed", wind_speed)?,
        wind_gust: measurement("wind_gust", wind_gust)?,
        wave_height: measurement("wave_height", wave_height)?,
        dominant_wave_period: measurement("dominant_wave_period", dominant_wave_period)?,
        average_wave_period: measurement("average_wave_period", average_wave_period)?,
        dominant_wave_direction: measurement("dominant_wave_direction", dominant_wave_direction)?,
        pressure: measurement("pressure", pressure)?,
        pressure_tendency: measurement("3hr_pressure_tendency", pressure_tendency)?,
        temperature: measurement("temperature", temperature)?,
        water_temperature: measurement("water_temperature", water_temperature)?,
        dewpoint: measurement("dewpoint", dewpoint)?,
        visibility: measurement("visibility", visibility)?,
        tide: measurement("tide", tide)?,
    })
}

fn measurement(field: &'static str, raw: &str) -> Result<Option<f64>, FormatErrorKind> {
    if raw.is_empty() || raw == MISSING_SENTINEL {
        return Ok(None);
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(FormatErrorKind::BadNumber {
            field,
            value: raw.to_string(),
        }),
    }
}

fn coordinate(field: &'static str, raw: &str, limit: f64) -> Result<Option<f64>, FormatErrorKind> {
    match measurement(field, raw)? {
        Some(value) if !(-limit..=limit).contains(&value) => {
            Err(FormatErrorKind::OutOfRange { field, value })
        }
        value => Ok(value),
    }
}

fn timestamp_part<T: FromStr>(field: &'static str, raw: &str) -> Result<T, FormatErrorKind> {
    if raw.is_empty() || raw == MISSING_SENTINEL {
        return Err(FormatErrorKind::MissingTimestampPart { field });
    }
    raw.parse::<T>().map_err(|_| FormatErrorKind::BadNumber {
        field,
        value: raw.to_string(),
    })
}

/// Observation times in the feed are UTC
fn combine_timestamp(
    year: &str,
    month: &str,
    day: &str,
    hour: &str,
    minute: &str,
) -> Result<OffsetDateTime, FormatErrorKind> {
    let year: i32 = timestamp_part("year", year)?;
    let month: u8 = timestamp_part("month", month)?;
    let day: u8 = timestamp_part("day", day)?;
    let hour: u8 = timestamp_part("hour", hour)?;
    let minute: u8 = timestamp_part("minute", minute)?;

    let month =
        Month::try_from(month).map_err(|e| FormatErrorKind::BadTimestamp(e.to_string()))?;
    let date = Date::from_calendar_date(year, month, day)
        .map_err(|e| FormatErrorKind::BadTimestamp(e.to_string()))?;
    let time =
        Time::from_hms(hour, minute, 0).map_err(|e| FormatErrorKind::BadTimestamp(e.to_string()))?;

    Ok(PrimitiveDateTime::new(date, time).assume_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::RECORD_WIDTH;
    use time::macros::datetime;

    const HEADER: &str = "#STN     LAT      LON  YYYY MM DD hh mm WDIR WSPD   GST WVHT  DPD APD MWD   PRES  PTDY  ATMP  WTMP  DEWP  VIS   TIDE\n\
                          #text    deg      deg   yr mo dy hr mn degT  m/s   m/s   m   sec sec degT   hPa   hPa  degC  degC  degC  nmi     ft\n";

    /// Right-align each value in its layout slot
    fn line(values: [&str; 22]) -> String {
        FIELDS
            .iter()
            .zip(values)
            .map(|(field, value)| format!("{:>width$}", value, width = field.width))
            .collect()
    }

    fn buoy(station: &str, temperature: &str) -> String {
        line([
            station, "32.382", "-75.402", "2017", "07", "04", "16", "50", "200", "7.0", "9.0",
            "1.2", "6", "4.8", "170", "1017.4", "+0.3", temperature, "28.1", "22.4", "MM", "MM",
        ])
    }

    fn feed(lines: &[String]) -> String {
        let mut contents = HEADER.to_string();
        for l in lines {
            contents.push_str(l);
            contents.push('\n');
        }
        contents
    }

    #[test]
    fn test_fixture_lines_span_the_layout() {
        assert_eq!(buoy("41001", "25.1").chars().count(), RECORD_WIDTH);
    }

    #[test]
    fn test_parses_one_record_per_data_line() {
        let contents = feed(&[buoy("41001", "25.1"), buoy("41002", "24.0"), buoy("41004", "26.3")]);
        let dataset = parse_str(&contents, MalformedPolicy::Abort).unwrap();

        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.report().lines_read, 3);
        assert!(dataset.report().rejected.is_empty());

        let stations: Vec<&str> = dataset.iter().map(|r| r.station.as_str()).collect();
        assert_eq!(stations, vec!["41001", "41002", "41004"]);
    }

    #[test]
    fn test_fields_are_typed() {
        let contents = feed(&[buoy("41001", "25.1")]);
        let dataset = parse_str(&contents, MalformedPolicy::Abort).unwrap();
        let record = &dataset[0];

        assert_eq!(record.station, "41001");
        assert_eq!(record.latitude, Some(32.382));
        assert_eq!(record.longitude, Some(-75.402));
        assert_eq!(record.timestamp, datetime!(2017-07-04 16:50 UTC));
        assert_eq!(record.wind_direction, Some(200.0));
        assert_eq!(record.pressure, Some(1017.4));
        assert_eq!(record.pressure_tendency, Some(0.3));
        assert_eq!(record.temperature, Some(25.1));
        assert_eq!(record.water_temperature, Some(28.1));
        assert_eq!(record.dewpoint, Some(22.4));
    }

    #[test]
    fn test_sentinel_becomes_no_value() {
        let contents = feed(&[buoy("41001", "MM"), buoy("41002", "24.0")]);
        let dataset = parse_str(&contents, MalformedPolicy::Abort).unwrap();

        assert_eq!(dataset[0].temperature, None);
        assert_eq!(dataset[1].temperature, Some(24.0));
        for record in &dataset {
            assert_eq!(record.visibility, None);
            assert_eq!(record.tide, None);
        }
    }

    #[test]
    fn test_missing_coordinates_are_allowed() {
        let mut values = [
            "46042", "MM", "MM", "2017", "07", "04", "16", "50", "MM", "MM", "MM", "MM", "MM",
            "MM", "MM", "MM", "MM", "14.2", "MM", "MM", "MM", "MM",
        ];
        let record = parse_line(&line(values)).unwrap();
        assert_eq!(record.position(), None);
        assert_eq!(record.temperature, Some(14.2));

        values[1] = "36.785";
        let record = parse_line(&line(values)).unwrap();
        assert_eq!(record.latitude, Some(36.785));
        assert_eq!(record.position(), None);

        values[2] = "-122.398";
        let record = parse_line(&line(values)).unwrap();
        assert_eq!(record.position(), Some((36.785, -122.398)));
    }

    #[test]
    fn test_identical_time_fields_give_identical_timestamps() {
        let contents = feed(&[buoy("41001", "25.1"), buoy("41002", "11.0")]);
        let dataset = parse_str(&contents, MalformedPolicy::Abort).unwrap();
        assert_eq!(dataset[0].timestamp, dataset[1].timestamp);
    }

    #[test]
    fn test_each_time_field_changes_the_timestamp() {
        let base = [
            "41001", "32.382", "-75.402", "2017", "07", "04", "16", "50", "MM", "MM", "MM", "MM",
            "MM", "MM", "MM", "MM", "MM", "MM", "MM", "MM", "MM", "MM",
        ];
        let reference = parse_line(&line(base)).unwrap().timestamp;

        for (slot, replacement) in [(3, "2018"), (4, "08"), (5, "05"), (6, "17"), (7, "51")] {
            let mut values = base;
            values[slot] = replacement;
            let changed = parse_line(&line(values)).unwrap().timestamp;
            assert_ne!(changed, reference, "changing {} kept the timestamp", FIELDS[slot].name);
        }
    }

    #[test]
    fn test_invalid_calendar_date_is_rejected() {
        let mut values = [
            "41001", "32.382", "-75.402", "2017", "02", "30", "16", "50", "MM", "MM", "MM", "MM",
            "MM", "MM", "MM", "MM", "MM", "MM", "MM", "MM", "MM", "MM",
        ];
        assert!(matches!(
            parse_line(&line(values)),
            Err(FormatErrorKind::BadTimestamp(_))
        ));

        values[4] = "02";
        values[5] = "28";
        values[6] = "24";
        assert!(matches!(
            parse_line(&line(values)),
            Err(FormatErrorKind::BadTimestamp(_))
        ));

        values[6] = "MM";
        assert_eq!(
            parse_line(&line(values)),
            Err(FormatErrorKind::MissingTimestampPart { field: "hour" })
        );
    }

    #[test]
    fn test_skip_policy_records_rejected_lines() {
        let bad = buoy("41002", "x1.0");
        let contents = feed(&[buoy("41001", "25.1"), bad, buoy("41004", "26.3")]);
        let dataset = parse_str(&contents, MalformedPolicy::Skip).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.report().lines_read, 3);
        assert_eq!(
            dataset.report().rejected,
            vec![RejectedLine {
                line: 4,
                reason: FormatErrorKind::BadNumber {
                    field: "temperature",
                    value: "x1.0".to_string()
                }
            }]
        );
        assert_eq!(dataset[1].station, "41004");
    }

    #[test]
    fn test_abort_policy_returns_first_error() {
        let contents = feed(&[buoy("41001", "25.1"), "41002  32.0".to_string()]);
        match parse_str(&contents, MalformedPolicy::Abort) {
            Err(FeedError::Format { line, reason }) => {
                assert_eq!(line, 4);
                assert!(matches!(reason, FormatErrorKind::TooShort { .. }));
            }
            other => panic!("expected format error, got {:?}", other),
        }
    }

    #[test]
    fn test_long_lines_are_truncated_and_short_lines_padded() {
        let long = format!("{}   9.9  12.0", buoy("41001", "25.1"));
        let short: String = buoy("41002", "24.0").chars().take(RECORD_WIDTH - 18).collect();
        let contents = feed(&[long, short]);
        let dataset = parse_str(&contents, MalformedPolicy::Abort).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset[0].tide, None);
        assert_eq!(dataset[0].temperature, Some(25.1));
        assert_eq!(dataset[1].temperature, Some(24.0));
        assert_eq!(dataset[1].dewpoint, None);
        assert_eq!(dataset[1].visibility, None);
    }

    #[test]
    fn test_blank_lines_and_crlf_are_ignored() {
        let contents = format!(
            "{}{}\r\n\r\n   \n{}\r\n",
            HEADER,
            buoy("41001", "25.1"),
            buoy("41002", "24.0")
        );
        let dataset = parse_str(&contents, MalformedPolicy::Abort).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset[1].tide, None);
    }

    #[test]
    fn test_invalid_utf8_follows_the_policy() {
        let mut contents = feed(&[buoy("41001", "25.1")]).into_bytes();
        contents.extend_from_slice(b"4100\xff 32.382\n");
        contents.extend_from_slice(format!("{}\n", buoy("41004", "26.3")).as_bytes());

        let dataset = parse_reader(contents.as_slice(), MalformedPolicy::Skip).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.report().lines_read, 3);
        assert_eq!(
            dataset.report().rejected,
            vec![RejectedLine {
                line: 4,
                reason: FormatErrorKind::InvalidUtf8 { valid_up_to: 4 }
            }]
        );
        assert_eq!(dataset[1].station, "41004");

        match parse_reader(contents.as_slice(), MalformedPolicy::Abort) {
            Err(FeedError::Format { line, reason }) => {
                assert_eq!(line, 4);
                assert_eq!(reason, FormatErrorKind::InvalidUtf8 { valid_up_to: 4 });
            }
            other => panic!("expected format error, got {:?}", other),
        }
    }

    #[test]
    fn test_header_only_feed_is_empty() {
        let dataset = parse_str(HEADER, MalformedPolicy::Abort).unwrap();
        assert!(dataset.is_empty());
        assert_eq!(dataset.latest_timestamp(), None);
    }

    #[test]
    fn test_out_of_range_latitude_is_rejected() {
        let mut values = [
            "41001", "92.000", "-75.402", "2017", "07", "04", "16", "50", "MM", "MM", "MM", "MM",
            "MM", "MM", "MM", "MM", "MM", "MM", "MM", "MM", "MM", "MM",
        ];
        assert_eq!(
            parse_line(&line(values)),
            Err(FormatErrorKind::OutOfRange {
                field: "latitude",
                value: 92.0
            })
        );
        values[1] = "MM";
        values[0] = "MM";
        assert_eq!(parse_line(&line(values)), Err(FormatErrorKind::EmptyStation));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = parse("/nonexistent/latest_obs.txt", MalformedPolicy::Skip);
        assert!(matches!(result, Err(FeedError::Io(_))));
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("skip".parse::<MalformedPolicy>(), Ok(MalformedPolicy::Skip));
        assert_eq!("Abort".parse::<MalformedPolicy>(), Ok(MalformedPolicy::Abort));
        assert!("ignore".parse::<MalformedPolicy>().is_err());
    }
}
