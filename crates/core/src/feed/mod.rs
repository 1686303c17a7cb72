//! NDBC "latest observations" feed
//!
//! The feed is fixed-width text: two header lines followed by one record per
//! line, each field occupying a fixed number of characters with no separator.
//! Missing readings are written as [`MISSING_SENTINEL`].

mod columns;
mod error;
mod parser;
mod record;

pub use columns::{Column, FieldSpec, UnknownColumn, FIELDS, RECORD_WIDTH};
pub use error::{FeedError, FormatErrorKind};
pub use parser::{parse, parse_reader, parse_str, MalformedPolicy, HEADER_LINES, MISSING_SENTINEL};
pub use record::{Dataset, ObservationRecord, ParseReport, RejectedLine};
