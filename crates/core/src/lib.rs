//! Buoy Map Core Library
//!
//! Shared pieces for the map server and the snapshot fetcher:
//! - Fixed-width observation feed parsing
//! - Equal-width bucketing of numeric columns
//! - Configuration loading (XDG-compliant)
//! - File system utilities

pub mod bucket;
mod config;
pub mod feed;
pub mod fs;

pub use bucket::{bucketize, Bucket, BucketAssignment};
pub use config::{find_config_file, load_config, ConfigSource};
pub use feed::{
    parse, parse_reader, parse_str, Column, Dataset, FeedError, FormatErrorKind,
    MalformedPolicy, ObservationRecord, ParseReport, RejectedLine, UnknownColumn,
};
pub use fs::{create_dir_all, ensure_dir_exists, path_exists};

/// Application name used for XDG paths
pub const APP_NAME: &str = "buoy-map";

/// Default map server port
pub const DEFAULT_MAP_PORT: u16 = 5006;

/// Default location of the observation snapshot
pub const DEFAULT_FEED_PATH: &str = "./data/latest_obs.txt";

/// Most recent observation from every station in the NDBC network
pub const LATEST_OBS_URL: &str = "https://www.ndbc.noaa.gov/data/latest_obs/latest_obs.txt";
