#[derive(thiserror::Error, Debug)]
pub enum FeedError {
    #[error("Failed to read feed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed record on line {line}: {reason}")]
    Format { line: usize, reason: FormatErrorKind },
}

/// Why a single feed line could not become a record
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum FormatErrorKind {
    #[error("line has {found} characters, at least {required} are needed for the timestamp")]
    TooShort { found: usize, required: usize },
    #[error("line is not valid UTF-8 past byte {valid_up_to}")]
    InvalidUtf8 { valid_up_to: usize },
    #[error("station id is empty")]
    EmptyStation,
    #[error("{field} value `{value}` is not a number")]
    BadNumber { field: &'static str, value: String },
    #[error("{field} is missing")]
    MissingTimestampPart { field: &'static str },
    #[error("invalid timestamp: {0}")]
    BadTimestamp(String),
    #[error("{field} {value} is outside the valid range")]
    OutOfRange { field: &'static str, value: f64 },
}
