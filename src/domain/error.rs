// Domain errors - rule violations in the analytics pipeline, not I/O failures
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum NormalizeError {
    /// A header line and at least one data line are required
    #[error("expected a header line and at least one data line, found {lines} non-blank line(s)")]
    InsufficientInput { lines: usize },
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StoreError {
    #[error("duplicate sample timestamp {0}")]
    DuplicateTimestamp(DateTime<Utc>),

    #[error("unparsable sample timestamp '{0}'")]
    InvalidTimestamp(String),

    #[error("sample record has no date field")]
    MissingTimestamp,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DashboardError {
    #[error("unsupported timeframe of {0} day(s), expected one of 7, 14, 30, 90")]
    UnsupportedTimeframe(u32),

    #[error("unknown focus mode '{0}'")]
    UnknownFocus(String),
}
