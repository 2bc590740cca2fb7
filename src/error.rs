//! Error types for the nongli crate.

use std::io;
use std::path::PathBuf;

use crate::chinese::DateQuery;
use crate::date::CalendarDate;

/// Error type for conversion queries and table loading.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when the queried date is absent from every reachable table,
    /// e.g. a leap month that was not inserted in that year.
    #[error("date not found: {query}")]
    NotFound {
        /// The query that could not be resolved.
        query: DateQuery,
    },

    /// Returned when no table exists for a Gregorian year, either because
    /// the year is outside the configured range or because the source has
    /// nothing for it.
    #[error("no table covers year {year}")]
    YearNotCovered {
        /// The uncovered Gregorian year.
        year: i32,
    },

    /// Returned when the source failed to open or read a table.
    #[error("table for year {year} unavailable")]
    SourceUnavailable {
        /// Gregorian year of the table.
        year: i32,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// Returned when a table line does not have the expected shape.
    #[error("corrupt table for year {year} at line {line}")]
    DecodeCorruption {
        /// Gregorian year of the table.
        year: i32,
        /// 1-based line number within the table.
        line: usize,
        /// What was wrong with the line.
        #[source]
        source: DecodeError,
    },
}

impl Error {
    /// Returns `true` for the "expected" failures: the date or year simply
    /// is not in the reference data.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::YearNotCovered { .. })
    }
}

/// Reasons a table line fails to decode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("missing field {index}")]
    MissingField { index: usize },

    #[error("malformed lunar descriptor '{text}'")]
    BadDescriptor { text: String },

    #[error("lunar numeral {value} out of range in '{text}'")]
    NumeralOutOfRange { value: u32, text: String },

    #[error("leap marker on a day that does not start a month: '{text}'")]
    StrayLeapMarker { text: String },

    #[error("malformed Gregorian date '{text}', expected format '{format}'")]
    BadDate { text: String, format: &'static str },

    #[error("expected {expected}, found {found}")]
    OutOfSequence {
        expected: CalendarDate,
        found: CalendarDate,
    },

    #[error("table ends before {expected}")]
    Truncated { expected: CalendarDate },

    #[error("weekday label '{label}' does not match {date}")]
    WeekdayMismatch { label: String, date: CalendarDate },

    #[error("no month marker in table")]
    NoMonthMarker,

    #[error("line is not valid UTF-8")]
    NotUtf8,
}

/// Error type for loading an [`EngineConfig`](crate::EngineConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Returned when the config file cannot be read.
    #[error("failed to read config {}", path.display())]
    Io {
        /// Path of the config file.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// Returned when the config is not valid TOML for this schema.
    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),

    /// Returned when a setting is out of range.
    #[error("invalid config: {reason}")]
    Invalid {
        /// Which setting is wrong and why.
        reason: String,
    },
}
