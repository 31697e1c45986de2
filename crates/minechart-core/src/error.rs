// File: crates/minechart-core/src/error.rs
// Summary: Library error types. All failures are local and non-fatal.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Invalid visible-window construction.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("domain start {start} is not before end {end}")]
    Inverted { start: DateTime<Utc>, end: DateTime<Utc> },
}

/// Raw-sample loading failure. Leaves the series unmaterialized; the caller
/// decides whether to retry or surface a message.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading samples: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing required column `{column}`")]
    MissingColumn { column: &'static str },
    #[error("unparseable time field at line {line}")]
    BadTime { line: u64 },
    #[error("no sample source for series `{name}`")]
    UnknownSeries { name: String },
}
