// File: crates/minechart-core/src/sample.rs
// Summary: Raw sample and display point types (minute-resolution timestamps).

use chrono::{DateTime, Utc};

/// Whole minutes since the Unix epoch, as delivered in the `time` column.
pub type Minute = i64;

/// One raw (timestamp, value) pair. A missing or unparseable player count
/// is `None`, never zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub time: Minute,
    pub value: Option<f64>,
}

impl Sample {
    pub fn new(time: Minute, value: Option<f64>) -> Self {
        Self { time, value }
    }

    /// Timestamp in seconds since the epoch.
    #[inline]
    pub fn seconds(&self) -> i64 {
        self.time * 60
    }

    /// Timestamp as an instant, when representable.
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.seconds(), 0)
    }
}

/// One bucketized output element. Both fields `None` means the bucket had no
/// contributing samples; renderers must treat that as a path break.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DisplayPoint {
    pub time: Option<Minute>,
    pub value: Option<f64>,
}

impl DisplayPoint {
    /// An empty bucket.
    pub const GAP: DisplayPoint = DisplayPoint { time: None, value: None };

    pub fn new(time: Minute, value: Option<f64>) -> Self {
        Self { time: Some(time), value }
    }

    #[inline]
    pub fn is_gap(&self) -> bool {
        self.time.is_none() && self.value.is_none()
    }
}
