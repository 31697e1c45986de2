// File: crates/minechart-core/src/domain.rs
// Summary: Visible time window, preset spans, and the bucket-step granularity ladder.

use chrono::{DateTime, Duration, Utc};

use crate::error::DomainError;

/// Desired display resolution; the actual bucket count follows from the
/// domain width and the granularity ladder.
pub const TARGET_BUCKETS: usize = 200;

/// The currently visible time window, `start < end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeDomain {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeDomain {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, DomainError> {
        if start >= end {
            return Err(DomainError::Inverted { start, end });
        }
        Ok(Self { start, end })
    }

    /// The window `[end - span, end]`.
    pub fn ending_at(end: DateTime<Utc>, span: Duration) -> Result<Self, DomainError> {
        Self::new(end - span, end)
    }

    /// The 24 hours ending now, the initial window.
    pub fn last_day() -> Self {
        let end = Utc::now();
        Self { start: end - Duration::days(1), end }
    }

    #[inline]
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn span(&self) -> Duration {
        self.end - self.start
    }
}

/// Spans offered by the time-range selector: 1h, 3h, 6h, 12h, 1d, 3d.
pub fn preset_spans() -> [Duration; 6] {
    [
        Duration::hours(1),
        Duration::hours(3),
        Duration::hours(6),
        Duration::hours(12),
        Duration::days(1),
        Duration::days(3),
    ]
}

// Bucket widths the axis granularity policy allows, in minutes:
// 1/5/10/30 min, 1/3/6/12/24 h, 3/7 d.
const LADDER_MINUTES: [i64; 11] = [1, 5, 10, 30, 60, 180, 360, 720, 1440, 4320, 10080];

/// Bucket width for `domain` at the given target resolution: the largest
/// ladder step not exceeding `span / target`, floored at one minute.
pub fn time_step(domain: &TimeDomain, target: usize) -> Duration {
    let raw_secs = domain.span().num_seconds() / target.max(1) as i64;
    let mut step = LADDER_MINUTES[0];
    for &minutes in &LADDER_MINUTES {
        if minutes * 60 <= raw_secs {
            step = minutes;
        } else {
            break;
        }
    }
    Duration::minutes(step)
}

/// Half-open bucket boundaries: instants stepped from `start` while `< end`.
pub fn boundaries(domain: &TimeDomain, step: Duration) -> Vec<DateTime<Utc>> {
    let mut out = Vec::new();
    let mut t = domain.start();
    while t < domain.end() {
        out.push(t);
        t += step;
    }
    out
}
