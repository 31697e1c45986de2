// File: crates/minechart-core/src/bucket.rs
// Summary: Resampling of raw irregular samples into fixed-width display buckets.

use chrono::Duration;

use crate::domain::{boundaries, time_step, TimeDomain};
use crate::sample::{DisplayPoint, Minute, Sample};

/// Resample `raw` into the display sequence for `domain` at the given target
/// resolution. Output length depends only on the domain and the step policy,
/// never on `raw`.
pub fn bucketize(raw: &[Sample], domain: &TimeDomain, target: usize) -> Vec<DisplayPoint> {
    bucketize_with_step(raw, domain, time_step(domain, target))
}

/// Resample with an explicit bucket width.
///
/// `raw` is assumed ordered by ascending time. The scan walks newest to
/// oldest and halts entirely at the first sample older than `domain.start`;
/// buckets the scan never reaches stay gaps. With out-of-order or duplicated
/// timestamps, samples behind the halting one are simply never visited.
pub fn bucketize_with_step(raw: &[Sample], domain: &TimeDomain, step: Duration) -> Vec<DisplayPoint> {
    let spans = boundaries(domain, step);
    let start_secs = domain.start().timestamp();
    let end_secs = domain.end().timestamp();

    let mut out = vec![DisplayPoint::GAP; spans.len()];

    // Skip samples newer than the visible window.
    let mut i = raw.len();
    while i > 0 && raw[i - 1].seconds() > end_secs {
        i -= 1;
    }

    let mut halted = false;
    for (slot, span) in spans.iter().enumerate().rev() {
        if halted {
            break;
        }
        let span_secs = span.timestamp();
        let mut max_value: Option<f64> = None;
        let mut earliest: Option<Minute> = None;
        let mut any = false;

        while i > 0 && raw[i - 1].seconds() >= span_secs {
            let sample = raw[i - 1];
            if sample.seconds() < start_secs {
                halted = true;
                break;
            }
            any = true;
            earliest = Some(sample.time);
            if let Some(v) = sample.value {
                max_value = Some(match max_value {
                    Some(m) => m.max(v),
                    None => v,
                });
            }
            i -= 1;
        }

        // A bucket the halting sample interrupted still keeps what it
        // collected; buckets with nothing stay gaps.
        if any {
            out[slot] = DisplayPoint { time: earliest, value: max_value };
        }
    }

    out
}

/// Min/max over the present values of a display sequence; `None` when every
/// bucket is a gap.
pub fn display_range(display: &[DisplayPoint]) -> Option<(f64, f64)> {
    let mut range: Option<(f64, f64)> = None;
    for point in display {
        if let Some(v) = point.value {
            range = Some(match range {
                Some((lo, hi)) => (lo.min(v), hi.max(v)),
                None => (v, v),
            });
        }
    }
    range
}
