// File: crates/minechart-core/src/axis.rs
// Summary: Value-axis planning: padded bounds and a round tick step.

/// Planned value axis: padded, step-aligned bounds plus the tick step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueAxis {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ValueAxis {
    /// Plan the axis for the given global value range; `None` (no active
    /// series) falls back to 0..100.
    pub fn plan(range: Option<(f64, f64)>) -> Self {
        let (min, max) = range.unwrap_or((0.0, 100.0));
        let interval = max - min;
        let step = if interval <= 20.0 {
            1.0
        } else if interval <= 40.0 {
            2.0
        } else if interval <= 80.0 {
            5.0
        } else if interval <= 200.0 {
            10.0
        } else if interval <= 400.0 {
            20.0
        } else {
            40.0
        };

        // Pad one unit past the data before snapping to step boundaries;
        // the lower bound never goes negative.
        let scaled_min = (((min - 1.0) / step).floor() * step).max(0.0);
        let scaled_max = ((max + 1.0) / step).ceil() * step;

        Self { min: scaled_min, max: scaled_max, step }
    }

    /// Tick values every `step` from `min` up to but excluding `max`.
    pub fn ticks(&self) -> Vec<f64> {
        let mut out = Vec::new();
        let mut v = self.min;
        while v < self.max {
            out.push(v);
            v += self.step;
        }
        out
    }
}
