// File: crates/minechart-core/src/scale.rs
// Summary: Linear pixel transforms handed to the rendering collaborator.

use crate::axis::ValueAxis;
use crate::domain::TimeDomain;

/// Seconds since the Unix epoch on the X axis.
pub type Instant = i64;

/// Horizontal scale mapping the visible domain onto `[0, plot width]`.
#[derive(Clone, Copy, Debug)]
pub struct TimeScale {
    start: Instant,
    end: Instant,
    width_px: f32,
}

impl TimeScale {
    pub fn new(domain: &TimeDomain, width_px: f32) -> Self {
        Self {
            start: domain.start().timestamp(),
            end: domain.end().timestamp(),
            width_px: width_px.max(1.0),
        }
    }

    #[inline]
    pub fn to_px(&self, t: Instant) -> f32 {
        let span = (self.end - self.start).max(1) as f32;
        (t - self.start) as f32 / span * self.width_px
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> Instant {
        let span = (self.end - self.start).max(1) as f32;
        self.start + (px / self.width_px * span) as i64
    }
}

/// Vertical scale mapping the planned axis onto `[plot height, 0]`
/// (larger values higher on screen).
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    min: f64,
    max: f64,
    height_px: f32,
}

impl ValueScale {
    pub fn new(axis: &ValueAxis, height_px: f32) -> Self {
        Self { min: axis.min, max: axis.max, height_px: height_px.max(1.0) }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let span = (self.max - self.min).max(1e-9);
        self.height_px - ((v - self.min) / span) as f32 * self.height_px
    }

    #[inline]
    pub fn from_px(&self, py: f32) -> f64 {
        let span = (self.max - self.min).max(1e-9);
        self.min + ((self.height_px - py) / self.height_px) as f64 * span
    }
}
