// File: crates/minechart-core/src/viewport.rs
// Summary: Drawing-surface capability: pixel ranges and resize, no resampling.

use crate::axis::ValueAxis;
use crate::domain::TimeDomain;
use crate::scale::{TimeScale, ValueScale};

/// Default surface width in pixels.
pub const WIDTH: i32 = 960;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 320;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 {
        self.left + self.right
    }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 {
        self.top + self.bottom
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(10, 30, 10, 20)
    }
}

/// The surface the chart is laid out against. The core only needs its pixel
/// ranges; a resize recomputes those, never the bucketized data.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
}

impl Viewport {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height, insets: Insets::default() }
    }

    pub fn with_insets(width: i32, height: i32, insets: Insets) -> Self {
        Self { width, height, insets }
    }

    pub fn resize(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
    }

    pub fn plot_width(&self) -> i32 {
        (self.width - self.insets.hsum() as i32).max(1)
    }

    pub fn plot_height(&self) -> i32 {
        (self.height - self.insets.vsum() as i32).max(1)
    }

    pub fn time_scale(&self, domain: &TimeDomain) -> TimeScale {
        TimeScale::new(domain, self.plot_width() as f32)
    }

    pub fn value_scale(&self, axis: &ValueAxis) -> ValueScale {
        ValueScale::new(axis, self.plot_height() as f32)
    }

    /// X-axis tick-count hint by plot width.
    pub fn suggested_time_ticks(&self) -> usize {
        let w = self.plot_width();
        if w < 700 {
            4
        } else if w < 1000 {
            6
        } else {
            8
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}
