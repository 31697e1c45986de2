// File: crates/minechart-core/src/lib.rs
// Summary: Core library entry point; exports the resampling engine, axis planner, and chart state.

pub mod axis;
pub mod bucket;
pub mod color;
pub mod domain;
pub mod error;
pub mod loader;
pub mod sample;
pub mod scale;
pub mod series;
pub mod state;
pub mod viewport;

pub use axis::ValueAxis;
pub use bucket::{bucketize, bucketize_with_step};
pub use color::{Color, ColorPool};
pub use domain::{preset_spans, time_step, TimeDomain, TARGET_BUCKETS};
pub use error::{DomainError, LoadError};
pub use loader::{CsvSampleSource, SampleSource};
pub use sample::{DisplayPoint, Minute, Sample};
pub use series::{SeriesEntry, SeriesStore};
pub use state::{ChartState, Frame, FrameSeries, PendingLoad};
pub use viewport::{Insets, Viewport};
