// File: crates/minechart-core/src/state.rs
// Summary: ChartState orchestration: add/remove/toggle/retime transitions and render frames.

use chrono::Duration;
use log::{debug, warn};

use crate::axis::ValueAxis;
use crate::color::{Color, ColorPool};
use crate::domain::{TimeDomain, TARGET_BUCKETS};
use crate::error::{DomainError, LoadError};
use crate::loader::SampleSource;
use crate::sample::{DisplayPoint, Sample};
use crate::series::{SeriesEntry, SeriesStore};

/// Token handed out by `begin_add`. Carries what `complete_add` needs to
/// apply the load result to the right incarnation of the entry: the name,
/// the generation captured at reserve time, and the animate flag.
#[derive(Clone, Debug)]
pub struct PendingLoad {
    name: String,
    generation: u64,
    animate: bool,
}

impl PendingLoad {
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// One line to draw: the display sequence plus legend name and color.
#[derive(Clone, Debug)]
pub struct FrameSeries {
    pub name: String,
    pub color: Color,
    pub display: Vec<DisplayPoint>,
}

/// Everything the rendering collaborator needs after a state transition.
#[derive(Clone, Debug)]
pub struct Frame {
    pub domain: TimeDomain,
    pub axis: ValueAxis,
    /// Loaded series in insertion (legend) order.
    pub series: Vec<FrameSeries>,
    pub range: Option<(f64, f64)>,
    pub animate: bool,
}

/// Orchestrator for the active series, the visible window, and the derived
/// scales. All mutation happens on one logical thread; the only suspension
/// point is a load between `begin_add` and `complete_add`, and the
/// generation check at completion is the sole cancellation mechanism.
pub struct ChartState {
    domain: TimeDomain,
    store: SeriesStore,
    colors: ColorPool,
    target_buckets: usize,
    next_generation: u64,
}

impl ChartState {
    pub fn new(domain: TimeDomain) -> Self {
        Self::with_colors(domain, ColorPool::new())
    }

    pub fn with_colors(domain: TimeDomain, colors: ColorPool) -> Self {
        Self {
            domain,
            store: SeriesStore::new(),
            colors,
            target_buckets: TARGET_BUCKETS,
            next_generation: 0,
        }
    }

    pub fn domain(&self) -> TimeDomain {
        self.domain
    }

    pub fn store(&self) -> &SeriesStore {
        &self.store
    }

    pub fn global_range(&self) -> Option<(f64, f64)> {
        self.store.global_range()
    }

    pub fn axis(&self) -> ValueAxis {
        ValueAxis::plan(self.global_range())
    }

    /// Reserve a slot for `name` and return the token its load completion
    /// must present. The color is drawn from the pool now, not when the
    /// load finishes. Duplicate adds are a silent no-op.
    pub fn begin_add(&mut self, name: &str, animate: bool) -> Option<PendingLoad> {
        if self.store.contains(name) {
            return None;
        }
        let color = self.colors.next_color();
        let generation = self.next_generation;
        self.next_generation += 1;
        self.store.insert(SeriesEntry::reserved(name, color, generation));
        debug!("reserved series {:?} (generation {})", name, generation);
        Some(PendingLoad { name: name.to_string(), generation, animate })
    }

    /// Apply a finished load. Returns `None` without touching anything when
    /// the entry was removed while loading, or was removed and re-added (the
    /// generation no longer matches) -- a stale load must never resurrect or
    /// overwrite a newer incarnation.
    pub fn complete_add(&mut self, pending: PendingLoad, raw: Vec<Sample>) -> Option<Frame> {
        let domain = self.domain;
        let target = self.target_buckets;
        let Some(entry) = self.store.get_mut(&pending.name) else {
            warn!("discarding load for removed series {:?}", pending.name);
            return None;
        };
        if entry.generation != pending.generation {
            warn!("discarding stale load for series {:?}", pending.name);
            return None;
        }
        entry.raw = raw;
        entry.loaded = true;
        entry.rebucketize(&domain, target);
        debug!(
            "loaded series {:?}: {} samples, range {:?}..{:?}",
            pending.name,
            entry.raw.len(),
            entry.min,
            entry.max
        );
        Some(self.frame(pending.animate))
    }

    /// A failed load leaves the reserved-but-empty entry in place (the name
    /// and color stay consumed until `remove`); the error is the caller's to
    /// surface. Not retried.
    pub fn fail_add(&mut self, pending: PendingLoad, err: LoadError) -> LoadError {
        warn!("load failed for series {:?}: {}", pending.name, err);
        err
    }

    /// Reserve, load, and complete in one step for synchronous callers.
    pub fn add_from(
        &mut self,
        name: &str,
        source: &dyn SampleSource,
        animate: bool,
    ) -> Result<Option<Frame>, LoadError> {
        let Some(pending) = self.begin_add(name, animate) else {
            return Ok(None);
        };
        match source.load(name) {
            Ok(raw) => Ok(self.complete_add(pending, raw)),
            Err(err) => Err(self.fail_add(pending, err)),
        }
    }

    /// Drop `name` and refresh the shared scales. Unknown names are a
    /// silent no-op.
    pub fn remove(&mut self, name: &str, animate: bool) -> Option<Frame> {
        let entry = self.store.remove(name)?;
        debug!("removed series {:?}", entry.name);
        Some(self.frame(animate))
    }

    /// Remove if present, otherwise add.
    pub fn toggle_from(
        &mut self,
        name: &str,
        source: &dyn SampleSource,
        animate: bool,
    ) -> Result<Option<Frame>, LoadError> {
        if self.store.contains(name) {
            Ok(self.remove(name, animate))
        } else {
            self.add_from(name, source, animate)
        }
    }

    /// Move the visible window and re-derive every entry's display sequence
    /// and the shared scales against it.
    pub fn retime(&mut self, domain: TimeDomain, animate: bool) -> Frame {
        self.domain = domain;
        for entry in self.store.iter_mut() {
            entry.rebucketize(&domain, self.target_buckets);
        }
        debug!("retimed to {}..{}", domain.start(), domain.end());
        self.frame(animate)
    }

    /// `[end - span, end]` for the preset time-range selector.
    pub fn retime_span(&mut self, span: Duration, animate: bool) -> Result<Frame, DomainError> {
        let domain = TimeDomain::ending_at(self.domain.end(), span)?;
        Ok(self.retime(domain, animate))
    }

    /// Snapshot of the render inputs. Only loaded entries are drawn;
    /// reserved slots awaiting (or having failed) a load stay invisible.
    pub fn frame(&self, animate: bool) -> Frame {
        let range = self.global_range();
        Frame {
            domain: self.domain,
            axis: ValueAxis::plan(range),
            series: self
                .store
                .iter()
                .filter(|e| e.loaded)
                .map(|e| FrameSeries {
                    name: e.name.clone(),
                    color: e.color,
                    display: e.display.clone(),
                })
                .collect(),
            range,
            animate,
        }
    }
}
