// File: crates/minechart-core/src/series.rs
// Summary: Per-series bookkeeping and the insertion-ordered store.

use crate::bucket::{bucketize, display_range};
use crate::color::Color;
use crate::domain::TimeDomain;
use crate::sample::{DisplayPoint, Sample};

/// One named, independently loaded series: raw samples, the bucketized
/// display sequence against the current domain, and cached min/max.
#[derive(Clone, Debug)]
pub struct SeriesEntry {
    pub name: String,
    pub color: Color,
    pub raw: Vec<Sample>,
    pub display: Vec<DisplayPoint>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// True once a load has populated `raw`; reserved-but-empty entries are
    /// kept out of rendering.
    pub loaded: bool,
    pub(crate) generation: u64,
}

impl SeriesEntry {
    /// Slot reserved at `begin_add` time: color consumed, no data yet.
    pub(crate) fn reserved(name: &str, color: Color, generation: u64) -> Self {
        Self {
            name: name.to_string(),
            color,
            raw: Vec::new(),
            display: Vec::new(),
            min: None,
            max: None,
            loaded: false,
            generation,
        }
    }

    /// Recompute `display` and the cached min/max against `domain`.
    pub(crate) fn rebucketize(&mut self, domain: &TimeDomain, target: usize) {
        self.display = bucketize(&self.raw, domain, target);
        let range = display_range(&self.display);
        self.min = range.map(|(lo, _)| lo);
        self.max = range.map(|(_, hi)| hi);
    }
}

/// Active series, unique by name, kept in insertion order (the legend order).
#[derive(Clone, Debug, Default)]
pub struct SeriesStore {
    entries: Vec<SeriesEntry>,
}

impl SeriesStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&SeriesEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut SeriesEntry> {
        self.entries.iter_mut().find(|e| e.name == name)
    }

    // Caller guarantees `entry.name` is not already present.
    pub(crate) fn insert(&mut self, entry: SeriesEntry) {
        debug_assert!(!self.contains(&entry.name));
        self.entries.push(entry);
    }

    pub(crate) fn remove(&mut self, name: &str) -> Option<SeriesEntry> {
        let idx = self.entries.iter().position(|e| e.name == name)?;
        Some(self.entries.remove(idx))
    }

    pub fn iter(&self) -> impl Iterator<Item = &SeriesEntry> {
        self.entries.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut SeriesEntry> {
        self.entries.iter_mut()
    }

    /// Min/max across the entries that currently have data; `None` when no
    /// entry does.
    pub fn global_range(&self) -> Option<(f64, f64)> {
        let mut range: Option<(f64, f64)> = None;
        for entry in &self.entries {
            if let (Some(lo), Some(hi)) = (entry.min, entry.max) {
                range = Some(match range {
                    Some((a, b)) => (a.min(lo), b.max(hi)),
                    None => (lo, hi),
                });
            }
        }
        range
    }
}
