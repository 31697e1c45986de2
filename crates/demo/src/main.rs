// File: crates/demo/src/main.rs
// Summary: Demo loads per-server statistics CSVs, drives adds and preset
// retimes through the chart state, and prints each resulting frame.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use minechart_core::{
    preset_spans, ChartState, CsvSampleSource, Frame, TimeDomain, Viewport,
};

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let dir = args.next().unwrap_or_else(|| "data/statistics".to_string());
    let names: Vec<String> = args.collect();
    if names.is_empty() {
        anyhow::bail!("usage: demo <statistics-dir> <series-name>...");
    }

    let source = CsvSampleSource::new(&dir);
    let mut state = ChartState::new(TimeDomain::last_day());
    let viewport = Viewport::default();

    for name in &names {
        let frame = state
            .add_from(name, &source, false)
            .with_context(|| format!("loading series '{name}' from {dir}"))?;
        if let Some(frame) = frame {
            println!("added '{name}':");
            print_frame(&frame);
        }
    }

    // Recorded data is usually older than "now": pin the window to the
    // newest sample so the preset spans show something.
    if let Some(end) = latest_sample_instant(&state) {
        let frame = state.retime(
            TimeDomain::ending_at(end, Duration::days(1))?,
            false,
        );
        println!("re-anchored to newest sample:");
        print_frame(&frame);
    }

    for span in preset_spans() {
        let frame = state.retime_span(span, true)?;
        println!("span {:>5} minutes:", span.num_minutes());
        print_frame(&frame);
    }

    println!(
        "viewport {}x{} -> {} time ticks",
        viewport.width,
        viewport.height,
        viewport.suggested_time_ticks()
    );
    Ok(())
}

fn latest_sample_instant(state: &ChartState) -> Option<DateTime<Utc>> {
    state
        .store()
        .iter()
        .filter_map(|e| e.raw.last())
        .filter_map(|s| s.instant())
        .max()
}

fn print_frame(frame: &Frame) {
    let axis = frame.axis;
    println!(
        "  axis {:.0}..{:.0} step {:.0}, global range {:?}",
        axis.min, axis.max, axis.step, frame.range
    );
    for series in &frame.series {
        let filled = series.display.iter().filter(|p| p.value.is_some()).count();
        println!(
            "  {} [{}] {}/{} buckets filled{}",
            series.name,
            series.color.to_hex(),
            filled,
            series.display.len(),
            if frame.animate { " (animated)" } else { "" }
        );
    }
}
