// File: crates/minechart-core/src/loader.rs
// Summary: Sample loading seam: the source trait and the CSV statistics reader.

use std::path::{Path, PathBuf};

use crate::error::LoadError;
use crate::sample::{Minute, Sample};

/// Collaborator that produces the raw samples for a named series.
pub trait SampleSource {
    fn load(&self, name: &str) -> Result<Vec<Sample>, LoadError>;
}

/// Reads `<dir>/<name>.csv` statistics files with `time` (whole minutes
/// since the epoch) and `numplayers` columns.
pub struct CsvSampleSource {
    dir: PathBuf,
}

impl CsvSampleSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl SampleSource for CsvSampleSource {
    fn load(&self, name: &str) -> Result<Vec<Sample>, LoadError> {
        read_samples_csv(&self.dir.join(format!("{name}.csv")))
    }
}

/// Parse a statistics CSV. An empty or unparseable `numplayers` field
/// becomes a gap (`None`), never zero; a row without a parseable `time` is
/// an error, since the sample is meaningless without an instant.
pub fn read_samples_csv(path: &Path) -> Result<Vec<Sample>, LoadError> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_path(path)?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    let idx = |want: &str| headers.iter().position(|h| h == want);

    let i_time = idx("time").ok_or(LoadError::MissingColumn { column: "time" })?;
    let i_players = idx("numplayers").ok_or(LoadError::MissingColumn { column: "numplayers" })?;

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let time: Minute = rec
            .get(i_time)
            .and_then(|s| s.trim().parse().ok())
            .ok_or_else(|| LoadError::BadTime {
                line: rec.position().map(|p| p.line()).unwrap_or(0),
            })?;
        let value = rec.get(i_players).and_then(|s| s.trim().parse::<f64>().ok());
        out.push(Sample { time, value });
    }
    Ok(out)
}
