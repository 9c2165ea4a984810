//! Dataset acquisition: read the census CSV and coerce rows.
//!
//! Loading is the only expected failure path in the whole program. A missing
//! or unreadable file, or a CSV-level parse error, aborts the render; a
//! malformed *field* inside an otherwise valid row does not (it coerces to
//! `NaN`, see [`crate::models`]).

use crate::models::{CensusRecord, RawRecord};
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Errors surfaced while acquiring the dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to open dataset {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse dataset: {0}")]
    Parse(#[from] csv::Error),
    #[error("dataset contains no rows")]
    Empty,
}

/// Load and coerce the dataset from a CSV file.
///
/// Columns are matched by header name (`state`, `abbr`, `age`, `smokes`);
/// extra columns are ignored.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Vec<CensusRecord>, DatasetError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|source| DatasetError::Open {
        path: path.display().to_string(),
        source,
    })?;
    from_reader(file)
}

/// Load and coerce the dataset from any reader producing CSV text.
pub fn from_reader<R: Read>(rdr: R) -> Result<Vec<CensusRecord>, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(rdr);
    let mut out = Vec::new();
    for row in reader.deserialize::<RawRecord>() {
        out.push(CensusRecord::from(row?));
    }
    if out.is_empty() {
        return Err(DatasetError::Empty);
    }
    Ok(out)
}
