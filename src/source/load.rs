//! Reading and parsing the baseline data file.

use std::fs;
use std::path::Path;

use thiserror::Error;

use super::records::AlbumRecord;
use crate::catalog::Album;

/// Failures while obtaining baseline records.
///
/// A failed load never touches the catalog: records are parsed in full
/// before any merge happens, so there are no partial merges.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The data file could not be read.
    #[error("failed to read data file: {0}")]
    Io(#[from] std::io::Error),
    /// The data file is not valid JSON of the documented shape.
    #[error("failed to parse data file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read `path` and parse it into raw album records.
pub fn load_records(path: &Path) -> Result<Vec<AlbumRecord>, SourceError> {
    let raw = fs::read_to_string(path)?;
    let records: Vec<AlbumRecord> = serde_json::from_str(&raw)?;
    Ok(records)
}

/// Read `path` and convert every record into an [`Album`], in file order.
pub fn load_albums(path: &Path) -> Result<Vec<Album>, SourceError> {
    Ok(load_records(path)?.into_iter().map(Album::from).collect())
}
