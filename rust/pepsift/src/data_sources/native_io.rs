use crate::errors::{
    PepsiftError,
    Result,
};
use crate::models::{
    DistinctPeptides,
    TargetDecoy,
};
use crate::normalize::canonicalize;
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Represents a single row of the native CSV result format: the sequence is
/// already cleaned upstream but may still carry short-code tags, and the
/// decoy label is an explicit boolean.
#[derive(Debug, Clone, Deserialize)]
struct NativeRow {
    clean_sequence: String,
    is_decoy: bool,
}

/// Read distinct canonical peptides from a native results CSV.
pub fn read_native_peptides<T: AsRef<Path>>(path: T) -> Result<DistinctPeptides> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| PepsiftError::io_at(e, path))?;
    let mut rdr = csv::ReaderBuilder::new().from_reader(file);

    info!("Reading native identifications from {}", path.display());

    let mut out = DistinctPeptides::default();
    for result in rdr.deserialize() {
        let row: NativeRow = result?;
        out.rows_read += 1;
        if TargetDecoy::from_bool(row.is_decoy).is_decoy() {
            continue;
        }
        out.keep(canonicalize(&row.clean_sequence));
    }
    out.log_summary("native");
    Ok(out)
}
