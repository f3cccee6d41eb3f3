use crate::errors::{
    PepsiftError,
    Result,
};
use crate::models::DistinctPeptides;
use crate::normalize::{
    canonicalize,
    map_peaks_modifications,
};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Represents a single row from a PEAKS CSV export.
#[derive(Debug, Clone, Deserialize)]
struct PeaksRow {
    #[serde(rename = "Peptide")]
    peptide: String,
}

/// Read distinct canonical peptides from a PEAKS CSV export.
///
/// PEAKS annotates modifications as numeric mass deltas, which are first
/// rewritten into the shared short-code vocabulary and then stripped. PEAKS
/// exports carry no decoy column, so every row is kept.
pub fn read_peaks_peptides<T: AsRef<Path>>(path: T) -> Result<DistinctPeptides> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| PepsiftError::io_at(e, path))?;
    let mut rdr = csv::ReaderBuilder::new().from_reader(file);

    info!("Reading PEAKS identifications from {}", path.display());

    let mut out = DistinctPeptides::default();
    for result in rdr.deserialize() {
        let row: PeaksRow = result?;
        out.rows_read += 1;
        let mapped = map_peaks_modifications(&row.peptide);
        out.keep(canonicalize(&mapped));
    }
    out.log_summary("PEAKS");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn fixture(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("peaks_io_files")
            .join(name)
    }

    #[test]
    fn test_read_peaks_peptides() {
        let out = read_peaks_peptides(fixture("peptides.csv")).unwrap();
        assert_eq!(out.rows_read, 4);
        // No decoy information in PEAKS exports.
        assert_eq!(out.rows_kept, 4);
        assert_eq!(out.len(), 3);
        assert!(out.contains("PEPTLDEK"));
        assert!(out.contains("MLLAMAR"));
        assert!(out.contains("CATS"));
    }
}
