use crate::errors::{
    PepsiftError,
    Result,
};
use crate::models::DistinctPeptides;
use crate::normalize::canonicalize;
use calamine::{
    DataType,
    Reader,
    Xlsx,
    open_workbook,
};
use std::path::Path;
use tracing::info;

const SEQUENCE_COLUMN: &str = "Sequence";

/// Read distinct canonical peptides from a Proteome Discoverer xlsx export.
///
/// The first worksheet is used; the `Sequence` column is located by header
/// name. PD exports carry no decoy information, so every row is kept.
pub fn read_pd_peptides<T: AsRef<Path>>(path: T) -> Result<DistinctPeptides> {
    let path = path.as_ref();
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| PepsiftError::ParseError {
            msg: format!("workbook {} has no worksheets", path.display()),
        })??;

    info!("Reading Proteome Discoverer identifications from {}", path.display());

    let mut rows = range.rows();
    let header = rows.next().ok_or(PepsiftError::MissingColumn {
        column: SEQUENCE_COLUMN,
        path: path.to_path_buf(),
    })?;
    let seq_idx = header
        .iter()
        .position(|cell| cell.get_string() == Some(SEQUENCE_COLUMN))
        .ok_or(PepsiftError::MissingColumn {
            column: SEQUENCE_COLUMN,
            path: path.to_path_buf(),
        })?;

    let mut out = DistinctPeptides::default();
    for row in rows {
        // Spreadsheets often end in fully blank rows; those are not data.
        if row.iter().all(|cell| cell.is_empty()) {
            continue;
        }
        out.rows_read += 1;
        let sequence = row
            .get(seq_idx)
            .and_then(|cell| cell.get_string())
            .ok_or_else(|| PepsiftError::ParseError {
                msg: format!(
                    "non-string {} cell in {}",
                    SEQUENCE_COLUMN,
                    path.display()
                ),
            })?;
        out.keep(canonicalize(sequence));
    }
    out.log_summary("PD");
    Ok(out)
}
