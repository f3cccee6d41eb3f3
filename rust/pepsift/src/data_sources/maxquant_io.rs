use crate::errors::{
    PepsiftError,
    Result,
    ResultsDirError,
};
use crate::models::{
    DistinctPeptides,
    TargetDecoy,
};
use crate::normalize::canonicalize;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::{
    debug,
    info,
};

/// File names the `txt/` results directory is allowed to contain.
const MSMS_FILE: &str = "msms.txt";
const PEPTIDES_FILE: &str = "peptides.txt";
const RESULTS_EXTENSION: &str = "txt";

/// Represents a single row from MaxQuant's msms.txt.
#[derive(Debug, Clone, Deserialize)]
struct MaxQuantRow {
    #[serde(rename = "Raw file")]
    raw_file: String,
    // The scan columns and the modified sequence are not used downstream,
    // but deserializing them enforces that the columns are present.
    #[allow(dead_code)]
    #[serde(rename = "Scan number")]
    scan_number: u64,
    #[allow(dead_code)]
    #[serde(rename = "Scan index")]
    scan_index: u64,
    #[serde(rename = "Sequence")]
    sequence: String,
    #[allow(dead_code)]
    #[serde(rename = "Modified sequence")]
    modified_sequence: String,
    #[serde(rename = "Reverse")]
    reverse: Option<String>,
}

/// Represents a single row from MaxQuant's peptides.txt, which carries no
/// decoy information.
#[derive(Debug, Clone, Deserialize)]
struct MaxQuantPeptideRow {
    #[serde(rename = "Sequence")]
    sequence: String,
}

/// Read distinct canonical peptides from a MaxQuant msms.txt table.
///
/// Rows flagged `Reverse == "+"` are dropped. When `files` is given, only
/// rows whose `Raw file` is in the set are considered.
pub fn read_maxquant_peptides<T: AsRef<Path>>(
    path: T,
    files: Option<&HashSet<String>>,
) -> Result<DistinctPeptides> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| PepsiftError::io_at(e, path))?;
    let mut rdr = csv::ReaderBuilder::new().delimiter(b'\t').from_reader(file);

    info!("Reading MaxQuant identifications from {}", path.display());

    let mut out = DistinctPeptides::default();
    for result in rdr.deserialize() {
        let row: MaxQuantRow = result?;
        out.rows_read += 1;
        if let Some(files) = files {
            if !files.contains(&row.raw_file) {
                continue;
            }
        }
        if TargetDecoy::from_reverse_flag(row.reverse.as_deref()).is_decoy() {
            continue;
        }
        out.keep(canonicalize(&row.sequence));
    }
    out.log_summary("maxquant");
    Ok(out)
}

/// Read distinct canonical peptides from a MaxQuant `txt/` results
/// directory.
///
/// Exactly one `.txt` file must be present. `msms.txt` is read with the full
/// schema (decoys filtered); `peptides.txt` carries no decoy information so
/// every row is kept. Anything else is an error.
pub fn read_maxquant_txt_dir<T: AsRef<Path>>(dir: T) -> Result<DistinctPeptides> {
    let dir = dir.as_ref();
    let mut candidates = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(|e| PepsiftError::io_at(e, dir))? {
        let entry = entry.map_err(|e| PepsiftError::io_at(e, dir))?;
        let path = entry.path();
        if path.extension().and_then(|x| x.to_str()) == Some(RESULTS_EXTENSION) {
            candidates.push(path);
        }
    }

    if candidates.is_empty() {
        return Err(ResultsDirError::NoResultsFile {
            dir: dir.to_path_buf(),
        }
        .into());
    }
    if candidates.len() > 1 {
        return Err(ResultsDirError::MultipleResultsFiles {
            dir: dir.to_path_buf(),
            found: candidates,
        }
        .into());
    }

    let path = candidates.remove(0);
    let file_name = path.file_name().and_then(|x| x.to_str());
    debug!("Selected results file {:?} in {}", file_name, dir.display());
    match file_name {
        Some(MSMS_FILE) => read_maxquant_peptides(&path, None),
        Some(PEPTIDES_FILE) => read_maxquant_peptides_only(&path),
        _ => Err(ResultsDirError::UnrecognizedResultsFile { path }.into()),
    }
}

fn read_maxquant_peptides_only(path: &Path) -> Result<DistinctPeptides> {
    let file = std::fs::File::open(path).map_err(|e| PepsiftError::io_at(e, path))?;
    let mut rdr = csv::ReaderBuilder::new().delimiter(b'\t').from_reader(file);

    info!("Reading MaxQuant peptide table from {}", path.display());

    let mut out = DistinctPeptides::default();
    for result in rdr.deserialize() {
        let row: MaxQuantPeptideRow = result?;
        out.rows_read += 1;
        out.keep(canonicalize(&row.sequence));
    }
    out.log_summary("maxquant");
    Ok(out)
}
