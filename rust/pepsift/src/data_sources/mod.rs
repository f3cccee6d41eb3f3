pub mod fragpipe_io;
pub mod maxquant_io;
pub mod native_io;
pub mod pd_io;
pub mod peaks_io;

use crate::errors::{
    PepsiftError,
    Result,
};
use crate::models::DistinctPeptides;
use serde::Serialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::{
    debug,
    warn,
};

/// The supported identification sources. Selected explicitly by the caller
/// or via [`sniff_format`]; every variant has exactly one loader.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum SourceFormat {
    MaxQuant,
    FragPipe,
    Peaks,
    ProteomeDiscoverer,
    Native,
}

impl SourceFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceFormat::MaxQuant => "maxquant",
            SourceFormat::FragPipe => "fragpipe",
            SourceFormat::Peaks => "peaks",
            SourceFormat::ProteomeDiscoverer => "pd",
            SourceFormat::Native => "native",
        }
    }
}

fn read_headers(path: &Path, delimiter: u8) -> Result<Vec<String>> {
    let file = std::fs::File::open(path).map_err(|e| PepsiftError::io_at(e, path))?;
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .from_reader(file);
    Ok(rdr.headers()?.iter().map(|s| s.to_string()).collect())
}

/// Identify the source format of a results path from its shape: directories
/// are MaxQuant `txt/` layouts, `.xlsx` is Proteome Discoverer, and tabular
/// files are distinguished by their header columns.
pub fn sniff_format<T: AsRef<Path>>(path: T) -> Result<SourceFormat> {
    let path = path.as_ref();
    if path.is_dir() {
        return Ok(SourceFormat::MaxQuant);
    }
    if path.extension().and_then(|x| x.to_str()) == Some("xlsx") {
        return Ok(SourceFormat::ProteomeDiscoverer);
    }

    let tab_headers = read_headers(path, b'\t')?;
    let has = |headers: &[String], col: &str| headers.iter().any(|h| h == col);
    if has(&tab_headers, "Reverse") && has(&tab_headers, "Raw file") {
        return Ok(SourceFormat::MaxQuant);
    }
    if has(&tab_headers, "Spectrum") && has(&tab_headers, "Peptide") {
        return Ok(SourceFormat::FragPipe);
    }

    let comma_headers = read_headers(path, b',')?;
    if has(&comma_headers, "clean_sequence") && has(&comma_headers, "is_decoy") {
        return Ok(SourceFormat::Native);
    }
    if has(&comma_headers, "Peptide") {
        return Ok(SourceFormat::Peaks);
    }

    debug!(
        "No format matched headers {:?} / {:?}",
        tab_headers, comma_headers
    );
    Err(PepsiftError::UnrecognizedFormat {
        path: path.to_path_buf(),
    })
}

/// Dispatch to the loader for `format` and return the distinct canonical
/// peptide set.
///
/// The raw-file restriction only exists where the schema carries a raw-file
/// column (MaxQuant); for the other formats it is ignored with a warning.
pub fn read_distinct_peptides<T: AsRef<Path>>(
    format: SourceFormat,
    path: T,
    files: Option<&HashSet<String>>,
) -> Result<DistinctPeptides> {
    if files.is_some() && format != SourceFormat::MaxQuant {
        warn!(
            "Raw-file restriction is not supported for {} input; ignoring it",
            format.as_str()
        );
    }
    match format {
        SourceFormat::MaxQuant => {
            if path.as_ref().is_dir() {
                maxquant_io::read_maxquant_txt_dir(path)
            } else {
                maxquant_io::read_maxquant_peptides(path, files)
            }
        }
        SourceFormat::FragPipe => fragpipe_io::read_fragpipe_peptides(path),
        SourceFormat::Peaks => peaks_io::read_peaks_peptides(path),
        SourceFormat::ProteomeDiscoverer => pd_io::read_pd_peptides(path),
        SourceFormat::Native => native_io::read_native_peptides(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn fixture(dir: &str, name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join(dir)
            .join(name)
    }

    #[test]
    fn test_sniff_known_formats() {
        assert_eq!(
            sniff_format(fixture("maxquant_io_files", "msms.txt")).unwrap(),
            SourceFormat::MaxQuant
        );
        assert_eq!(
            sniff_format(fixture("maxquant_io_files", "txt_msms")).unwrap(),
            SourceFormat::MaxQuant
        );
        assert_eq!(
            sniff_format(fixture("fragpipe_io_files", "psm.tsv")).unwrap(),
            SourceFormat::FragPipe
        );
        assert_eq!(
            sniff_format(fixture("peaks_io_files", "peptides.csv")).unwrap(),
            SourceFormat::Peaks
        );
        assert_eq!(
            sniff_format(fixture("native_io_files", "results.csv")).unwrap(),
            SourceFormat::Native
        );
        assert_eq!(
            sniff_format(fixture("pd_io_files", "peptides.xlsx")).unwrap(),
            SourceFormat::ProteomeDiscoverer
        );
    }

    #[test]
    fn test_sniff_unrecognized_format() {
        let path = std::env::temp_dir().join("pepsift_unknown_table.tsv");
        std::fs::write(&path, "a\tb\n1\t2\n").unwrap();
        let err = sniff_format(&path).unwrap_err();
        assert!(matches!(err, PepsiftError::UnrecognizedFormat { .. }));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_dispatch_matches_direct_loader() {
        let direct =
            fragpipe_io::read_fragpipe_peptides(fixture("fragpipe_io_files", "psm.tsv")).unwrap();
        let dispatched = read_distinct_peptides(
            SourceFormat::FragPipe,
            fixture("fragpipe_io_files", "psm.tsv"),
            None,
        )
        .unwrap();
        assert_eq!(direct.peptides, dispatched.peptides);
        assert_eq!(direct.rows_kept, dispatched.rows_kept);
    }
}
