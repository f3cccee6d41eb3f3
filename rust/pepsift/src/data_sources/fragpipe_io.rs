use crate::errors::{
    PepsiftError,
    Result,
    SpectrumIdError,
};
use crate::models::{
    DistinctPeptides,
    FragpipePsm,
    TargetDecoy,
};
use crate::normalize::canonicalize;
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Represents a single row from a FragPipe psm.tsv file. Only the columns
/// needed for filtering and derived fields are decoded; the rest of the
/// (wide) table is ignored.
#[derive(Debug, Clone, Deserialize)]
struct FragpipePsmRow {
    #[serde(rename = "Spectrum")]
    spectrum: String,
    #[serde(rename = "Spectrum File")]
    spectrum_file: String,
    #[serde(rename = "Peptide")]
    peptide: String,
    #[serde(rename = "Protein")]
    protein: String,
}

/// Minimal schema for the distinct-peptide path.
#[derive(Debug, Clone, Deserialize)]
struct FragpipePeptideRow {
    #[serde(rename = "Peptide")]
    peptide: String,
    #[serde(rename = "Protein")]
    protein: String,
}

/// Scan number is the segment between the first and second dot of the
/// structured spectrum identifier (`<run>.<scan>.<scan>.<charge>`).
fn scan_number_from_spectrum(spectrum: &str) -> std::result::Result<u32, SpectrumIdError> {
    let segment = spectrum
        .split('.')
        .nth(1)
        .ok_or_else(|| SpectrumIdError::MissingScanSegment {
            spectrum: spectrum.to_string(),
        })?;
    segment
        .parse()
        .map_err(|source| SpectrumIdError::ScanNotAnInteger {
            spectrum: spectrum.to_string(),
            source,
        })
}

/// Raw-file name is the segment of the spectrum-file path between the first
/// hyphen and the next dot (`interact-<raw_file>.pep.xml`).
fn raw_file_from_spectrum_path(
    spectrum_file: &str,
) -> std::result::Result<String, SpectrumIdError> {
    let after_hyphen = spectrum_file.split('-').nth(1).ok_or_else(|| {
        SpectrumIdError::MalformedSpectrumFile {
            spectrum_file: spectrum_file.to_string(),
        }
    })?;
    let stem = after_hyphen.split('.').next().unwrap_or(after_hyphen);
    if stem.is_empty() {
        return Err(SpectrumIdError::MalformedSpectrumFile {
            spectrum_file: spectrum_file.to_string(),
        });
    }
    Ok(stem.to_string())
}

/// Read distinct canonical peptides from a FragPipe psm.tsv table.
///
/// A row is a decoy when its protein identifier carries the `rev_` marker.
pub fn read_fragpipe_peptides<T: AsRef<Path>>(path: T) -> Result<DistinctPeptides> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| PepsiftError::io_at(e, path))?;
    let mut rdr = csv::ReaderBuilder::new().delimiter(b'\t').from_reader(file);

    info!("Reading FragPipe identifications from {}", path.display());

    let mut out = DistinctPeptides::default();
    for result in rdr.deserialize() {
        let row: FragpipePeptideRow = result?;
        out.rows_read += 1;
        if TargetDecoy::from_protein_id(&row.protein).is_decoy() {
            continue;
        }
        out.keep(canonicalize(&row.peptide));
    }
    out.log_summary("fragpipe");
    Ok(out)
}

/// Read the full decoy-filtered FragPipe PSM table, with scan number and
/// raw-file name derived from the structured spectrum identifiers.
///
/// Malformed identifiers propagate as errors; a psm.tsv that fails here is
/// broken, not merely inconvenient.
pub fn read_fragpipe_psms<T: AsRef<Path>>(path: T) -> Result<Vec<FragpipePsm>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| PepsiftError::io_at(e, path))?;
    let mut rdr = csv::ReaderBuilder::new().delimiter(b'\t').from_reader(file);

    info!("Reading FragPipe PSM table from {}", path.display());

    let mut psms = Vec::new();
    let mut rows_read = 0usize;
    for result in rdr.deserialize() {
        let row: FragpipePsmRow = result?;
        rows_read += 1;
        if TargetDecoy::from_protein_id(&row.protein).is_decoy() {
            continue;
        }
        let scan_number = scan_number_from_spectrum(&row.spectrum)?;
        let raw_file = raw_file_from_spectrum_path(&row.spectrum_file)?;
        let clean_peptide = canonicalize(&row.peptide);
        psms.push(FragpipePsm {
            spectrum: row.spectrum,
            spectrum_file: row.spectrum_file,
            peptide: row.peptide,
            clean_peptide,
            protein: row.protein,
            scan_number,
            raw_file,
        });
    }
    info!("Kept {} FragPipe PSMs from {} rows", psms.len(), rows_read);
    Ok(psms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn fixture(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fragpipe_io_files")
            .join(name)
    }

    #[test]
    fn test_scan_number_parsing() {
        assert_eq!(
            scan_number_from_spectrum("run_01.00455.00455.2").unwrap(),
            455
        );
        assert!(matches!(
            scan_number_from_spectrum("no_delimiters"),
            Err(SpectrumIdError::MissingScanSegment { .. })
        ));
        assert!(matches!(
            scan_number_from_spectrum("run_01.notanumber.2"),
            Err(SpectrumIdError::ScanNotAnInteger { .. })
        ));
    }

    #[test]
    fn test_raw_file_parsing() {
        assert_eq!(
            raw_file_from_spectrum_path("interact-run_01.pep.xml").unwrap(),
            "run_01"
        );
        assert!(matches!(
            raw_file_from_spectrum_path("no_hyphen.pep.xml"),
            Err(SpectrumIdError::MalformedSpectrumFile { .. })
        ));
    }

    #[test]
    fn test_read_fragpipe_peptides() {
        let out = read_fragpipe_peptides(fixture("psm.tsv")).unwrap();
        assert_eq!(out.rows_read, 4);
        assert_eq!(out.rows_kept, 3);
        assert_eq!(out.len(), 2);
        assert!(out.contains("PEPTLDEK"));
        assert!(out.contains("LLAMAR"));
    }

    #[test]
    fn test_read_fragpipe_psms_derives_fields() {
        let psms = read_fragpipe_psms(fixture("psm.tsv")).unwrap();
        assert_eq!(psms.len(), 3);
        assert_eq!(psms[0].scan_number, 455);
        assert_eq!(psms[0].raw_file, "run_01");
        assert_eq!(psms[0].clean_peptide, "PEPTLDEK");
        // Decoy row must not survive into the table.
        assert!(psms.iter().all(|p| !p.protein.contains("rev_")));
    }

    #[test]
    fn test_malformed_spectrum_is_an_error() {
        let path = std::env::temp_dir().join("pepsift_bad_spectrum.tsv");
        std::fs::write(
            &path,
            "Spectrum\tSpectrum File\tPeptide\tProtein\nbroken\tinteract-run.pep.xml\tPEPTIDEK\tsp|P1|TEST\n",
        )
        .unwrap();
        let err = read_fragpipe_psms(&path).unwrap_err();
        assert!(matches!(
            err,
            PepsiftError::SpectrumId(SpectrumIdError::MissingScanSegment { .. })
        ));
        std::fs::remove_file(&path).unwrap();
    }
}
