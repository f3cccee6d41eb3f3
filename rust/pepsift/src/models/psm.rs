use serde::Serialize;

/// A FragPipe PSM that survived decoy filtering, with the scan number and
/// raw-file name already pulled out of the structured spectrum identifiers.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FragpipePsm {
    pub spectrum: String,
    pub spectrum_file: String,
    pub peptide: String,
    /// Canonical form of `peptide` (I/L merged, tags stripped).
    pub clean_peptide: String,
    pub protein: String,
    /// Second dot-separated segment of `spectrum`.
    pub scan_number: u32,
    /// Segment of `spectrum_file` between the first hyphen and the next dot.
    pub raw_file: String,
}
