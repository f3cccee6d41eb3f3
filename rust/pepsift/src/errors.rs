use std::path::PathBuf;

/// Structural problems with a results directory (the MaxQuant `txt/`
/// layout): the loader expects exactly one known results file.
#[derive(Debug)]
pub enum ResultsDirError {
    NoResultsFile {
        dir: PathBuf,
    },
    MultipleResultsFiles {
        dir: PathBuf,
        found: Vec<PathBuf>,
    },
    UnrecognizedResultsFile {
        path: PathBuf,
    },
}

/// Malformed structured spectrum identifiers in FragPipe output.
///
/// These indicate a precondition violation on trusted local input, so they
/// propagate instead of being tolerated.
#[derive(Debug)]
pub enum SpectrumIdError {
    MissingScanSegment {
        spectrum: String,
    },
    ScanNotAnInteger {
        spectrum: String,
        source: std::num::ParseIntError,
    },
    MalformedSpectrumFile {
        spectrum_file: String,
    },
}

#[derive(Debug)]
pub enum PepsiftError {
    Io {
        source: std::io::Error,
        path: Option<PathBuf>,
    },
    Csv(csv::Error),
    Xlsx(calamine::XlsxError),
    MissingColumn {
        column: &'static str,
        path: PathBuf,
    },
    UnrecognizedFormat {
        path: PathBuf,
    },
    ResultsDir(ResultsDirError),
    SpectrumId(SpectrumIdError),
    ParseError {
        msg: String,
    },
}

impl std::fmt::Display for PepsiftError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

pub type Result<T> = std::result::Result<T, PepsiftError>;

impl From<std::io::Error> for PepsiftError {
    fn from(x: std::io::Error) -> Self {
        Self::Io {
            source: x,
            path: None,
        }
    }
}

impl From<csv::Error> for PepsiftError {
    fn from(x: csv::Error) -> Self {
        Self::Csv(x)
    }
}

impl From<calamine::XlsxError> for PepsiftError {
    fn from(x: calamine::XlsxError) -> Self {
        Self::Xlsx(x)
    }
}

impl From<std::num::ParseIntError> for PepsiftError {
    fn from(x: std::num::ParseIntError) -> Self {
        Self::ParseError { msg: x.to_string() }
    }
}

impl From<ResultsDirError> for PepsiftError {
    fn from(x: ResultsDirError) -> Self {
        Self::ResultsDir(x)
    }
}

impl From<SpectrumIdError> for PepsiftError {
    fn from(x: SpectrumIdError) -> Self {
        Self::SpectrumId(x)
    }
}

impl PepsiftError {
    pub fn io_at(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source,
            path: Some(path.into()),
        }
    }
}
