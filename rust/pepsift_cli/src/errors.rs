#[derive(Debug)]
pub enum CliError {
    Io {
        source: String,
        path: Option<String>,
    },
    DataReading {
        source: String,
    },
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Io { source, path } => {
                if let Some(path) = path {
                    write!(f, "Error reading file {}: {}", path, source)
                } else {
                    write!(f, "Error reading file: {}", source)
                }
            }
            CliError::DataReading { source } => write!(f, "Error reading data: {}", source),
        }
    }
}

impl From<pepsift::PepsiftError> for CliError {
    fn from(e: pepsift::PepsiftError) -> Self {
        CliError::DataReading {
            source: format!("{:?}", e),
        }
    }
}
