mod cli;
mod errors;

use clap::Parser;
use cli::Cli;
use pepsift::{
    read_distinct_peptides,
    sniff_format,
};
use std::collections::HashSet;
use std::io::Write;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> std::result::Result<(), errors::CliError> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        ) // This uses RUST_LOG environment variable
        .init();

    // Parse command line arguments
    let args = Cli::parse();

    let format = match args.format {
        Some(f) => f.into(),
        None => sniff_format(&args.input)?,
    };
    info!("Reading {} as {}", args.input.display(), format.as_str());

    let files: Option<HashSet<String>> = if args.raw_file.is_empty() {
        None
    } else {
        Some(args.raw_file.iter().cloned().collect())
    };

    let peptides = read_distinct_peptides(format, &args.input, files.as_ref())?;
    info!(
        "{} distinct peptides ({} rows kept of {} read)",
        peptides.len(),
        peptides.rows_kept,
        peptides.rows_read,
    );

    let mut sorted: Vec<&str> = peptides.iter().collect();
    sorted.sort_unstable();

    match args.output {
        Some(path) => {
            let mut file = std::fs::File::create(&path).map_err(|e| errors::CliError::Io {
                source: e.to_string(),
                path: Some(path.to_string_lossy().to_string()),
            })?;
            for peptide in &sorted {
                writeln!(file, "{}", peptide).map_err(|e| errors::CliError::Io {
                    source: e.to_string(),
                    path: Some(path.to_string_lossy().to_string()),
                })?;
            }
            info!("Wrote {} peptides to {}", sorted.len(), path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            for peptide in &sorted {
                writeln!(handle, "{}", peptide).map_err(|e| errors::CliError::Io {
                    source: e.to_string(),
                    path: None,
                })?;
            }
        }
    }

    Ok(())
}
