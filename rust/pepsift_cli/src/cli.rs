use clap::{
    Parser,
    ValueEnum,
};
use pepsift::SourceFormat;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the search results (a file, or a MaxQuant txt directory)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Source format; sniffed from the input when omitted
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// Restrict to these raw file names (MaxQuant only, repeatable)
    #[arg(short, long)]
    pub raw_file: Vec<String>,

    /// Where to write the peptide list; stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum FormatArg {
    Maxquant,
    Fragpipe,
    Peaks,
    Pd,
    Native,
}

impl From<FormatArg> for SourceFormat {
    fn from(x: FormatArg) -> Self {
        match x {
            FormatArg::Maxquant => SourceFormat::MaxQuant,
            FormatArg::Fragpipe => SourceFormat::FragPipe,
            FormatArg::Peaks => SourceFormat::Peaks,
            FormatArg::Pd => SourceFormat::ProteomeDiscoverer,
            FormatArg::Native => SourceFormat::Native,
        }
    }
}
