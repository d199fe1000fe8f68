use clap::{Parser, Subcommand, ValueEnum};
use stlkit_stl::StlFormat;

#[derive(clap::Args, Debug)]
pub struct InfoArgs {
    pub stl_path: String,
}

#[derive(clap::Args, Debug)]
pub struct ConvertArgs {
    pub input: String,

    pub output: String,

    /// Encoding for the output file.
    #[arg(short, long, value_enum, default_value_t = Format::Binary)]
    pub format: Format,

    /// Text for the 80 byte binary header.
    #[arg(long)]
    pub header: Option<String>,
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Format {
    Ascii,
    Binary,
}

impl From<Format> for StlFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Ascii => StlFormat::Ascii,
            Format::Binary => StlFormat::Binary,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print triangle and vertex counts and the bounding box of an STL file.
    Info(InfoArgs),
    /// Re-encode an STL file as ASCII or binary.
    Convert(ConvertArgs),
}
