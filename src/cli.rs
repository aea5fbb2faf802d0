use clap::Parser;
use std::path::PathBuf;

/// Compile rust projects and generate JSON output to be used by the Certora
/// Prover.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to output JSON to a file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Dump JSON output to the console
    #[arg(long)]
    pub json: bool,

    /// Show log outputs from cargo build on standard out
    #[arg(short, long)]
    pub log: bool,

    /// Be verbose
    #[arg(short, long)]
    pub verbose: bool,

    /// Additional features to pass to cargo
    #[arg(long, num_args = 1.., value_name = "NAME")]
    pub cargo_features: Option<Vec<String>>,
}
