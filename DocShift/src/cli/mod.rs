//! DocShift CLI - Command-line interface for JSON/YAML/XML conversion

pub mod convert;
pub mod progress;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "docshift")]
#[command(about = "DocShift: convert structured data between JSON, YAML, and XML", long_about = None)]
#[command(version)]
struct Cli {
    /// Input file (.json, .yml, .yaml, or .xml)
    input: PathBuf,

    /// Output file (overwritten)
    output: PathBuf,

    /// Pick the output format from the output extension instead of the input's
    #[arg(long)]
    cross_format: bool,

    /// Worker pool size (defaults to the number of cores)
    #[arg(short = 'j', long)]
    threads: Option<usize>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Suppress step output
    #[arg(short, long)]
    quiet: bool,
}

/// Run the DocShift CLI
pub fn run_cli() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    convert::execute(
        &cli.input,
        &cli.output,
        cli.config.as_ref(),
        cli.cross_format,
        cli.threads,
        cli.quiet,
    )
}
