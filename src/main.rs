use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

use sheetbridge::{StylePolicy, convert};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input file: a .json document or an .xlsx workbook
    #[arg(long, short = 'i', required = true)]
    input: PathBuf,

    /// Output file; defaults to data/output.xlsx or data/output.json
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Sheet name in the Excel file (reserved, currently not used)
    #[arg(long, short = 's', default_value = "Sheet1")]
    sheet_name: String,

    /// Show debug output
    #[arg(long, short = 'v', conflicts_with = "quiet")]
    verbose: bool,

    /// Only show errors
    #[arg(long, short = 'q')]
    quiet: bool,
}

fn init_logging(cli: &Cli) {
    let level = if cli.quiet {
        tracing::Level::ERROR
    } else if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    debug!(sheet_name = %cli.sheet_name, "sheet-name option is reserved and ignored");

    let output = convert(&cli.input, cli.output.as_deref(), &StylePolicy::default())
        .with_context(|| format!("Conversion of {} failed", cli.input.display()))?;

    println!("{}", output.display());
    Ok(())
}
