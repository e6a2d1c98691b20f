//! CLI application for filtering listing JSON documents.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use console::style;
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

use listex_core::models::config::ListexConfig;
use listex_core::{DocumentError, ListexError, ListingPipeline, load_document};

/// Filter real-estate listing JSON and extract price/area pairs
#[derive(Parser)]
#[command(name = "listex")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to input JSON file
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Path to output file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Display result in console
    #[arg(short, long)]
    display: bool,

    /// Show only furnished listings
    #[arg(short, long)]
    furnished: bool,

    /// Show only listings with price less than given
    #[arg(short, long)]
    price: Option<f64>,

    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let Some(input) = cli.input.clone() else {
        eprintln!("{}", style("Please, specify input file").red());
        return ExitCode::FAILURE;
    };

    if let Err(err) = run(&cli, &input) {
        eprintln!("{}", style(user_message(&err)).red());
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(cli: &Cli, input: &Path) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = match &cli.config {
        Some(path) => ListexConfig::from_file(path)?,
        None => ListexConfig::default(),
    };

    let document = load_document(input)?;

    let pipeline = ListingPipeline::from_config(&config.extraction)
        .with_furnished_only(cli.furnished)
        .with_max_price(cli.price);

    let report = pipeline.process_document(&document);

    for warning in &report.warnings {
        info!("{warning}");
    }
    info!(
        "{} lines from {} records in {}ms",
        report.lines.len(),
        report.records_seen,
        report.processing_time_ms
    );

    if cli.output.is_none() && !cli.display {
        debug!("no output requested");
        return Ok(());
    }

    if cli.display {
        for line in &report.lines {
            println!("{line}");
        }
    }

    if let Some(output) = &cli.output {
        fs::write(output, report.lines.join("\n"))?;
        info!("output written to {}", output.display());
    }

    debug!("total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Map failures onto the fixed user-facing messages.
fn user_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<ListexError>() {
        Some(ListexError::Document(DocumentError::NotFound(_))) => {
            "Cannot find input file".to_string()
        }
        Some(ListexError::Document(DocumentError::Parse(_))) => {
            "Invalid JSON in input file".to_string()
        }
        _ => format!("Error: {err}"),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    // Logs go to stderr: stdout is reserved for --display data lines.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
