use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use nestgen::{convert_directory, report_to_json, BatchOptions, BatchReport, Converter, EngineConfig};
use nestgen_compiler::error::NestGenError;

#[derive(Parser)]
#[command(name = "nestgen")]
#[command(about = "Generate NestJS Mongoose schema classes from tagged Go structs", long_about = None)]
struct Cli {
    /// Directory containing Go source files
    input: Option<PathBuf>,

    /// Output directory for `.schemas.ts` files
    #[arg(short, long, default_value = "out_schemas")]
    output: PathBuf,

    /// JSON file with extra type mappings, override rules and schema options
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Report what would be generated without writing files
    #[arg(long)]
    dry_run: bool,

    /// Also read sub-directories of the input directory
    #[arg(short, long)]
    recursive: bool,

    /// Write the batch report as JSON to this path
    #[arg(long)]
    report: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let input = match require_input(&cli) {
        Ok(input) => input,
        Err(code) => {
            eprintln!("Please provide an input directory path!");
            return ExitCode::from(code);
        }
    };

    match run(&cli, input) {
        Ok(report) if !report.has_failures() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Exit code when no input directory is given.
const MISSING_INPUT: u8 = 1;

fn require_input(cli: &Cli) -> Result<PathBuf, u8> {
    cli.input.clone().ok_or(MISSING_INPUT)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run(cli: &Cli, input: PathBuf) -> Result<BatchReport, NestGenError> {
    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    let converter = Converter::new(config);

    let options = BatchOptions {
        output_dir: cli.output.clone(),
        dry_run:    cli.dry_run,
        recursive:  cli.recursive,
    };

    let report = convert_directory(&converter, &input, &options)?;

    if let Some(path) = &cli.report {
        fs::write(path, report_to_json(&report)?)?;
        info!("Report written to {}", path.display());
    }

    Ok(report)
}
