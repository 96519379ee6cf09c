use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

mod cli;
mod files;
mod pipeline;

use files::FileManager;
use pipeline::{Pipeline, Settings};

fn main() -> ExitCode {
    match run() {
        Ok(summary) if summary.failed == 0 => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("mite error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<pipeline::Summary> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "started mite");

    let config =
        mite_config::MiteConfig::load_with_dotenv().context("failed to load configuration")?;
    let settings = Settings::resolve(&cli, &config)?;
    let files = FileManager::new(cli.input_dir, cli.output_dir)?;

    let summary = Pipeline::new(settings, files)?.run()?;
    println!(
        "{} document(s) written, {} failed",
        summary.written, summary.failed
    );
    tracing::debug!("completed mite");
    Ok(summary)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("MITE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
