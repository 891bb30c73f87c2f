// File: crates/chartplot/src/main.rs
// Summary: CLI that loads a digitized-chart JSON file and renders it to a PNG line chart.

mod cli;

use std::process::ExitCode;

use anyhow::{Context, Result};
use chartplot_core::{load, render, theme, RenderOptions};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn main() -> ExitCode {
    let args = Cli::parse();
    init_tracing(args.verbose);

    // Existence is checked up front so a bad path never reaches the loader.
    if !args.json_file.is_file() {
        eprintln!("Error: JSON file does not exist: {}", args.json_file.display());
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(()) => {
            println!("Chart saved as: {}", args.output.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Failed to plot chart: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Cli) -> Result<()> {
    let doc = load(&args.json_file)
        .with_context(|| format!("failed to load '{}'", args.json_file.display()))?;
    tracing::info!(series = doc.series.len(), title = doc.title(), "loaded document");

    let opts = RenderOptions {
        width: args.width,
        height: args.height,
        theme: theme::find(&args.theme),
        ..RenderOptions::default()
    };
    render(&doc, &args.output, &opts)
        .with_context(|| format!("failed to render '{}'", args.output.display()))?;
    Ok(())
}

/// `RUST_LOG` wins; otherwise `-v` steps warn → info → debug.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
