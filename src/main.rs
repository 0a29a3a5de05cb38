//! Algebraic Structures Laboratory
//!
//! Runs the demonstration sections and prints them to stdout.
//!
//! Run with: cargo run -- [--section <name>]... [--modulus <n>]... [--seed <n>] [--json [path]]
//!
//! The program will:
//! 1. Load the JSON config if `--config` is given, else use the defaults
//! 2. Apply command-line overrides
//! 3. Run every selected section, writing text to stdout and diagnostics to stderr
//! 4. Optionally write the JSON report

use algebra_lab::{DemoConfig, DemoRunner, Report};
use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod cli;

use cli::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let config = load_config(&cli)?;
    let runner = DemoRunner::new(config).context("invalid demonstration config")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = runner.run(&mut out).context("demonstration run failed")?;
    out.flush()?;

    if let Some(target) = &cli.json {
        write_report(&report, target.as_deref(), &mut out)?;
    }
    if !report.all_passed() {
        log::warn!("{} self-checks failed", report.failed_checks().count());
    }
    Ok(())
}

fn init_logging(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(filter)
        .init();
}

/// Config file first, then command-line overrides
fn load_config(cli: &Cli) -> Result<DemoConfig> {
    let mut config = match &cli.config {
        Some(path) => DemoConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => DemoConfig::default(),
    };

    if !cli.sections.is_empty() {
        config.sections = cli.sections.clone();
    }
    if !cli.moduli.is_empty() {
        config.moduli = cli.moduli.clone();
    }
    if let Some(operation) = cli.operation {
        config.operation = operation;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    log::debug!("effective config: {:?}", config);
    Ok(config)
}

fn write_report<W: Write>(report: &Report, target: Option<&Path>, stdout: &mut W) -> Result<()> {
    let json = report.to_json().context("failed to serialize report")?;
    match target {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("failed to write report to {}", path.display()))?;
            log::info!("report written to {}", path.display());
        }
        None => {
            writeln!(stdout)?;
            writeln!(stdout, "{}", json)?;
        }
    }
    Ok(())
}
