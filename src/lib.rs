pub mod cli;
pub mod model;
pub mod report;
pub mod runner;

use anyhow::Context;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

pub fn run() -> anyhow::Result<ExitCode> {
    let args = cli::Cli::parse();
    init_logging(args.verbose);

    // 1. ── Build ──────────────────────────────────────────────────────
    let project_dir = runner::project_dir().with_context(|| "Resolving project directory")?;
    let command = runner::BuildCommand::toolchain(&project_dir, args.cargo_features.as_deref());
    let result =
        runner::run_build(&command, args.log).with_context(|| "Running build toolchain")?;

    // 2. ── Report ─────────────────────────────────────────────────────
    let report = report::Report::new(&project_dir, &result);

    if let Some(path) = &args.output {
        report.write_to_file(path)?;
    }
    if args.json {
        report.print()?;
    }

    // Exit status is the signal an outer harness keys off, independent of
    // whether any report was rendered.
    Ok(if result.success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Diagnostics go to stderr and stay silent unless `-v` is given or a
/// `RUST_LOG` filter says otherwise.
fn init_logging(verbose: bool) {
    let default = if verbose { "certora_build=debug" } else { "off" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
