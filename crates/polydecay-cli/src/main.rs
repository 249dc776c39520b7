// File: crates/polydecay-cli/src/main.rs
// Summary: Parses flags, renders the decay chart and prints a short run summary.

mod args;

use std::io;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use args::Cli;

fn main() -> Result<()> {
    // Bare invocation prints usage and fails rather than silently plotting defaults.
    if std::env::args_os().len() <= 1 {
        Cli::command().print_help()?;
        println!();
        std::process::exit(1);
    }

    let cli = Cli::parse_from(args::normalize_args(std::env::args_os()));
    init_tracing(cli.verbose);

    let cfg = cli.into_config()?;
    tracing::debug!(?cfg, "resolved configuration");

    let output = polydecay_core::plot_schedules(&cfg)?;
    for line in polydecay_core::summary_lines(&cfg, &output) {
        println!("{line}");
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
