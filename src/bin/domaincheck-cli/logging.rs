//! Initialisation du subscriber tracing (feature `with-tracing`).
//!
//! | Flag(s)   | Niveau |
//! |-----------|--------|
//! | (aucun)   | WARN   |
//! | `-v`      | INFO   |
//! | `-vv`     | DEBUG  |
//! | `-vvv`    | TRACE  |
//! | `--quiet` | ERROR  |
//!
//! `RUST_LOG` prend le pas sur les flags.

use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::args::Cli;

pub fn init_logging(cli: &Cli) -> Result<()> {
    let level = level_for(cli.verbose, cli.quiet);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("domaincheck_lib={level},domaincheck_cli={level}")));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow!("failed to initialise tracing: {e}"))
}

fn level_for(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
