mod args;
#[cfg(feature = "with-tracing")]
mod logging;
mod output;

use anyhow::{Context, Result};
use domaincheck_lib::{NormalizedDomain, normalize_domain};

use std::io::{self, BufRead};

use args::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "with-tracing")]
    logging::init_logging(&cli)?;

    let mut rows: Vec<NormalizedDomain> = Vec::new();

    if cli.stdin {
        for line in io::stdin().lock().lines() {
            let domain = line.context("read stdin")?;
            rows.push(normalize_domain(Some(domain.as_str())));
        }
    } else {
        match &cli.cmd {
            Some(Commands::Validate { domain }) => {
                rows.push(normalize_domain(Some(domain.as_str())))
            }
            Some(Commands::Codes) => return output::write_codes(&cli),
            None => {
                Cli::clap_command().print_help()?;
                println!();
                return Ok(());
            }
        }
    }

    #[cfg(feature = "with-tracing")]
    tracing::info!(
        checked = rows.len(),
        invalid = rows.iter().filter(|r| !r.valid).count(),
        "validation done"
    );

    output::write_reports(&rows, &cli)?;

    // codes de sortie : 0 OK, 2 invalids, 1 fatal (Err remonté par main)
    match output::exit_code(&rows) {
        0 => Ok(()),
        code => std::process::exit(code),
    }
}
