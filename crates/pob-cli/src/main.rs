//! pob-challenge - trigger a challenge against a prover
//!
//! Logs in to the proof API with the wallet key from `./key`, looks up the
//! prover, triggers the challenge and prints the trigger and status payloads.

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pob_cli::{print_outcome, run, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the payloads
    let default_filter = if cli.verbose {
        "pob_challenge=debug,pob_cli=debug,pob_client=debug"
    } else {
        "pob_challenge=info,pob_cli=info,pob_client=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("pob-challenge v{}", env!("CARGO_PKG_VERSION"));

    match run(cli).await {
        Ok(outcome) => {
            print_outcome(&outcome);
            Ok(ExitCode::SUCCESS)
        }
        // Missing flags are reported but not signalled through the exit status
        Err(e) if e.is_missing_flag() => {
            println!("{}", e);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) if e.is_lookup_failure() => {
            error!("{}", e);
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}
