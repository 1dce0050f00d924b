//! Command line tooling for Gherkin-style feature files.
//!
//! `scenic` checks feature files for structural errors, dumps the parsed tree
//! as JSON and lists the scenarios a tag expression selects. Reports go to
//! stdout; logs go to stderr.

use std::process::ExitCode;

use clap::Parser;
use eyre::Result;
use tracing::debug;

mod cli;
mod config;
mod discovery;
mod error;
mod logging;
mod output;

use crate::cli::Cli;
use crate::logging::init_logging;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = cli.config()?;
    init_logging(&config);
    debug!(
        version = env!("CARGO_PKG_VERSION"),
        language = config.language.as_deref(),
        "starting scenic"
    );
    cli.run(&config)
}
