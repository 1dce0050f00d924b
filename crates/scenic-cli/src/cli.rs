//! Command dispatch for the `scenic` entrypoint.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use eyre::{Context, Result};
use scenic_parser::{TagExpression, languages};
use tracing::{debug, info};

use crate::config::{CliConfig, LogLevel};
use crate::discovery::{feature_files, load_feature};
use crate::error::CliError;
use crate::output::{
    write_check_summary, write_failure, write_feature_json, write_language, write_selected,
};

/// Check, inspect and filter Gherkin-style feature files.
#[derive(Parser)]
#[command(name = "scenic", author, version, about)]
pub(crate) struct Cli {
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,
    /// Language for documents without a `# language:` line.
    #[arg(long, short = 'l', global = true)]
    language: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

/// Supported commands.
#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Parse feature files and report every error.
    Check(PathsArgs),
    /// Print the parsed tree of one feature file as JSON.
    Dump(DumpArgs),
    /// List scenarios whose tags match an expression.
    Select(SelectArgs),
    /// List the bundled keyword languages.
    Languages,
}

#[derive(Args)]
pub(crate) struct PathsArgs {
    /// Feature files or directories to search for `*.feature` files.
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
}

#[derive(Args)]
pub(crate) struct DumpArgs {
    /// Feature file to dump.
    pub file: PathBuf,
}

#[derive(Args)]
pub(crate) struct SelectArgs {
    /// Tag expression such as `@fast and not @db`; repeat for the legacy
    /// `~@tag,@other` form, where options are combined with `and`.
    #[arg(long = "tags", short = 't', required = true)]
    pub tags: Vec<String>,
    #[command(flatten)]
    pub paths: PathsArgs,
}

impl Cli {
    /// Environment configuration with this command line's overrides.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` for invalid variables or flags.
    pub(crate) fn config(&self) -> Result<CliConfig, CliError> {
        CliConfig::from_env()?.apply_overrides(self.log_level, self.language.clone())
    }

    /// Run the selected command, writing its report to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error when paths cannot be read, when `dump` or `select`
    /// meet an invalid document, or when stdout cannot be written.
    pub(crate) fn run(self, config: &CliConfig) -> Result<ExitCode> {
        let mut stdout = io::stdout().lock();
        let code = match self.command {
            Commands::Check(args) => handle_check(&mut stdout, &args, config)?.exit_code(),
            Commands::Dump(args) => handle_dump(&mut stdout, &args, config)?,
            Commands::Select(args) => handle_select(&mut stdout, &args, config)?,
            Commands::Languages => handle_languages(&mut stdout)?,
        };
        stdout.flush().wrap_err("failed to flush stdout")?;
        Ok(code)
    }
}

/// Outcome of a `check` run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CheckSummary {
    checked: usize,
    failed: usize,
}

impl CheckSummary {
    fn exit_code(self) -> ExitCode {
        info!(checked = self.checked, failed = self.failed, "check finished");
        if self.failed == 0 {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

fn handle_check(
    writer: &mut dyn Write,
    args: &PathsArgs,
    config: &CliConfig,
) -> Result<CheckSummary> {
    let files = feature_files(&args.paths)?;
    let mut failed = 0;
    for file in &files {
        if let Err(error) = load_feature(file, config.language.as_deref()) {
            failed += 1;
            write_failure(writer, &error)?;
        }
    }
    write_check_summary(writer, files.len(), failed)?;
    Ok(CheckSummary {
        checked: files.len(),
        failed,
    })
}

fn handle_dump(
    writer: &mut dyn Write,
    args: &DumpArgs,
    config: &CliConfig,
) -> Result<ExitCode> {
    let feature = load_feature(&args.file, config.language.as_deref())?;
    write_feature_json(writer, feature.as_ref())?;
    Ok(ExitCode::SUCCESS)
}

fn handle_select(
    writer: &mut dyn Write,
    args: &SelectArgs,
    config: &CliConfig,
) -> Result<ExitCode> {
    let expr = TagExpression::from_options(&args.tags).wrap_err("invalid --tags")?;
    debug!(expression = %expr, "selecting scenarios");
    for file in feature_files(&args.paths.paths)? {
        let Some(feature) = load_feature(&file, config.language.as_deref())? else {
            continue;
        };
        for scenario in feature.select(&expr) {
            write_selected(writer, &file, scenario)?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn handle_languages(writer: &mut dyn Write) -> Result<ExitCode> {
    for set in languages() {
        write_language(writer, set)?;
    }
    Ok(ExitCode::SUCCESS)
}
