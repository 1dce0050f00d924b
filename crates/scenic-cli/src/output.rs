//! Helpers for rendering command output.

use std::io::Write;
use std::path::Path;

use eyre::{Context, Result};
use scenic_parser::{Feature, KeywordSet, Scenario};

use crate::error::CliError;

pub(crate) fn write_failure(writer: &mut dyn Write, error: &CliError) -> Result<()> {
    writeln!(writer, "{error}").wrap_err("failed to write check failure")
}

pub(crate) fn write_check_summary(
    writer: &mut dyn Write,
    checked: usize,
    failed: usize,
) -> Result<()> {
    writeln!(writer, "{checked} files checked, {failed} failed")
        .wrap_err("failed to write check summary")
}

pub(crate) fn write_selected(
    writer: &mut dyn Write,
    file: &Path,
    scenario: &Scenario,
) -> Result<()> {
    writeln!(
        writer,
        "{}:{}: {}",
        file.display(),
        scenario.line,
        scenario.name
    )
    .wrap_err_with(|| {
        format!(
            "failed to write selected scenario {} at {}:{}",
            scenario.name,
            file.display(),
            scenario.line
        )
    })
}

pub(crate) fn write_language(writer: &mut dyn Write, set: &KeywordSet) -> Result<()> {
    writeln!(writer, "{:<8}{} ({})", set.code(), set.name(), set.native())
        .wrap_err_with(|| format!("failed to write language {}", set.code()))
}

/// Pretty JSON for a parsed document; `null` when it held no feature.
pub(crate) fn write_feature_json(writer: &mut dyn Write, feature: Option<&Feature>) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, &feature)
        .wrap_err("failed to serialise feature to JSON")?;
    writer
        .write_all(b"\n")
        .wrap_err("failed to terminate JSON output with newline")
}
