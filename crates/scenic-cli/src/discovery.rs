//! Locating and loading feature files.

use std::collections::HashSet;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use scenic_parser::{Feature, parse_feature};
use tracing::debug;
use walkdir::WalkDir;

use crate::error::CliError;

/// Expand `paths` into the feature files they name.
///
/// Files are taken as given whatever their extension; directories are walked
/// recursively for `*.feature` files in name order. Each file is listed once,
/// at its first appearance.
///
/// # Errors
///
/// Returns an error if a path does not exist or a directory walk fails.
pub(crate) fn feature_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>, CliError> {
    let mut seen = HashSet::new();
    let mut files = Vec::new();
    for path in paths {
        for file in gather(path)? {
            if seen.insert(file.clone()) {
                files.push(file);
            }
        }
    }
    debug!(count = files.len(), "discovered feature files");
    Ok(files)
}

fn gather(path: &Path) -> Result<Vec<PathBuf>, CliError> {
    let meta = fs::metadata(path).map_err(|source| CliError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    if !meta.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }
    let mut files = Vec::new();
    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = entry.map_err(|source| CliError::Walk {
            path: path.to_path_buf(),
            source,
        })?;
        if entry.file_type().is_file() && is_feature_file(entry.path()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn is_feature_file(path: &Path) -> bool {
    path.extension().is_some_and(|e| e == OsStr::new("feature"))
}

/// Read and parse one feature file.
///
/// The path, as given, becomes the feature's filename and prefixes any
/// parse error.
///
/// # Errors
///
/// Returns an error if the file cannot be read as UTF-8 or does not parse.
pub(crate) fn load_feature(
    path: &Path,
    language: Option<&str>,
) -> Result<Option<Feature>, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let name = path.to_string_lossy();
    debug!(path = %name, "parsing feature file");
    parse_feature(&text, language, Some(name.as_ref())).map_err(CliError::from)
}
