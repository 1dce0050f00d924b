//! Error types for the `scenic` command.
//!
//! Each variant names the path or setting at fault so that `check` can report
//! a failure and move on to the next file.

use std::io;
use std::path::PathBuf;

use scenic_parser::ParseError;
use thiserror::Error;

/// Errors raised while configuring the command or loading feature files.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// An invalid configuration value was provided.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A path could not be inspected or read.
    #[error("{}: cannot read: {source}", path.display())]
    Unreadable {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// A directory walk failed part way through.
    #[error("{}: cannot walk directory: {source}", path.display())]
    Walk {
        /// Root of the walk.
        path: PathBuf,
        /// Underlying traversal failure.
        source: walkdir::Error,
    },

    /// The document is not a valid feature file.
    #[error(transparent)]
    Parse(#[from] ParseError),
}
