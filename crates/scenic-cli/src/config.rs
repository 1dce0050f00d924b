//! Command configuration parsed from environment variables.
//!
//! Settings come from `SCENIC_*` variables first; command line flags then
//! override them.

use std::env;
use std::str::FromStr;

use scenic_parser::KeywordSet;

use crate::error::CliError;

/// Variable holding the log level.
pub(crate) const LOG_LEVEL_VAR: &str = "SCENIC_LOG_LEVEL";
/// Variable holding the default document language.
pub(crate) const LANGUAGE_VAR: &str = "SCENIC_LANGUAGE";

/// Log level enumeration matching tracing crate levels.
///
/// Defaults to `Warn` so that normal runs only show the command's own output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum LogLevel {
    /// Everything, including per-line parser events.
    Trace,
    /// Parser decisions such as the language chosen.
    Debug,
    /// Progress through the files.
    Info,
    /// Potential problems only.
    #[default]
    Warn,
    /// Failures only.
    Error,
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(CliError::InvalidConfig(format!(
                "unknown log level '{s}', expected one of: trace, debug, info, warn, error"
            ))),
        }
    }
}

impl LogLevel {
    /// Convert to a tracing filter directive string.
    #[must_use]
    pub(crate) fn as_filter_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Settings shared by every subcommand.
///
/// # Environment Variables
///
/// - `SCENIC_LOG_LEVEL`: trace, debug, info, warn or error
/// - `SCENIC_LANGUAGE`: language for documents without a `# language:` line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct CliConfig {
    /// Log level for the stderr subscriber.
    pub log_level: LogLevel,
    /// Language code used when a document does not declare one.
    pub language: Option<String>,
}

impl CliConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if a variable holds an invalid value.
    pub(crate) fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its
    /// value.
    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = lookup(LOG_LEVEL_VAR)
            .map(|value| value.parse())
            .transpose()?
            .unwrap_or_default();
        let language = lookup(LANGUAGE_VAR)
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty());
        Self {
            log_level,
            language,
        }
        .validated()
    }

    /// Apply command line overrides on top of environment values.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if the resulting language is not
    /// bundled.
    pub(crate) fn apply_overrides(
        mut self,
        log_level: Option<LogLevel>,
        language: Option<String>,
    ) -> Result<Self, CliError> {
        if let Some(level) = log_level {
            self.log_level = level;
        }
        if language.is_some() {
            self.language = language;
        }
        self.validated()
    }

    fn validated(self) -> Result<Self, CliError> {
        match self.language.as_deref() {
            Some(code) if KeywordSet::for_language(code).is_none() => Err(
                CliError::InvalidConfig(format!("unknown language '{code}'")),
            ),
            _ => Ok(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[rstest]
    #[case("trace", LogLevel::Trace)]
    #[case("debug", LogLevel::Debug)]
    #[case("INFO", LogLevel::Info)]
    #[case("warning", LogLevel::Warn)]
    #[case(" Error ", LogLevel::Error)]
    fn log_level_parses_valid_values(#[case] text: &str, #[case] expected: LogLevel) {
        assert_eq!(text.parse::<LogLevel>().ok(), Some(expected));
    }

    #[test]
    fn log_level_rejects_invalid_values() {
        let Err(err) = "loud".parse::<LogLevel>() else {
            panic!("'loud' is not a level");
        };
        assert!(err.to_string().contains("unknown log level 'loud'"));
    }

    #[test]
    fn defaults_apply_without_variables() {
        let config = CliConfig::from_lookup(lookup(&[])).ok();
        assert_eq!(config, Some(CliConfig::default()));
        assert_eq!(LogLevel::default().as_filter_str(), "warn");
    }

    #[test]
    fn reads_variables() {
        let config =
            CliConfig::from_lookup(lookup(&[(LOG_LEVEL_VAR, "debug"), (LANGUAGE_VAR, "fr")])).ok();
        assert_eq!(
            config,
            Some(CliConfig {
                log_level: LogLevel::Debug,
                language: Some("fr".into()),
            })
        );
    }

    #[test]
    fn blank_language_variable_is_ignored() {
        let config = CliConfig::from_lookup(lookup(&[(LANGUAGE_VAR, "  ")])).ok();
        assert_eq!(config.and_then(|c| c.language), None);
    }

    #[rstest]
    #[case(&[(LOG_LEVEL_VAR, "loud")], "unknown log level")]
    #[case(&[(LANGUAGE_VAR, "tlh")], "unknown language 'tlh'")]
    fn rejects_invalid_variables(#[case] pairs: &[(&str, &str)], #[case] message: &str) {
        let Err(err) = CliConfig::from_lookup(lookup(pairs)) else {
            panic!("configuration should be rejected");
        };
        assert!(err.to_string().contains(message), "{err}");
    }

    #[test]
    fn flags_override_environment() {
        let base = CliConfig {
            log_level: LogLevel::Info,
            language: Some("de".into()),
        };
        let config = base
            .clone()
            .apply_overrides(Some(LogLevel::Error), Some("ja".into()))
            .ok();
        assert_eq!(
            config,
            Some(CliConfig {
                log_level: LogLevel::Error,
                language: Some("ja".into()),
            })
        );
        assert_eq!(base.clone().apply_overrides(None, None).ok(), Some(base));
    }

    #[test]
    fn unknown_language_flag_is_rejected() {
        let result = CliConfig::default().apply_overrides(None, Some("xx".into()));
        assert!(matches!(result, Err(CliError::InvalidConfig(_))));
    }
}
