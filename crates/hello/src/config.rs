//! Resolved runtime configuration
//!
//! There are no config files. Everything comes from the command line plus
//! terminal detection.

use crate::cli::Cli;
use crate::error::ReportError;
use chrono::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy)]
pub struct ReportConfig {
    pub output: OutputMode,
    pub color: bool,
    pub locale: Locale,
}

impl Default for ReportConfig {
    /// Plain English text, no color
    fn default() -> Self {
        Self {
            output: OutputMode::Text,
            color: false,
            locale: Locale::en_US,
        }
    }
}

impl ReportConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self, ReportError> {
        let output = if cli.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };
        Ok(Self {
            output,
            color: output == OutputMode::Text && !cli.no_color && console::colors_enabled(),
            locale: parse_locale(&cli.locale)?,
        })
    }
}

/// Parse a locale name, ignoring any ".codeset" or "@modifier" suffix
pub fn parse_locale(name: &str) -> Result<Locale, ReportError> {
    let base = name
        .split(&['.', '@'][..])
        .next()
        .unwrap_or_default()
        .trim();
    match base {
        "C" | "POSIX" | "" => Ok(Locale::POSIX),
        _ => Locale::try_from(base).map_err(|_| ReportError::InvalidLocale(name.to_string())),
    }
}
