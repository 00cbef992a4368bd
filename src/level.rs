use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The closed set of severity tokens a log line can be filtered by.
///
/// Parsing is case-insensitive; the canonical form is the upper-case token
/// returned by [`as_str`](SeverityLevel::as_str).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SeverityLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

/// Rejected severity value, carrying the attempted input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Valid log levels are: {}, but got `{}`", SeverityLevel::valid_levels(), .value)]
pub struct LevelParseError {
    pub value: String,
}

impl SeverityLevel {
    pub const ALL: [SeverityLevel; 5] = [
        SeverityLevel::Debug,
        SeverityLevel::Info,
        SeverityLevel::Warning,
        SeverityLevel::Error,
        SeverityLevel::Critical,
    ];

    /// Canonical upper-case token used for substring matching.
    pub fn as_str(self) -> &'static str {
        match self {
            SeverityLevel::Debug => "DEBUG",
            SeverityLevel::Info => "INFO",
            SeverityLevel::Warning => "WARNING",
            SeverityLevel::Error => "ERROR",
            SeverityLevel::Critical => "CRITICAL",
        }
    }

    /// The valid set, rendered for error messages.
    pub fn valid_levels() -> String {
        Self::ALL
            .iter()
            .map(|level| level.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for SeverityLevel {
    type Err = LevelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(SeverityLevel::Debug),
            "INFO" => Ok(SeverityLevel::Info),
            "WARNING" => Ok(SeverityLevel::Warning),
            "ERROR" => Ok(SeverityLevel::Error),
            "CRITICAL" => Ok(SeverityLevel::Critical),
            _ => Err(LevelParseError {
                value: s.trim().to_string(),
            }),
        }
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
