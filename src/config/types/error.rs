//! Config loading errors and collected validation problems.

use super::FieldPath;
use owo_colors::OwoColorize;
use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why `funombi.toml` could not be turned into an `AppConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read `{}`", .0.display())]
    Io(PathBuf, #[source] io::Error),

    #[error("invalid TOML in config file")]
    Toml(#[from] toml::de::Error),

    #[error("config file `{}` not found, run `funombi init` to create a new project", .0.display())]
    NotFound(PathBuf),

    #[error("{0}")]
    Invalid(ConfigDiagnostics),
}

/// A rejected config value.
#[derive(Debug, Clone)]
struct Problem {
    field: FieldPath,
    message: String,
    hint: Option<String>,
}

/// Validation problems gathered across every section, reported together.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    problems: Vec<Problem>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.problems.push(Problem {
            field,
            message: message.into(),
            hint: None,
        });
    }

    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.problems.push(Problem {
            field,
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    /// Fields that were rejected, in the order they were checked.
    pub fn fields(&self) -> impl Iterator<Item = FieldPath> + '_ {
        self.problems.iter().map(|problem| problem.field)
    }

    /// `Ok` when nothing was rejected.
    pub fn finish(self) -> Result<(), ConfigError> {
        if self.problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(self))
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.problems.len();
        let noun = if count == 1 { "value" } else { "values" };
        write!(f, "{}", format_args!("{count} invalid config {noun}:").red().bold())?;

        for problem in &self.problems {
            write!(f, "\n  {} {}", problem.field, problem.message)?;
            if let Some(hint) = &problem.hint {
                write!(f, "\n    {} {hint}", "hint:".yellow())?;
            }
        }
        Ok(())
    }
}
