//! Schema validation error types.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// One failed constraint, located by the JSON Pointer of the instance node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub path: String,
    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.path.is_empty() { "/" } else { &self.path };
        write!(f, "{path}: {}", self.message)
    }
}

/// Errors from the schema registry and validators.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Requested schema name was not found in the registry.
    #[error("Schema not found: {0}")]
    NotFound(String),

    /// Document did not pass schema validation.
    #[error("Validation failed with {} issue(s): {}", issues.len(), summary(issues))]
    ValidationFailed { issues: Vec<ValidationIssue> },

    /// Schema compilation error.
    #[error("Schema generation error: {0}")]
    Generation(String),

    /// External schema file could not be read or parsed.
    #[error("Cannot load schema {}: {reason}", path.display())]
    Load { path: PathBuf, reason: String },
}

fn summary(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn validation_failed_lists_every_issue() {
        let err = SchemaError::ValidationFailed {
            issues: vec![
                ValidationIssue {
                    path: "/status".into(),
                    message: "\"bogus\" is not one of [\"pending\",\"active\",\"retired\"]".into(),
                },
                ValidationIssue {
                    path: String::new(),
                    message: "\"accession\" is a required property".into(),
                },
            ],
        };
        assert_eq!(
            err.to_string(),
            "Validation failed with 2 issue(s): /status: \"bogus\" is not one of \
             [\"pending\",\"active\",\"retired\"]; /: \"accession\" is a required property"
        );
    }
}
