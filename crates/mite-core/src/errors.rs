//! Decode error kinds shared by the flat-form and structured decoders.
//!
//! Every variant carries the path of the offending input. Entity constructors
//! report paths relative to the entity (a bare field name); decoders re-anchor
//! them with [`DecodeError::at_pointer`] or [`DecodeError::at_flat`] before
//! returning.

use thiserror::Error;

use crate::path::DocPath;

/// Errors raised while turning an input document into an [`crate::entities::Entry`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A required field is absent.
    #[error("Missing required field: {path}")]
    MissingField { path: String },

    /// A value lies outside a controlled vocabulary or fixed format.
    #[error("Schema violation at {path}: '{value}' is not a valid {field}")]
    SchemaViolation {
        path: String,
        field: String,
        value: String,
    },

    /// A flat-form key does not match the form grammar.
    #[error("Cannot parse flat path '{path}': {reason}")]
    PathParseError { path: String, reason: String },

    /// A structured-document node has the wrong shape.
    #[error("Type mismatch at {path}: expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: String,
        found: String,
    },

    /// A structured document carries a key the canonical schema forbids.
    #[error("Unexpected field: {path}")]
    UnexpectedField { path: String },
}

impl DecodeError {
    pub fn missing(path: impl ToString) -> Self {
        Self::MissingField {
            path: path.to_string(),
        }
    }

    pub fn violation(path: impl ToString, field: &str, value: &str) -> Self {
        Self::SchemaViolation {
            path: path.to_string(),
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    pub fn bad_path(path: impl ToString, reason: impl Into<String>) -> Self {
        Self::PathParseError {
            path: path.to_string(),
            reason: reason.into(),
        }
    }

    pub fn mismatch(path: impl ToString, expected: &str, found: &str) -> Self {
        Self::TypeMismatch {
            path: path.to_string(),
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Path of the offending input.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::MissingField { path }
            | Self::SchemaViolation { path, .. }
            | Self::PathParseError { path, .. }
            | Self::TypeMismatch { path, .. }
            | Self::UnexpectedField { path } => path,
        }
    }

    /// Short machine-readable name of the error kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => "MissingField",
            Self::SchemaViolation { .. } => "SchemaViolation",
            Self::PathParseError { .. } => "PathParseError",
            Self::TypeMismatch { .. } => "TypeMismatch",
            Self::UnexpectedField { .. } => "UnexpectedField",
        }
    }

    /// Re-anchor an entity-relative path under a structured-document location.
    #[must_use]
    pub fn at_pointer(self, base: &DocPath) -> Self {
        self.map_path(|relative| base.key(&relative).to_string())
    }

    /// Re-anchor an entity-relative path under a flat-form key prefix.
    #[must_use]
    pub fn at_flat(self, prefix: &str) -> Self {
        self.map_path(|relative| {
            if prefix.is_empty() {
                relative
            } else {
                format!("{prefix}-{relative}")
            }
        })
    }

    fn map_path(self, f: impl FnOnce(String) -> String) -> Self {
        match self {
            Self::MissingField { path } => Self::MissingField { path: f(path) },
            Self::SchemaViolation { path, field, value } => Self::SchemaViolation {
                path: f(path),
                field,
                value,
            },
            Self::PathParseError { path, reason } => Self::PathParseError {
                path: f(path),
                reason,
            },
            Self::TypeMismatch {
                path,
                expected,
                found,
            } => Self::TypeMismatch {
                path: f(path),
                expected,
                found,
            },
            Self::UnexpectedField { path } => Self::UnexpectedField { path: f(path) },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_anchor_prefixes_relative_field() {
        let err = DecodeError::missing("name").at_pointer(&DocPath::root().key("enzyme"));
        assert_eq!(err, DecodeError::missing("/enzyme/name"));
    }

    #[test]
    fn flat_anchor_joins_with_dash() {
        let err = DecodeError::missing("name").at_flat("enzymes-0-enzyme-0");
        assert_eq!(err.path(), "enzymes-0-enzyme-0-name");
        assert_eq!(DecodeError::missing("name").at_flat("").path(), "name");
    }

    #[test]
    fn display_names_field_and_value() {
        let err = DecodeError::violation("/status", "status", "bogus");
        let message = err.to_string();
        assert!(message.contains("status"));
        assert!(message.contains("'bogus'"));
        assert_eq!(err.kind(), "SchemaViolation");
    }
}
