//! The validation contract consumed by the batch pipeline.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{SchemaError, ValidationIssue};
use crate::registry::SchemaRegistry;

/// Check a canonical document against a schema.
pub trait Validator {
    /// # Errors
    ///
    /// `SchemaError::ValidationFailed` with one issue per failed constraint.
    fn validate(&self, document: &Value) -> Result<(), SchemaError>;
}

/// Compiled validator for whole entry documents.
pub struct EntryValidator {
    compiled: jsonschema::Validator,
}

impl EntryValidator {
    /// Compile the `entry` schema generated from the entity types.
    ///
    /// # Errors
    ///
    /// `SchemaError::NotFound` if the registry lacks `entry`, or
    /// `SchemaError::Generation` if the schema does not compile.
    pub fn from_registry(registry: &SchemaRegistry) -> Result<Self, SchemaError> {
        let schema = registry
            .get("entry")
            .ok_or_else(|| SchemaError::NotFound("entry".to_string()))?;
        Self::from_schema(schema)
    }

    /// Compile an arbitrary schema document.
    ///
    /// # Errors
    ///
    /// `SchemaError::Generation` if the schema does not compile.
    pub fn from_schema(schema: &Value) -> Result<Self, SchemaError> {
        let compiled = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Generation(e.to_string()))?;
        Ok(Self { compiled })
    }

    /// Load and compile an external schema file.
    ///
    /// # Errors
    ///
    /// `SchemaError::Load` if the file cannot be read or is not JSON, or
    /// `SchemaError::Generation` if the schema does not compile.
    pub fn from_path(path: &Path) -> Result<Self, SchemaError> {
        let load_error = |reason: String| SchemaError::Load {
            path: path.to_path_buf(),
            reason,
        };
        let text = fs::read_to_string(path).map_err(|e| load_error(e.to_string()))?;
        let schema: Value = serde_json::from_str(&text).map_err(|e| load_error(e.to_string()))?;
        tracing::debug!(path = %path.display(), "loaded external entry schema");
        Self::from_schema(&schema)
    }
}

impl Validator for EntryValidator {
    fn validate(&self, document: &Value) -> Result<(), SchemaError> {
        collect_issues(&self.compiled, document)
    }
}

pub(crate) fn collect_issues(
    validator: &jsonschema::Validator,
    instance: &Value,
) -> Result<(), SchemaError> {
    let issues: Vec<ValidationIssue> = validator
        .iter_errors(instance)
        .map(|e| ValidationIssue {
            path: e.instance_path.to_string(),
            message: e.to_string(),
        })
        .collect();

    if issues.is_empty() {
        Ok(())
    } else {
        Err(SchemaError::ValidationFailed { issues })
    }
}
