//! Central schema registry for the MITE entity types.
//!
//! The `SchemaRegistry` builds JSON Schemas from mite-core types at construction
//! time using [`schemars::schema_for!`] and validates documents via `jsonschema`.

use std::collections::HashMap;

use mite_core::entities::{
    Changelog, ChangelogEntry, Entry, Enzyme, EnzymeAux, Evidence, Reaction, ReactionEx,
};
use schemars::schema_for;
use serde_json::Value;

use crate::error::SchemaError;
use crate::validator::collect_issues;

/// Named JSON Schemas for every entity type.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, Value>,
}

/// Insert the generated schema for `$ty` under `$name`.
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, schema_for!($ty).to_value());
    };
}

impl SchemaRegistry {
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        register!(schemas, "entry", Entry);
        register!(schemas, "enzyme", Enzyme);
        register!(schemas, "enzyme_aux", EnzymeAux);
        register!(schemas, "reaction", Reaction);
        register!(schemas, "reaction_ex", ReactionEx);
        register!(schemas, "evidence", Evidence);
        register!(schemas, "changelog", Changelog);
        register!(schemas, "changelog_entry", ChangelogEntry);

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Generation(e.to_string()))?;

        collect_issues(&validator, instance)
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
