use schemars::JsonSchema;
use serde::Serialize;

use super::require_text;
use crate::errors::DecodeError;

/// The enzyme an entry annotates.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Enzyme {
    #[schemars(length(min = 1))]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `source:id` identifiers (`genpept:AAK83186.1`, `mibig:BGC0000026`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub database_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub auxiliary_enzymes: Vec<EnzymeAux>,
    /// `source:id` literature references (`pubmed:15489167`, `doi:...`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub references: Vec<String>,
}

impl Enzyme {
    /// # Errors
    ///
    /// Returns `DecodeError::MissingField` (`name`) if the name is blank.
    pub fn new(
        name: String,
        description: Option<String>,
        database_ids: Vec<String>,
        auxiliary_enzymes: Vec<EnzymeAux>,
        references: Vec<String>,
    ) -> Result<Self, DecodeError> {
        Ok(Self {
            name: require_text(name, "name")?,
            description,
            database_ids,
            auxiliary_enzymes,
            references,
        })
    }
}

/// Helper enzyme needed for activity. Never nests further auxiliaries.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EnzymeAux {
    #[schemars(length(min = 1))]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub database_ids: Vec<String>,
}

impl EnzymeAux {
    /// # Errors
    ///
    /// Returns `DecodeError::MissingField` (`name`) if the name is blank.
    pub fn new(
        name: String,
        description: Option<String>,
        database_ids: Vec<String>,
    ) -> Result<Self, DecodeError> {
        Ok(Self {
            name: require_text(name, "name")?,
            description,
            database_ids,
        })
    }
}
