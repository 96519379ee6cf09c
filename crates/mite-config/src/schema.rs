//! Validation schema selection.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SchemaConfig {
    /// External entry schema. Unset means the schema generated from the entity types.
    #[serde(default)]
    pub path: Option<PathBuf>,
}
