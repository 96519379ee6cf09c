use schemars::JsonSchema;
use serde::Serialize;

use super::{Changelog, Enzyme, Reaction, require_text};
use crate::enums::{Quality, Status, TailoringFunction};
use crate::errors::DecodeError;

/// Top-level annotation record for one enzymatic reaction family.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Entry {
    #[schemars(length(min = 1))]
    pub accession: String,
    pub status: Status,
    pub quality: Quality,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub retirement_reasons: Vec<String>,
    pub changelog: Changelog,
    pub enzyme: Enzyme,
    pub reactions: Vec<Reaction>,
}

impl Entry {
    /// Build an entry.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError::MissingField` (`accession`) if the accession is blank.
    pub fn new(
        accession: String,
        status: Status,
        quality: Quality,
        retirement_reasons: Vec<String>,
        changelog: Changelog,
        enzyme: Enzyme,
        reactions: Vec<Reaction>,
    ) -> Result<Self, DecodeError> {
        Ok(Self {
            accession: require_text(accession, "accession")?,
            status,
            quality,
            retirement_reasons,
            changelog,
            enzyme,
            reactions,
        })
    }

    /// Tailoring functions of the enzyme, inferred from its reactions.
    ///
    /// Distinct tags in first-seen order.
    #[must_use]
    pub fn tailoring_functions(&self) -> Vec<TailoringFunction> {
        let mut functions = Vec::new();
        for tag in self.reactions.iter().flat_map(|r| r.tailoring.iter()) {
            if !functions.contains(tag) {
                functions.push(*tag);
            }
        }
        functions
    }
}
