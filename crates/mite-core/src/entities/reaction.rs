use schemars::JsonSchema;
use serde::Serialize;

use super::require_text;
use crate::enums::{EvidenceCode, TailoringFunction};
use crate::errors::DecodeError;

/// One tailoring reaction catalysed by the enzyme.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Reaction {
    pub tailoring: Vec<TailoringFunction>,
    /// Absent while a portal submission has not drawn the pattern yet.
    #[serde(
        rename = "reactionSMARTS",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub reaction_smarts: Option<ReactionSmarts>,
    /// Concrete example reactions.
    pub reactions: Vec<ReactionEx>,
    pub evidence: Vec<Evidence>,
}

impl Reaction {
    #[must_use]
    pub const fn new(
        tailoring: Vec<TailoringFunction>,
        reaction_smarts: Option<ReactionSmarts>,
        reactions: Vec<ReactionEx>,
        evidence: Vec<Evidence>,
    ) -> Self {
        Self {
            tailoring,
            reaction_smarts,
            reactions,
            evidence,
        }
    }
}

/// Reaction definition: a `substrate>>product` SMARTS pattern.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ReactionSmarts {
    #[serde(rename = "reactionSMARTS")]
    #[schemars(length(min = 1))]
    pub reaction_smarts: String,
    pub is_iterative: bool,
}

impl ReactionSmarts {
    /// # Errors
    ///
    /// Returns `DecodeError::MissingField` (`reactionSMARTS`) if the pattern is blank.
    pub fn new(reaction_smarts: String, is_iterative: bool) -> Result<Self, DecodeError> {
        Ok(Self {
            reaction_smarts: require_text(reaction_smarts, "reactionSMARTS")?,
            is_iterative,
        })
    }
}

/// A validated example of the reaction on a concrete substrate.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ReactionEx {
    #[schemars(length(min = 1))]
    pub substrate: String,
    #[schemars(length(min = 1))]
    pub products: Vec<String>,
    pub is_balanced: bool,
    pub is_intermediate: bool,
}

impl ReactionEx {
    /// # Errors
    ///
    /// Returns `DecodeError::MissingField` if the substrate is blank or no
    /// product is given.
    pub fn new(
        substrate: String,
        products: Vec<String>,
        is_balanced: bool,
        is_intermediate: bool,
    ) -> Result<Self, DecodeError> {
        if products.is_empty() {
            return Err(DecodeError::missing("products"));
        }
        Ok(Self {
            substrate: require_text(substrate, "substrate")?,
            products,
            is_balanced,
            is_intermediate,
        })
    }
}

/// Experimental support for a reaction.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Evidence {
    #[schemars(length(min = 1))]
    pub evidence_code: Vec<EvidenceCode>,
    pub references: Vec<String>,
}

impl Evidence {
    /// # Errors
    ///
    /// Returns `DecodeError::MissingField` (`evidenceCode`) if no code is given.
    pub fn new(
        evidence_code: Vec<EvidenceCode>,
        references: Vec<String>,
    ) -> Result<Self, DecodeError> {
        if evidence_code.is_empty() {
            return Err(DecodeError::missing("evidenceCode"));
        }
        Ok(Self {
            evidence_code,
            references,
        })
    }
}
