//! Entity structs for a MITE annotation record.
//!
//! Ownership is strictly hierarchical: an [`Entry`] owns one [`Enzyme`], one
//! [`Changelog`] and its [`Reaction`]s; nothing is shared between parents.
//! All structs derive `Serialize` and `JsonSchema`. The serialized form is the
//! canonical document, and the generated schema is what documents are
//! validated against.

mod changelog;
mod entry;
mod enzyme;
mod reaction;

pub use changelog::{Changelog, ChangelogEntry, Release};
pub use entry::Entry;
pub use enzyme::{Enzyme, EnzymeAux};
pub use reaction::{Evidence, Reaction, ReactionEx, ReactionSmarts};

use crate::errors::DecodeError;

/// Reject a required string that is present but blank.
fn require_text(value: String, field: &str) -> Result<String, DecodeError> {
    if value.trim().is_empty() {
        Err(DecodeError::missing(field))
    } else {
        Ok(value)
    }
}
