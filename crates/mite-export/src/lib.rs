//! # mite-export
//!
//! Export adapter for decoded entries. Produces:
//! - the canonical document ([`to_document`]), handed to an external schema
//!   validator and written by the CLI to `<input stem>.json`
//! - a flattened [`Report`] projection ([`to_report`]) for renderers, with
//!   each reaction's pattern, example structures and evidence side by side
//!
//! Nothing here validates; a well-formed entry always exports.

pub mod error;
pub mod html;
pub mod report;

pub use error::ExportError;
pub use html::HtmlRenderer;
pub use report::{Report, to_report};

use mite_core::entities::Entry;
use serde_json::Value;

/// Turns a report into markup.
pub trait Renderer {
    /// # Errors
    ///
    /// Returns `ExportError::Render` if the output cannot be written.
    fn render(&self, report: &Report) -> Result<String, ExportError>;
}

/// The canonical structured document for an entry.
///
/// # Errors
///
/// Returns `ExportError::Encode` if serialization fails.
pub fn to_document(entry: &Entry) -> Result<Value, ExportError> {
    tracing::trace!(accession = %entry.accession, "encoding canonical document");
    Ok(mite_parser::encode(entry)?)
}
