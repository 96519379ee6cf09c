//! # mite-parser
//!
//! Decoders that turn submitted annotation records into a
//! [`mite_core::entities::Entry`], and the encoder that writes the canonical
//! document back out.
//!
//! Two input shapes are supported:
//! - **Flat form** ([`flat`]): dash-delimited, index-encoded `[key, value]`
//!   pairs produced by the submission portal
//!   (`enzymes-0-reactions-0-tailoring-0-function`)
//! - **Structured document** ([`structured`]): the nested canonical JSON
//!
//! Both implement [`Decoder`]. Decoding is all-or-nothing: a document either
//! yields a complete entry or one [`DecodeError`] carrying the offending path.

pub mod flat;
pub mod leaf;
pub mod structured;

pub use flat::{FlatForm, FlatFormDecoder, SubmissionContext};
pub use structured::{StructuredDecoder, encode};

use mite_core::entities::Entry;
use mite_core::errors::DecodeError;
use serde_json::Value;

/// Capability shared by every input format: build an entry from one document.
pub trait Decoder {
    type Input: ?Sized;

    /// Decode one document.
    ///
    /// # Errors
    ///
    /// Returns the first `DecodeError` met; no partial entry is produced.
    fn decode(&self, input: &Self::Input) -> Result<Entry, DecodeError>;
}

/// Name of a JSON value's type, for mismatch reports.
pub(crate) const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
