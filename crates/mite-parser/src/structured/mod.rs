//! Structured (canonical JSON) decoder and encoder.
//!
//! Encoding is the serde projection of the entity types, so field order and
//! optional-field omission follow the type definitions that also generate the
//! schema. Decoding walks the document by hand to report every failure with
//! its JSON-Pointer path.

mod decode;

use mite_core::entities::Entry;
use mite_core::errors::DecodeError;
use serde_json::Value;

use crate::Decoder;

/// Decoder for canonical structured documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuredDecoder;

impl Decoder for StructuredDecoder {
    type Input = Value;

    fn decode(&self, document: &Value) -> Result<Entry, DecodeError> {
        decode::entry(document)
    }
}

/// Serialize an entry into the canonical structured document.
///
/// # Errors
///
/// Propagates `serde_json` serialization errors.
pub fn encode(entry: &Entry) -> Result<Value, serde_json::Error> {
    serde_json::to_value(entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn minimal() -> Value {
        json!({
            "accession": "MITE0000001",
            "status": "active",
            "quality": "high",
            "changelog": {"releases": []},
            "enzyme": {"name": "embB"},
            "reactions": []
        })
    }

    #[test]
    fn minimal_document_round_trips() {
        let entry = StructuredDecoder.decode(&minimal()).unwrap();
        assert_eq!(encode(&entry).unwrap(), minimal());
    }

    #[test]
    fn bogus_status_is_schema_violation() {
        let mut document = minimal();
        document["status"] = json!("bogus");
        let err = StructuredDecoder.decode(&document).unwrap_err();
        assert_eq!(err, DecodeError::violation("/status", "status", "bogus"));
    }

    #[test]
    fn missing_accession_is_reported_at_root() {
        let mut document = minimal();
        document.as_object_mut().unwrap().remove("accession");
        let err = StructuredDecoder.decode(&document).unwrap_err();
        assert_eq!(err, DecodeError::missing("/accession"));
    }
}
