//! Canonical documents produced by the encoder validate against the entry schema.

use std::fs;

use mite_parser::flat::DEFAULT_GROUP;
use mite_parser::{
    Decoder, FlatForm, FlatFormDecoder, StructuredDecoder, SubmissionContext, encode,
};
use mite_schema::{EntryValidator, SchemaError, SchemaRegistry, Validator};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn fixture(name: &str) -> Value {
    let path = format!(
        "{}/../mite-parser/tests/fixtures/{name}",
        env!("CARGO_MANIFEST_DIR")
    );
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn validator() -> EntryValidator {
    EntryValidator::from_registry(&SchemaRegistry::new()).unwrap()
}

#[test]
fn canonical_fixture_is_schema_valid() {
    validator().validate(&fixture("canonical_entry.json")).unwrap();
}

#[test]
fn re_encoded_structured_document_is_schema_valid() {
    let entry = StructuredDecoder
        .decode(&fixture("canonical_entry.json"))
        .unwrap();
    validator().validate(&encode(&entry).unwrap()).unwrap();
}

#[test]
fn encoded_portal_submission_is_schema_valid() {
    let form = FlatForm::from_json(&fixture("portal_submission.json"), DEFAULT_GROUP).unwrap();
    let entry = FlatFormDecoder::new(SubmissionContext::new("MITE0000003"))
        .decode(&form)
        .unwrap();
    validator().validate(&encode(&entry).unwrap()).unwrap();
}

#[test]
fn bogus_status_is_reported_with_its_path() {
    let mut document = fixture("canonical_entry.json");
    document["status"] = json!("bogus");

    let Err(SchemaError::ValidationFailed { issues }) = validator().validate(&document) else {
        panic!("expected ValidationFailed");
    };
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].path, "/status");
}

#[test]
fn external_schema_file_is_honoured() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mite-entry.schema.json");
    let schema = json!({
        "type": "object",
        "required": ["accession"],
        "properties": {"accession": {"type": "string", "pattern": "^MITE[0-9]{7}$"}}
    });
    fs::write(&path, schema.to_string()).unwrap();

    let external = EntryValidator::from_path(&path).unwrap();

    external.validate(&fixture("canonical_entry.json")).unwrap();
    assert!(
        external
            .validate(&json!({"accession": "BGC0000001"}))
            .is_err()
    );
}

#[test]
fn unreadable_schema_file_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = EntryValidator::from_path(&dir.path().join("missing.json"));
    assert!(matches!(result, Err(SchemaError::Load { .. })));
}
