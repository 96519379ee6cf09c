//! Flat-form decoder for submission-portal output.
//!
//! The portal flattens a nested form into `[key, value]` pairs whose keys
//! encode nesting and list position:
//!
//! ```text
//! enzymes-0-enzyme-0-name                          → main enzyme name
//! enzymes-0-enzyme-1-name                          → first auxiliary enzyme
//! enzymes-0-reactions-0-tailoring-0-function       → reaction tailoring tag
//! enzymes-0-reactions-0-validated_reactions-0-product_substructure-0
//! changelog-0-entries-0-comment                    → optional changelog
//! ```
//!
//! Decoding runs in three passes: every key is parsed against the grammar and
//! its value converted to a typed leaf; leaves are inserted into an
//! index-partitioned tree; entities are built bottom-up from the tree.

mod build;
mod grammar;
mod tree;

use mite_core::entities::{Changelog, Entry};
use mite_core::enums::{Quality, Status};
use mite_core::errors::DecodeError;
use mite_core::path::DocPath;
use serde_json::Value;

use crate::{Decoder, json_kind};
use tree::Node;

/// Group under which the portal stores its pairs.
pub const DEFAULT_GROUP: &str = "Tailoring";

/// Ordered `[key, value]` pairs of one portal submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatForm {
    pairs: Vec<(String, String)>,
}

impl FlatForm {
    #[must_use]
    pub const fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    /// Read the pairs stored under `group` in a portal export.
    ///
    /// # Errors
    ///
    /// `TypeMismatch` if the export is not an object or a pair is not a
    /// two-element array of strings, `MissingField` if `group` is absent.
    pub fn from_json(document: &Value, group: &str) -> Result<Self, DecodeError> {
        let root = DocPath::root();
        let Value::Object(map) = document else {
            return Err(DecodeError::mismatch(root, "object", json_kind(document)));
        };
        let group_path = root.key(group);
        let pairs = map
            .get(group)
            .ok_or_else(|| DecodeError::missing(&group_path))?;
        let Value::Array(items) = pairs else {
            return Err(DecodeError::mismatch(&group_path, "array", json_kind(pairs)));
        };

        items
            .iter()
            .enumerate()
            .map(|(index, item)| match item.as_array().map(Vec::as_slice) {
                Some([Value::String(key), Value::String(value)]) => {
                    Ok((key.clone(), value.clone()))
                }
                _ => Err(DecodeError::mismatch(
                    group_path.index(index),
                    "[key, value] string pair",
                    json_kind(item),
                )),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }

    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FlatForm {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

/// Entry-level fields the portal form does not carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionContext {
    pub accession: String,
    pub status: Status,
    pub quality: Quality,
    pub retirement_reasons: Vec<String>,
    /// Used when the form has no `changelog` group.
    pub changelog: Changelog,
}

impl SubmissionContext {
    /// Context for a fresh submission: `pending`, `medium` quality, empty changelog.
    pub fn new(accession: impl Into<String>) -> Self {
        Self {
            accession: accession.into(),
            status: Status::Pending,
            quality: Quality::Medium,
            retirement_reasons: Vec::new(),
            changelog: Changelog::default(),
        }
    }

    #[must_use]
    pub const fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub const fn with_quality(mut self, quality: Quality) -> Self {
        self.quality = quality;
        self
    }
}

/// Decoder for [`FlatForm`] submissions.
#[derive(Debug, Clone)]
pub struct FlatFormDecoder {
    context: SubmissionContext,
}

impl FlatFormDecoder {
    #[must_use]
    pub const fn new(context: SubmissionContext) -> Self {
        Self { context }
    }
}

impl Decoder for FlatFormDecoder {
    type Input = FlatForm;

    fn decode(&self, form: &FlatForm) -> Result<Entry, DecodeError> {
        let mut root = Node::default();
        for (key, raw) in form.pairs() {
            let Some(path) = grammar::parse(key)? else {
                tracing::trace!(key = %key, "discarding control token");
                continue;
            };
            if let Some(leaf) = path.kind.convert(raw, key)? {
                root.insert(&path, leaf);
            }
        }

        build::entry(root, &self.context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mite_core::enums::TailoringFunction;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn decode(pairs: &[(&str, &str)]) -> Result<Entry, DecodeError> {
        let form: FlatForm = pairs.iter().copied().collect();
        FlatFormDecoder::new(SubmissionContext::new("MITE9999999")).decode(&form)
    }

    #[test]
    fn reads_pairs_from_portal_export() {
        let export = json!({
            "Tailoring": [["enzymes-0-enzyme-0-name", "embB"], ["submit", "Submit"]]
        });
        let form = FlatForm::from_json(&export, DEFAULT_GROUP).unwrap();
        assert_eq!(form.pairs().len(), 2);
        assert_eq!(form.pairs()[0].1, "embB");
    }

    #[test]
    fn missing_group_is_reported() {
        let err = FlatForm::from_json(&json!({"Other": []}), DEFAULT_GROUP).unwrap_err();
        assert_eq!(err, DecodeError::missing("/Tailoring"));
    }

    #[test]
    fn malformed_pair_is_type_mismatch() {
        let export = json!({"Tailoring": [["a", "b"], ["only-key"]]});
        let err = FlatForm::from_json(&export, DEFAULT_GROUP).unwrap_err();
        assert_eq!(err.kind(), "TypeMismatch");
        assert_eq!(err.path(), "/Tailoring/1");
    }

    #[test]
    fn context_supplies_entry_fields() {
        let entry = decode(&[
            ("enzymes-0-enzyme-0-name", "embB"),
            (
                "enzymes-0-reactions-0-reaction_smarts-0-reactionSMARTS",
                "[#6:1]>>[#6:1]",
            ),
        ])
        .unwrap();
        assert_eq!(entry.accession, "MITE9999999");
        assert_eq!(entry.status, Status::Pending);
        assert_eq!(entry.quality, Quality::Medium);
        assert!(entry.changelog.releases.is_empty());
    }

    #[test]
    fn higher_enzyme_indices_are_auxiliary() {
        let entry = decode(&[
            ("enzymes-0-enzyme-2-name", "helperB"),
            ("enzymes-0-enzyme-0-name", "main"),
            ("enzymes-0-enzyme-1-name", "helperA"),
            ("enzymes-0-enzyme-1-databaseIds", "\"genpept:X\""),
        ])
        .unwrap();
        assert_eq!(entry.enzyme.name, "main");
        let names: Vec<&str> = entry
            .enzyme
            .auxiliary_enzymes
            .iter()
            .map(|aux| aux.name.as_str())
            .collect();
        assert_eq!(names, vec!["helperA", "helperB"]);
        assert_eq!(entry.enzyme.auxiliary_enzymes[0].database_ids, vec!["genpept:X"]);
    }

    #[test]
    fn auxiliary_enzyme_references_are_rejected() {
        let err = decode(&[
            ("enzymes-0-enzyme-0-name", "main"),
            ("enzymes-0-enzyme-1-name", "helper"),
            ("enzymes-0-enzyme-1-references", "\"pubmed:1\""),
        ])
        .unwrap_err();
        assert_eq!(err.kind(), "PathParseError");
        assert_eq!(err.path(), "enzymes-0-enzyme-1-references");
    }

    #[test]
    fn two_submissions_are_a_type_mismatch() {
        let err = decode(&[
            ("enzymes-0-enzyme-0-name", "a"),
            ("enzymes-1-enzyme-0-name", "b"),
        ])
        .unwrap_err();
        assert_eq!(err.kind(), "TypeMismatch");
        assert_eq!(err.path(), "enzymes");
    }

    #[test]
    fn form_without_submission_is_missing_enzymes() {
        let err = decode(&[("submit", "Submit"), ("enzymes-0-comment", "")]).unwrap_err();
        assert_eq!(err, DecodeError::missing("enzymes"));
    }

    #[test]
    fn reaction_without_smarts_keeps_its_tags() {
        let entry = decode(&[
            ("enzymes-0-enzyme-0-name", "embB"),
            ("enzymes-0-reactions-0-tailoring-0-function", "Biaryl bond formation"),
        ])
        .unwrap();
        assert_eq!(entry.reactions[0].reaction_smarts, None);
        assert_eq!(
            entry.reactions[0].tailoring,
            vec![TailoringFunction::BiarylBondFormation]
        );
    }

    #[test]
    fn blank_smarts_pattern_is_missing_field() {
        let err = decode(&[
            ("enzymes-0-enzyme-0-name", "embB"),
            ("enzymes-0-reactions-0-reaction_smarts-0-isIterative", "yes"),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            DecodeError::missing("enzymes-0-reactions-0-reaction_smarts-0-reactionSMARTS")
        );
    }

    #[test]
    fn tailoring_tags_follow_index_order() {
        let entry = decode(&[
            ("enzymes-0-enzyme-0-name", "embB"),
            ("enzymes-0-reactions-0-reaction_smarts-0-reactionSMARTS", "[#6]>>[#6]"),
            ("enzymes-0-reactions-0-tailoring-3-function", "Oxidation"),
            ("enzymes-0-reactions-0-tailoring-1-function", "Methylation"),
        ])
        .unwrap();
        assert_eq!(
            entry.reactions[0].tailoring,
            vec![TailoringFunction::Methylation, TailoringFunction::Oxidation]
        );
    }

    #[test]
    fn changelog_group_replaces_default_changelog() {
        let entry = decode(&[
            ("enzymes-0-enzyme-0-name", "embB"),
            ("changelog-0-version", "1.0"),
            ("changelog-0-date", "2024-07-30"),
            ("changelog-0-entries-0-contributors", "\"AAAAAAAAAAAAAAAAAAAAAAAA\""),
            ("changelog-0-entries-0-reviewers", "\"BBBBBBBBBBBBBBBBBBBBBBBB\""),
            ("changelog-0-entries-0-date", "2024-03-21"),
            ("changelog-0-entries-0-comment", "Initial entry."),
        ])
        .unwrap();
        let release = &entry.changelog.releases[0];
        assert_eq!(release.version, "1.0");
        assert_eq!(release.entries[0].comment, "Initial entry.");
        assert_eq!(release.entries[0].reviewers, vec!["BBBBBBBBBBBBBBBBBBBBBBBB"]);
    }

    #[test]
    fn changelog_entry_without_date_is_missing_field() {
        let err = decode(&[
            ("enzymes-0-enzyme-0-name", "embB"),
            ("changelog-0-version", "1.0"),
            ("changelog-0-date", "2024-07-30"),
            ("changelog-0-entries-0-comment", "Initial entry."),
        ])
        .unwrap_err();
        assert_eq!(err, DecodeError::missing("changelog-0-entries-0-date"));
    }
}
