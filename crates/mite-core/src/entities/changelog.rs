use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::Serialize;

use super::require_text;
use crate::errors::DecodeError;

/// Release history of an entry.
#[derive(Debug, Clone, Default, Serialize, JsonSchema, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Changelog {
    pub releases: Vec<Release>,
}

impl Changelog {
    #[must_use]
    pub const fn new(releases: Vec<Release>) -> Self {
        Self { releases }
    }
}

/// One release with the edits that went into it.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Release {
    #[schemars(length(min = 1))]
    pub version: String,
    pub date: NaiveDate,
    pub entries: Vec<ChangelogEntry>,
}

impl Release {
    /// # Errors
    ///
    /// Returns `DecodeError::MissingField` (`version`) if the version is blank.
    pub fn new(
        version: String,
        date: NaiveDate,
        entries: Vec<ChangelogEntry>,
    ) -> Result<Self, DecodeError> {
        Ok(Self {
            version: require_text(version, "version")?,
            date,
            entries,
        })
    }
}

/// A single curation edit.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ChangelogEntry {
    pub contributors: Vec<String>,
    pub reviewers: Vec<String>,
    pub date: NaiveDate,
    pub comment: String,
}

impl ChangelogEntry {
    #[must_use]
    pub const fn new(
        contributors: Vec<String>,
        reviewers: Vec<String>,
        date: NaiveDate,
        comment: String,
    ) -> Self {
        Self {
            contributors,
            reviewers,
            date,
            comment,
        }
    }
}
