//! Entry-level defaults for flat-form submissions.
//!
//! The portal form carries no status or quality, so these fill them in.

use mite_core::enums::{Quality, Status};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_status() -> String {
    Status::Pending.to_string()
}

fn default_quality() -> String {
    Quality::Medium.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SubmissionConfig {
    #[serde(default = "default_status")]
    pub status: String,

    #[serde(default = "default_quality")]
    pub quality: String,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            status: default_status(),
            quality: default_quality(),
        }
    }
}

impl SubmissionConfig {
    /// # Errors
    ///
    /// `ConfigError::InvalidValue` if the label is not a known status.
    pub fn status(&self) -> Result<Status, ConfigError> {
        Status::parse(&self.status).ok_or_else(|| {
            ConfigError::invalid(
                "submission.status",
                format!("'{}' is not one of {}", self.status, labels(Status::ALL)),
            )
        })
    }

    /// # Errors
    ///
    /// `ConfigError::InvalidValue` if the label is not a known quality.
    pub fn quality(&self) -> Result<Quality, ConfigError> {
        Quality::parse(&self.quality).ok_or_else(|| {
            ConfigError::invalid(
                "submission.quality",
                format!("'{}' is not one of {}", self.quality, labels(Quality::ALL)),
            )
        })
    }
}

fn labels<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
