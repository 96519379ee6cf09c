//! Input document settings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Shape of the documents in the input directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// Flat-form export of the submission portal.
    #[default]
    Raw,
    /// Canonical structured document.
    Mite,
}

impl InputFormat {
    pub const ALL: [Self; 2] = [Self::Raw, Self::Mite];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Raw => "raw",
            Self::Mite => "mite",
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| {
                ConfigError::invalid("input.format", format!("'{s}' is not raw or mite"))
            })
    }
}

/// Default portal group holding the flat-form pairs.
fn default_group() -> String {
    "Tailoring".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct InputConfig {
    #[serde(default)]
    pub format: InputFormat,

    /// Top-level key of the portal export that holds the `[key, value]` pairs.
    #[serde(default = "default_group")]
    pub group: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            format: InputFormat::default(),
            group: default_group(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("raw", InputFormat::Raw)]
    #[case("mite", InputFormat::Mite)]
    fn parses_known_formats(#[case] text: &str, #[case] expected: InputFormat) {
        assert_eq!(text.parse::<InputFormat>().unwrap(), expected);
        assert_eq!(expected.to_string(), text);
    }

    #[test]
    fn rejects_unknown_format() {
        let err = "xml".parse::<InputFormat>().unwrap_err();
        assert!(err.to_string().contains("'xml' is not raw or mite"));
    }

    #[test]
    fn defaults_are_correct() {
        let config = InputConfig::default();
        assert_eq!(config.format, InputFormat::Raw);
        assert_eq!(config.group, "Tailoring");
    }
}
