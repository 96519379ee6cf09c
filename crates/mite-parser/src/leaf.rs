//! Typed conversion of flat-form leaf values.
//!
//! The portal sends every value as a string: sometimes JSON-quoted
//! (`"\"genpept:X\""`), sometimes a yes/no flag, sometimes a vocabulary label.
//! All coercion happens here, once, so the entity builders only ever see typed
//! values and out-of-vocabulary labels are rejected at the leaf.

use chrono::NaiveDate;
use mite_core::enums::{EvidenceCode, TailoringFunction};
use mite_core::errors::DecodeError;

/// Canonical date layout of changelog dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// How a leaf field's raw string is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeafKind {
    Text,
    List,
    Flag,
    Date,
    Tailoring,
    EvidenceCodes,
    /// Recognized portal field without a counterpart in the entity model.
    Ignored,
}

/// A converted leaf value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Leaf {
    Text(String),
    List(Vec<String>),
    Flag(bool),
    Date(NaiveDate),
    Tailoring(TailoringFunction),
    EvidenceCodes(Vec<EvidenceCode>),
}

impl LeafKind {
    /// Convert a raw value. `Ok(None)` means the field is absent: the value
    /// was empty (after unquoting), a list held no items, or the field is not
    /// modelled.
    ///
    /// # Errors
    ///
    /// `SchemaViolation` for unknown vocabulary labels, unparsable flags or
    /// dates; `TypeMismatch` for a malformed JSON list.
    pub fn convert(self, raw: &str, path: &str) -> Result<Option<Leaf>, DecodeError> {
        if self == Self::Ignored {
            return Ok(None);
        }
        let text = unquote(raw);
        if text.is_empty() {
            return Ok(None);
        }

        let leaf = match self {
            Self::Text => Leaf::Text(text),
            Self::List => {
                let items = split_list(raw, path)?;
                if items.is_empty() {
                    return Ok(None);
                }
                Leaf::List(items)
            }
            Self::Flag => Leaf::Flag(
                parse_flag(&text).ok_or_else(|| DecodeError::violation(path, "flag", &text))?,
            ),
            Self::Date => Leaf::Date(parse_date(&text, path)?),
            Self::Tailoring => Leaf::Tailoring(
                TailoringFunction::parse(&text)
                    .ok_or_else(|| DecodeError::violation(path, "tailoring function", &text))?,
            ),
            Self::EvidenceCodes => {
                let labels = split_list(raw, path)?;
                if labels.is_empty() {
                    return Ok(None);
                }
                let codes = labels
                    .iter()
                    .map(|code| {
                        EvidenceCode::parse(code)
                            .ok_or_else(|| DecodeError::violation(path, "evidence code", code))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Leaf::EvidenceCodes(codes)
            }
            Self::Ignored => return Ok(None),
        };
        Ok(Some(leaf))
    }
}

/// Strip one level of JSON string quoting, if present.
#[must_use]
pub fn unquote(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
        return serde_json::from_str::<String>(trimmed)
            .unwrap_or_else(|_| trimmed[1..trimmed.len() - 1].to_string());
    }

    trimmed.to_string()
}

/// Split a list-valued leaf.
///
/// Accepts a JSON array (`["a", "b"]`), one or more comma-separated JSON
/// strings (`"a", "b"`), or one bare value. Blank items are dropped.
///
/// # Errors
///
/// `TypeMismatch` if the value opens a JSON array that does not parse as a
/// list of strings.
pub fn split_list(raw: &str, path: &str) -> Result<Vec<String>, DecodeError> {
    let trimmed = raw.trim();
    let items = if trimmed.starts_with('[') {
        serde_json::from_str::<Vec<String>>(trimmed)
            .map_err(|_| DecodeError::mismatch(path, "list of strings", trimmed))?
    } else if trimmed.starts_with('"') {
        serde_json::from_str::<Vec<String>>(&format!("[{trimmed}]"))
            .unwrap_or_else(|_| vec![unquote(trimmed)])
    } else {
        vec![trimmed.to_string()]
    };

    Ok(items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect())
}

/// Interpret a portal checkbox / select value.
#[must_use]
pub fn parse_flag(text: &str) -> Option<bool> {
    match text.to_ascii_lowercase().as_str() {
        "yes" | "true" | "on" | "1" => Some(true),
        "no" | "false" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// Parse a `YYYY-MM-DD` date.
///
/// # Errors
///
/// `SchemaViolation` naming `date` if the text is not a calendar date.
pub fn parse_date(text: &str, path: &str) -> Result<NaiveDate, DecodeError> {
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map_err(|_| DecodeError::violation(path, "date", text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("\"genpept:MYS84939.1\"", "genpept:MYS84939.1")]
    #[case("embB", "embB")]
    #[case("  padded  ", "padded")]
    #[case("\"with \\\"escape\\\"\"", "with \"escape\"")]
    #[case("\"", "\"")]
    fn unquotes_json_strings(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(unquote(raw), expected);
    }

    #[rstest]
    #[case("\"doi:10.1101/2023.11.03.565440\"", vec!["doi:10.1101/2023.11.03.565440"])]
    #[case("\"pubmed:1\", \"pubmed:2\"", vec!["pubmed:1", "pubmed:2"])]
    #[case("[\"a\", \"\", \"b\"]", vec!["a", "b"])]
    #[case("pubmed:3", vec!["pubmed:3"])]
    fn splits_list_values(#[case] raw: &str, #[case] expected: Vec<&str>) {
        assert_eq!(split_list(raw, "k").unwrap(), expected);
    }

    #[test]
    fn malformed_json_list_is_type_mismatch() {
        let err = split_list("[1, 2]", "enzymes-0-enzyme-0-references").unwrap_err();
        assert_eq!(err.kind(), "TypeMismatch");
        assert_eq!(err.path(), "enzymes-0-enzyme-0-references");
    }

    #[rstest]
    #[case("yes", Some(true))]
    #[case("No", Some(false))]
    #[case("TRUE", Some(true))]
    #[case("0", Some(false))]
    #[case("maybe", None)]
    fn parses_flags(#[case] raw: &str, #[case] expected: Option<bool>) {
        assert_eq!(parse_flag(raw), expected);
    }

    #[test]
    fn empty_and_quoted_empty_values_are_absent() {
        assert_eq!(LeafKind::Text.convert("", "k").unwrap(), None);
        assert_eq!(LeafKind::List.convert("\"\"", "k").unwrap(), None);
        assert_eq!(LeafKind::Tailoring.convert("   ", "k").unwrap(), None);
    }

    #[rstest]
    #[case(LeafKind::List, "[]")]
    #[case(LeafKind::List, "[\"\", \" \"]")]
    #[case(LeafKind::EvidenceCodes, "[]")]
    fn lists_without_items_are_absent(#[case] kind: LeafKind, #[case] raw: &str) {
        assert_eq!(kind.convert(raw, "k").unwrap(), None);
    }

    #[test]
    fn ignored_fields_never_produce_values() {
        assert_eq!(LeafKind::Ignored.convert("yes", "k").unwrap(), None);
    }

    #[test]
    fn unknown_tailoring_label_is_schema_violation() {
        let err = LeafKind::Tailoring
            .convert("Teleportation", "enzymes-0-reactions-0-tailoring-0-function")
            .unwrap_err();
        assert_eq!(
            err,
            DecodeError::violation(
                "enzymes-0-reactions-0-tailoring-0-function",
                "tailoring function",
                "Teleportation"
            )
        );
    }

    #[test]
    fn evidence_codes_convert_each_item() {
        let leaf = LeafKind::EvidenceCodes
            .convert("\"Heterologous expression\", \"Knock-out studies\"", "k")
            .unwrap();
        assert_eq!(
            leaf,
            Some(Leaf::EvidenceCodes(vec![
                EvidenceCode::HeterologousExpression,
                EvidenceCode::KnockOutStudies
            ]))
        );
    }

    #[test]
    fn dates_must_be_calendar_dates() {
        assert!(LeafKind::Date.convert("2024-03-21", "k").is_ok());
        let err = LeafKind::Date.convert("2024-13-01", "k").unwrap_err();
        assert_eq!(err.kind(), "SchemaViolation");
    }
}
