//! Path-tracking descent over a structured document.

use chrono::NaiveDate;
use mite_core::entities::{
    Changelog, ChangelogEntry, Entry, Enzyme, EnzymeAux, Evidence, Reaction, ReactionEx,
    ReactionSmarts, Release,
};
use mite_core::enums::{EvidenceCode, Quality, Status, TailoringFunction};
use mite_core::errors::DecodeError;
use mite_core::path::DocPath;
use serde_json::{Map, Value};

use crate::json_kind;
use crate::leaf::parse_date;

/// An object node with the keys its entity accepts.
struct Fields<'a> {
    map: &'a Map<String, Value>,
    path: DocPath,
}

impl<'a> Fields<'a> {
    fn open(value: &'a Value, path: DocPath, allowed: &[&str]) -> Result<Self, DecodeError> {
        let Value::Object(map) = value else {
            return Err(DecodeError::mismatch(&path, "object", json_kind(value)));
        };
        if let Some(unknown) = map.keys().find(|key| !allowed.contains(&key.as_str())) {
            return Err(DecodeError::UnexpectedField {
                path: path.key(unknown).to_string(),
            });
        }
        Ok(Self { map, path })
    }

    fn at(&self, key: &str) -> DocPath {
        self.path.key(key)
    }

    /// Absent and `null` both read as "not given".
    fn optional(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key).filter(|value| !value.is_null())
    }

    fn required(&self, key: &str) -> Result<&'a Value, DecodeError> {
        self.optional(key)
            .ok_or_else(|| DecodeError::missing(self.at(key)))
    }

    fn text(&self, key: &str) -> Result<String, DecodeError> {
        string(self.required(key)?, &self.at(key)).map(str::to_string)
    }

    fn optional_text(&self, key: &str) -> Result<Option<String>, DecodeError> {
        self.optional(key)
            .map(|value| string(value, &self.at(key)).map(str::to_string))
            .transpose()
    }

    fn flag(&self, key: &str) -> Result<bool, DecodeError> {
        let value = self.required(key)?;
        value
            .as_bool()
            .ok_or_else(|| DecodeError::mismatch(self.at(key), "boolean", json_kind(value)))
    }

    fn date(&self, key: &str) -> Result<NaiveDate, DecodeError> {
        let path = self.at(key);
        let text = string(self.required(key)?, &path)?;
        parse_date(text, &path.to_string())
    }

    fn vocab<T>(
        &self,
        key: &str,
        field: &str,
        parse: fn(&str) -> Option<T>,
    ) -> Result<T, DecodeError> {
        let path = self.at(key);
        let text = string(self.required(key)?, &path)?;
        parse(text).ok_or_else(|| DecodeError::violation(&path, field, text))
    }

    /// Elements of a required array with their paths.
    fn array(&self, key: &str) -> Result<Vec<(DocPath, &'a Value)>, DecodeError> {
        elements(self.required(key)?, &self.at(key))
    }

    /// Elements of an optional array; absent reads as empty.
    fn optional_array(&self, key: &str) -> Result<Vec<(DocPath, &'a Value)>, DecodeError> {
        self.optional(key)
            .map_or_else(|| Ok(Vec::new()), |value| elements(value, &self.at(key)))
    }

    fn strings(&self, key: &str) -> Result<Vec<String>, DecodeError> {
        collect_strings(self.array(key)?)
    }

    fn optional_strings(&self, key: &str) -> Result<Vec<String>, DecodeError> {
        collect_strings(self.optional_array(key)?)
    }

    fn vocab_list<T>(
        &self,
        key: &str,
        field: &str,
        parse: fn(&str) -> Option<T>,
    ) -> Result<Vec<T>, DecodeError> {
        self.array(key)?
            .into_iter()
            .map(|(path, value)| {
                let text = string(value, &path)?;
                parse(text).ok_or_else(|| DecodeError::violation(&path, field, text))
            })
            .collect()
    }
}

fn string<'a>(value: &'a Value, path: &DocPath) -> Result<&'a str, DecodeError> {
    value
        .as_str()
        .ok_or_else(|| DecodeError::mismatch(path, "string", json_kind(value)))
}

fn elements<'a>(
    value: &'a Value,
    path: &DocPath,
) -> Result<Vec<(DocPath, &'a Value)>, DecodeError> {
    let Value::Array(items) = value else {
        return Err(DecodeError::mismatch(path, "array", json_kind(value)));
    };
    Ok(items
        .iter()
        .enumerate()
        .map(|(index, item)| (path.index(index), item))
        .collect())
}

fn collect_strings(items: Vec<(DocPath, &Value)>) -> Result<Vec<String>, DecodeError> {
    items
        .into_iter()
        .map(|(path, value)| string(value, &path).map(str::to_string))
        .collect()
}

pub(super) fn entry(document: &Value) -> Result<Entry, DecodeError> {
    let root = DocPath::root();
    let fields = Fields::open(
        document,
        root.clone(),
        &[
            "accession",
            "status",
            "quality",
            "retirementReasons",
            "changelog",
            "enzyme",
            "reactions",
        ],
    )?;

    let accession = fields.text("accession")?;
    let status = fields.vocab("status", "status", Status::parse)?;
    let quality = fields.vocab("quality", "quality", Quality::parse)?;
    let retirement_reasons = fields.optional_strings("retirementReasons")?;
    let changelog = changelog(fields.required("changelog")?, fields.at("changelog"))?;
    let enzyme = enzyme(fields.required("enzyme")?, fields.at("enzyme"))?;
    let reactions = fields
        .array("reactions")?
        .into_iter()
        .map(|(path, value)| reaction(value, path))
        .collect::<Result<Vec<_>, _>>()?;

    Entry::new(
        accession,
        status,
        quality,
        retirement_reasons,
        changelog,
        enzyme,
        reactions,
    )
    .map_err(|error| error.at_pointer(&root))
}

fn changelog(value: &Value, path: DocPath) -> Result<Changelog, DecodeError> {
    let fields = Fields::open(value, path, &["releases"])?;
    let releases = fields
        .array("releases")?
        .into_iter()
        .map(|(path, value)| release(value, path))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Changelog::new(releases))
}

fn release(value: &Value, path: DocPath) -> Result<Release, DecodeError> {
    let fields = Fields::open(value, path, &["version", "date", "entries"])?;
    let version = fields.text("version")?;
    let date = fields.date("date")?;
    let entries = fields
        .array("entries")?
        .into_iter()
        .map(|(path, value)| changelog_entry(value, path))
        .collect::<Result<Vec<_>, _>>()?;
    Release::new(version, date, entries).map_err(|error| error.at_pointer(&fields.path))
}

fn changelog_entry(value: &Value, path: DocPath) -> Result<ChangelogEntry, DecodeError> {
    let fields = Fields::open(value, path, &["contributors", "reviewers", "date", "comment"])?;
    Ok(ChangelogEntry::new(
        fields.strings("contributors")?,
        fields.strings("reviewers")?,
        fields.date("date")?,
        fields.text("comment")?,
    ))
}

fn enzyme(value: &Value, path: DocPath) -> Result<Enzyme, DecodeError> {
    let fields = Fields::open(
        value,
        path,
        &[
            "name",
            "description",
            "databaseIds",
            "auxiliaryEnzymes",
            "references",
        ],
    )?;
    let name = fields.text("name")?;
    let description = fields.optional_text("description")?;
    let database_ids = fields.optional_strings("databaseIds")?;
    let auxiliary_enzymes = fields
        .optional_array("auxiliaryEnzymes")?
        .into_iter()
        .map(|(path, value)| enzyme_aux(value, path))
        .collect::<Result<Vec<_>, _>>()?;
    let references = fields.optional_strings("references")?;

    Enzyme::new(name, description, database_ids, auxiliary_enzymes, references)
        .map_err(|error| error.at_pointer(&fields.path))
}

fn enzyme_aux(value: &Value, path: DocPath) -> Result<EnzymeAux, DecodeError> {
    let fields = Fields::open(value, path, &["name", "description", "databaseIds"])?;
    EnzymeAux::new(
        fields.text("name")?,
        fields.optional_text("description")?,
        fields.optional_strings("databaseIds")?,
    )
    .map_err(|error| error.at_pointer(&fields.path))
}

fn reaction(value: &Value, path: DocPath) -> Result<Reaction, DecodeError> {
    let fields = Fields::open(
        value,
        path,
        &["tailoring", "reactionSMARTS", "reactions", "evidence"],
    )?;
    let tailoring =
        fields.vocab_list("tailoring", "tailoring function", TailoringFunction::parse)?;
    let smarts = fields
        .optional("reactionSMARTS")
        .map(|value| reaction_smarts(value, fields.at("reactionSMARTS")))
        .transpose()?;
    let examples = fields
        .array("reactions")?
        .into_iter()
        .map(|(path, value)| reaction_ex(value, path))
        .collect::<Result<Vec<_>, _>>()?;
    let evidence = fields
        .array("evidence")?
        .into_iter()
        .map(|(path, value)| evidence(value, path))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Reaction::new(tailoring, smarts, examples, evidence))
}

fn reaction_smarts(value: &Value, path: DocPath) -> Result<ReactionSmarts, DecodeError> {
    let fields = Fields::open(value, path, &["reactionSMARTS", "isIterative"])?;
    ReactionSmarts::new(fields.text("reactionSMARTS")?, fields.flag("isIterative")?)
        .map_err(|error| error.at_pointer(&fields.path))
}

fn reaction_ex(value: &Value, path: DocPath) -> Result<ReactionEx, DecodeError> {
    let fields = Fields::open(
        value,
        path,
        &["substrate", "products", "isBalanced", "isIntermediate"],
    )?;
    ReactionEx::new(
        fields.text("substrate")?,
        fields.strings("products")?,
        fields.flag("isBalanced")?,
        fields.flag("isIntermediate")?,
    )
    .map_err(|error| error.at_pointer(&fields.path))
}

fn evidence(value: &Value, path: DocPath) -> Result<Evidence, DecodeError> {
    let fields = Fields::open(value, path, &["evidenceCode", "references"])?;
    Evidence::new(
        fields.vocab_list("evidenceCode", "evidence code", EvidenceCode::parse)?,
        fields.strings("references")?,
    )
    .map_err(|error| error.at_pointer(&fields.path))
}
