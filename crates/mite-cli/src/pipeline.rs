//! Per-document translation: decode, validate, export, write.

use std::path::{Path, PathBuf};

use anyhow::Context;
use mite_config::{InputFormat, MiteConfig, OutputFormat};
use mite_core::entities::Entry;
use mite_export::{HtmlRenderer, Renderer, to_document, to_report};
use mite_parser::{Decoder, FlatForm, FlatFormDecoder, StructuredDecoder, SubmissionContext};
use mite_schema::{EntryValidator, SchemaRegistry, Validator};
use serde_json::Value;

use crate::cli::Cli;
use crate::files::{self, FileManager};

/// Settings after merging CLI flags over configuration.
pub struct Settings {
    pub input: InputFormat,
    pub output: OutputFormat,
    pub pretty: bool,
    pub group: String,
    pub schema: Option<PathBuf>,
    context: SubmissionContext,
}

impl Settings {
    pub fn resolve(cli: &Cli, config: &MiteConfig) -> anyhow::Result<Self> {
        let context = SubmissionContext::new(String::new())
            .with_status(config.submission.status()?)
            .with_quality(config.submission.quality()?);

        Ok(Self {
            input: cli.format.unwrap_or(config.input.format),
            output: cli.to.unwrap_or(config.output.format),
            pretty: config.output.pretty,
            group: config.input.group.clone(),
            schema: cli.schema.clone().or_else(|| config.schema.path.clone()),
            context,
        })
    }
}

/// Outcome of a batch run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub written: usize,
    pub failed: usize,
}

pub struct Pipeline {
    settings: Settings,
    validator: EntryValidator,
    files: FileManager,
}

impl Pipeline {
    pub fn new(settings: Settings, files: FileManager) -> anyhow::Result<Self> {
        let validator = match &settings.schema {
            Some(path) => EntryValidator::from_path(path)?,
            None => EntryValidator::from_registry(&SchemaRegistry::new())?,
        };
        Ok(Self {
            settings,
            validator,
            files,
        })
    }

    /// Translate every input file; failures are logged and counted, never fatal.
    pub fn run(&self) -> anyhow::Result<Summary> {
        let mut summary = Summary::default();
        for path in self.files.input_files()? {
            let name = path.display().to_string();
            tracing::info!(file = %name, format = %self.settings.input, "processing document");
            match self.process(&path) {
                Ok(written) => {
                    summary.written += 1;
                    tracing::info!(file = %name, output = %written.display(), "document written");
                }
                Err(error) => {
                    summary.failed += 1;
                    tracing::error!(file = %name, "could not process document: {error:#}");
                }
            }
        }
        Ok(summary)
    }

    fn process(&self, path: &Path) -> anyhow::Result<PathBuf> {
        let stem = files::stem(path)?;
        let input = FileManager::read_json(path)?;
        let entry = self.decode(&input, stem)?;

        let document = to_document(&entry)?;
        self.validator
            .validate(&document)
            .context("encoded document failed schema validation")?;

        let contents = match self.settings.output {
            OutputFormat::Json if self.settings.pretty => serde_json::to_string_pretty(&document)?,
            OutputFormat::Json => serde_json::to_string(&document)?,
            OutputFormat::Html => HtmlRenderer.render(&to_report(&entry))?,
        };
        self.files
            .write(stem, self.settings.output.extension(), &contents)
    }

    fn decode(&self, input: &Value, stem: &str) -> anyhow::Result<Entry> {
        let entry = match self.settings.input {
            InputFormat::Raw => {
                let form = FlatForm::from_json(input, &self.settings.group)?;
                let context = SubmissionContext {
                    accession: stem.to_string(),
                    ..self.settings.context.clone()
                };
                FlatFormDecoder::new(context).decode(&form)?
            }
            InputFormat::Mite => StructuredDecoder.decode(input)?,
        };
        Ok(entry)
    }
}
