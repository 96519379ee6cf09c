//! Directory-level file access for batch runs.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde_json::Value;

pub struct FileManager {
    input_dir: PathBuf,
    output_dir: PathBuf,
}

impl FileManager {
    /// Check the input directory and create the output directory.
    pub fn new(input_dir: PathBuf, output_dir: PathBuf) -> anyhow::Result<Self> {
        anyhow::ensure!(
            input_dir.is_dir(),
            "input directory {} does not exist",
            input_dir.display()
        );
        fs::create_dir_all(&output_dir).with_context(|| {
            format!("failed to create output directory {}", output_dir.display())
        })?;
        Ok(Self {
            input_dir,
            output_dir,
        })
    }

    /// Every `*.json` file of the input directory, sorted by name.
    pub fn input_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        let entries = fs::read_dir(&self.input_dir).with_context(|| {
            format!("failed to list input directory {}", self.input_dir.display())
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    pub fn read_json(path: &Path) -> anyhow::Result<Value> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("{} is not valid JSON", path.display()))
    }

    /// Write `<stem>.<extension>` into the output directory.
    pub fn write(&self, stem: &str, extension: &str, contents: &str) -> anyhow::Result<PathBuf> {
        let path = self.output_dir.join(format!("{stem}.{extension}"));
        fs::write(&path, contents)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(path)
    }
}

/// File name without extension, used as accession for portal submissions.
pub fn stem(path: &Path) -> anyhow::Result<&str> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .with_context(|| format!("{} has no usable file name", path.display()))
}
