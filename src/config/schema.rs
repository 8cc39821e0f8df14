use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Resolved project settings. Built once by the resolver and read-only
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    folders: Vec<String>,
    chapters: Vec<String>,
    style: String,
    template_path: PathBuf,
    size: u32,
    document_class: String,
    packages: BTreeMap<String, String>,
}

impl Config {
    /// Assemble a record directly. The resolver is the usual way in; this
    /// exists for callers that already hold validated values.
    pub fn new(
        folders: Vec<String>,
        chapters: Vec<String>,
        style: impl Into<String>,
        template_path: impl Into<PathBuf>,
        size: u32,
        document_class: impl Into<String>,
        packages: BTreeMap<String, String>,
    ) -> Self {
        Self {
            folders,
            chapters,
            style: style.into(),
            template_path: template_path.into(),
            size,
            document_class: document_class.into(),
            packages,
        }
    }

    pub fn folders(&self) -> &[String] {
        &self.folders
    }

    pub fn chapters(&self) -> &[String] {
        &self.chapters
    }

    pub fn style(&self) -> &str {
        &self.style
    }

    pub fn template_path(&self) -> &Path {
        &self.template_path
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn document_class(&self) -> &str {
        &self.document_class
    }

    pub fn packages(&self) -> &BTreeMap<String, String> {
        &self.packages
    }
}

/// Split a comma-separated list, trimming entries and dropping empty ones.
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(String::from)
        .collect()
}
