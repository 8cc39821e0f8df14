use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use ini::{Ini, ParseOption};
use tracing::debug;

use crate::error::{BeautiTexError, Result};

/// Section name → (lower-cased key → value), accumulated from one or more
/// INI files. Later files replace individual keys of earlier ones.
#[derive(Debug, Default, Clone)]
pub struct LayeredIni {
    sections: BTreeMap<String, BTreeMap<String, String>>,
}

impl LayeredIni {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `path` and layer its keys on top of what is already loaded.
    pub fn merge_file(&mut self, path: &Path) -> Result<()> {
        let content = std::fs::read_to_string(path).map_err(|e| BeautiTexError::Io {
            context: format!("reading {}", path.display()),
            source: e,
        })?;
        self.merge_str(&content)
            .map_err(|message| BeautiTexError::IniSyntax {
                path: path.to_path_buf(),
                message,
            })?;
        debug!(path = %path.display(), "layered configuration file");
        Ok(())
    }

    /// Layer INI text on top of what is already loaded.
    ///
    /// Quotes and backslashes are kept verbatim so LaTeX package options
    /// survive untouched. Indented lines continue the previous value. A key
    /// given twice in the same section of one text is rejected. Keys outside
    /// any section are ignored.
    pub fn merge_str(&mut self, content: &str) -> std::result::Result<(), String> {
        let options = ParseOption {
            enabled_quote: false,
            enabled_escape: false,
            enabled_indented_mutiline_value: true,
            ..ParseOption::default()
        };
        let ini = Ini::load_from_str_opt(content, options).map_err(|e| e.to_string())?;

        let mut seen: BTreeSet<(String, String)> = BTreeSet::new();
        for (section, properties) in ini.iter() {
            let Some(section) = section else {
                continue;
            };
            let section = section.trim().to_string();
            for (key, _) in properties.iter() {
                let key = key.trim().to_lowercase();
                if !seen.insert((section.clone(), key.clone())) {
                    return Err(format!("duplicate key '{key}' in section [{section}]"));
                }
            }

            let entries = self.sections.entry(section).or_default();
            for (key, value) in properties.iter() {
                entries.insert(key.trim().to_lowercase(), value.trim().to_string());
            }
        }
        Ok(())
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|entries| entries.get(key))
            .map(String::as_str)
    }

    /// A required key; its absence is reported as a parse error.
    pub fn require(&self, section: &str, key: &str) -> Result<&str> {
        self.get(section, key)
            .ok_or_else(|| BeautiTexError::ConfigParse {
                key: format!("{section}.{key}"),
                reason: "missing from both the default and the user configuration".into(),
            })
    }

    /// All entries of a section; empty when the section is absent.
    pub fn section(&self, section: &str) -> BTreeMap<String, String> {
        self.sections.get(section).cloned().unwrap_or_default()
    }
}
