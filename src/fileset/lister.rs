use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::config::{FilesetConfig, ListingOrder};
use crate::fileset::FilesetFilter;

/// A single `add_fileset_file` line for a Platform Designer fileset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilesetDirective {
    pub name: String,
}

impl FilesetDirective {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for FilesetDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "add_fileset_file {0} VHDL PATH {0}", self.name)
    }
}

/// Scans a directory for VHDL sources and renders them as fileset directives
pub struct FilesetLister {
    filter: FilesetFilter,
    order: ListingOrder,
}

impl FilesetLister {
    pub fn new(filter: FilesetFilter, order: ListingOrder) -> Self {
        Self { filter, order }
    }

    pub fn from_config(config: &FilesetConfig) -> Self {
        Self::new(FilesetFilter::from_config(config), config.order)
    }

    /// Names of the entries in `folder` accepted by the filter.
    ///
    /// Entries are judged by name alone, whatever their file type.
    pub fn list(&self, folder: &Path) -> Result<Vec<String>> {
        let entries = fs::read_dir(folder)
            .context(format!("Failed to read directory: {}", folder.display()))?;

        let mut names = Vec::new();

        for entry in entries {
            let entry = entry
                .context(format!("Failed to read entry in directory: {}", folder.display()))?;
            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(raw) => {
                    tracing::warn!("Skipping non UTF-8 filename: {:?}", raw);
                    continue;
                }
            };

            if self.filter.matches(&name) {
                tracing::debug!("Accepted: {}", name);
                names.push(name);
            } else {
                tracing::trace!("Rejected: {}", name);
            }
        }

        if self.order == ListingOrder::Sorted {
            names.sort();
        }

        Ok(names)
    }

    pub fn render(&self, names: &[String]) -> String {
        let mut output = String::new();
        for name in names {
            output.push_str(&FilesetDirective::new(name.as_str()).to_string());
            output.push('\n');
        }
        output
    }

    pub fn generate(&self, folder: &Path) -> Result<String> {
        tracing::info!("Searching for VHDL fileset sources in: {}", folder.display());
        let names = self.list(folder)?;
        tracing::info!("Found {} matching file(s)", names.len());
        Ok(self.render(&names))
    }
}

impl Default for FilesetLister {
    fn default() -> Self {
        Self::from_config(&FilesetConfig::default())
    }
}
