//! One-file-per-entity export.
//!
//! Each `(label, text)` pair becomes `<slug><suffix>` inside the target
//! directory. Existing files are overwritten. Labels whose slugs collide
//! overwrite each other in export order; a warning is logged when that happens.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::slug::{self, DEFAULT_SUFFIX};

/// Errors raised while writing exported files.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Writes labelled text blocks into a directory.
#[derive(Debug, Clone)]
pub struct FileExporter {
    dir: PathBuf,
    suffix: String,
}

impl FileExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }

    /// Use a file extension other than `.txt`.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path the exporter writes `label` to.
    pub fn path_for(&self, label: &str) -> PathBuf {
        self.dir.join(slug::file_name(label, &self.suffix))
    }

    /// Create the directory if needed, then write each entry as its own file.
    ///
    /// Returns the written paths in entry order. A failure stops the export;
    /// files written before it are left in place.
    pub fn export<I, L, T>(&self, entries: I) -> Result<Vec<PathBuf>, ExportError>
    where
        I: IntoIterator<Item = (L, T)>,
        L: AsRef<str>,
        T: AsRef<str>,
    {
        fs::create_dir_all(&self.dir).map_err(|source| ExportError::CreateDir {
            path: self.dir.clone(),
            source,
        })?;

        let mut seen = HashSet::new();
        let mut written = Vec::new();

        for (label, text) in entries {
            let label = label.as_ref();
            let path = self.path_for(label);

            if !seen.insert(path.clone()) {
                warn!(
                    label = label,
                    path = %path.display(),
                    "Export label collides with an earlier one; overwriting"
                );
            }

            fs::write(&path, text.as_ref()).map_err(|source| ExportError::Write {
                path: path.clone(),
                source,
            })?;
            written.push(path);
        }

        debug!(
            dir = %self.dir.display(),
            files = seen.len(),
            "Exported text blocks"
        );
        Ok(written)
    }
}
