use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::document::AppDocument;

/// Loads and saves the application document as pretty-printed JSON.
///
/// Writes go through a sibling temp file and a rename, so a crash
/// mid-save never leaves a truncated document behind.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    path: PathBuf,
}

impl DocumentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Reads the document; a missing file is an empty document, not an
    /// error.
    pub fn load(&self) -> Result<AppDocument> {
        if !self.path.exists() {
            return Ok(AppDocument::default());
        }

        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse {}", self.path.display()))
    }

    pub fn save(&self, document: &AppDocument) -> Result<()> {
        let raw = serde_json::to_string_pretty(document).context("failed to encode document")?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, raw).with_context(|| format!("failed to write {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("failed to replace {}", self.path.display()))?;

        tracing::debug!(path = %self.path.display(), "document saved");
        Ok(())
    }
}
