use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

use crate::generators::GeneratedDocument;

/// Longest file name most filesystems accept, in bytes.
const MAX_FILENAME_BYTES: usize = 255;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Where a saved artifact ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedArtifact {
    pub filename: String,
    pub location: PathBuf,
}

/// Destination for generated documents, the "save file" step.
#[async_trait]
pub trait ArtifactSink {
    async fn save(&self, document: &GeneratedDocument) -> Result<SavedArtifact, StorageError>;
}

/// Saves documents as files inside one directory.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path a document with `filename` is written to.
    pub fn path_for(&self, filename: &str) -> PathBuf {
        self.root.join(stored_name(filename))
    }
}

/// Name a document is stored under. Separators and other unsafe characters
/// are stripped so the file stays inside the root, and long names are cut
/// in the stem so the extension survives.
pub fn stored_name(filename: &str) -> String {
    let (stem, extension) = match filename.rsplit_once('.') {
        Some((stem, extension)) if !stem.is_empty() => (stem, Some(extension)),
        _ => (filename, None),
    };

    let extension = extension
        .map(sanitize_filename::sanitize)
        .filter(|extension| !extension.is_empty());
    let reserved = extension.as_ref().map_or(0, |e| e.len() + 1);
    let budget = MAX_FILENAME_BYTES.saturating_sub(reserved);

    let mut name = sanitize_filename::sanitize(stem);
    truncate_at_char_boundary(&mut name, budget);
    if let Some(extension) = extension {
        name.push('.');
        name.push_str(&extension);
    }
    name
}

fn truncate_at_char_boundary(text: &mut String, max_bytes: usize) {
    if text.len() <= max_bytes {
        return;
    }
    let mut end = max_bytes;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text.truncate(end);
}

#[async_trait]
impl ArtifactSink for DirectorySink {
    async fn save(&self, document: &GeneratedDocument) -> Result<SavedArtifact, StorageError> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|source| StorageError::CreateDir {
                path: self.root.clone(),
                source,
            })?;

        let filename = stored_name(&document.filename);
        let path = self.root.join(&filename);
        tokio::fs::write(&path, &document.pdf)
            .await
            .map_err(|source| StorageError::Write {
                path: path.clone(),
                source,
            })?;

        log::info!("Saved {} to {}", filename, path.display());

        Ok(SavedArtifact {
            filename,
            location: path,
        })
    }
}
