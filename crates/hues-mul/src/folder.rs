use std::io;
use std::path::{Path, PathBuf};

use hues_core::{LoadError, RawBufferProvider};

/// A client data folder holding the `.mul` table files.
#[derive(Debug, Clone)]
pub struct MulFolder {
    root: PathBuf,
}

impl MulFolder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path of a table file under this folder.
    pub fn resolve(&self, name: &Path) -> PathBuf {
        self.root.join(name)
    }
}

impl RawBufferProvider for MulFolder {
    fn open(&self, name: &Path) -> Result<Vec<u8>, LoadError> {
        let path = self.resolve(name);
        match std::fs::read(&path) {
            Ok(bytes) => {
                tracing::debug!("Read {} ({} bytes)", path.display(), bytes.len());
                Ok(bytes)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!("Table file not found: {}", path.display());
                Err(LoadError::not_found(path))
            }
            Err(source) => {
                tracing::warn!("Table file unreadable: {}: {source}", path.display());
                Err(LoadError::SourceNotFound {
                    path,
                    source: Some(source),
                })
            }
        }
    }
}
