//! Where raw table bytes come from.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::LoadError;

/// Opens a named table file and hands back its full contents.
///
/// Implementations report any source they cannot read as
/// [`LoadError::SourceNotFound`];
/// the loader never retries.
pub trait RawBufferProvider {
    fn open(&self, name: &Path) -> Result<Vec<u8>, LoadError>;
}

/// In-memory provider keyed by file name.
#[derive(Debug, Clone, Default)]
pub struct MemoryProvider {
    files: HashMap<PathBuf, Vec<u8>>,
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a file.
    pub fn insert(&mut self, name: impl Into<PathBuf>, bytes: Vec<u8>) -> &mut Self {
        self.files.insert(name.into(), bytes);
        self
    }

    pub fn with_file(mut self, name: impl Into<PathBuf>, bytes: Vec<u8>) -> Self {
        self.insert(name, bytes);
        self
    }
}

impl RawBufferProvider for MemoryProvider {
    fn open(&self, name: &Path) -> Result<Vec<u8>, LoadError> {
        self.files
            .get(name)
            .cloned()
            .ok_or_else(|| LoadError::not_found(name))
    }
}
