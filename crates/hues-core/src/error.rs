use std::path::PathBuf;

/// Errors raised while obtaining the raw table buffers.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The buffer for `path` could not be obtained. `source` carries the
    /// I/O cause when the file exists but could not be read.
    #[error("table source not found: {}", path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: Option<std::io::Error>,
    },
}

impl LoadError {
    /// A source that does not exist at all.
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::SourceNotFound {
            path: path.into(),
            source: None,
        }
    }

    /// Path of the source that could not be obtained.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::SourceNotFound { path, .. } => path,
        }
    }
}

/// Errors raised while decoding a replacement group record.
#[derive(Debug, thiserror::Error)]
pub enum PatchError {
    #[error("patch record truncated: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid hues config: {0}")]
    Json(#[from] serde_json::Error),
}
