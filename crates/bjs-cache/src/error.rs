use std::path::PathBuf;

use thiserror::Error;

/// A persistent-tier failure.
///
/// These never escape [`TranspilationCache`](crate::TranspilationCache);
/// they are logged and turned into misses or no-ops.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache I/O error at '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("corrupt cache entry '{}': {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cache key options are not serializable: {0}")]
    Options(#[source] serde_json::Error),
}

impl CacheError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
