use std::path::PathBuf;
use std::time::Duration;

/// Directory used when none is configured, relative to the working directory.
pub const DEFAULT_CACHE_DIR: &str = ".banglascript-cache";

/// In-memory tier capacity used when none is configured.
pub const DEFAULT_MEMORY_CAPACITY: usize = 100;

/// Age after which [`invalidate`](crate::TranspilationCache::invalidate)
/// drops persistent entries when called without an explicit age.
pub const DEFAULT_MAX_AGE: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Configuration for a [`TranspilationCache`](crate::TranspilationCache).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Directory holding one `<hash>.json` file per entry.
    pub dir: PathBuf,
    /// Maximum number of entries kept in memory. Zero disables the tier.
    pub memory_capacity: usize,
    /// Default age threshold for persistent-tier invalidation.
    pub default_max_age: Duration,
    /// Whether the cache starts enabled.
    pub enabled: bool,
}

impl CacheConfig {
    /// Create a configuration rooted at `dir` with default limits.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            memory_capacity: DEFAULT_MEMORY_CAPACITY,
            default_max_age: DEFAULT_MAX_AGE,
            enabled: true,
        }
    }

    /// Set the in-memory tier capacity.
    #[must_use]
    pub fn with_memory_capacity(mut self, capacity: usize) -> Self {
        self.memory_capacity = capacity;
        self
    }

    /// Set the default invalidation age.
    #[must_use]
    pub fn with_default_max_age(mut self, max_age: Duration) -> Self {
        self.default_max_age = max_age;
        self
    }

    /// Start the cache enabled or disabled.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CacheConfig::default();
        assert_eq!(config.dir, PathBuf::from(".banglascript-cache"));
        assert_eq!(config.memory_capacity, 100);
        assert_eq!(config.default_max_age.as_secs(), 604_800);
        assert!(config.enabled);
    }

    #[test]
    fn test_builder() {
        let config = CacheConfig::new("/tmp/x")
            .with_memory_capacity(3)
            .with_default_max_age(Duration::from_secs(60))
            .with_enabled(false);
        assert_eq!(config.memory_capacity, 3);
        assert_eq!(config.default_max_age, Duration::from_secs(60));
        assert!(!config.enabled);
    }
}
