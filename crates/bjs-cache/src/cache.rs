use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::CacheConfig;
use crate::disk::DiskTier;
use crate::entry::{content_hash, now_millis, options_value, CacheEntry};
use crate::memory::MemoryTier;
use crate::writer::DiskWriter;

/// Snapshot of cache occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    pub memory_entries: usize,
    pub memory_capacity: usize,
    pub disk_entries: usize,
    pub disk_bytes: u64,
    pub enabled: bool,
}

impl CacheStats {
    /// Persistent-tier size in megabytes (2^20 bytes).
    pub fn disk_megabytes(&self) -> f64 {
        self.disk_bytes as f64 / (1024.0 * 1024.0)
    }
}

/// Content-addressed two-tier cache for pipeline output.
///
/// Safe to share between threads. The memory tier sits behind a single
/// mutex; persistent writes go through a background writer and never block
/// `set`.
///
/// ```no_run
/// use bjs_cache::{CacheConfig, TranspilationCache};
/// use serde_json::json;
///
/// let cache = TranspilationCache::new(CacheConfig::new(".banglascript-cache"));
/// let options = json!({ "no_transliterate": false });
/// if cache.get("লিখো(১);", &options).is_none() {
///     cache.set("লিখো(১);", &options, "console.log(1);", None);
/// }
/// ```
#[derive(Debug)]
pub struct TranspilationCache {
    memory: Mutex<MemoryTier>,
    disk: DiskTier,
    writer: DiskWriter,
    default_max_age: Duration,
    enabled: AtomicBool,
}

impl TranspilationCache {
    /// Build a cache from `config`. Nothing touches the disk until the first
    /// write.
    pub fn new(config: CacheConfig) -> Self {
        let disk = DiskTier::new(config.dir);
        Self {
            memory: Mutex::new(MemoryTier::new(config.memory_capacity)),
            writer: DiskWriter::spawn(disk.clone()),
            disk,
            default_max_age: config.default_max_age,
            enabled: AtomicBool::new(config.enabled),
        }
    }

    /// Look up the entry for `(source, options)`.
    ///
    /// Memory first, then disk; a disk hit is promoted into memory. Any disk
    /// problem is a miss. Always a miss while disabled.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn get<O: Serialize + ?Sized>(&self, source: &str, options: &O) -> Option<Arc<CacheEntry>> {
        if !self.is_enabled() {
            return None;
        }
        let hash = self.hash(source, options)?;

        if let Some(entry) = self.memory.lock().get(&hash) {
            tracing::debug!(%hash, "memory hit");
            return Some(entry);
        }

        let entry = match self.disk.read(&hash) {
            Ok(Some(entry)) => Arc::new(entry),
            Ok(None) => {
                tracing::debug!(%hash, "miss");
                return None;
            }
            Err(e) => {
                tracing::debug!(error = %e, "disk entry unusable, treating as miss");
                return None;
            }
        };

        tracing::debug!(%hash, "disk hit");
        self.memory.lock().insert(hash, Arc::clone(&entry));
        Some(entry)
    }

    /// Store `output` and `position_map` for `(source, options)`.
    ///
    /// The memory tier is updated before returning; the disk write is
    /// queued. A no-op while disabled.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn set<O: Serialize + ?Sized>(
        &self,
        source: &str,
        options: &O,
        output: impl Into<String>,
        position_map: Option<Value>,
    ) {
        if !self.is_enabled() {
            return;
        }
        let options = match options_value(options) {
            Ok(options) => options,
            Err(e) => {
                tracing::debug!(error = %e, "cache set skipped");
                return;
            }
        };
        let hash = content_hash(source, &options);
        let entry = Arc::new(CacheEntry::new(output.into(), position_map, options));

        if let Some(evicted) = self.memory.lock().insert(hash.clone(), Arc::clone(&entry)) {
            tracing::trace!(%evicted, "memory tier evicted oldest entry");
        }
        self.writer.submit(hash, entry);
    }

    /// Delete persistent entries older than `max_age` (the configured
    /// default when `None`) and any that cannot be read. The memory tier is
    /// left alone. Returns the number of files removed.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn invalidate(&self, max_age: Option<Duration>) -> usize {
        self.writer.flush();
        let max_age = max_age.unwrap_or(self.default_max_age);
        let max_age_ms = u64::try_from(max_age.as_millis()).unwrap_or(u64::MAX);
        match self.disk.remove_older_than(max_age_ms, now_millis()) {
            Ok(removed) => {
                tracing::debug!(removed, "invalidated old entries");
                removed
            }
            Err(e) => {
                tracing::debug!(error = %e, "invalidate skipped");
                0
            }
        }
    }

    /// Drop every entry from both tiers and remove the cache directory.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn clear(&self) {
        self.writer.flush();
        self.memory.lock().clear();
        if let Err(e) = self.disk.clear() {
            tracing::debug!(error = %e, "cache directory not removed");
        }
    }

    /// Current occupancy. Waits for queued writes so disk numbers are exact.
    pub fn stats(&self) -> CacheStats {
        self.writer.flush();
        let (memory_entries, memory_capacity) = {
            let memory = self.memory.lock();
            (memory.len(), memory.capacity())
        };
        let (disk_entries, disk_bytes) = self.disk.usage().unwrap_or_else(|e| {
            tracing::debug!(error = %e, "disk usage unavailable");
            (0, 0)
        });
        CacheStats {
            memory_entries,
            memory_capacity,
            disk_entries,
            disk_bytes,
            enabled: self.is_enabled(),
        }
    }

    /// Enable or disable lookups and stores. Existing entries are kept.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Block until every queued persistent write has been applied.
    pub fn flush(&self) {
        self.writer.flush();
    }

    /// The persistent-tier directory.
    pub fn dir(&self) -> &std::path::Path {
        self.disk.dir()
    }

    fn hash<O: Serialize + ?Sized>(&self, source: &str, options: &O) -> Option<String> {
        match options_value(options) {
            Ok(options) => Some(content_hash(source, &options)),
            Err(e) => {
                tracing::debug!(error = %e, "cache lookup skipped");
                None
            }
        }
    }
}

impl Default for TranspilationCache {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}
