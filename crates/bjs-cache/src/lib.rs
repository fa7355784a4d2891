//! Two-tier transpilation cache.
//!
//! Entries are keyed by a SHA-256 content hash of `(source, options)`. A
//! bounded in-process tier sits in front of a directory of JSON files.
//! Caching never fails the caller: every persistent-tier problem degrades
//! to a miss or a no-op and is logged through `tracing`.

mod cache;
mod config;
mod disk;
mod entry;
mod error;
mod memory;
mod writer;

pub use cache::{CacheStats, TranspilationCache};
pub use config::{CacheConfig, DEFAULT_CACHE_DIR, DEFAULT_MAX_AGE, DEFAULT_MEMORY_CAPACITY};
pub use entry::{content_hash, CacheEntry};
pub use error::CacheError;
