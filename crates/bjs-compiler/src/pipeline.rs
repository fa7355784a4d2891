//! Cached preprocessing and transpilation.

use std::sync::Arc;

use bjs_cache::{CacheConfig, CacheEntry, TranspilationCache};
use bjs_types::SourceFile;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::backend::{Backend, CompileError, PassthroughBackend};
use crate::error::TranspileError;
use crate::rewrite::rewrite_source;

/// Per-call pipeline options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreprocessOptions {
    /// Leave non-keyword Bangla words as written.
    pub no_transliterate: bool,
    /// Consult and fill the cache for this call.
    pub cache_enabled: bool,
}

impl PreprocessOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_no_transliterate(mut self, no_transliterate: bool) -> Self {
        self.no_transliterate = no_transliterate;
        self
    }

    #[must_use]
    pub fn with_cache(mut self, cache_enabled: bool) -> Self {
        self.cache_enabled = cache_enabled;
        self
    }
}

impl Default for PreprocessOptions {
    fn default() -> Self {
        Self {
            no_transliterate: false,
            cache_enabled: true,
        }
    }
}

/// Result of [`Pipeline::preprocess`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preprocessed {
    pub rewritten_text: String,
    pub from_cache: bool,
}

/// Result of [`Pipeline::transpile`].
#[derive(Debug, Clone, PartialEq)]
pub struct Transpiled {
    pub code: String,
    pub map: Option<Value>,
    pub from_cache: bool,
}

/// The options tuple hashed into cache keys. `stage` keeps preprocess and
/// transpile entries for the same source apart.
#[derive(Serialize)]
struct KeyOptions<'a> {
    stage: &'static str,
    no_transliterate: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    file_name: Option<&'a str>,
}

const STAGE_PREPROCESS: &str = "preprocess";
const STAGE_TRANSPILE: &str = "transpile";

/// Orchestrates cache, rewrite pass and backend.
#[derive(Debug)]
pub struct Pipeline<B = PassthroughBackend> {
    backend: B,
    cache: TranspilationCache,
}

impl Pipeline<PassthroughBackend> {
    /// A preprocess-only pipeline with a cache at `config`.
    pub fn passthrough(config: CacheConfig) -> Self {
        Self::new(PassthroughBackend, TranspilationCache::new(config))
    }
}

impl<B: Backend> Pipeline<B> {
    pub fn new(backend: B, cache: TranspilationCache) -> Self {
        Self { backend, cache }
    }

    pub fn with_cache_config(backend: B, config: CacheConfig) -> Self {
        Self::new(backend, TranspilationCache::new(config))
    }

    /// The cache, for stats, clearing, invalidation and toggling.
    pub fn cache(&self) -> &TranspilationCache {
        &self.cache
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Rewrite `source` into target-language text, memoized.
    #[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
    pub fn preprocess(&self, source: &str, options: &PreprocessOptions) -> Preprocessed {
        let key = KeyOptions {
            stage: STAGE_PREPROCESS,
            no_transliterate: options.no_transliterate,
            file_name: None,
        };

        if let Some(entry) = self.lookup(source, &key, options) {
            return Preprocessed {
                rewritten_text: entry.output.clone(),
                from_cache: true,
            };
        }

        let rewritten_text = rewrite_source(source, options.no_transliterate);
        if options.cache_enabled {
            self.cache.set(source, &key, rewritten_text.as_str(), None);
        }
        Preprocessed {
            rewritten_text,
            from_cache: false,
        }
    }

    /// Rewrite `source` and run it through the backend, memoized.
    ///
    /// Empty or whitespace-only source yields empty code and no map without
    /// touching the cache or the backend. Object-shaped maps get a
    /// `sourcesContent` array holding the original source.
    #[tracing::instrument(level = "debug", skip_all, fields(file = file_name))]
    pub fn transpile(
        &self,
        source: &str,
        file_name: &str,
        options: &PreprocessOptions,
    ) -> Result<Transpiled, TranspileError> {
        if source.trim().is_empty() {
            return Ok(Transpiled {
                code: String::new(),
                map: None,
                from_cache: false,
            });
        }

        let key = KeyOptions {
            stage: STAGE_TRANSPILE,
            no_transliterate: options.no_transliterate,
            file_name: Some(file_name),
        };

        if let Some(entry) = self.lookup(source, &key, options) {
            return Ok(Transpiled {
                code: entry.output.clone(),
                map: entry.position_map.clone(),
                from_cache: true,
            });
        }

        let rewritten = rewrite_source(source, options.no_transliterate);
        let compiled = self
            .backend
            .compile(&rewritten, file_name)
            .map_err(|e| backend_error(e, file_name, &rewritten))?;

        let map = compiled.map.map(|map| with_sources_content(map, source));
        if options.cache_enabled {
            self.cache.set(source, &key, compiled.code.as_str(), map.clone());
        }
        Ok(Transpiled {
            code: compiled.code,
            map,
            from_cache: false,
        })
    }

    fn lookup(
        &self,
        source: &str,
        key: &KeyOptions<'_>,
        options: &PreprocessOptions,
    ) -> Option<Arc<CacheEntry>> {
        if !options.cache_enabled {
            return None;
        }
        let entry = self.cache.get(source, key)?;
        tracing::debug!(stage = key.stage, "served from cache");
        Some(entry)
    }
}

fn backend_error(error: CompileError, file_name: &str, rewritten: &str) -> TranspileError {
    let line = error
        .offset
        .map(|offset| SourceFile::new(file_name, rewritten).line_of_offset(offset));
    tracing::debug!(?line, message = %error.message, "backend failed");
    TranspileError::Backend {
        line,
        message: error.message,
    }
}

fn with_sources_content(map: Value, source: &str) -> Value {
    match map {
        Value::Object(mut fields) => {
            fields.insert(
                "sourcesContent".to_string(),
                Value::Array(vec![Value::String(source.to_string())]),
            );
            Value::Object(fields)
        }
        other => other,
    }
}
