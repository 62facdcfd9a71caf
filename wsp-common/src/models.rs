//! Speech model naming and the model cache
//!
//! Loaded models are expensive, so the owning service keeps them in a
//! [`ModelCache`] keyed by the resolved model name. The cache is an explicit
//! value held by the service; nothing here is global. Eviction happens only
//! through [`ModelCache::evict`] or [`ModelCache::cleanup`].

use crate::{Error, Result};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

/// Model sizes the speech engine ships
pub const SUPPORTED_MODELS: &[&str] = &["tiny", "base", "small", "medium", "large"];

/// Resolve a requested model name to one of [`SUPPORTED_MODELS`].
///
/// Hub-style names such as `Xenova/whisper-tiny` resolve to the suffix after
/// the last `-`.
///
/// # Errors
/// `Error::InvalidInput` naming the request and the supported list.
pub fn resolve_model_name(requested: &str) -> Result<&'static str> {
    let trimmed = requested.trim();
    let short = if trimmed.contains('/') {
        trimmed.rsplit('-').next().unwrap_or(trimmed)
    } else {
        trimmed
    };

    SUPPORTED_MODELS
        .iter()
        .copied()
        .find(|m| *m == short)
        .ok_or_else(|| {
            Error::InvalidInput(format!(
                "unsupported model {:?}, expected one of {:?}",
                requested, SUPPORTED_MODELS
            ))
        })
}

/// Cache of loaded models keyed by model name
pub struct ModelCache<M> {
    models: Mutex<HashMap<String, Arc<M>>>,
}

impl<M> Default for ModelCache<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> ModelCache<M> {
    pub fn new() -> Self {
        Self {
            models: Mutex::new(HashMap::new()),
        }
    }

    /// Return the cached model, or load it with `load` and cache the result.
    ///
    /// The lock is not held while `load` runs. If two callers race on the
    /// same name, the first insert wins and both receive that instance.
    /// A failed load caches nothing.
    pub fn get_or_load<F, E>(&self, name: &str, load: F) -> std::result::Result<Arc<M>, E>
    where
        F: FnOnce(&str) -> std::result::Result<M, E>,
    {
        if let Some(model) = self.get(name) {
            debug!("Model cache hit: {}", name);
            return Ok(model);
        }

        info!("Loading model: {}", name);
        let loaded = Arc::new(load(name)?);

        let mut models = self.lock();
        let model = models
            .entry(name.to_string())
            .or_insert_with(|| loaded)
            .clone();
        Ok(model)
    }

    /// Cached model, if present
    pub fn get(&self, name: &str) -> Option<Arc<M>> {
        self.lock().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lock().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drop one model. Callers still holding its `Arc` keep it alive.
    pub fn evict(&self, name: &str) -> bool {
        let removed = self.lock().remove(name).is_some();
        if removed {
            info!("Evicted model: {}", name);
        }
        removed
    }

    /// Drop every cached model, returning how many were evicted.
    pub fn cleanup(&self) -> usize {
        let mut models = self.lock();
        let count = models.len();
        models.clear();
        info!("Model cache cleanup: evicted {} model(s)", count);
        count
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Arc<M>>> {
        // No cross-entry invariants, so a poisoned map is still usable.
        self.models.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
