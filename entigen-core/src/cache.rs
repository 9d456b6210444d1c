use dashmap::DashMap;
use std::sync::Arc;
use tracing::trace;

use crate::builder::build;
use crate::entity::{EntityDefinition, EntitySpecification};
use crate::error::BuildError;

/// A thread-safe memo of built entities, backed by `DashMap`.
///
/// Keyed by the canonical serialized form of the specification, so any change
/// to the specification (name, flag, column, default, description, order)
/// yields a different key and a fresh build. Failed builds are not cached.
///
/// There is no eviction: the cache grows by one entry per distinct
/// specification and only [`DefinitionCache::clear`] or dropping the last
/// clone releases entries. Definitions already handed out stay valid after
/// a clear. Long-running callers that see unbounded distinct specifications
/// should clear it periodically.
#[derive(Debug, Clone, Default)]
pub struct DefinitionCache {
    inner: Arc<DashMap<String, Arc<EntityDefinition>>>,
}

impl DefinitionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached definition for an identical specification, or build,
    /// cache and return a new one.
    pub fn get_or_build(&self, spec: EntitySpecification) -> Result<Arc<EntityDefinition>, BuildError> {
        let Some(key) = fingerprint(&spec) else {
            return build(spec).map(Arc::new);
        };

        if let Some(hit) = self.inner.get(&key) {
            trace!(entity = %spec.name, "definition cache hit");
            return Ok(Arc::clone(hit.value()));
        }

        let definition = Arc::new(build(spec)?);
        let entry = self
            .inner
            .entry(key)
            .or_insert_with(|| Arc::clone(&definition));
        Ok(Arc::clone(entry.value()))
    }

    /// Number of cached definitions.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Remove all entries from the cache.
    pub fn clear(&self) {
        self.inner.clear();
    }
}

fn fingerprint(spec: &EntitySpecification) -> Option<String> {
    serde_json::to_string(spec).ok()
}
