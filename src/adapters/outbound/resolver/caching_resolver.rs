use crate::dependency_graph::domain::TargetFramework;
use crate::ports::outbound::TargetFrameworkResolver;
use crate::shared::compare::fold_key;
use dashmap::DashMap;
use std::sync::Arc;

/// CachingFrameworkResolver wraps a TargetFrameworkResolver and adds
/// in-memory caching.
///
/// This adapter implements the decorator pattern: resolution is hot on the
/// rule-handler path (once per classified item), while the set of distinct
/// framework names in play is tiny. The cache is thread-safe and suitable
/// for concurrent access. Negative results are cached too.
pub struct CachingFrameworkResolver<R: TargetFrameworkResolver> {
    inner: R,
    cache: Arc<DashMap<String, Option<TargetFramework>>>,
}

impl<R: TargetFrameworkResolver> CachingFrameworkResolver<R> {
    /// Creates a new caching resolver wrapping the given inner resolver
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            cache: Arc::new(DashMap::new()),
        }
    }

    /// Returns the current cache size (for testing/monitoring)
    #[cfg(test)]
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl<R: TargetFrameworkResolver> TargetFrameworkResolver for CachingFrameworkResolver<R> {
    fn resolve(&self, name: &str) -> Option<TargetFramework> {
        let key = fold_key(name);

        if let Some(cached) = self.cache.get(&key) {
            return cached.clone();
        }

        let resolved = self.inner.resolve(name);
        self.cache.insert(key, resolved.clone());
        resolved
    }
}
