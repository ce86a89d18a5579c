use crossdeps::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock TargetFrameworkResolver backed by a fixed name table
pub struct MockFrameworkResolver {
    frameworks: HashMap<String, TargetFramework>,
    call_count: AtomicUsize,
}

impl MockFrameworkResolver {
    pub fn new() -> Self {
        Self {
            frameworks: HashMap::new(),
            call_count: AtomicUsize::new(0),
        }
    }

    pub fn with_framework(mut self, name: &str, full_name: &str, short_name: &str) -> Self {
        self.frameworks.insert(
            name.to_ascii_lowercase(),
            TargetFramework::with_short_name(full_name, short_name),
        );
        self
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

impl Default for MockFrameworkResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl TargetFrameworkResolver for MockFrameworkResolver {
    fn resolve(&self, name: &str) -> Option<TargetFramework> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.frameworks.get(&name.to_ascii_lowercase()).cloned()
    }
}
