pub mod context_registry;

pub use context_registry::ContextRegistry;
