pub mod changes;
pub mod dependency_model;
pub mod item_metadata;
pub mod rule_diff;
pub mod target_framework;

pub use changes::{DependencyChangeAccumulator, DependencyChanges};
pub use dependency_model::{DependencyFlags, DependencyModel, IconSet, ProviderKind};
pub use item_metadata::{
    DependencyItemMetadata, DependencyType, DiagnosticSeverity, PropertyMap,
};
pub use rule_diff::{ItemSnapshot, RuleDiff};
pub use target_framework::TargetFramework;
