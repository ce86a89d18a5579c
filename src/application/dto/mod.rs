pub mod evaluation;
pub mod graph_snapshot;

pub use evaluation::{
    ApplySummary, ConfigurationSection, EvaluationUpdate, FrameworkSummary, ProjectSection,
    RuleDiffDto, ScenarioFile,
};
pub use graph_snapshot::{FrameworkSnapshot, GraphSnapshot, NodeSnapshot, SnapshotMetadata};
