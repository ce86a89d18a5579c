pub mod aggregate_view;
pub mod configured_project;
pub mod project_context;

pub use aggregate_view::{AggregateProjectView, ProjectIdentity};
pub use configured_project::{ActiveConfiguredProject, ConfiguredProjectId};
pub use project_context::TargetedProjectContext;
