//! crossdeps - aggregated dependency graph engine for multi-target build
//! evaluations
//!
//! This library ingests incremental, per-build-configuration evaluation
//! diffs of a multi-target project (one diff stream per target framework)
//! and maintains an aggregated, de-duplicated dependency graph suitable for
//! display and tooling. It follows hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Dependency graph domain** (`dependency_graph`): classification of raw
//!   evaluation items into typed dependency records and the rule-diff engine
//! - **Cross-target domain** (`cross_target`): per-framework context
//!   lifecycle and the aggregate-view registry
//! - **Application Layer** (`application`): DTOs, use cases, read models
//! - **Ports** (`ports`): interface definitions for the external project
//!   system
//! - **Adapters** (`adapters`): concrete implementations of ports
//! - **Shared** (`shared`): common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use crossdeps::prelude::*;
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! // Create adapters
//! let resolver = Arc::new(CachingFrameworkResolver::new(MonikerFrameworkResolver::new()));
//! let provider = Arc::new(
//!     InMemoryConfigurationProvider::new()
//!         .with_project("net6.0", "App:net6.0", true, "bin/net6.0/App.dll", None),
//! );
//!
//! // Create the registry and an aggregate view over the active frameworks
//! let registry = ContextRegistry::new(provider, Arc::clone(&resolver), "/src/App", "App");
//! let view = registry.create_view().await?;
//!
//! // Feed evaluation diffs through the rule handler
//! let use_case = ApplyEvaluationUseCase::new(resolver);
//! let mut graph = AggregatedDependencyGraph::new();
//! let updates: Vec<EvaluationUpdate> = serde_json::from_str("[]")?;
//! let summary = use_case.apply_updates(&updates, &mut graph)?;
//! println!("applied {} additions", summary.total_added());
//!
//! registry.release_view(&view).await?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod cross_target;
pub mod dependency_graph;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::configuration::InMemoryConfigurationProvider;
    pub use crate::adapters::outbound::resolver::{
        CachingFrameworkResolver, MonikerFrameworkResolver,
    };
    pub use crate::application::dto::{
        ApplySummary, EvaluationUpdate, GraphSnapshot, RuleDiffDto, ScenarioFile,
    };
    pub use crate::application::read_models::{AggregatedDependencyGraph, FrameworkGraph};
    pub use crate::application::use_cases::ApplyEvaluationUseCase;
    pub use crate::cross_target::domain::{
        AggregateProjectView, ConfiguredProjectId, TargetedProjectContext,
    };
    pub use crate::cross_target::services::ContextRegistry;
    pub use crate::dependency_graph::domain::{
        DependencyChangeAccumulator, DependencyModel, ItemSnapshot, ProviderKind, RuleDiff,
        TargetFramework,
    };
    pub use crate::dependency_graph::services::{DependencyModelFactory, DependencyRuleHandler};
    pub use crate::ports::inbound::EvaluationPort;
    pub use crate::ports::outbound::{ActiveConfigurationProvider, TargetFrameworkResolver};
    pub use crate::shared::Result;
}
