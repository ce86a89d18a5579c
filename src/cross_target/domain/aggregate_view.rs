use super::configured_project::ConfiguredProjectId;
use super::project_context::TargetedProjectContext;
use crate::dependency_graph::domain::TargetFramework;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// The project path/display-name pair a view was stamped with at
/// registration, kept current by rename notifications.
#[derive(Debug, Clone, Default)]
pub struct ProjectIdentity {
    pub path: String,
    pub display_name: String,
}

/// Aggregate view over one multi-targeted project at one point in time:
/// the set of per-framework contexts for the currently active configured
/// projects.
///
/// Views are created and released through the registry; the registry stamps
/// `identity` during registration and rewrites it on rename, which is why
/// that one field sits behind a lock on an otherwise immutable aggregate.
#[derive(Debug)]
pub struct AggregateProjectView {
    id: Uuid,
    registry_id: Uuid,
    is_cross_targeting: bool,
    active_framework: TargetFramework,
    contexts: HashMap<TargetFramework, Arc<TargetedProjectContext>>,
    identity: RwLock<ProjectIdentity>,
}

impl AggregateProjectView {
    pub fn new(
        registry_id: Uuid,
        is_cross_targeting: bool,
        active_framework: TargetFramework,
        contexts: HashMap<TargetFramework, Arc<TargetedProjectContext>>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            registry_id,
            is_cross_targeting,
            active_framework,
            contexts,
            identity: RwLock::new(ProjectIdentity::default()),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn registry_id(&self) -> Uuid {
        self.registry_id
    }

    /// True unless the project has exactly one configured project with an
    /// empty configuration key.
    pub fn is_cross_targeting(&self) -> bool {
        self.is_cross_targeting
    }

    pub fn active_framework(&self) -> &TargetFramework {
        &self.active_framework
    }

    pub fn context_for(&self, framework: &TargetFramework) -> Option<&Arc<TargetedProjectContext>> {
        self.contexts.get(framework)
    }

    pub fn active_context(&self) -> Option<&Arc<TargetedProjectContext>> {
        self.contexts.get(&self.active_framework)
    }

    pub fn inner_contexts(&self) -> impl Iterator<Item = &Arc<TargetedProjectContext>> {
        self.contexts.values()
    }

    pub fn frameworks(&self) -> impl Iterator<Item = &TargetFramework> {
        self.contexts.keys()
    }

    /// The configured projects this view holds contexts for; the registry
    /// recomputes context liveness from these sets on release.
    pub fn configured_projects(&self) -> HashSet<ConfiguredProjectId> {
        self.contexts
            .values()
            .map(|ctx| ctx.configured_project().clone())
            .collect()
    }

    pub fn identity(&self) -> ProjectIdentity {
        self.identity
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub(crate) fn stamp_identity(&self, path: &str, display_name: &str) {
        let mut identity = self
            .identity
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        identity.path = path.to_string();
        identity.display_name = display_name.to_string();
    }
}
