use crate::cross_target::domain::aggregate_view::AggregateProjectView;
use crate::cross_target::domain::configured_project::ConfiguredProjectId;
use crate::cross_target::domain::project_context::TargetedProjectContext;
use crate::dependency_graph::domain::TargetFramework;
use crate::ports::outbound::{ActiveConfigurationProvider, TargetFrameworkResolver};
use crate::shared::error::CrossDepsError;
use crate::shared::Result;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

/// Mutable registry state. Guarded by one mutex that is held only for
/// in-memory map edits, never across an await point.
struct RegistryState {
    views: Vec<Arc<AggregateProjectView>>,
    contexts: HashMap<ConfiguredProjectId, Arc<TargetedProjectContext>>,
    project_path: String,
    display_name: String,
    detached: bool,
}

/// ContextRegistry - owns the per-framework contexts of one project and the
/// aggregate views over them.
///
/// Contexts are created lazily, shared between all live views that span the
/// same configured project, and disposed only when the last referencing
/// view is released. Disposal is two-phase: the set of safely disposable
/// contexts is computed under the lock, and the (suspending) disposal runs
/// after the lock is released.
///
/// # Type Parameters
/// * `P` - ActiveConfigurationProvider implementation
/// * `R` - TargetFrameworkResolver implementation
pub struct ContextRegistry<P, R> {
    provider: Arc<P>,
    resolver: Arc<R>,
    id: Uuid,
    state: Mutex<RegistryState>,
}

impl<P, R> ContextRegistry<P, R>
where
    P: ActiveConfigurationProvider,
    R: TargetFrameworkResolver,
{
    pub fn new(
        provider: Arc<P>,
        resolver: Arc<R>,
        project_path: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            resolver,
            id: Uuid::new_v4(),
            state: Mutex::new(RegistryState {
                views: Vec::new(),
                contexts: HashMap::new(),
                project_path: project_path.into(),
                display_name: display_name.into(),
                detached: false,
            }),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    fn lock_state(&self) -> MutexGuard<'_, RegistryState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Creates and registers one aggregate view spanning the currently
    /// active set of per-framework configured projects.
    ///
    /// All configuration reads happen before the lock is taken; the lock
    /// phase only reuses/creates cached contexts and registers the view.
    /// The view is stamped with the project's current path and display name
    /// inside the lock, so a rename racing with construction cannot leave a
    /// stale stamp.
    ///
    /// # Errors
    /// Propagates provider failures; on error no view is registered.
    pub async fn create_view(&self) -> Result<Arc<AggregateProjectView>> {
        let records = self.provider.active_configured_projects().await?;

        let property_reads = records
            .iter()
            .map(|record| self.provider.configuration_properties(&record.project));
        let properties = futures::future::try_join_all(property_reads).await?;

        let is_cross_targeting =
            !(records.len() == 1 && records[0].configuration_key.is_empty());

        let mut active_framework = TargetFramework::empty();
        let mut candidates = Vec::with_capacity(records.len());
        for (record, props) in records.into_iter().zip(properties) {
            let framework = if !record.configuration_key.is_empty() {
                self.resolver.resolve(&record.configuration_key)
            } else {
                props
                    .target_framework
                    .as_deref()
                    .and_then(|name| self.resolver.resolve(name))
            }
            .unwrap_or_else(TargetFramework::empty);

            if record.is_active {
                active_framework = framework.clone();
            }
            candidates.push((record.project, framework, props.target_path));
        }

        let view = {
            let mut state = self.lock_state();
            let display_base = state.display_name.clone();

            let mut contexts = HashMap::with_capacity(candidates.len());
            for (project, framework, target_path) in candidates {
                let context = state
                    .contexts
                    .entry(project.clone())
                    .or_insert_with(|| {
                        let display_name = if is_cross_targeting {
                            format!("{}({})", display_base, framework.short_name())
                        } else {
                            display_base.clone()
                        };
                        tracing::debug!(
                            project = %project,
                            framework = %framework,
                            "created targeted project context"
                        );
                        Arc::new(TargetedProjectContext::new(
                            project.clone(),
                            framework.clone(),
                            target_path,
                            display_name,
                        ))
                    })
                    .clone();
                contexts.insert(framework, context);
            }

            let view = Arc::new(AggregateProjectView::new(
                self.id,
                is_cross_targeting,
                active_framework,
                contexts,
            ));
            view.stamp_identity(&state.project_path, &state.display_name);
            state.views.push(Arc::clone(&view));
            view
        };

        Ok(view)
    }

    /// Unregisters a view and disposes every per-framework context no
    /// longer referenced by any remaining live view.
    ///
    /// # Errors
    /// Releasing a view this registry does not hold (already released, or
    /// created by another registry) is an invalid-argument failure.
    pub async fn release_view(&self, view: &Arc<AggregateProjectView>) -> Result<()> {
        if view.registry_id() != self.id {
            return Err(CrossDepsError::ForeignView { view_id: view.id() }.into());
        }

        let to_dispose: Vec<Arc<TargetedProjectContext>> = {
            let mut state = self.lock_state();
            let position = state
                .views
                .iter()
                .position(|live| Arc::ptr_eq(live, view))
                .ok_or(CrossDepsError::ViewNotRegistered { view_id: view.id() })?;
            state.views.remove(position);

            if state.views.is_empty() {
                state.contexts.drain().map(|(_, context)| context).collect()
            } else {
                let still_referenced: HashSet<ConfiguredProjectId> = state
                    .views
                    .iter()
                    .flat_map(|live| live.configured_projects())
                    .collect();
                view.configured_projects()
                    .into_iter()
                    .filter(|project| !still_referenced.contains(project))
                    .filter_map(|project| state.contexts.remove(&project))
                    .collect()
            }
        };

        // Disposal can suspend; it runs strictly after the lock is gone,
        // from the snapshot computed above.
        for context in to_dispose {
            context.dispose().await;
        }

        Ok(())
    }

    /// Rename notification from the owning project: updates the registry's
    /// stored identity and every live view's stamp in place.
    pub fn on_project_renamed(&self, path: &str, display_name: &str) {
        let mut state = self.lock_state();
        if state.detached {
            return;
        }
        state.project_path = path.to_string();
        state.display_name = display_name.to_string();
        for view in &state.views {
            view.stamp_identity(path, display_name);
        }
    }

    /// Unload notification: detaches the registry from further rename
    /// notifications. Outstanding views are left to their owners to
    /// release.
    pub fn on_project_unloading(&self) {
        let mut state = self.lock_state();
        state.detached = true;
        tracing::debug!(registry = %self.id, "registry detached from project lifecycle");
    }

    pub fn live_view_count(&self) -> usize {
        self.lock_state().views.len()
    }

    pub fn cached_context_count(&self) -> usize {
        self.lock_state().contexts.len()
    }

    /// The cached context for a configured project, if any view has caused
    /// it to exist.
    pub fn context_for(
        &self,
        project: &ConfiguredProjectId,
    ) -> Option<Arc<TargetedProjectContext>> {
        self.lock_state().contexts.get(project).cloned()
    }

    /// Marks build outcome on every cached context targeting the given
    /// framework.
    pub fn mark_build_outcome(&self, framework: &TargetFramework, succeeded: bool) {
        let contexts: Vec<Arc<TargetedProjectContext>> = {
            let state = self.lock_state();
            state
                .contexts
                .values()
                .filter(|context| context.target_framework() == framework)
                .cloned()
                .collect()
        };
        for context in contexts {
            context.set_last_build_succeeded(succeeded);
        }
    }
}
