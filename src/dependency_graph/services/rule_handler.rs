use super::model_factory::DependencyModelFactory;
use crate::dependency_graph::domain::{
    DependencyChangeAccumulator, RuleDiff, TargetFramework,
};
use crate::ports::outbound::TargetFrameworkResolver;
use crate::shared::compare::CaseInsensitiveSet;
use crate::shared::Result;
use std::sync::Arc;

/// DependencyRuleHandler service.
///
/// Consumes the before/after diffs of the unresolved and resolved dependency
/// rules for one target framework, correlates them, and emits typed
/// add/remove events into the per-framework accumulator.
pub struct DependencyRuleHandler<R: TargetFrameworkResolver> {
    resolver: Arc<R>,
}

impl<R: TargetFrameworkResolver> DependencyRuleHandler<R> {
    pub fn new(resolver: Arc<R>) -> Self {
        Self { resolver }
    }

    /// Applies one framework's rule diffs.
    ///
    /// An empty-sentinel `target_framework` makes the call a silent no-op:
    /// evaluations can arrive before the framework is resolvable, and those
    /// diffs are tolerated rather than rejected.
    ///
    /// # Errors
    /// Fails on a malformed item (empty item spec) with nothing further
    /// emitted for this call.
    pub fn handle_changes(
        &self,
        unresolved_diff: &RuleDiff,
        resolved_diff: &RuleDiff,
        target_framework: &TargetFramework,
        accumulator: &mut DependencyChangeAccumulator,
    ) -> Result<()> {
        if target_framework.is_empty() {
            tracing::debug!("skipping rule diffs with no resolved target framework");
            return Ok(());
        }

        // The resolved pass infers top-level status by correlating against
        // every item spec present in the unresolved rule's "after" snapshot.
        let unresolved_after: CaseInsensitiveSet =
            unresolved_diff.after.item_specs().collect();

        self.process_rule(
            unresolved_diff,
            false,
            target_framework,
            &unresolved_after,
            accumulator,
        )?;
        self.process_rule(
            resolved_diff,
            true,
            target_framework,
            &unresolved_after,
            accumulator,
        )?;

        Ok(())
    }

    fn process_rule(
        &self,
        diff: &RuleDiff,
        resolved_rule: bool,
        target_framework: &TargetFramework,
        unresolved_after: &CaseInsensitiveSet,
        accumulator: &mut DependencyChangeAccumulator,
    ) -> Result<()> {
        for item_spec in &diff.removed {
            if let Some(properties) = diff.before.get(item_spec) {
                if let Some(model) = DependencyModelFactory::dependency_model_for(
                    item_spec,
                    properties,
                    resolved_rule,
                    target_framework,
                    self.resolver.as_ref(),
                    unresolved_after,
                )? {
                    accumulator.include_removed(target_framework, model);
                }
            }
        }

        // Changed items are modeled as remove-then-add, never as an in-place
        // update. The removal half classifies the BEFORE snapshot and the
        // addition half the AFTER snapshot, each independently subject to
        // the discard rules, so an item migrating between frameworks emits
        // exactly the half that touches this framework's graph.
        for item_spec in &diff.changed {
            if let Some(properties) = diff.before.get(item_spec) {
                if let Some(model) = DependencyModelFactory::dependency_model_for(
                    item_spec,
                    properties,
                    resolved_rule,
                    target_framework,
                    self.resolver.as_ref(),
                    unresolved_after,
                )? {
                    accumulator.include_removed(target_framework, model);
                }
            }
            if let Some(properties) = diff.after.get(item_spec) {
                if let Some(model) = DependencyModelFactory::dependency_model_for(
                    item_spec,
                    properties,
                    resolved_rule,
                    target_framework,
                    self.resolver.as_ref(),
                    unresolved_after,
                )? {
                    accumulator.include_added(target_framework, model);
                }
            }
        }

        for item_spec in &diff.added {
            if let Some(properties) = diff.after.get(item_spec) {
                if let Some(model) = DependencyModelFactory::dependency_model_for(
                    item_spec,
                    properties,
                    resolved_rule,
                    target_framework,
                    self.resolver.as_ref(),
                    unresolved_after,
                )? {
                    accumulator.include_added(target_framework, model);
                }
            }
        }

        Ok(())
    }
}
