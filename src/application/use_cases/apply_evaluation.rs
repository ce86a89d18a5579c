use crate::application::dto::{ApplySummary, EvaluationUpdate};
use crate::application::read_models::AggregatedDependencyGraph;
use crate::dependency_graph::domain::{DependencyChangeAccumulator, TargetFramework};
use crate::dependency_graph::services::DependencyRuleHandler;
use crate::ports::inbound::EvaluationPort;
use crate::ports::outbound::TargetFrameworkResolver;
use crate::shared::Result;
use std::sync::Arc;

/// ApplyEvaluationUseCase - feeds evaluation updates through the rule
/// handler and folds the resulting change sets into the aggregated graph.
///
/// # Type Parameters
/// * `R` - TargetFrameworkResolver implementation, shared with the handler
pub struct ApplyEvaluationUseCase<R: TargetFrameworkResolver> {
    resolver: Arc<R>,
    handler: DependencyRuleHandler<R>,
}

impl<R: TargetFrameworkResolver> ApplyEvaluationUseCase<R> {
    pub fn new(resolver: Arc<R>) -> Self {
        Self {
            handler: DependencyRuleHandler::new(Arc::clone(&resolver)),
            resolver,
        }
    }

    /// Frameworks touched by a batch, resolved through the same resolver
    /// the handler uses. Callers use this to mark build outcomes on live
    /// contexts.
    pub fn resolve_framework(&self, name: &str) -> TargetFramework {
        self.resolver
            .resolve(name)
            .unwrap_or_else(TargetFramework::empty)
    }
}

impl<R: TargetFrameworkResolver> EvaluationPort for ApplyEvaluationUseCase<R> {
    fn apply_updates(
        &self,
        updates: &[EvaluationUpdate],
        graph: &mut AggregatedDependencyGraph,
    ) -> Result<ApplySummary> {
        let mut summary = ApplySummary::default();

        for update in updates {
            let framework = self.resolve_framework(&update.target_framework);

            let unresolved = update.unresolved.clone().into_domain();
            let resolved = update.resolved.clone().into_domain();

            let mut accumulator = DependencyChangeAccumulator::new();
            self.handler
                .handle_changes(&unresolved, &resolved, &framework, &mut accumulator)?;

            for (framework, changes) in accumulator.iter() {
                summary.record(
                    framework.short_name(),
                    changes.added().len(),
                    changes.removed().len(),
                );
            }
            graph.apply(&accumulator);
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::resolver::MonikerFrameworkResolver;
    use crate::application::dto::RuleDiffDto;
    use crate::dependency_graph::domain::PropertyMap;
    use std::collections::BTreeMap;

    fn update(framework: &str, resolved_after: &[(&str, &[(&str, &str)])]) -> EvaluationUpdate {
        let after: BTreeMap<String, PropertyMap> = resolved_after
            .iter()
            .map(|(spec, props)| {
                (
                    spec.to_string(),
                    props
                        .iter()
                        .map(|(k, v)| (k.to_string(), v.to_string()))
                        .collect(),
                )
            })
            .collect();
        EvaluationUpdate {
            target_framework: framework.to_string(),
            unresolved: RuleDiffDto::default(),
            resolved: RuleDiffDto {
                after,
                ..RuleDiffDto::default()
            },
            build_succeeded: true,
        }
    }

    #[test]
    fn test_apply_updates_folds_into_graph() {
        let use_case = ApplyEvaluationUseCase::new(Arc::new(MonikerFrameworkResolver::new()));
        let mut graph = AggregatedDependencyGraph::new();

        let updates = vec![
            update(
                "net6.0",
                &[("net6.0/Newtonsoft.Json", &[("Type", "Package")])],
            ),
            update("net472", &[("net472/System.Memory", &[("Type", "Package")])]),
        ];

        let summary = use_case.apply_updates(&updates, &mut graph).unwrap();
        assert_eq!(summary.total_added(), 2);
        assert_eq!(summary.total_removed(), 0);
        assert_eq!(graph.total_node_count(), 2);
        assert_eq!(graph.frameworks().count(), 2);
    }

    #[test]
    fn test_unresolvable_framework_is_tolerated() {
        let use_case = ApplyEvaluationUseCase::new(Arc::new(MonikerFrameworkResolver::new()));
        let mut graph = AggregatedDependencyGraph::new();

        let updates = vec![update(
            "not-a-framework",
            &[("x/Item", &[("Type", "Package")])],
        )];

        let summary = use_case.apply_updates(&updates, &mut graph).unwrap();
        assert_eq!(summary.total_added(), 0);
        assert_eq!(graph.total_node_count(), 0);
    }

    #[test]
    fn test_second_batch_replaces_changed_records() {
        let use_case = ApplyEvaluationUseCase::new(Arc::new(MonikerFrameworkResolver::new()));
        let mut graph = AggregatedDependencyGraph::new();

        use_case
            .apply_updates(
                &[update(
                    "net6.0",
                    &[(
                        "net6.0/PkgA",
                        &[("Type", "Package"), ("Name", "PkgA"), ("Version", "1.0")],
                    )],
                )],
                &mut graph,
            )
            .unwrap();

        // Same item changes shape: diff carries it in before and after.
        let mut second = update(
            "net6.0",
            &[(
                "net6.0/PkgA",
                &[("Type", "Package"), ("Name", "PkgA"), ("Version", "2.0")],
            )],
        );
        second.resolved.before = [(
            "net6.0/PkgA".to_string(),
            [
                ("Type".to_string(), "Package".to_string()),
                ("Name".to_string(), "PkgA".to_string()),
                ("Version".to_string(), "1.0".to_string()),
            ]
            .into_iter()
            .collect(),
        )]
        .into_iter()
        .collect();

        use_case.apply_updates(&[second], &mut graph).unwrap();

        let framework = use_case.resolve_framework("net6.0");
        let framework_graph = graph.framework_graph(&framework).unwrap();
        assert_eq!(framework_graph.node_count(), 1);
        assert_eq!(
            framework_graph.nodes().next().unwrap().version.as_deref(),
            Some("2.0")
        );
    }
}
