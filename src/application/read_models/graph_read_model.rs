use crate::dependency_graph::domain::{
    DependencyChangeAccumulator, DependencyModel, ProviderKind, TargetFramework,
};
use crate::shared::compare::eq_ignore_case;
use std::collections::BTreeMap;

/// The aggregated node map for one target framework, keyed by model
/// identity (provider kind + case-folded original item spec).
#[derive(Debug, Clone, Default)]
pub struct FrameworkGraph {
    nodes: BTreeMap<(ProviderKind, String), DependencyModel>,
}

impl FrameworkGraph {
    pub fn nodes(&self) -> impl Iterator<Item = &DependencyModel> {
        self.nodes.values()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Top-level, visible nodes: what a tree renderer would place directly
    /// under the provider's sub-tree root.
    pub fn top_level_nodes(&self) -> impl Iterator<Item = &DependencyModel> {
        self.nodes.values().filter(|n| n.top_level && n.visible)
    }

    /// Child nodes of one model, resolved by correlating its dependency
    /// item specs against the other nodes' item specs.
    pub fn children_of<'a>(&'a self, model: &'a DependencyModel) -> Vec<&'a DependencyModel> {
        model
            .dependency_item_specs
            .iter()
            .filter_map(|spec| {
                self.nodes
                    .values()
                    .find(|candidate| eq_ignore_case(&candidate.item_spec, spec))
            })
            .collect()
    }

    pub fn find_by_caption(&self, caption: &str) -> Option<&DependencyModel> {
        self.nodes.values().find(|n| n.caption == caption)
    }

    fn apply_removed(&mut self, model: &DependencyModel) {
        self.nodes.remove(&model.identity());
    }

    fn apply_added(&mut self, model: &DependencyModel) {
        self.nodes.insert(model.identity(), model.clone());
    }
}

/// AggregatedDependencyGraph read model.
///
/// Folds the accumulator's per-framework change sets into a persistent
/// per-framework node map. Removals are applied before additions within one
/// batch, so a changed item's remove-then-add pair nets out to the new
/// record.
#[derive(Debug, Clone, Default)]
pub struct AggregatedDependencyGraph {
    by_framework: BTreeMap<TargetFramework, FrameworkGraph>,
}

impl AggregatedDependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, accumulator: &DependencyChangeAccumulator) {
        for (framework, changes) in accumulator.iter() {
            let graph = self.by_framework.entry(framework.clone()).or_default();
            for model in changes.removed() {
                graph.apply_removed(model);
            }
            for model in changes.added() {
                graph.apply_added(model);
            }
        }
    }

    pub fn framework_graph(&self, framework: &TargetFramework) -> Option<&FrameworkGraph> {
        self.by_framework.get(framework)
    }

    pub fn frameworks(&self) -> impl Iterator<Item = &TargetFramework> {
        self.by_framework.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TargetFramework, &FrameworkGraph)> {
        self.by_framework.iter()
    }

    pub fn total_node_count(&self) -> usize {
        self.by_framework.values().map(FrameworkGraph::node_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_graph::domain::PropertyMap;

    fn package(item_spec: &str, original: &str, deps: &[&str], top_level: bool) -> DependencyModel {
        DependencyModel::package(
            item_spec.to_string(),
            original.to_string(),
            original.to_string(),
            true,
            false,
            top_level,
            PropertyMap::new(),
            deps.iter().map(|d| d.to_string()).collect(),
            None,
            None,
        )
    }

    fn net60() -> TargetFramework {
        TargetFramework::new("net6.0")
    }

    #[test]
    fn test_apply_add_then_remove_round_trips() {
        let mut graph = AggregatedDependencyGraph::new();

        let mut accumulator = DependencyChangeAccumulator::new();
        accumulator.include_added(&net60(), package("net6.0/A", "A", &[], true));
        graph.apply(&accumulator);
        assert_eq!(graph.total_node_count(), 1);

        let mut accumulator = DependencyChangeAccumulator::new();
        accumulator.include_removed(&net60(), package("net6.0/A", "A", &[], true));
        graph.apply(&accumulator);
        assert_eq!(graph.total_node_count(), 0);
    }

    #[test]
    fn test_remove_then_add_in_one_batch_keeps_new_record() {
        let mut graph = AggregatedDependencyGraph::new();

        let mut accumulator = DependencyChangeAccumulator::new();
        accumulator.include_added(&net60(), package("net6.0/A", "A", &[], true));
        graph.apply(&accumulator);

        // Same identity removed and re-added with a new shape in one batch.
        let mut accumulator = DependencyChangeAccumulator::new();
        accumulator.include_removed(&net60(), package("net6.0/A", "A", &[], true));
        let mut updated = package("net6.0/A", "A", &[], true);
        updated.version = Some("2.0".to_string());
        accumulator.include_added(&net60(), updated);
        graph.apply(&accumulator);

        let framework_graph = graph.framework_graph(&net60()).unwrap();
        assert_eq!(framework_graph.node_count(), 1);
        let node = framework_graph.nodes().next().unwrap();
        assert_eq!(node.version.as_deref(), Some("2.0"));
    }

    #[test]
    fn test_top_level_nodes_exclude_hidden_and_transitive() {
        let mut graph = AggregatedDependencyGraph::new();
        let mut accumulator = DependencyChangeAccumulator::new();
        accumulator.include_added(&net60(), package("net6.0/A", "A", &[], true));
        accumulator.include_added(&net60(), package("net6.0/B", "net6.0/B", &[], false));
        let mut hidden = package("net6.0/C", "C", &[], true);
        hidden.visible = false;
        accumulator.include_added(&net60(), hidden);
        graph.apply(&accumulator);

        let framework_graph = graph.framework_graph(&net60()).unwrap();
        let top_level: Vec<_> = framework_graph.top_level_nodes().collect();
        assert_eq!(top_level.len(), 1);
        assert_eq!(top_level[0].original_item_spec, "A");
    }

    #[test]
    fn test_children_resolved_case_insensitively() {
        let mut graph = AggregatedDependencyGraph::new();
        let mut accumulator = DependencyChangeAccumulator::new();
        accumulator.include_added(
            &net60(),
            package("net6.0/Parent", "Parent", &["NET6.0/Child"], true),
        );
        accumulator.include_added(
            &net60(),
            package("net6.0/Child", "net6.0/Child", &[], false),
        );
        graph.apply(&accumulator);

        let framework_graph = graph.framework_graph(&net60()).unwrap();
        let parent = framework_graph.find_by_caption("Parent").unwrap();
        let children = framework_graph.children_of(parent);
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].item_spec, "net6.0/Child");
    }

    #[test]
    fn test_frameworks_are_isolated() {
        let mut graph = AggregatedDependencyGraph::new();
        let mut accumulator = DependencyChangeAccumulator::new();
        accumulator.include_added(&net60(), package("net6.0/A", "A", &[], true));
        accumulator.include_added(
            &TargetFramework::new("net472"),
            package("net472/A", "A", &[], true),
        );
        graph.apply(&accumulator);

        assert_eq!(graph.frameworks().count(), 2);
        let mut accumulator = DependencyChangeAccumulator::new();
        accumulator.include_removed(&net60(), package("net6.0/A", "A", &[], true));
        graph.apply(&accumulator);

        assert_eq!(graph.framework_graph(&net60()).unwrap().node_count(), 0);
        assert_eq!(
            graph
                .framework_graph(&TargetFramework::new("net472"))
                .unwrap()
                .node_count(),
            1
        );
    }
}
