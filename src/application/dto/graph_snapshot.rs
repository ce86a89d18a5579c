use crate::application::read_models::AggregatedDependencyGraph;
use crate::dependency_graph::domain::DependencyModel;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Serializable snapshot of the aggregated graph, the CLI's JSON output.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphSnapshot {
    pub metadata: SnapshotMetadata,
    pub frameworks: Vec<FrameworkSnapshot>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotMetadata {
    pub tool_name: String,
    pub tool_version: String,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkSnapshot {
    pub target_framework: String,
    pub full_name: String,
    pub nodes: Vec<NodeSnapshot>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeSnapshot {
    pub provider: String,
    pub item_spec: String,
    pub original_item_spec: String,
    pub caption: String,
    pub resolved: bool,
    pub top_level: bool,
    pub visible: bool,
    pub implicit: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic_code: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
}

impl From<&DependencyModel> for NodeSnapshot {
    fn from(model: &DependencyModel) -> Self {
        Self {
            provider: model.provider.id().to_string(),
            item_spec: model.item_spec.clone(),
            original_item_spec: model.original_item_spec.clone(),
            caption: model.caption.clone(),
            resolved: model.resolved,
            top_level: model.top_level,
            visible: model.visible,
            implicit: model.implicit,
            version: model.version.clone(),
            severity: model.severity.map(|s| s.to_string()),
            diagnostic_code: model.diagnostic_code.clone(),
            dependencies: model.dependency_item_specs.clone(),
        }
    }
}

impl GraphSnapshot {
    pub fn from_graph(graph: &AggregatedDependencyGraph, generated_at: DateTime<Utc>) -> Self {
        Self {
            metadata: SnapshotMetadata {
                tool_name: env!("CARGO_PKG_NAME").to_string(),
                tool_version: env!("CARGO_PKG_VERSION").to_string(),
                generated_at,
            },
            frameworks: graph
                .iter()
                .map(|(framework, framework_graph)| FrameworkSnapshot {
                    target_framework: framework.short_name().to_string(),
                    full_name: framework.full_name().to_string(),
                    nodes: framework_graph.nodes().map(NodeSnapshot::from).collect(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_graph::domain::{
        DependencyChangeAccumulator, PropertyMap, TargetFramework,
    };

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let mut graph = AggregatedDependencyGraph::new();
        let mut accumulator = DependencyChangeAccumulator::new();
        accumulator.include_added(
            &TargetFramework::with_short_name(".NETCoreApp,Version=v6.0", "net6.0"),
            DependencyModel::package(
                "net6.0/Newtonsoft.Json".to_string(),
                "Newtonsoft.Json".to_string(),
                "Newtonsoft.Json".to_string(),
                true,
                false,
                true,
                PropertyMap::new(),
                vec![],
                Some("13.0.3".to_string()),
                None,
            ),
        );
        graph.apply(&accumulator);

        let snapshot = GraphSnapshot::from_graph(&graph, Utc::now());
        let json = serde_json::to_string_pretty(&snapshot).unwrap();
        assert!(json.contains("\"targetFramework\": \"net6.0\""));
        assert!(json.contains("\"originalItemSpec\": \"Newtonsoft.Json\""));
        assert!(json.contains("\"topLevel\": true"));
        assert!(json.contains("\"generatedAt\""));
        // Empty optionals are omitted from the wire form.
        assert!(!json.contains("\"severity\""));
    }
}
