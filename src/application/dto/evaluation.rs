use crate::dependency_graph::domain::{ItemSnapshot, PropertyMap, RuleDiff};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};

/// Scenario file consumed by the CLI: the project's identity and
/// configuration set, plus the stream of evaluation updates to apply.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioFile {
    pub project: ProjectSection,
    #[serde(default)]
    pub evaluations: Vec<EvaluationUpdate>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSection {
    pub path: String,
    pub display_name: String,
    pub configurations: Vec<ConfigurationSection>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationSection {
    /// Framework discriminator of this configuration; empty for
    /// single-targeting projects.
    #[serde(default)]
    pub configuration_key: String,
    /// Configured-project identity; defaults to the configuration key.
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub target_path: String,
    #[serde(default)]
    pub target_framework: Option<String>,
}

/// One per-framework evaluation diff pair.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationUpdate {
    pub target_framework: String,
    #[serde(default)]
    pub unresolved: RuleDiffDto,
    #[serde(default)]
    pub resolved: RuleDiffDto,
    /// Whether the evaluation that produced this diff came from a
    /// successful build.
    #[serde(default = "default_true")]
    pub build_succeeded: bool,
}

fn default_true() -> bool {
    true
}

/// Wire form of one rule's before/after diff. The three change sets are
/// optional; producers that ship only the snapshots get them derived.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleDiffDto {
    #[serde(default)]
    pub before: BTreeMap<String, PropertyMap>,
    #[serde(default)]
    pub after: BTreeMap<String, PropertyMap>,
    #[serde(default)]
    pub added: Option<BTreeSet<String>>,
    #[serde(default)]
    pub removed: Option<BTreeSet<String>>,
    #[serde(default)]
    pub changed: Option<BTreeSet<String>>,
}

impl RuleDiffDto {
    pub fn into_domain(self) -> RuleDiff {
        let before: ItemSnapshot = self.before.into_iter().collect();
        let after: ItemSnapshot = self.after.into_iter().collect();

        match (self.added, self.removed, self.changed) {
            (None, None, None) => RuleDiff::between(before, after),
            (added, removed, changed) => RuleDiff::new(
                before,
                after,
                added.unwrap_or_default(),
                removed.unwrap_or_default(),
                changed.unwrap_or_default(),
            ),
        }
    }
}

/// Per-framework add/remove counts reported after applying a batch.
#[derive(Debug, Clone, Default)]
pub struct ApplySummary {
    pub frameworks: BTreeMap<String, FrameworkSummary>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FrameworkSummary {
    pub added: usize,
    pub removed: usize,
}

impl ApplySummary {
    pub fn record(&mut self, framework: &str, added: usize, removed: usize) {
        let entry = self.frameworks.entry(framework.to_string()).or_default();
        entry.added += added;
        entry.removed += removed;
    }

    pub fn total_added(&self) -> usize {
        self.frameworks.values().map(|f| f.added).sum()
    }

    pub fn total_removed(&self) -> usize {
        self.frameworks.values().map(|f| f.removed).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_deserializes_from_camel_case() {
        let json = r#"{
            "project": {
                "path": "/src/App/App.proj",
                "displayName": "App",
                "configurations": [
                    {
                        "configurationKey": "net472",
                        "isActive": true,
                        "targetPath": "bin/net472/App.dll"
                    }
                ]
            },
            "evaluations": [
                {
                    "targetFramework": "net472",
                    "resolved": {
                        "after": {
                            "net472/Newtonsoft.Json": { "Type": "Package" }
                        }
                    }
                }
            ]
        }"#;

        let scenario: ScenarioFile = serde_json::from_str(json).unwrap();
        assert_eq!(scenario.project.display_name, "App");
        assert_eq!(scenario.project.configurations.len(), 1);
        assert!(scenario.project.configurations[0].is_active);
        assert_eq!(scenario.evaluations.len(), 1);
        assert!(scenario.evaluations[0].build_succeeded);
    }

    #[test]
    fn test_rule_diff_dto_derives_change_sets_when_absent() {
        let json = r#"{
            "before": { "net6.0/A": { "Version": "1.0" } },
            "after": { "net6.0/A": { "Version": "1.1" }, "net6.0/B": {} }
        }"#;
        let dto: RuleDiffDto = serde_json::from_str(json).unwrap();
        let diff = dto.into_domain();
        assert!(diff.changed.contains("net6.0/A"));
        assert!(diff.added.contains("net6.0/B"));
        assert!(diff.removed.is_empty());
    }

    #[test]
    fn test_rule_diff_dto_honors_explicit_change_sets() {
        let json = r#"{
            "after": { "net6.0/A": {} },
            "added": ["net6.0/A"],
            "removed": [],
            "changed": []
        }"#;
        let dto: RuleDiffDto = serde_json::from_str(json).unwrap();
        let diff = dto.into_domain();
        assert_eq!(diff.added.len(), 1);
        assert!(diff.changed.is_empty());
    }

    #[test]
    fn test_apply_summary_accumulates() {
        let mut summary = ApplySummary::default();
        summary.record("net472", 2, 0);
        summary.record("net472", 1, 1);
        summary.record("net6.0", 3, 0);
        assert_eq!(summary.total_added(), 6);
        assert_eq!(summary.total_removed(), 1);
        assert_eq!(summary.frameworks["net472"].added, 3);
    }
}
