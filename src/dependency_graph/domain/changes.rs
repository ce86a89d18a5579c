use super::dependency_model::DependencyModel;
use super::target_framework::TargetFramework;
use std::collections::BTreeMap;

/// The add/remove events accumulated for one target framework during one
/// diff application.
///
/// Both lists are de-duplicated by model identity (provider kind plus
/// case-folded original item spec); the last record for an identity wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DependencyChanges {
    added: Vec<DependencyModel>,
    removed: Vec<DependencyModel>,
}

impl DependencyChanges {
    pub fn added(&self) -> &[DependencyModel] {
        &self.added
    }

    pub fn removed(&self) -> &[DependencyModel] {
        &self.removed
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }

    fn include(list: &mut Vec<DependencyModel>, model: DependencyModel) {
        let identity = model.identity();
        list.retain(|existing| existing.identity() != identity);
        list.push(model);
    }
}

/// Per-target-framework accumulator the rule handler emits into.
///
/// This is the surface the (external) tree-rendering layer consumes: one
/// `DependencyChanges` batch per framework touched by the diff application.
#[derive(Debug, Clone, Default)]
pub struct DependencyChangeAccumulator {
    by_framework: BTreeMap<TargetFramework, DependencyChanges>,
}

impl DependencyChangeAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn include_added(&mut self, framework: &TargetFramework, model: DependencyModel) {
        let changes = self.by_framework.entry(framework.clone()).or_default();
        DependencyChanges::include(&mut changes.added, model);
    }

    pub fn include_removed(&mut self, framework: &TargetFramework, model: DependencyModel) {
        let changes = self.by_framework.entry(framework.clone()).or_default();
        DependencyChanges::include(&mut changes.removed, model);
    }

    pub fn changes_for(&self, framework: &TargetFramework) -> Option<&DependencyChanges> {
        self.by_framework.get(framework)
    }

    pub fn frameworks(&self) -> impl Iterator<Item = &TargetFramework> {
        self.by_framework.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TargetFramework, &DependencyChanges)> {
        self.by_framework.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.by_framework.values().all(DependencyChanges::is_empty)
    }

    /// Counts an added record matching a predicate, across all frameworks.
    pub fn count_added(&self, predicate: impl Fn(&DependencyModel) -> bool) -> usize {
        self.by_framework
            .values()
            .flat_map(|changes| changes.added.iter())
            .filter(|model| predicate(model))
            .count()
    }
}
