use super::item_metadata::PropertyMap;
use std::collections::{BTreeMap, BTreeSet};

/// One rule's item group at a single point in time: item name to property
/// bag. BTree ordering keeps diff processing deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemSnapshot {
    items: BTreeMap<String, PropertyMap>,
}

impl ItemSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, item_spec: impl Into<String>, properties: PropertyMap) {
        self.items.insert(item_spec.into(), properties);
    }

    pub fn get(&self, item_spec: &str) -> Option<&PropertyMap> {
        self.items.get(item_spec)
    }

    pub fn contains(&self, item_spec: &str) -> bool {
        self.items.contains_key(item_spec)
    }

    pub fn item_specs(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyMap)> {
        self.items.iter().map(|(spec, properties)| (spec.as_str(), properties))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<(String, PropertyMap)> for ItemSnapshot {
    fn from_iter<I: IntoIterator<Item = (String, PropertyMap)>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

/// A before/after diff of one rule's item group, as delivered by the
/// evaluation diff source: the two snapshots plus the added/removed/changed
/// item-name sets.
#[derive(Debug, Clone, Default)]
pub struct RuleDiff {
    pub before: ItemSnapshot,
    pub after: ItemSnapshot,
    pub added: BTreeSet<String>,
    pub removed: BTreeSet<String>,
    pub changed: BTreeSet<String>,
}

impl RuleDiff {
    /// Wraps source-provided snapshots and change sets without recomputing
    /// them.
    pub fn new(
        before: ItemSnapshot,
        after: ItemSnapshot,
        added: BTreeSet<String>,
        removed: BTreeSet<String>,
        changed: BTreeSet<String>,
    ) -> Self {
        Self {
            before,
            after,
            added,
            removed,
            changed,
        }
    }

    /// Derives the added/removed/changed sets from two snapshots, for
    /// producers that only ship the snapshots.
    pub fn between(before: ItemSnapshot, after: ItemSnapshot) -> Self {
        let mut added = BTreeSet::new();
        let mut removed = BTreeSet::new();
        let mut changed = BTreeSet::new();

        for (spec, new_properties) in after.iter() {
            match before.get(spec) {
                None => {
                    added.insert(spec.to_string());
                }
                Some(old_properties) if old_properties != new_properties => {
                    changed.insert(spec.to_string());
                }
                Some(_) => {}
            }
        }
        for spec in before.item_specs() {
            if !after.contains(spec) {
                removed.insert(spec.to_string());
            }
        }

        Self {
            before,
            after,
            added,
            removed,
            changed,
        }
    }

    pub fn any_changes(&self) -> bool {
        !self.added.is_empty() || !self.removed.is_empty() || !self.changed.is_empty()
    }
}
