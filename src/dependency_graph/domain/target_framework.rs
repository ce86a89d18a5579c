use crate::shared::compare::fold_key;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// TargetFramework value object identifying one build configuration's
/// compilation target.
///
/// Identity is the canonical full name, compared ordinally and ignoring
/// ASCII case. The short name is carried for display (e.g. the
/// cross-targeting display-name suffix) and never participates in equality.
#[derive(Debug, Clone)]
pub struct TargetFramework {
    full_name: String,
    short_name: String,
}

impl TargetFramework {
    /// Creates a framework whose full and short names differ
    /// (e.g. `.NETFramework,Version=v4.7.2` / `net472`).
    pub fn with_short_name(full_name: impl Into<String>, short_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            short_name: short_name.into(),
        }
    }

    /// Creates a framework from a single canonical name, used when no
    /// short/full distinction is known.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            short_name: name.clone(),
            full_name: name,
        }
    }

    /// The distinguished sentinel meaning "no framework resolved yet".
    pub fn empty() -> Self {
        Self {
            full_name: String::new(),
            short_name: String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.full_name.is_empty()
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn short_name(&self) -> &str {
        &self.short_name
    }
}

impl PartialEq for TargetFramework {
    fn eq(&self, other: &Self) -> bool {
        self.full_name.eq_ignore_ascii_case(&other.full_name)
    }
}

impl Eq for TargetFramework {}

impl Hash for TargetFramework {
    fn hash<H: Hasher>(&self, state: &mut H) {
        fold_key(&self.full_name).hash(state);
    }
}

impl Ord for TargetFramework {
    fn cmp(&self, other: &Self) -> Ordering {
        fold_key(&self.full_name).cmp(&fold_key(&other.full_name))
    }
}

impl PartialOrd for TargetFramework {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for TargetFramework {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name)
    }
}
