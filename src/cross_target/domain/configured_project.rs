use crate::shared::compare::fold_key;
use std::hash::{Hash, Hasher};

/// Identity of one configured project (one build-configuration dimension
/// value of the owning project). Case-insensitive, like the configuration
/// system that issues it.
#[derive(Debug, Clone, Eq)]
pub struct ConfiguredProjectId(String);

impl ConfiguredProjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for ConfiguredProjectId {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Hash for ConfiguredProjectId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        fold_key(&self.0).hash(state);
    }
}

impl std::fmt::Display for ConfiguredProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One record of the active configuration set: the configuration dimension
/// key (the framework discriminator, empty for single-targeting projects),
/// the configured project it selects, and whether it is the project's
/// currently active build configuration.
#[derive(Debug, Clone)]
pub struct ActiveConfiguredProject {
    pub configuration_key: String,
    pub project: ConfiguredProjectId,
    pub is_active: bool,
}

impl ActiveConfiguredProject {
    pub fn new(
        configuration_key: impl Into<String>,
        project: ConfiguredProjectId,
        is_active: bool,
    ) -> Self {
        Self {
            configuration_key: configuration_key.into(),
            project,
            is_active,
        }
    }
}
