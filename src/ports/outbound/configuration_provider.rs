use crate::cross_target::domain::configured_project::{
    ActiveConfiguredProject, ConfiguredProjectId,
};
use crate::shared::Result;
use async_trait::async_trait;

/// General configuration properties read for one configured project.
#[derive(Debug, Clone, Default)]
pub struct ConfigurationGeneralProperties {
    /// Build output path of this configuration.
    pub target_path: String,
    /// Framework name property, consulted when the configuration key does
    /// not name the framework.
    pub target_framework: Option<String>,
}

/// ActiveConfigurationProvider port for querying the project's active
/// build configurations.
///
/// # Async Support
/// Both reads are asynchronous property queries against an external
/// project system. Implementations must be `Send + Sync` to support
/// concurrent access.
#[async_trait]
pub trait ActiveConfigurationProvider: Send + Sync {
    /// Returns the currently active set of configured projects, one per
    /// configuration dimension value, with exactly one marked active.
    ///
    /// # Errors
    /// Propagates any failure of the underlying configuration query; the
    /// caller registers nothing on failure.
    async fn active_configured_projects(&self) -> Result<Vec<ActiveConfiguredProject>>;

    /// Reads the general properties of one configured project.
    async fn configuration_properties(
        &self,
        project: &ConfiguredProjectId,
    ) -> Result<ConfigurationGeneralProperties>;
}
