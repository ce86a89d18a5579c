use crate::cross_target::domain::configured_project::{
    ActiveConfiguredProject, ConfiguredProjectId,
};
use crate::ports::outbound::{ActiveConfigurationProvider, ConfigurationGeneralProperties};
use crate::shared::error::CrossDepsError;
use crate::shared::Result;
use async_trait::async_trait;
use std::collections::HashMap;

/// InMemoryConfigurationProvider serves a fixed configuration set.
///
/// Used by the CLI (populated from the scenario file's project section) and
/// by tests. Real hosts implement `ActiveConfigurationProvider` against
/// their own project system.
#[derive(Default)]
pub struct InMemoryConfigurationProvider {
    projects: Vec<ActiveConfiguredProject>,
    properties: HashMap<ConfiguredProjectId, ConfigurationGeneralProperties>,
}

impl InMemoryConfigurationProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one configured project with its configuration key, active
    /// flag, and general properties.
    pub fn with_project(
        mut self,
        configuration_key: &str,
        project: &str,
        is_active: bool,
        target_path: &str,
        target_framework: Option<&str>,
    ) -> Self {
        let id = ConfiguredProjectId::new(project);
        self.projects.push(ActiveConfiguredProject::new(
            configuration_key,
            id.clone(),
            is_active,
        ));
        self.properties.insert(
            id,
            ConfigurationGeneralProperties {
                target_path: target_path.to_string(),
                target_framework: target_framework.map(str::to_string),
            },
        );
        self
    }
}

#[async_trait]
impl ActiveConfigurationProvider for InMemoryConfigurationProvider {
    async fn active_configured_projects(&self) -> Result<Vec<ActiveConfiguredProject>> {
        Ok(self.projects.clone())
    }

    async fn configuration_properties(
        &self,
        project: &ConfiguredProjectId,
    ) -> Result<ConfigurationGeneralProperties> {
        self.properties
            .get(project)
            .cloned()
            .ok_or_else(|| {
                CrossDepsError::MissingConfiguration {
                    project: project.to_string(),
                }
                .into()
            })
    }
}
