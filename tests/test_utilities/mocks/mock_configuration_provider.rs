use async_trait::async_trait;
use crossdeps::cross_target::domain::configured_project::ActiveConfiguredProject;
use crossdeps::ports::outbound::ConfigurationGeneralProperties;
use crossdeps::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock ActiveConfigurationProvider for testing
pub struct MockConfigurationProvider {
    projects: Vec<ActiveConfiguredProject>,
    properties: HashMap<String, ConfigurationGeneralProperties>,
    should_fail: bool,
    query_count: AtomicUsize,
}

impl MockConfigurationProvider {
    pub fn new() -> Self {
        Self {
            projects: Vec::new(),
            properties: HashMap::new(),
            should_fail: false,
            query_count: AtomicUsize::new(0),
        }
    }

    pub fn with_failure() -> Self {
        Self {
            projects: Vec::new(),
            properties: HashMap::new(),
            should_fail: true,
            query_count: AtomicUsize::new(0),
        }
    }

    pub fn with_project(
        mut self,
        configuration_key: &str,
        project: &str,
        is_active: bool,
        target_path: &str,
        target_framework: Option<&str>,
    ) -> Self {
        self.projects.push(ActiveConfiguredProject::new(
            configuration_key,
            ConfiguredProjectId::new(project),
            is_active,
        ));
        self.properties.insert(
            project.to_ascii_lowercase(),
            ConfigurationGeneralProperties {
                target_path: target_path.to_string(),
                target_framework: target_framework.map(str::to_string),
            },
        );
        self
    }

    pub fn query_count(&self) -> usize {
        self.query_count.load(Ordering::SeqCst)
    }
}

impl Default for MockConfigurationProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ActiveConfigurationProvider for MockConfigurationProvider {
    async fn active_configured_projects(&self) -> Result<Vec<ActiveConfiguredProject>> {
        self.query_count.fetch_add(1, Ordering::SeqCst);
        if self.should_fail {
            anyhow::bail!("Mock configuration provider failure");
        }
        Ok(self.projects.clone())
    }

    async fn configuration_properties(
        &self,
        project: &ConfiguredProjectId,
    ) -> Result<ConfigurationGeneralProperties> {
        if self.should_fail {
            anyhow::bail!("Mock configuration provider failure");
        }
        self.properties
            .get(&project.as_str().to_ascii_lowercase())
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no properties registered for '{}'", project))
    }
}
