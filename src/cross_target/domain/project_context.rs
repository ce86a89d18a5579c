use super::configured_project::ConfiguredProjectId;
use crate::dependency_graph::domain::TargetFramework;
use std::sync::atomic::{AtomicBool, Ordering};

/// Per-target-framework context shared by every aggregate view of the
/// owning project.
///
/// Created lazily on first observation of its configured project, cached by
/// the registry, and disposed only when no live view references it. The two
/// flags are the only state that changes after construction.
#[derive(Debug)]
pub struct TargetedProjectContext {
    configured_project: ConfiguredProjectId,
    target_framework: TargetFramework,
    target_path: String,
    display_name: String,
    last_build_succeeded: AtomicBool,
    disposed: AtomicBool,
}

impl TargetedProjectContext {
    pub fn new(
        configured_project: ConfiguredProjectId,
        target_framework: TargetFramework,
        target_path: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            configured_project,
            target_framework,
            target_path: target_path.into(),
            display_name: display_name.into(),
            // Pessimistic until the first successful evaluation lands.
            last_build_succeeded: AtomicBool::new(false),
            disposed: AtomicBool::new(false),
        }
    }

    pub fn configured_project(&self) -> &ConfiguredProjectId {
        &self.configured_project
    }

    pub fn target_framework(&self) -> &TargetFramework {
        &self.target_framework
    }

    pub fn target_path(&self) -> &str {
        &self.target_path
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn last_build_succeeded(&self) -> bool {
        self.last_build_succeeded.load(Ordering::Acquire)
    }

    pub fn set_last_build_succeeded(&self, succeeded: bool) {
        self.last_build_succeeded.store(succeeded, Ordering::Release);
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Acquire)
    }

    /// Releases this context.
    ///
    /// Disposal may need to suspend (the workspace side of a context can
    /// require marshaling onto its own execution context), so it is async
    /// and must never run while the registry lock is held.
    pub async fn dispose(&self) {
        if self.disposed.swap(true, Ordering::AcqRel) {
            return;
        }
        tracing::debug!(
            project = %self.configured_project,
            framework = %self.target_framework,
            "disposed targeted project context"
        );
        tokio::task::yield_now().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> TargetedProjectContext {
        TargetedProjectContext::new(
            ConfiguredProjectId::new("App:net472"),
            TargetFramework::with_short_name(".NETFramework,Version=v4.7.2", "net472"),
            "bin/Debug/net472/App.dll",
            "App(net472)",
        )
    }

    #[test]
    fn test_last_build_succeeded_defaults_false() {
        let ctx = context();
        assert!(!ctx.last_build_succeeded());
        ctx.set_last_build_succeeded(true);
        assert!(ctx.last_build_succeeded());
    }

    #[tokio::test]
    async fn test_dispose_is_idempotent() {
        let ctx = context();
        assert!(!ctx.is_disposed());
        ctx.dispose().await;
        assert!(ctx.is_disposed());
        ctx.dispose().await;
        assert!(ctx.is_disposed());
    }

    #[test]
    fn test_accessors() {
        let ctx = context();
        assert_eq!(ctx.display_name(), "App(net472)");
        assert_eq!(ctx.target_path(), "bin/Debug/net472/App.dll");
        assert_eq!(ctx.target_framework().short_name(), "net472");
    }
}
