use crate::dependency_graph::domain::{
    DependencyItemMetadata, DependencyModel, DependencyType, DiagnosticSeverity, PropertyMap,
    ProviderKind, TargetFramework,
};
use crate::dependency_graph::domain::item_metadata::{PROP_RESOLVED, PROP_TYPE};
use crate::ports::outbound::TargetFrameworkResolver;
use crate::shared::compare::CaseInsensitiveSet;
use crate::shared::Result;

/// DependencyModelFactory service for classifying raw evaluation items.
///
/// Pure classification logic: given one item's spec and property bag,
/// produce the typed dependency record for it, or nothing when the item is
/// filtered out by the discard rules. No I/O.
pub struct DependencyModelFactory;

impl DependencyModelFactory {
    /// Classifies one item into a dependency model.
    ///
    /// # Arguments
    /// * `item_spec` - raw item identifier
    /// * `properties` - the property snapshot to classify from (before or
    ///   after, per the caller's diff walk)
    /// * `resolved_rule` - whether the item came from the resolved rule
    /// * `target_framework` - the framework whose diff is being processed
    /// * `resolver` - resolves an item's target segment for the
    ///   framework-equality guard
    /// * `unresolved_after` - item specs present in the unresolved rule's
    ///   "after" snapshot, for top-level inference
    ///
    /// # Returns
    /// `Ok(None)` when the item is discarded: a bare target marker row, or a
    /// resolved item whose target segment does not resolve to the framework
    /// being processed.
    ///
    /// # Errors
    /// An empty item spec fails the call (contract violation by the
    /// evaluation source).
    pub fn dependency_model_for(
        item_spec: &str,
        properties: &PropertyMap,
        resolved_rule: bool,
        target_framework: &TargetFramework,
        resolver: &dyn TargetFrameworkResolver,
        unresolved_after: &CaseInsensitiveSet,
    ) -> Result<Option<DependencyModel>> {
        let metadata = if resolved_rule {
            DependencyItemMetadata::parse(item_spec, properties)?
        } else {
            // Unresolved package-reference rows carry no explicit type or
            // resolved annotation in their raw form; force both before
            // parsing.
            let mut synthetic = properties.clone();
            synthetic.insert(PROP_RESOLVED.to_string(), "false".to_string());
            synthetic.insert(PROP_TYPE.to_string(), "Package".to_string());
            DependencyItemMetadata::parse(item_spec, &synthetic)?
        };

        // The discard guards apply to resolved rows only: resolved item
        // groups interleave real dependencies with bare target marker rows
        // and rows belonging to sibling frameworks, while unresolved rows
        // are the author's declared references, conventionally bare names.
        if resolved_rule {
            match resolver.resolve(&metadata.target) {
                Some(item_framework) if &item_framework == target_framework => {}
                _ => {
                    tracing::debug!(
                        item = item_spec,
                        framework = %target_framework,
                        "discarding item from another target framework"
                    );
                    return Ok(None);
                }
            }

            if metadata.is_target {
                return Ok(None);
            }
        }

        Ok(Some(Self::build_model(metadata, properties, unresolved_after)))
    }

    fn build_model(
        metadata: DependencyItemMetadata,
        properties: &PropertyMap,
        unresolved_after: &CaseInsensitiveSet,
    ) -> DependencyModel {
        // An unresolved item is an author-declared reference and therefore
        // top-level; a resolved one is top-level only when the toolchain
        // declared it implicitly or its name appears among the declared
        // (unresolved) references.
        let top_level = !metadata.resolved
            || metadata.is_implicitly_defined
            || unresolved_after.contains(&metadata.name);

        let original_item_spec = if metadata.resolved && top_level {
            metadata.name.clone()
        } else {
            metadata.item_spec.clone()
        };

        match metadata.dependency_type {
            DependencyType::Package => DependencyModel::package(
                metadata.item_spec,
                original_item_spec,
                metadata.name,
                metadata.resolved,
                metadata.is_implicitly_defined,
                top_level,
                properties.clone(),
                metadata.dependencies_item_specs,
                metadata.version,
                metadata.path,
            ),
            DependencyType::Assembly | DependencyType::FrameworkAssembly => {
                DependencyModel::package_assembly(
                    metadata.item_spec,
                    metadata.name,
                    metadata.resolved,
                    properties.clone(),
                    metadata.dependencies_item_specs,
                    metadata.path,
                )
            }
            DependencyType::AnalyzerAssembly => DependencyModel::package_analyzer_assembly(
                metadata.item_spec,
                metadata.name,
                metadata.resolved,
                properties.clone(),
                metadata.dependencies_item_specs,
                metadata.path,
            ),
            DependencyType::Diagnostic => DependencyModel::diagnostic(
                metadata.item_spec,
                metadata.name,
                metadata.severity.unwrap_or(DiagnosticSeverity::Warning),
                metadata.diagnostic_code,
                metadata.resolved,
                properties.clone(),
            ),
            DependencyType::Unknown | DependencyType::Target => DependencyModel::unknown(
                metadata.item_spec,
                metadata.name,
                metadata.resolved,
                properties.clone(),
                metadata.dependencies_item_specs,
            ),
        }
    }

    /// Produces the synthetic grouping node for one provider kind.
    pub fn create_root_model(provider: ProviderKind) -> DependencyModel {
        DependencyModel::sub_tree_root(provider)
    }
}
