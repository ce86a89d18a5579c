use super::item_metadata::{DiagnosticSeverity, PropertyMap};
use crate::shared::compare::fold_key;

/// Provider kind tag distinguishing the typed dependency record variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProviderKind {
    Package,
    PackageAssembly,
    PackageAnalyzerAssembly,
    PackageUnknown,
    Diagnostic,
    Project,
    SubTreeRoot,
}

impl ProviderKind {
    /// Stable identifier used for grouping and wire output.
    pub fn id(&self) -> &'static str {
        match self {
            ProviderKind::Package => "package",
            ProviderKind::PackageAssembly => "package-assembly",
            ProviderKind::PackageAnalyzerAssembly => "package-analyzer-assembly",
            ProviderKind::PackageUnknown => "package-unknown",
            ProviderKind::Diagnostic => "diagnostic",
            ProviderKind::Project => "project",
            ProviderKind::SubTreeRoot => "sub-tree-root",
        }
    }

    /// Caption of the synthetic grouping node for this provider kind.
    pub fn group_caption(&self) -> &'static str {
        match self {
            ProviderKind::Package
            | ProviderKind::PackageAssembly
            | ProviderKind::PackageAnalyzerAssembly
            | ProviderKind::PackageUnknown => "Packages",
            ProviderKind::Diagnostic => "Diagnostics",
            ProviderKind::Project => "Projects",
            ProviderKind::SubTreeRoot => "Dependencies",
        }
    }
}

/// Capability flags carried by every dependency record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependencyFlags {
    pub supports_remove: bool,
    pub supports_hierarchy: bool,
    pub supports_rule_properties: bool,
}

impl DependencyFlags {
    /// Top-level package references: removable, expandable, rule-backed.
    pub const PACKAGE: Self = Self {
        supports_remove: true,
        supports_hierarchy: true,
        supports_rule_properties: true,
    };

    /// Assemblies and analyzers materialized under a package: expandable only.
    pub const PACKAGE_COMPONENT: Self = Self {
        supports_remove: false,
        supports_hierarchy: true,
        supports_rule_properties: false,
    };

    /// Diagnostics: leaf markers with no capabilities.
    pub const DIAGNOSTIC: Self = Self {
        supports_remove: false,
        supports_hierarchy: false,
        supports_rule_properties: false,
    };

    /// Synthetic grouping roots support neither rule properties nor removal.
    pub const SUB_TREE_ROOT: Self = Self {
        supports_remove: false,
        supports_hierarchy: true,
        supports_rule_properties: false,
    };
}

/// Glyph names for a node in its four display states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSet {
    pub icon: &'static str,
    pub expanded_icon: &'static str,
    pub unresolved_icon: &'static str,
    pub unresolved_expanded_icon: &'static str,
}

impl IconSet {
    pub const PACKAGE: Self = Self {
        icon: "package",
        expanded_icon: "package-open",
        unresolved_icon: "package-pending",
        unresolved_expanded_icon: "package-pending-open",
    };

    pub const ASSEMBLY: Self = Self {
        icon: "assembly",
        expanded_icon: "assembly",
        unresolved_icon: "assembly-pending",
        unresolved_expanded_icon: "assembly-pending",
    };

    pub const ANALYZER: Self = Self {
        icon: "analyzer",
        expanded_icon: "analyzer",
        unresolved_icon: "analyzer-pending",
        unresolved_expanded_icon: "analyzer-pending",
    };

    pub const DIAGNOSTIC_WARNING: Self = Self {
        icon: "warning",
        expanded_icon: "warning",
        unresolved_icon: "warning",
        unresolved_expanded_icon: "warning",
    };

    pub const DIAGNOSTIC_ERROR: Self = Self {
        icon: "error",
        expanded_icon: "error",
        unresolved_icon: "error",
        unresolved_expanded_icon: "error",
    };

    pub const FOLDER: Self = Self {
        icon: "folder-closed",
        expanded_icon: "folder-open",
        unresolved_icon: "folder-closed",
        unresolved_expanded_icon: "folder-open",
    };
}

/// One classified dependency record.
///
/// Instances are created fresh per diff application and are immutable
/// value-like records: the accumulator and read model consume them as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct DependencyModel {
    pub provider: ProviderKind,
    /// Opaque correlation key within one framework's diff stream.
    pub item_spec: String,
    /// Display/grouping key. For top-level packages this is the bare package
    /// name rather than the `Target/name` form.
    pub original_item_spec: String,
    pub caption: String,
    pub flags: DependencyFlags,
    pub resolved: bool,
    pub implicit: bool,
    pub top_level: bool,
    pub visible: bool,
    pub icon: IconSet,
    pub properties: PropertyMap,
    /// Item specs this node depends on (edges in the aggregate graph).
    pub dependency_item_specs: Vec<String>,
    pub version: Option<String>,
    pub path: Option<String>,
    pub severity: Option<DiagnosticSeverity>,
    pub diagnostic_code: Option<String>,
}

impl DependencyModel {
    /// Grouping/removal identity: provider kind plus the case-folded
    /// original item spec.
    pub fn identity(&self) -> (ProviderKind, String) {
        (self.provider, fold_key(&self.original_item_spec))
    }

    pub fn package(
        item_spec: String,
        original_item_spec: String,
        name: String,
        resolved: bool,
        implicit: bool,
        top_level: bool,
        properties: PropertyMap,
        dependency_item_specs: Vec<String>,
        version: Option<String>,
        path: Option<String>,
    ) -> Self {
        Self {
            provider: ProviderKind::Package,
            item_spec,
            original_item_spec,
            caption: match &version {
                Some(version) if resolved => format!("{} ({})", name, version),
                _ => name,
            },
            flags: DependencyFlags::PACKAGE,
            resolved,
            implicit,
            top_level,
            // Implicit packages exist in the graph but are hidden from
            // top-level display.
            visible: !implicit,
            icon: IconSet::PACKAGE,
            properties,
            dependency_item_specs,
            version,
            path,
            severity: None,
            diagnostic_code: None,
        }
    }

    pub fn package_assembly(
        item_spec: String,
        name: String,
        resolved: bool,
        properties: PropertyMap,
        dependency_item_specs: Vec<String>,
        path: Option<String>,
    ) -> Self {
        Self {
            provider: ProviderKind::PackageAssembly,
            original_item_spec: item_spec.clone(),
            item_spec,
            caption: name,
            flags: DependencyFlags::PACKAGE_COMPONENT,
            resolved,
            implicit: false,
            top_level: false,
            visible: true,
            icon: IconSet::ASSEMBLY,
            properties,
            dependency_item_specs,
            version: None,
            path,
            severity: None,
            diagnostic_code: None,
        }
    }

    pub fn package_analyzer_assembly(
        item_spec: String,
        name: String,
        resolved: bool,
        properties: PropertyMap,
        dependency_item_specs: Vec<String>,
        path: Option<String>,
    ) -> Self {
        Self {
            provider: ProviderKind::PackageAnalyzerAssembly,
            original_item_spec: item_spec.clone(),
            item_spec,
            caption: name,
            flags: DependencyFlags::PACKAGE_COMPONENT,
            resolved,
            implicit: false,
            top_level: false,
            visible: true,
            icon: IconSet::ANALYZER,
            properties,
            dependency_item_specs,
            version: None,
            path,
            severity: None,
            diagnostic_code: None,
        }
    }

    pub fn diagnostic(
        item_spec: String,
        message: String,
        severity: DiagnosticSeverity,
        diagnostic_code: Option<String>,
        resolved: bool,
        properties: PropertyMap,
    ) -> Self {
        Self {
            provider: ProviderKind::Diagnostic,
            original_item_spec: item_spec.clone(),
            item_spec,
            caption: message,
            flags: DependencyFlags::DIAGNOSTIC,
            resolved,
            implicit: false,
            top_level: false,
            // Diagnostics are always shown regardless of resolved/implicit
            // status.
            visible: true,
            icon: match severity {
                DiagnosticSeverity::Error => IconSet::DIAGNOSTIC_ERROR,
                _ => IconSet::DIAGNOSTIC_WARNING,
            },
            properties,
            dependency_item_specs: Vec::new(),
            version: None,
            path: None,
            severity: Some(severity),
            diagnostic_code,
        }
    }

    pub fn unknown(
        item_spec: String,
        name: String,
        resolved: bool,
        properties: PropertyMap,
        dependency_item_specs: Vec<String>,
    ) -> Self {
        Self {
            provider: ProviderKind::PackageUnknown,
            original_item_spec: item_spec.clone(),
            item_spec,
            caption: name,
            flags: DependencyFlags::PACKAGE_COMPONENT,
            resolved,
            implicit: false,
            top_level: false,
            visible: true,
            icon: IconSet::PACKAGE,
            properties,
            dependency_item_specs,
            version: None,
            path: None,
            severity: None,
            diagnostic_code: None,
        }
    }

    /// Synthetic grouping node placed above one provider kind's nodes
    /// (e.g. the packages sub-tree root).
    pub fn sub_tree_root(provider: ProviderKind) -> Self {
        let caption = provider.group_caption();
        Self {
            provider: ProviderKind::SubTreeRoot,
            item_spec: format!("root/{}", provider.id()),
            original_item_spec: format!("root/{}", provider.id()),
            caption: caption.to_string(),
            flags: DependencyFlags::SUB_TREE_ROOT,
            resolved: true,
            implicit: false,
            top_level: false,
            visible: true,
            icon: IconSet::FOLDER,
            properties: PropertyMap::new(),
            dependency_item_specs: Vec::new(),
            version: None,
            path: None,
            severity: None,
            diagnostic_code: None,
        }
    }
}
