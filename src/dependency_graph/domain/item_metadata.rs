use crate::shared::error::CrossDepsError;
use crate::shared::Result;
use std::collections::BTreeMap;
use std::str::FromStr;

/// Property names recognized on evaluation items.
pub const PROP_NAME: &str = "Name";
pub const PROP_VERSION: &str = "Version";
pub const PROP_PATH: &str = "Path";
pub const PROP_TYPE: &str = "Type";
pub const PROP_RESOLVED: &str = "Resolved";
pub const PROP_IMPLICITLY_DEFINED: &str = "IsImplicitlyDefined";
pub const PROP_DEPENDENCIES: &str = "Dependencies";
pub const PROP_SEVERITY: &str = "Severity";
pub const PROP_DIAGNOSTIC_CODE: &str = "DiagnosticCode";

/// Flat mapping from property name to string value, as produced by the
/// evaluation diff source for one item.
pub type PropertyMap = BTreeMap<String, String>;

/// Looks up a property by name, ignoring ASCII case on the property name.
pub fn property<'a>(properties: &'a PropertyMap, name: &str) -> Option<&'a str> {
    properties
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

/// The classified kind of one raw evaluation item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyType {
    Unknown,
    Target,
    Diagnostic,
    Package,
    Assembly,
    FrameworkAssembly,
    AnalyzerAssembly,
}

impl FromStr for DependencyType {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "target" => Ok(DependencyType::Target),
            "diagnostic" => Ok(DependencyType::Diagnostic),
            "package" => Ok(DependencyType::Package),
            "assembly" => Ok(DependencyType::Assembly),
            "frameworkassembly" => Ok(DependencyType::FrameworkAssembly),
            "analyzerassembly" => Ok(DependencyType::AnalyzerAssembly),
            _ => Ok(DependencyType::Unknown),
        }
    }
}

/// Severity of a diagnostic item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticSeverity {
    Info,
    Warning,
    Error,
}

impl FromStr for DiagnosticSeverity {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "info" => Ok(DiagnosticSeverity::Info),
            "error" => Ok(DiagnosticSeverity::Error),
            // Unrecognized severities degrade to Warning rather than dropping
            // the diagnostic.
            _ => Ok(DiagnosticSeverity::Warning),
        }
    }
}

impl std::fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiagnosticSeverity::Info => write!(f, "Info"),
            DiagnosticSeverity::Warning => write!(f, "Warning"),
            DiagnosticSeverity::Error => write!(f, "Error"),
        }
    }
}

/// An immutable, parsed view over one evaluation item's identifier and
/// property bag.
///
/// Constructed fully up front; nothing is mutated after parsing.
#[derive(Debug, Clone)]
pub struct DependencyItemMetadata {
    pub item_spec: String,
    pub name: String,
    pub version: Option<String>,
    pub path: Option<String>,
    pub dependency_type: DependencyType,
    pub resolved: bool,
    pub is_implicitly_defined: bool,
    /// Target-framework segment: the prefix of the item spec before the
    /// first `/`.
    pub target: String,
    /// True iff the item spec contains no `/` at all - a bare
    /// target-framework marker row, not a real dependency.
    pub is_target: bool,
    /// Item specs this item depends on, re-prefixed with `{target}/`,
    /// case-insensitive-unique, in first-seen order.
    pub dependencies_item_specs: Vec<String>,
    pub severity: Option<DiagnosticSeverity>,
    pub diagnostic_code: Option<String>,
}

impl DependencyItemMetadata {
    /// Parses one item's metadata from its spec and property bag.
    ///
    /// # Errors
    /// An empty item spec is a contract violation by the evaluation source
    /// and fails the call rather than being silently discarded.
    pub fn parse(item_spec: &str, properties: &PropertyMap) -> Result<Self> {
        if item_spec.is_empty() {
            return Err(CrossDepsError::InvalidItemSpec.into());
        }

        let is_target = !item_spec.contains('/');
        let target = item_spec
            .split('/')
            .next()
            .unwrap_or(item_spec)
            .to_string();

        let name = property(properties, PROP_NAME)
            .filter(|v| !v.is_empty())
            .unwrap_or(item_spec)
            .to_string();

        let dependency_type = property(properties, PROP_TYPE)
            .map(|v| v.parse().unwrap_or(DependencyType::Unknown))
            .unwrap_or(DependencyType::Unknown);

        let resolved = property(properties, PROP_RESOLVED)
            .map(parse_bool_default_true)
            .unwrap_or(true);

        let is_implicitly_defined = property(properties, PROP_IMPLICITLY_DEFINED)
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let dependencies_item_specs = property(properties, PROP_DEPENDENCIES)
            .map(|v| split_dependencies(v, &target))
            .unwrap_or_default();

        let (severity, diagnostic_code) = if dependency_type == DependencyType::Diagnostic {
            (
                Some(
                    property(properties, PROP_SEVERITY)
                        .map(|v| v.parse().unwrap_or(DiagnosticSeverity::Warning))
                        .unwrap_or(DiagnosticSeverity::Warning),
                ),
                property(properties, PROP_DIAGNOSTIC_CODE).map(str::to_string),
            )
        } else {
            (None, None)
        };

        Ok(Self {
            item_spec: item_spec.to_string(),
            name,
            version: property(properties, PROP_VERSION).map(str::to_string),
            path: property(properties, PROP_PATH).map(str::to_string),
            dependency_type,
            resolved,
            is_implicitly_defined,
            target,
            is_target,
            dependencies_item_specs,
            severity,
            diagnostic_code,
        })
    }
}

fn parse_bool_default_true(value: &str) -> bool {
    !value.eq_ignore_ascii_case("false")
}

/// Splits a semicolon-delimited dependency list and re-prefixes each entry
/// with the owning target segment, deduplicating case-insensitively.
fn split_dependencies(value: &str, target: &str) -> Vec<String> {
    let mut seen = crate::shared::compare::CaseInsensitiveSet::new();
    let mut specs = Vec::new();
    for entry in value.split(';') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        let spec = format!("{}/{}", target, entry);
        if seen.insert(&spec) {
            specs.push(spec);
        }
    }
    specs
}
