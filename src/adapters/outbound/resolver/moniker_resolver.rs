use crate::dependency_graph::domain::TargetFramework;
use crate::ports::outbound::TargetFrameworkResolver;
use crate::shared::compare::fold_key;
use std::collections::HashMap;

const NETFRAMEWORK_IDENTIFIER: &str = ".NETFramework";
const NETSTANDARD_IDENTIFIER: &str = ".NETStandard";
const NETCOREAPP_IDENTIFIER: &str = ".NETCoreApp";

/// MonikerFrameworkResolver resolves short framework names (`net472`,
/// `netstandard2.0`, `net6.0`) and full monikers
/// (`.NETFramework,Version=v4.7.2`) into canonical `TargetFramework`
/// values.
///
/// An alias table (from the CLI config file) is consulted first, so hosts
/// can map nonstandard configuration keys onto known frameworks.
pub struct MonikerFrameworkResolver {
    aliases: HashMap<String, String>,
}

impl MonikerFrameworkResolver {
    pub fn new() -> Self {
        Self {
            aliases: HashMap::new(),
        }
    }

    /// Adds alias → framework-name mappings applied before parsing.
    pub fn with_aliases(aliases: HashMap<String, String>) -> Self {
        Self {
            aliases: aliases
                .into_iter()
                .map(|(alias, name)| (fold_key(&alias), name))
                .collect(),
        }
    }

    fn resolve_short_name(name: &str) -> Option<TargetFramework> {
        let folded = fold_key(name);

        if let Some(version) = folded.strip_prefix("netstandard") {
            let version = parse_dotted_version(version)?;
            return Some(TargetFramework::with_short_name(
                format!("{},Version=v{}", NETSTANDARD_IDENTIFIER, version),
                folded,
            ));
        }

        if let Some(version) = folded.strip_prefix("netcoreapp") {
            let version = parse_dotted_version(version)?;
            return Some(TargetFramework::with_short_name(
                format!("{},Version=v{}", NETCOREAPP_IDENTIFIER, version),
                folded,
            ));
        }

        if let Some(version) = folded.strip_prefix("net") {
            if version.contains('.') {
                // Dotted versions are the net5.0+ shape of .NET Core.
                let version = parse_dotted_version(version)?;
                return Some(TargetFramework::with_short_name(
                    format!("{},Version=v{}", NETCOREAPP_IDENTIFIER, version),
                    folded,
                ));
            }
            // Bare digit runs are classic .NET Framework: net472 -> v4.7.2.
            if !version.is_empty() && version.chars().all(|c| c.is_ascii_digit()) {
                let dotted = version
                    .chars()
                    .map(|c| c.to_string())
                    .collect::<Vec<_>>()
                    .join(".");
                return Some(TargetFramework::with_short_name(
                    format!("{},Version=v{}", NETFRAMEWORK_IDENTIFIER, dotted),
                    folded,
                ));
            }
        }

        None
    }

    fn resolve_full_name(name: &str) -> Option<TargetFramework> {
        let (identifier, version) = name.split_once(",Version=v")?;
        if identifier.is_empty() || version.is_empty() {
            return None;
        }

        let short_name = if identifier.eq_ignore_ascii_case(NETFRAMEWORK_IDENTIFIER) {
            format!("net{}", version.replace('.', ""))
        } else if identifier.eq_ignore_ascii_case(NETSTANDARD_IDENTIFIER) {
            format!("netstandard{}", version)
        } else if identifier.eq_ignore_ascii_case(NETCOREAPP_IDENTIFIER) {
            let major: u32 = version.split('.').next()?.parse().ok()?;
            if major >= 5 {
                format!("net{}", version)
            } else {
                format!("netcoreapp{}", version)
            }
        } else {
            // Unknown identifier: keep the full name as the display form.
            name.to_string()
        };

        Some(TargetFramework::with_short_name(name, short_name))
    }
}

impl Default for MonikerFrameworkResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl TargetFrameworkResolver for MonikerFrameworkResolver {
    fn resolve(&self, name: &str) -> Option<TargetFramework> {
        if name.is_empty() {
            return None;
        }

        let name = match self.aliases.get(&fold_key(name)) {
            Some(target) => target.as_str(),
            None => name,
        };

        if name.contains(",Version=v") {
            Self::resolve_full_name(name)
        } else {
            Self::resolve_short_name(name)
        }
    }
}

/// Validates a version made of dot-separated digit groups, e.g. `2.0`,
/// `3.1`, `6.0`. A bare major (`6`) normalizes to `6.0`.
fn parse_dotted_version(version: &str) -> Option<String> {
    if version.is_empty() {
        return None;
    }
    let mut groups = version.split('.');
    let major = groups.next()?;
    if major.is_empty() || !major.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let mut normalized = vec![major.to_string()];
    for group in groups {
        if group.is_empty() || !group.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        normalized.push(group.to_string());
    }
    if normalized.len() == 1 {
        normalized.push("0".to_string());
    }
    Some(normalized.join("."))
}
