//! Configuration file support for crossdeps.
//!
//! Provides YAML-based configuration through `crossdeps.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::shared::Result;

const CONFIG_FILENAME: &str = "crossdeps.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    /// Extra configuration-key → framework-name mappings fed to the
    /// resolver (e.g. `Desktop: net472`).
    pub framework_aliases: Option<HashMap<String, String>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        if !["json", "tree"].contains(&format.to_lowercase().as_str()) {
            bail!(
                "Invalid config: format must be 'json' or 'tree', got '{}'.\n\n\
                 💡 Hint: Remove the 'format' entry to fall back to the default (json).",
                format
            );
        }
    }

    if let Some(ref aliases) = config.framework_aliases {
        for (alias, target) in aliases {
            if alias.trim().is_empty() || target.trim().is_empty() {
                bail!(
                    "Invalid config: framework_aliases entries must have non-empty keys and values.\n\n\
                     💡 Hint: Each entry maps a configuration key to a framework name (e.g. \"Desktop: net472\")."
                );
            }
        }
    }

    Ok(())
}

/// Warn on stderr about unrecognized configuration fields.
fn warn_unknown_fields(config: &ConfigFile) {
    for field in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            field
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let file = write_config(
            "format: tree\nframework_aliases:\n  Desktop: net472\n  Portable: netstandard2.0\n",
        );
        let config = load_config_from_path(file.path()).unwrap();
        assert_eq!(config.format.as_deref(), Some("tree"));
        let aliases = config.framework_aliases.unwrap();
        assert_eq!(aliases["Desktop"], "net472");
        assert_eq!(aliases.len(), 2);
    }

    #[test]
    fn test_load_missing_file_errors() {
        let result = load_config_from_path(Path::new("/nonexistent/crossdeps.config.yml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_format_rejected() {
        let file = write_config("format: xml\n");
        let result = load_config_from_path(file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_alias_rejected() {
        let file = write_config("framework_aliases:\n  \" \": net472\n");
        let result = load_config_from_path(file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_discover_returns_none_when_absent() {
        let dir = tempfile::tempdir().unwrap();
        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_discover_finds_config_in_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "format: json\n").unwrap();
        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.format.as_deref(), Some("json"));
    }
}
