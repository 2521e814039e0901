use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Top-level project configuration loaded from `.olt.yaml`.
///
/// Command-line arguments override these values; these override the
/// built-in defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OltConfig {
    pub input: String,
    pub output: String,
    /// Keep only operations carrying one of these tags; empty keeps
    /// everything.
    pub tags: Vec<String>,
    pub schemas_only: bool,
}

impl Default for OltConfig {
    fn default() -> Self {
        Self {
            input: "openapi.yaml".to_string(),
            output: "llms.txt".to_string(),
            tags: Vec::new(),
            schemas_only: false,
        }
    }
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".olt.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<OltConfig>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
    let config: OltConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("failed to parse config {}: {}", path.display(), e))?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# olt configuration
input: openapi.yaml     # OpenAPI document (JSON or YAML)
output: llms.txt        # flattened text output

tags: []                # keep only operations with these tags
  # - pet
  # - store

schemas_only: false     # skip operation detail, list reachable schemas
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OltConfig::default();
        assert_eq!(config.input, "openapi.yaml");
        assert_eq!(config.output, "llms.txt");
        assert!(config.tags.is_empty());
        assert!(!config.schemas_only);
    }

    #[test]
    fn test_parse_config_yaml() {
        let yaml = r#"
input: spec.json
output: docs/llms.txt
tags:
  - pet
  - store
schemas_only: true
"#;
        let config: OltConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.input, "spec.json");
        assert_eq!(config.output, "docs/llms.txt");
        assert_eq!(config.tags, vec!["pet", "store"]);
        assert!(config.schemas_only);
    }

    #[test]
    fn test_parse_minimal_config() {
        let yaml = "input: api.yaml\n";
        let config: OltConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.input, "api.yaml");
        // Defaults applied
        assert_eq!(config.output, "llms.txt");
        assert!(config.tags.is_empty());
    }

    #[test]
    fn test_default_content_parses() {
        let config: OltConfig = serde_yaml_ng::from_str(default_config_content()).unwrap();
        assert_eq!(config.input, "openapi.yaml");
    }
}
