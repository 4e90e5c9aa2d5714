//! Generation configuration
//!
//! Settings can live in a `routewire.toml` file that sits alongside the
//! specification; command-line flags override whatever the file provides.
//!
//! ```toml
//! naming_format = "go_zero"
//! flavor = "feature-rich"
//! root_package = "github.com/acme/shop"
//! router_module = "github.com/zeromicro/go-zero"
//! template_home = "./templates"
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::generator::{Flavor, DEFAULT_NAMING_FORMAT, DEFAULT_ROUTER_MODULE};

/// File name looked up next to the specification.
pub const CONFIG_FILE_NAME: &str = "routewire.toml";

/// Everything a generation run needs besides the specification and output directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GenConfig {
    /// Naming style for generated file names, e.g. `gozero` or `go_zero`
    pub naming_format: String,
    pub flavor: Flavor,
    /// Module path of the generated project; prefixes every project import
    pub root_package: String,
    /// Module path of the router runtime; its `rest` package is imported
    pub router_module: String,
    /// Directory holding template overrides under `api/`
    pub template_home: Option<PathBuf>,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            naming_format: DEFAULT_NAMING_FORMAT.to_string(),
            flavor: Flavor::default(),
            root_package: String::new(),
            router_module: DEFAULT_ROUTER_MODULE.to_string(),
            template_home: None,
        }
    }
}

impl GenConfig {
    /// Relative `template_home` entries are taken relative to `base`.
    fn rebase(mut self, base: &Path) -> Self {
        if let Some(home) = &self.template_home {
            if home.is_relative() {
                self.template_home = Some(base.join(home));
            }
        }
        self
    }
}

/// Load generation configuration from a TOML file
///
/// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but fails
/// to read or parse. Relative template homes are resolved against the
/// directory containing the file.
pub fn load_config(config_path: &Path) -> anyhow::Result<Option<GenConfig>> {
    if !config_path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config: {}", config_path.display()))?;

    let config: GenConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config: {}", config_path.display()))?;

    let base = config_path.parent().unwrap_or_else(|| Path::new("."));
    Ok(Some(config.rebase(base)))
}

/// Auto-detect `routewire.toml` in the same directory as the spec.
pub fn auto_detect_config_path(spec_path: &Path) -> Option<PathBuf> {
    let spec_dir = spec_path.parent()?;
    let config_path = spec_dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Resolve the config path
///
/// Priority:
/// 1. Explicitly provided path (via CLI)
/// 2. Auto-detected alongside spec
/// 3. None (defaults only)
pub fn resolve_config_path(explicit_path: Option<&Path>, spec_path: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(path.to_path_buf());
    }

    auto_detect_config_path(spec_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(&dir.path().join(CONFIG_FILE_NAME))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "flavor = \"feature-rich\"\nroot_package = \"example.com/shop\"\n").unwrap();

        let config = load_config(&path).unwrap().unwrap();
        assert_eq!(config.flavor, Flavor::FeatureRich);
        assert_eq!(config.root_package, "example.com/shop");
        assert_eq!(config.naming_format, DEFAULT_NAMING_FORMAT);
        assert_eq!(config.router_module, DEFAULT_ROUTER_MODULE);
        assert!(config.template_home.is_none());
    }

    #[test]
    fn test_relative_template_home_is_rebased() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "template_home = \"tpl\"\n").unwrap();

        let config = load_config(&path).unwrap().unwrap();
        assert_eq!(config.template_home, Some(dir.path().join("tpl")));
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "flavor = \"chunky\"\n").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(format!("{err}").contains("Failed to parse config"));
    }

    #[test]
    fn test_resolve_config_path_priority() {
        let dir = tempfile::tempdir().unwrap();
        let spec = dir.path().join("api.yaml");
        assert!(resolve_config_path(None, &spec).is_none());

        fs::write(dir.path().join(CONFIG_FILE_NAME), "").unwrap();
        assert_eq!(
            resolve_config_path(None, &spec),
            Some(dir.path().join(CONFIG_FILE_NAME))
        );

        let explicit = dir.path().join("other.toml");
        assert_eq!(resolve_config_path(Some(&explicit), &spec), Some(explicit.clone()));
    }
}
