use super::types::ApiSpec;
use anyhow::Context;
use std::path::Path;

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

/// Load an [`ApiSpec`] from a YAML (`.yaml`/`.yml`) or JSON file.
pub fn load_spec(path: &Path) -> anyhow::Result<ApiSpec> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read spec: {}", path.display()))?;
    parse_spec(&content, is_yaml(path))
        .with_context(|| format!("Failed to parse spec: {}", path.display()))
}

/// Parse an [`ApiSpec`] from an in-memory document.
pub fn parse_spec(content: &str, yaml: bool) -> anyhow::Result<ApiSpec> {
    let spec = if yaml {
        serde_yaml::from_str(content)?
    } else {
        serde_json::from_str(content)?
    };
    Ok(spec)
}
