use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "license-audit.toml";

/// Caller-supplied audit configuration.
///
/// Every field is optional; missing fields default to empty containers so an
/// absent config file behaves the same as an empty one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Output format for the violation report (json, table)
    pub format: Option<String>,

    /// Abort on the first violation instead of collecting a report
    pub fail_on_violation: Option<bool>,

    /// Packages exempted from the license check entirely
    pub additional_excluded_packages: Vec<String>,

    /// Corrections for packages whose declared license type is wrong or absent
    pub additional_known_licenses: IndexMap<String, String>,

    /// Fallback license texts for packages whose metadata lacks the text
    pub additional_known_license_texts: IndexMap<String, String>,
}

/// Load configuration from license-audit.toml in the current directory.
pub fn load_config() -> Result<AuditConfig> {
    let config_path = std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(CONFIG_FILE_NAME);
    load_config_from(config_path)
}

/// Load configuration from an explicit path. A missing file yields defaults.
pub fn load_config_from<P: AsRef<Path>>(path: P) -> Result<AuditConfig> {
    let path_ref = path.as_ref();

    if !path_ref.exists() {
        return Ok(AuditConfig::default());
    }

    let content = fs::read_to_string(path_ref)
        .with_context(|| format!("Failed to read {}", path_ref.display()))?;

    let config: AuditConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path_ref.display()))?;

    Ok(config)
}

/// Append package names to `additional_excluded_packages` in an existing
/// config file, keeping the caller's comments and formatting intact.
/// Already-listed packages are skipped.
pub fn add_exclusions_to_config<P: AsRef<Path>>(path: P, packages: &[String]) -> Result<usize> {
    let path_ref = path.as_ref();

    if !path_ref.exists() {
        return Err(anyhow::anyhow!(
            "{} not found. Run 'bundle-license-auditor init' first.",
            CONFIG_FILE_NAME
        ));
    }

    let content = fs::read_to_string(path_ref)
        .with_context(|| format!("Failed to read {}", path_ref.display()))?;

    let mut doc = content
        .parse::<toml_edit::DocumentMut>()
        .with_context(|| format!("Failed to parse {}", path_ref.display()))?;

    if doc.get("additional_excluded_packages").is_none() {
        doc["additional_excluded_packages"] =
            toml_edit::Item::Value(toml_edit::Value::Array(toml_edit::Array::new()));
    }

    let array = doc["additional_excluded_packages"]
        .as_array_mut()
        .ok_or_else(|| anyhow::anyhow!("additional_excluded_packages is not an array"))?;

    let mut added = 0;
    for package in packages {
        let already_listed = array
            .iter()
            .any(|value| value.as_str() == Some(package.as_str()));
        if !already_listed {
            array.push(package.as_str());
            added += 1;
        }
    }

    fs::write(path_ref, doc.to_string())
        .with_context(|| format!("Failed to write {}", path_ref.display()))?;

    Ok(added)
}
