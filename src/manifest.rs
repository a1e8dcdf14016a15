use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A third-party dependency as reported by the host bundler's dependency walker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
    /// Package name. Absent for synthetic or virtual modules.
    #[serde(default)]
    pub name: Option<String>,
    /// License identifier declared in the package's own metadata.
    #[serde(default)]
    pub license: Option<String>,
    /// License text bundled with the package.
    #[serde(default)]
    pub license_text: Option<String>,
}

/// On-disk shape of the dependency manifest. Bundlers emit either a bare
/// array or an object wrapping it under a "dependencies" key.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ManifestFile {
    List(Vec<Dependency>),
    Wrapped { dependencies: Vec<Dependency> },
}

pub const MANIFEST_FILE_NAME: &str = "dependencies.json";

pub struct ManifestParser;

impl ManifestParser {
    /// Parse a dependency manifest file and return the dependency records
    /// in the order the bundler emitted them.
    pub fn parse_manifest<P: AsRef<Path>>(path: P) -> Result<Vec<Dependency>> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            return Err(anyhow::anyhow!(
                "Dependency manifest not found: {}",
                path_ref.display()
            ));
        }

        let content = std::fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read dependency manifest: {}", path_ref.display()))?;

        if content.trim().is_empty() {
            return Err(anyhow::anyhow!(
                "Dependency manifest is empty: {}",
                path_ref.display()
            ));
        }

        let manifest: ManifestFile = serde_json::from_str(&content).with_context(|| {
            format!(
                "Failed to parse dependency manifest as JSON: {}",
                path_ref.display()
            )
        })?;

        let dependencies = match manifest {
            ManifestFile::List(dependencies) => dependencies,
            ManifestFile::Wrapped { dependencies } => dependencies,
        };

        Ok(dependencies)
    }

    /// Look for the default manifest in the current directory and its parents.
    pub fn find_manifest() -> Option<PathBuf> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let candidate = dir.join(MANIFEST_FILE_NAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !dir.pop() {
                return None;
            }
        }
    }
}
