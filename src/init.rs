use std::fs;
use std::path::Path;

use anyhow::Result;

use crate::config::CONFIG_FILE_NAME;

/// Commented starter configuration written by `init`.
const STARTER_CONFIG: &str = r#"# License audit configuration for the bundler integrations.

# Output format for the violation report (table, json).
format = "table"

# Abort the build on the first violation instead of collecting a report.
fail_on_violation = false

# Packages exempted from the license check entirely, e.g. dependencies
# covered by a separate commercial agreement.
additional_excluded_packages = []

# Corrections for packages whose declared license type is wrong or absent.
# "package-name" = "MIT"
[additional_known_licenses]

# Fallback license texts for packages whose metadata lacks the text.
# "package-name" = "See the license at: https://github.com/owner/repo/blob/master/LICENSE"
[additional_known_license_texts]
"#;

pub fn generate_config() -> Result<()> {
    generate_config_at_path(CONFIG_FILE_NAME)
}

pub fn generate_config_at_path<P: AsRef<Path>>(path: P) -> Result<()> {
    let config_path = path.as_ref();

    if config_path.exists() {
        return Err(anyhow::anyhow!(
            "{} already exists. Edit it directly or remove it before re-running init.",
            config_path.display()
        ));
    }

    fs::write(config_path, STARTER_CONFIG)?;
    Ok(())
}
