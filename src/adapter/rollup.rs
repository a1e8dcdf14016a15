use std::path::{Path, PathBuf};

use crate::config::AuditConfig;
use crate::manifest::Dependency;
use crate::output::render_attribution;
use crate::policy::{LicensePolicy, ViolationSummary};

/// Options surface for a rollup-shaped host license plugin.
///
/// The host hands every dependency to [`allow`], renders the aggregated
/// license file through [`template`], and embeds [`banner`] into emitted
/// chunks. This variant never fails the build (`failOnViolation: false`);
/// violations are collected for separate reporting instead.
pub struct RollupLicenseOptions {
    policy: LicensePolicy,
    output_path: PathBuf,
    output_file: String,
}

impl RollupLicenseOptions {
    pub fn new<P: AsRef<Path>>(output_path: P, output_file: &str, config: &AuditConfig) -> Self {
        Self {
            policy: LicensePolicy::from_config(config),
            output_path: output_path.as_ref().to_path_buf(),
            output_file: output_file.to_string(),
        }
    }

    /// Banner comment pointing at the aggregated license file.
    pub fn banner(&self) -> String {
        format!(
            "@preserve Additional licenses are found in {}",
            self.output_file
        )
    }

    /// Full path of the aggregated license file inside the build output.
    pub fn output_file(&self) -> PathBuf {
        self.output_path.join(&self.output_file)
    }

    /// Allow-test callback: true for dependencies that may be redistributed.
    pub fn allow(&self, dependency: &Dependency) -> bool {
        self.policy.allow(dependency)
    }

    /// Template callback: renders the aggregated license file content.
    pub fn template(&self, dependencies: &[Dependency]) -> String {
        render_attribution(&self.policy, dependencies)
    }

    /// Collect violations without failing the build.
    pub fn detect_violations(&self, dependencies: &[Dependency]) -> ViolationSummary {
        self.policy.detect_violations(dependencies)
    }

    pub fn policy(&self) -> &LicensePolicy {
        &self.policy
    }
}
