use crate::config::AuditConfig;
use crate::manifest::Dependency;
use crate::output::render_attribution;
use crate::policy::{CheckError, LicensePolicy};

/// Default output filename with the host's substitution tokens intact.
pub const DEFAULT_OUTPUT_FILENAME: &str = "[name].[hash].licenses.txt";

/// Options surface for a webpack-shaped host license plugin.
///
/// Unlike the rollup variant this one hard-fails: the first dependency with
/// a forbidden license aborts the build with [`CheckError::ForbiddenLicense`],
/// and a dependency whose license cannot be resolved at all aborts with
/// [`CheckError::MissingLicense`].
pub struct WebpackLicenseOptions {
    policy: LicensePolicy,
    output_filename: String,
}

impl WebpackLicenseOptions {
    pub fn new(config: &AuditConfig) -> Self {
        Self {
            policy: LicensePolicy::from_config(config),
            output_filename: DEFAULT_OUTPUT_FILENAME.to_string(),
        }
    }

    /// Banner comment rendered once the host knows the licenses file name.
    pub fn render_banner(&self, file_name: &str) -> String {
        format!(
            "/* @preserve Additional licenses are found in: {} */",
            file_name
        )
    }

    /// Output filename pattern, tokens unresolved.
    pub fn output_filename(&self) -> &str {
        &self.output_filename
    }

    /// Resolve the `[name]` and `[hash]` tokens for a concrete build.
    pub fn resolve_output_filename(&self, name: &str, hash: &str) -> String {
        self.output_filename
            .replace("[name]", name)
            .replace("[hash]", hash)
    }

    /// Test callback for a license identifier the host already resolved.
    pub fn is_unacceptable_license(&self, license: &str) -> bool {
        !self.policy.is_acceptable(license)
    }

    /// Exclusion callback: commercially licensed packages skip the check.
    pub fn is_excluded_package(&self, package_name: &str) -> bool {
        self.policy.is_excluded(package_name)
    }

    /// Check every dependency, aborting on the first violation, then render
    /// the aggregated license file for the accepted set.
    pub fn check(&self, dependencies: &[Dependency]) -> Result<String, CheckError> {
        for dependency in dependencies {
            if let Some(violation) = self.policy.evaluate(dependency) {
                return Err(violation.into_error());
            }
        }

        Ok(render_attribution(&self.policy, dependencies))
    }

    pub fn policy(&self) -> &LicensePolicy {
        &self.policy
    }
}
