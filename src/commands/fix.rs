use std::path::PathBuf;

use anyhow::Result;

use bundle_license_auditor::config::{add_exclusions_to_config, load_config, CONFIG_FILE_NAME};
use bundle_license_auditor::manifest::ManifestParser;
use bundle_license_auditor::policy::LicensePolicy;

pub fn handle_fix(manifest: Option<PathBuf>, dry_run: bool, quiet: bool) -> Result<()> {
    let config = load_config()?;

    let manifest_path = match manifest {
        Some(path) => path,
        None => ManifestParser::find_manifest()
            .ok_or_else(|| anyhow::anyhow!("No dependencies.json found"))?,
    };
    let dependencies = ManifestParser::parse_manifest(&manifest_path)?;

    let policy = LicensePolicy::from_config(&config);
    let violations = policy.detect_violations(&dependencies);

    if violations.total == 0 {
        if !quiet {
            println!("No violations found, nothing to fix");
        }
        return Ok(());
    }

    // Collect the offending package names; nameless dependencies cannot be
    // excluded by name and are left for manual review
    let mut packages: Vec<String> = Vec::new();
    for violation in &violations.details {
        match &violation.package_name {
            Some(name) if !packages.contains(name) => packages.push(name.clone()),
            Some(_) => {}
            None => {
                if !quiet {
                    eprintln!("⚠️  Skipping a dependency without a package name");
                }
            }
        }
    }

    if dry_run {
        if !quiet {
            println!(
                "Would add {} packages to {}:",
                packages.len(),
                CONFIG_FILE_NAME
            );
            for package in &packages {
                println!("  - {}", package);
            }
        }
        return Ok(());
    }

    let config_path = std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(CONFIG_FILE_NAME);
    let added = add_exclusions_to_config(&config_path, &packages)?;

    if !quiet {
        println!("Added {} packages to {}:", added, CONFIG_FILE_NAME);
        for package in &packages {
            println!("  ✅ {}", package);
        }
    }

    Ok(())
}
