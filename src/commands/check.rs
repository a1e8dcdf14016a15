use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::cli::OutputFormat;
use bundle_license_auditor::adapter::{RollupLicenseOptions, WebpackLicenseOptions};
use bundle_license_auditor::config::load_config;
use bundle_license_auditor::manifest::ManifestParser;
use bundle_license_auditor::output::format_table_output;

pub fn handle_check(
    manifest: Option<PathBuf>,
    format: Option<OutputFormat>,
    out_dir: PathBuf,
    out_file: String,
    strict: bool,
    exit_zero: bool,
    quiet: bool,
) -> Result<()> {
    // Load configuration from license-audit.toml
    let config = load_config()?;

    // CLI arguments override config values
    let strict = strict || config.fail_on_violation.unwrap_or(false);

    let manifest_path = match manifest {
        Some(path) => path,
        None => ManifestParser::find_manifest().ok_or_else(|| {
            anyhow::anyhow!(
                "No dependencies.json found in current directory or parent directories.\n\
                 Point your bundler's dependency walker at a manifest file, or pass the path explicitly."
            )
        })?,
    };
    let dependencies = ManifestParser::parse_manifest(&manifest_path)?;

    if strict {
        // Hard-fail variant: the first violation aborts the build
        let options = WebpackLicenseOptions::new(&config);
        let content = options.check(&dependencies)?;

        write_attribution(&out_dir, &out_file, &content)?;
        if !quiet {
            println!("✅ No license violations found");
            println!("📄 Wrote {}", out_dir.join(&out_file).display());
        }
        return Ok(());
    }

    // Soft variant: collect violations and report them
    let options = RollupLicenseOptions::new(&out_dir, &out_file, &config);
    let summary = options.detect_violations(&dependencies);
    let content = options.template(&dependencies);

    write_attribution(&out_dir, &out_file, &content)?;

    let format = format.unwrap_or_else(|| match config.format.as_deref() {
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::Table,
    });

    let report = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&summary)?,
        OutputFormat::Table => format_table_output(&summary, dependencies.len()),
    };

    if !quiet {
        println!("{}", report);
        println!("📄 Wrote {}", options.output_file().display());
    }

    if summary.total > 0 {
        if !quiet {
            eprintln!(
                "License violations found: {} total ({} forbidden, {} missing)",
                summary.total, summary.forbidden, summary.missing
            );
        }
        if !exit_zero {
            std::process::exit(1);
        }
    }

    Ok(())
}

fn write_attribution(out_dir: &Path, out_file: &str, content: &str) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

    let path = out_dir.join(out_file);
    fs::write(&path, content)
        .with_context(|| format!("Failed to write attribution file: {}", path.display()))?;

    Ok(())
}
