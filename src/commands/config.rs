use anyhow::Result;

use bundle_license_auditor::config::load_config;

pub fn handle_config(show: bool, validate: bool, quiet: bool) -> Result<()> {
    if !show && !validate {
        if !quiet {
            eprintln!("Use --show or --validate");
        }
        std::process::exit(1);
    }

    if show {
        match load_config() {
            Ok(config) => {
                if !quiet {
                    println!("{}", serde_json::to_string_pretty(&config)?);
                }
            }
            Err(e) => {
                if !quiet {
                    eprintln!("Error loading configuration: {}", e);
                }
                std::process::exit(1);
            }
        }
    }

    if validate {
        match load_config() {
            Ok(_) => {
                if !quiet {
                    println!("✅ Configuration is valid");
                }
            }
            Err(e) => {
                if !quiet {
                    eprintln!("❌ Configuration validation failed: {}", e);
                }
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
