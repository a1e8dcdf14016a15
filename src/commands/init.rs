use anyhow::Result;

use bundle_license_auditor::config::CONFIG_FILE_NAME;
use bundle_license_auditor::init;

pub fn handle_init(quiet: bool) -> Result<()> {
    init::generate_config()?;

    if !quiet {
        println!("✅ Wrote starter {}", CONFIG_FILE_NAME);
    }

    Ok(())
}
