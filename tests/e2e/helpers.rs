use std::fs;
use std::process::Command;

use tempfile::TempDir;

pub struct TestProject {
    pub dir: TempDir,
    pub binary_path: String,
}

impl TestProject {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let binary_path = env!("CARGO_BIN_EXE_bundle-license-auditor").to_string();

        Self { dir, binary_path }
    }

    /// Write a dependency manifest the way a bundler's walker would emit it.
    pub fn write_manifest(&self, json: &str) -> std::io::Result<()> {
        fs::write(self.dir.path().join("dependencies.json"), json)
    }

    /// Write a license-audit.toml into the project root.
    pub fn write_config(&self, content: &str) -> std::io::Result<()> {
        fs::write(self.dir.path().join("license-audit.toml"), content)
    }

    /// Read the attribution file written by a check run.
    pub fn read_attribution(&self) -> std::io::Result<String> {
        fs::read_to_string(self.dir.path().join("dist").join("ThirdPartyNotices.txt"))
    }

    pub fn run_auditor(&self, args: &[&str]) -> std::process::Output {
        Command::new(&self.binary_path)
            .args(args)
            .current_dir(self.dir.path())
            .output()
            .expect("Failed to run bundle-license-auditor")
    }
}
