use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bundle-license-auditor")]
#[command(about = "Check bundled dependency licenses and emit an attribution file")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Audit the dependency manifest emitted by the bundler
    Check {
        /// Path to the dependency manifest (default: dependencies.json)
        manifest: Option<PathBuf>,

        /// Output format
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Directory the attribution file is written to
        #[arg(long, default_value = "dist")]
        out_dir: PathBuf,

        /// Name of the attribution file
        #[arg(long, default_value = "ThirdPartyNotices.txt")]
        out_file: String,

        /// Abort on the first violation instead of collecting a report
        #[arg(long)]
        strict: bool,

        /// Exit with code 0 even on violations
        #[arg(long)]
        exit_zero: bool,
    },
    /// Write a starter license-audit.toml
    Init,
    /// Add violating packages to the exclusion list
    Fix {
        /// Path to the dependency manifest (default: dependencies.json)
        manifest: Option<PathBuf>,

        /// Show changes without applying them
        #[arg(long)]
        dry_run: bool,
    },
    /// Show or validate configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Validate configuration file
        #[arg(long)]
        validate: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}
