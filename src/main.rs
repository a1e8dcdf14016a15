mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let quiet = cli.quiet;

    match cli.command {
        Commands::Check {
            manifest,
            format,
            out_dir,
            out_file,
            strict,
            exit_zero,
        } => commands::handle_check(manifest, format, out_dir, out_file, strict, exit_zero, quiet),
        Commands::Init => commands::handle_init(quiet),
        Commands::Fix { manifest, dry_run } => commands::handle_fix(manifest, dry_run, quiet),
        Commands::Config { show, validate } => commands::handle_config(show, validate, quiet),
    }
}
