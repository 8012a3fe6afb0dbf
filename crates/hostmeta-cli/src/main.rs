//! hostmeta CLI
//!
//! Resolves host-type metadata standards against study configurations.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{} could not set up logging: {}", "warning:".yellow().bold(), e);
    }
    if cli.verbose {
        tracing::debug!("Verbose mode enabled");
    }

    execute_command(cli.command)
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Resolve {
            inputs,
            output,
            nested,
        } => commands::run_resolve(&inputs, output.as_deref(), nested),
        Commands::HostTypes { inputs, json } => commands::run_host_types(&inputs, json),
        Commands::Schema {
            inputs,
            host_type,
            sample_type,
        } => commands::run_schema(&inputs, &host_type, &sample_type),
        Commands::Transform { name, value } => commands::run_transform(&name, &value),
    }
}
