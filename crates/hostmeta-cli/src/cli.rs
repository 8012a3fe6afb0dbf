//! CLI argument parsing using clap derive

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// hostmeta - Resolve host-type metadata standards against a study
#[derive(Parser, Debug)]
#[command(name = "hostmeta")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Inputs shared by every command that resolves a study
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct StudyArgs {
    /// Study config file (YAML, JSON or TOML)
    #[arg(long)]
    pub study: PathBuf,

    /// Standards file; defaults to <config dir>/hostmeta/standards.yml
    #[arg(long, env = "HOSTMETA_STANDARDS")]
    pub standards: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Resolve the study against the standards and print the flat dictionary
    ///
    /// Examples:
    ///   hostmeta resolve --study study.yml --standards standards.yml
    ///   hostmeta resolve --study study.yml --output resolved.json
    ///   hostmeta resolve --study study.yml --nested
    Resolve {
        #[command(flatten)]
        inputs: StudyArgs,

        /// Write to this file instead of stdout (format from extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit the combined tree, still nested, instead of the flat dictionary
        #[arg(long)]
        nested: bool,
    },

    /// List resolved host types
    HostTypes {
        #[command(flatten)]
        inputs: StudyArgs,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print the validator schema for one host type and sample type
    Schema {
        #[command(flatten)]
        inputs: StudyArgs,

        /// Host type to resolve
        #[arg(long)]
        host_type: String,

        /// Sample type within the host type
        #[arg(long)]
        sample_type: String,
    },

    /// Run a named transformer on a single value
    ///
    /// Examples:
    ///   hostmeta transform transform_sex_at_birth_to_sex Female
    ///   hostmeta transform format_a_datetime "07/04/2023 14:30"
    Transform {
        /// Transformer name
        name: String,

        /// Input value
        value: String,
    },
}
