//! CLI command definitions

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cfn-yaml-tags")]
#[command(about = "CloudFormation YAML tag loader and JSON expander", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Flags shared by commands that load templates
#[derive(Args, Debug, Clone)]
pub struct LoadArgs {
    /// Template file (stdin when omitted or '-')
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Use the restricted loader
    #[arg(long)]
    pub safe: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the canonical JSON form of a template
    Json {
        #[command(flatten)]
        load: LoadArgs,

        /// Print JSON on a single line
        #[arg(short, long)]
        compact: bool,
    },

    /// Load a template and write it back as YAML
    Yaml {
        #[command(flatten)]
        load: LoadArgs,
    },

    /// Load templates (a file or a directory) and report tag usage
    Check {
        #[command(flatten)]
        load: LoadArgs,
    },

    /// List the supported tags
    Tags,

    /// Write a default .cfn-yaml-tags.toml
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
