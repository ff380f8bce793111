//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, LoadArgs};
pub use output::{format_outcomes, format_tag_table, format_usage};
