//! # CLI Argument Definitions

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "elemental")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Browse the enumerations declared in the elemental catalog")]
pub struct Cli {
    /// Configuration file (TOML, JSON, YAML, ...); `ELEMENTAL__*` variables override it
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format, overriding the configured one
    #[arg(short, long, global = true)]
    pub output: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the available registries
    Registries {},
    /// List the members of a registry
    List {
        /// Registry name in any spelling, e.g. `PublicStatus` or `comment-type`
        registry: String,
        /// Order by position instead of ordinal
        #[arg(short, long)]
        sorted: bool,
        /// Only members flagged as default
        #[arg(short, long)]
        defaults: bool,
    },
    /// Show one member, found by name, synonym or ordinal
    Show {
        registry: String,
        /// Name, synonym, or ordinal (negative counts from the end)
        #[arg(allow_negative_numbers = true)]
        key: String,
    },
    /// Walk circularly from a member
    Walk {
        registry: String,
        #[arg(allow_negative_numbers = true)]
        key: String,
        /// Number of steps to take, at most 10000
        #[arg(short = 'n', long, default_value_t = 1)]
        steps: usize,
        /// Step towards lower ordinals
        #[arg(short, long)]
        backward: bool,
    },
    /// Fail with a programmer's error message
    Raise {
        /// Error kind (`AbstractMethodError`, `abstract_method`) or its 1-based number
        kind: Option<String>,
        /// Free-form detail appended to the message
        #[arg(long)]
        detail: Option<String>,
    },
}
