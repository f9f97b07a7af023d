//! # CLI
//!
//! Command-line interface of `tokenctl`, parsed with `clap`.
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "tokenctl", version, about = "Inspect runtime type tokens")]
pub struct Cli {
    /// Log output format (verbosity is read from RUST_LOG, default "warn")
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the names of the catalog entries
    List,

    /// Build and render one catalog entry
    ///
    /// ## Examples:
    ///
    /// ```bash
    /// tokenctl show nested-map --full-paths
    /// tokenctl show array-of-strings --json
    /// ```
    Show {
        /// Catalog entry name (see `tokenctl list`)
        name: String,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Build and render every catalog entry, failures included
    Catalog {
        #[command(flatten)]
        render: RenderArgs,
    },
}

#[derive(clap::Args, Clone, Copy, Debug, Default)]
pub struct RenderArgs {
    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Render fully qualified type paths in text output
    #[arg(long)]
    pub full_paths: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}
