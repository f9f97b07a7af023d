//! tokenctl entry point.
//!
//! This binary is the composition root of the workspace. Responsibilities:
//!
//! 1. **Parse arguments**: [`cli::Cli`] via `clap`.
//! 2. **Wire observability**: install `tracing-subscriber` on stderr with an
//!    `EnvFilter` read from `RUST_LOG` (default `warn`) and a text or JSON
//!    layer. The `debug` events emitted by `type_token` flow through it.
//! 3. **Run the command**: build catalog entries and print them on stdout.
//!
//! Exits with status 1 when `show` names an unknown entry or the entry fails
//! to build.

mod catalog;
mod cli;
mod formatter;

use std::process;

use anyhow::{anyhow, bail, Context};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands, LogFormat, RenderArgs};
use crate::formatter::Rendered;

fn main() {
    let args = Cli::parse();
    init_tracing(args.log_format);

    if let Err(error) = run(args.command) {
        eprintln!("error: {error:#}");
        process::exit(1);
    }
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::List => {
            for entry in catalog::ENTRIES {
                println!("{:<26} {}", entry.name, entry.summary);
            }
            Ok(())
        }
        Commands::Show { name, render } => {
            let entry = catalog::find(&name)
                .ok_or_else(|| anyhow!("unknown catalog entry '{name}' (see `tokenctl list`)"))?;
            let rendered = Rendered::build(entry);
            print(std::slice::from_ref(&rendered), render)?;
            if rendered.is_error() {
                bail!("catalog entry '{name}' failed to build");
            }
            Ok(())
        }
        Commands::Catalog { render } => {
            let rendered: Vec<Rendered> = catalog::ENTRIES.iter().map(Rendered::build).collect();
            let failures = rendered.iter().filter(|r| r.is_error()).count();
            info!(entries = rendered.len(), failures, "built catalog");
            print(&rendered, render)
        }
    }
}

fn print(rendered: &[Rendered], args: RenderArgs) -> anyhow::Result<()> {
    if args.json {
        let json = match rendered {
            [single] => serde_json::to_string_pretty(single),
            many => serde_json::to_string_pretty(many),
        }
        .context("serializing catalog output")?;
        println!("{json}");
    } else {
        for entry in rendered {
            println!("{}", entry.to_text(args));
        }
    }
    Ok(())
}
