//! topflow CLI — translate design descriptions into dataflow graphs.
//!
//! Provides `topflow export` to write the dataflow-graph JSON consumed by
//! the node-graph editor front-end, and `topflow check` to validate a
//! design against a node catalog and report diagnostics.

#![warn(missing_docs)]

mod check;
mod export;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

/// topflow — design-description to dataflow-graph translation.
#[derive(Parser, Debug)]
#[command(name = "topflow", version, about = "topflow design translator")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose (debug-level) output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Control colored output.
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Translate a design description into a dataflow-graph JSON document.
    Export(ExportArgs),
    /// Load and translate a design, reporting diagnostics without output.
    Check(CheckArgs),
}

/// Arguments for the `topflow export` subcommand.
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Path to the design description YAML.
    #[arg(short, long)]
    pub design: PathBuf,

    /// Path to the node catalog (JSON, or YAML by extension).
    #[arg(short, long)]
    pub spec: PathBuf,

    /// Output file for the dataflow JSON. Writes to stdout if omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `topflow check` subcommand.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Path to the design description YAML.
    #[arg(short, long)]
    pub design: PathBuf,

    /// Path to the node catalog (JSON, or YAML by extension).
    #[arg(short, long)]
    pub spec: PathBuf,
}

/// Controls whether colored output is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Detect from terminal capabilities.
    Auto,
    /// Always produce colored output.
    Always,
    /// Never produce colored output.
    Never,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print verbose/debug information.
    pub verbose: bool,
    /// Whether to use colored output.
    pub color: bool,
}

fn main() {
    let cli = Cli::parse();

    let color = match cli.color {
        ColorChoice::Auto => std::env::var("TERM").is_ok(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        color,
    };

    let result = match cli.command {
        Command::Export(ref args) => export::run(args, &global),
        Command::Check(ref args) => check::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
