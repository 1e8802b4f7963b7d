//! PatientHub docs navigation CLI.
//!
//! Provides commands for:
//! - `check`: Validate sidebars and resolve document ids against the docs directory
//! - `export`: Print validated sidebars in the rendering layer's format
//! - `list`: Print document ids in display order
//! - `site`: Print site title, tagline and sidebars for page views

mod commands;
mod docs_dir;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, ExportArgs, ListArgs, SiteArgs};
use output::Output;

/// PatientHub docs navigation tool.
#[derive(Parser)]
#[command(name = "ph", version, about)]
struct Cli {
    /// Enable verbose output (build summaries and duplicate id warnings).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate sidebars and check that every document exists.
    Check(CheckArgs),
    /// Print validated sidebars as JSON or YAML.
    Export(ExportArgs),
    /// Print document ids of a sidebar in display order.
    List(ListArgs),
    /// Print site metadata and sidebars for the rendering layer.
    Site(SiteArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info,ph_nav=debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(&output),
        Commands::Export(args) => args.execute(),
        Commands::List(args) => args.execute(),
        Commands::Site(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
