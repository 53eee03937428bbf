//! Command line argument parsing for the Wayfinder CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Wayfinder - a natural-language query router for retail assistants
#[derive(Parser, Debug, Clone)]
#[command(name = "wayfinder")]
#[command(about = "Route retail queries to location or information intents")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct WayfinderArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl WayfinderArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Route a query against a catalog
    Route(RouteArgs),

    /// Route a query and explain the decision
    Explain(RouteArgs),
}

/// Arguments shared by the route and explain commands
#[derive(clap::Args, Debug, Clone)]
pub struct RouteArgs {
    /// Path to a JSON catalog file (array of entries)
    #[arg(short, long, env = "WAYFINDER_CATALOG")]
    pub catalog: PathBuf,

    /// Optional JSON keyword dictionary replacing the built-in vocabulary
    #[arg(short, long)]
    pub keywords: Option<PathBuf>,

    /// Optional JSON router configuration
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// The query to route
    pub query: Vec<String>,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
