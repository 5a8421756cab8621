//! Costar CLI - degrees of separation from the command line.
//!
//! Costar loads a person/event record file into a collaboration graph and
//! answers shortest-connection queries: one-shot lookups, graph statistics,
//! or an interactive session.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

mod cli;

/// Costar: degrees-of-separation queries over collaboration graphs.
#[derive(Parser)]
#[command(name = "costar")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Record file with person and event lines
    #[arg(short, long, global = true, value_name = "FILE", default_value = "moviedata.txt")]
    data: PathBuf,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the shortest connection between two people
    Path {
        /// Starting person: "Firstname Lastname", or a raw `<a>`-prefixed id
        from: String,

        /// Destination person (defaults to Kevin Bacon)
        to: Option<String>,

        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show statistics for the loaded graph
    Stats {
        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive search session
    Repl,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Path { from, to, json } => cli::path::run(&cli.data, &from, to.as_deref(), json),
        Commands::Stats { json } => cli::stats::run(&cli.data, json),
        Commands::Repl => cli::repl::run(&cli.data),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {e}", "error".red().bold());
            // Show cause chain for nested errors
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                eprintln!("  {}: {cause}", "caused by".dimmed());
                source = std::error::Error::source(cause);
            }
            ExitCode::FAILURE
        }
    }
}
