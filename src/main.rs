//! Arbor CLI - evolve programs for the bundled problem instances.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

/// Arbor - a tree-based genetic programming engine
#[derive(Parser, Debug)]
#[command(name = "arbor")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Evolve a foraging program for an ant trail
    Ant {
        /// Trail file (RxC header, `1` marks food)
        #[arg(required = true)]
        trail: std::path::PathBuf,

        /// Engine configuration JSON file (default: built-in defaults)
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Random seed (overrides the configuration)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Move budget per simulation (default: 600)
        #[arg(short, long)]
        moves: Option<usize>,

        /// Save the best program to a file
        #[arg(long)]
        save: Option<std::path::PathBuf>,

        /// Report every new all-time best
        #[arg(short, long)]
        verbose: bool,
    },

    /// Evolve an expression fitting a numeric dataset
    Regress {
        /// Dataset file (header line, whitespace-separated samples)
        #[arg(required = true)]
        dataset: std::path::PathBuf,

        /// Engine configuration JSON file (default: built-in defaults)
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Random seed (overrides the configuration)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Allowed functions, comma-separated (default: all)
        #[arg(short, long, value_delimiter = ',')]
        functions: Vec<String>,

        /// Allow random constants drawn from MIN..=MAX
        #[arg(long, num_args = 2, value_names = ["MIN", "MAX"])]
        constants: Option<Vec<f64>>,

        /// Save the best expression to a file
        #[arg(long)]
        save: Option<std::path::PathBuf>,

        /// Report every new all-time best
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match args.command {
        Commands::Ant {
            trail,
            config,
            seed,
            moves,
            save,
            verbose,
        } => cli::ant::execute(&trail, config.as_deref(), seed, moves, save.as_deref(), verbose),

        Commands::Regress {
            dataset,
            config,
            seed,
            functions,
            constants,
            save,
            verbose,
        } => cli::regress::execute(
            &dataset,
            config.as_deref(),
            seed,
            &functions,
            constants.as_deref(),
            save.as_deref(),
            verbose,
        ),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
