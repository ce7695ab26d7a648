//! xo - terminal front end for the tic-tac-toe engine
//!
//! Subcommands:
//! - play an interactive session against any mix of humans and bots
//! - simulate series between automated tiers
//! - solve the game and inspect solver ranks

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "xo")]
#[command(version, about = "Tic-tac-toe with three automated opponent tiers", long_about = None)]
struct Cli {
    /// Log at info level unless RUST_LOG says otherwise
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive session
    Play(xo::cli::commands::play::PlayArgs),

    /// Play a series between two automated seats
    Simulate(xo::cli::commands::simulate::SimulateArgs),

    /// Build the solver table and report statistics
    Solve(xo::cli::commands::solve::SolveArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Play(args) => xo::cli::commands::play::execute(args),
        Commands::Simulate(args) => xo::cli::commands::simulate::execute(args),
        Commands::Solve(args) => xo::cli::commands::solve::execute(args),
    }
}
