//! Maze CLI - SARSA learning on spreadsheet-drawn grid mazes
//!
//! This CLI provides:
//! - Validation and inspection of maze grids
//! - SARSA training with a textual progress log
//! - Greedy rollout of the learned policy

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "maze")]
#[command(version, about = "SARSA learning on grid mazes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train a SARSA agent on a maze
    Train(Box<maze_sarsa::cli::commands::train::TrainArgs>),

    /// Validate a maze grid and list its states
    Inspect(maze_sarsa::cli::commands::inspect::InspectArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Train(args) => maze_sarsa::cli::commands::train::execute(*args),
        Commands::Inspect(args) => maze_sarsa::cli::commands::inspect::execute(args),
    }
}
