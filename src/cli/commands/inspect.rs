//! Inspect command - validates a grid and shows the states it defines

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::cli::{
    commands::load_maze,
    output::{print_kv, print_section},
};

#[derive(Parser, Debug)]
#[command(about = "Validate a maze grid and list its states")]
pub struct InspectArgs {
    /// Maze grid as a header-less CSV file
    pub grid: PathBuf,

    /// Field delimiter of the grid file
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,
}

/// Execute the inspect command
pub fn execute(args: InspectArgs) -> Result<()> {
    let env = load_maze(&args.grid, args.delimiter)?;

    println!("{env}");

    print_section("Maze");
    print_kv("Rows", &env.layout().rows().to_string());
    print_kv("Columns", &env.layout().cols().to_string());
    print_kv("States", &env.state_count().to_string());
    print_kv("Start", &format!("{} at {}", env.start_state(), env.layout().start()));
    print_kv("Goal", &format!("{} at {}", env.goal_state(), env.layout().goal()));

    print_section("States");
    for state in env.states() {
        if let Some(position) = env.position_of(state) {
            println!(
                "  {:>6}  {:<10} {}",
                state.to_string(),
                position.to_string(),
                env.cell_attribute(position)
            );
        }
    }

    Ok(())
}
