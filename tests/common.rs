//! Common test utilities for the maze test suite.
//!
//! Grids are written as CSV lines, the way they come out of a spreadsheet.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use maze_sarsa::maze::MazeEnvironment;

/// Split CSV-style lines into a label table.
pub fn grid(lines: &[&str]) -> Vec<Vec<String>> {
    lines
        .iter()
        .map(|line| line.split(',').map(str::to_string).collect())
        .collect()
}

/// Build an environment from CSV-style lines, panicking on invalid grids.
pub fn env(lines: &[&str]) -> MazeEnvironment {
    MazeEnvironment::from_grid(&grid(lines)).expect("test grid should be valid")
}

/// Write CSV-style lines to `dir/name` and return the path.
pub fn write_grid(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut contents = lines.join("\n");
    contents.push('\n');
    std::fs::write(&path, contents).expect("failed to write test grid");
    path
}

/// 4x4 maze with a wall block, a trap and a numeric cell.
///
/// ```text
/// S . . .
/// . W W .
/// . 3 T .
/// . . . G
/// ```
pub const WALLED: &[&str] = &[
    "S,,,,",
    ",W,W,,",
    ",3,T,,",
    ",,,G,",
    ",,,,EOG",
];

/// Start directly left of the goal in a 2x2 crop.
pub const TWO_BY_TWO: &[&str] = &["S,G,", ",,", ",,EOG"];
