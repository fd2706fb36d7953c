//! Subcommands of the `maze` binary

use std::path::Path;

use anyhow::{Context, Result};

use crate::{adapters::CsvGridSource, maze::MazeEnvironment, ports::GridSource};

pub mod inspect;
pub mod train;

/// Read and validate the maze stored at `path`.
pub(crate) fn load_maze(path: &Path, delimiter: char) -> Result<MazeEnvironment> {
    let delimiter = u8::try_from(delimiter)
        .with_context(|| format!("Delimiter '{delimiter}' is not a single-byte character"))?;
    let grid = CsvGridSource::new(path)
        .with_delimiter(delimiter)
        .read_grid()
        .with_context(|| format!("Failed to read grid {}", path.display()))?;
    MazeEnvironment::from_grid(&grid).with_context(|| format!("Invalid maze in {}", path.display()))
}
