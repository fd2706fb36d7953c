//! Grid source port for loading raw maze tables.

use crate::Result;

/// Port for reading a raw maze description.
///
/// Implementations return the table row by row, one string per cell. They
/// do no validation; that is [`crate::maze::Layout::parse`]'s job.
///
/// # Examples
///
/// ```no_run
/// use maze_sarsa::{maze::MazeEnvironment, ports::GridSource};
///
/// fn load<G: GridSource>(source: &G) -> maze_sarsa::Result<MazeEnvironment> {
///     let table = source.read_grid()?;
///     MazeEnvironment::from_grid(&table)
/// }
/// ```
pub trait GridSource {
    /// Read the full table, including anything past the end-of-grid marker.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying source cannot be read or decoded.
    fn read_grid(&self) -> Result<Vec<Vec<String>>>;
}
