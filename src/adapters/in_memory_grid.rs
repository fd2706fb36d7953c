//! In-memory grid source for tests and embedded mazes.

use crate::{Result, ports::GridSource};

/// Grid source holding its table in memory.
///
/// # Examples
///
/// ```
/// use maze_sarsa::adapters::InMemoryGridSource;
/// use maze_sarsa::maze::MazeEnvironment;
/// use maze_sarsa::ports::GridSource;
///
/// let source = InMemoryGridSource::from_rows(&[
///     &["S", "G", ""],
///     &["", "", ""],
///     &["", "", "EOG"],
/// ]);
/// let env = MazeEnvironment::from_grid(&source.read_grid()?)?;
/// assert_eq!(env.state_count(), 4);
/// # Ok::<(), maze_sarsa::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryGridSource {
    rows: Vec<Vec<String>>,
}

impl InMemoryGridSource {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn from_rows(rows: &[&[&str]]) -> Self {
        Self {
            rows: rows
                .iter()
                .map(|row| row.iter().map(|cell| cell.to_string()).collect())
                .collect(),
        }
    }
}

impl GridSource for InMemoryGridSource {
    fn read_grid(&self) -> Result<Vec<Vec<String>>> {
        Ok(self.rows.clone())
    }
}
