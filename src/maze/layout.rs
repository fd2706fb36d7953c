//! Grid description parsing and validation

use std::fmt;

use super::cell::Cell;
use crate::{Error, Result, types::Position};

/// Label of the end-of-grid marker.
pub const SENTINEL: &str = "EOG";

/// Validated, immutable maze rectangle.
///
/// Cells are stored row-major. A layout always contains exactly one start and
/// exactly one goal cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    start: Position,
    goal: Position,
}

impl Layout {
    /// Parse a raw table of labels into a layout.
    ///
    /// Rows may have different lengths; missing cells count as blank. The
    /// `EOG` marker is searched for in the whole table, and only the
    /// rectangle strictly above and to the left of it is kept.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingSentinel`] / [`Error::AmbiguousSentinel`] unless exactly one `EOG` exists
    /// - [`Error::DegenerateGrid`] if the marker sits in the first row or column
    /// - [`Error::InvalidCellLabel`] for an unrecognised label inside the rectangle
    /// - [`Error::MissingStart`] / [`Error::AmbiguousStart`] unless exactly one `S` exists
    /// - [`Error::MissingGoal`] / [`Error::AmbiguousGoal`] unless exactly one `G` exists
    pub fn parse<R, S>(table: &[R]) -> Result<Layout>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let sentinel = locate_sentinel(table)?;
        if sentinel.row == 0 || sentinel.col == 0 {
            return Err(Error::DegenerateGrid {
                row: sentinel.row,
                col: sentinel.col,
            });
        }

        let (rows, cols) = (sentinel.row, sentinel.col);
        let mut cells = Vec::with_capacity(rows * cols);
        for (row, raw_row) in table.iter().take(rows).enumerate() {
            let raw_row = raw_row.as_ref();
            for col in 0..cols {
                let label = raw_row.get(col).map(AsRef::as_ref).unwrap_or("");
                let cell = Cell::from_label(label).ok_or_else(|| Error::InvalidCellLabel {
                    row,
                    col,
                    label: label.to_string(),
                })?;
                cells.push(cell);
            }
        }

        let start = match find_unique(&cells, rows, cols, Cell::Start) {
            (_, 0) => return Err(Error::MissingStart),
            (Some(position), 1) => position,
            (_, count) => return Err(Error::AmbiguousStart { count }),
        };
        let goal = match find_unique(&cells, rows, cols, Cell::Goal) {
            (_, 0) => return Err(Error::MissingGoal),
            (Some(position), 1) => position,
            (_, count) => return Err(Error::AmbiguousGoal { count }),
        };

        Ok(Layout {
            rows,
            cols,
            cells,
            start,
            goal,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell at `position`, or `None` outside the rectangle.
    pub fn get(&self, position: Position) -> Option<Cell> {
        if position.row < self.rows && position.col < self.cols {
            Some(self.cells[position.row * self.cols + position.col])
        } else {
            None
        }
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    /// All coordinates in column-major order (column outer, row inner).
    pub fn positions_column_major(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.cols).flat_map(move |col| (0..self.rows).map(move |row| Position { row, col }))
    }

    /// Number of non-wall cells.
    pub fn passable_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_passable()).count()
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            let line: Vec<String> = row.iter().map(|cell| cell.to_char().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

fn locate_sentinel<R, S>(table: &[R]) -> Result<Position>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut found = None;
    let mut count = 0;
    for (row, raw_row) in table.iter().enumerate() {
        for (col, label) in raw_row.as_ref().iter().enumerate() {
            if label.as_ref().trim() == SENTINEL {
                count += 1;
                found.get_or_insert(Position { row, col });
            }
        }
    }
    match (found, count) {
        (Some(position), 1) => Ok(position),
        (None, _) => Err(Error::MissingSentinel),
        (_, count) => Err(Error::AmbiguousSentinel { count }),
    }
}

/// First match in column-major order together with the total match count.
fn find_unique(
    cells: &[Cell],
    rows: usize,
    cols: usize,
    target: Cell,
) -> (Option<Position>, usize) {
    let mut first = None;
    let mut count = 0;
    for col in 0..cols {
        for row in 0..rows {
            if cells[row * cols + col] == target {
                count += 1;
                first.get_or_insert(Position { row, col });
            }
        }
    }
    (first, count)
}
