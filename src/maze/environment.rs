//! Maze environment: the deterministic MDP built from a layout

use std::fmt;

use super::{cell::Cell, layout::Layout};
use crate::{
    Result,
    types::{Action, Position, StateId},
};

/// Penalty for bumping into a wall or the edge of the grid.
pub const BUMP_REWARD: f64 = -1.0;

/// Grid maze as a finite Markov decision process.
///
/// Every non-wall cell is a state. The environment is the only owner of the
/// current state; it changes through [`reset`](Self::reset) and
/// [`set_state`](Self::set_state) and nothing else. [`step`](Self::step) is a
/// pure query, so a training loop decides when a transition is committed.
#[derive(Debug, Clone)]
pub struct MazeEnvironment {
    layout: Layout,
    positions: Vec<Position>,
    /// Row-major lookup from cell to state; `None` for walls
    state_grid: Vec<Option<StateId>>,
    start: StateId,
    goal: StateId,
    current: StateId,
}

impl MazeEnvironment {
    /// Build the environment for a validated layout.
    ///
    /// States are numbered in column-major order over the non-wall cells.
    pub fn new(layout: Layout) -> Self {
        let mut positions = Vec::with_capacity(layout.passable_count());
        let mut state_grid = vec![None; layout.rows() * layout.cols()];
        for position in layout.positions_column_major() {
            if layout.get(position).is_some_and(Cell::is_passable) {
                let state = StateId::new(positions.len());
                positions.push(position);
                state_grid[position.row * layout.cols() + position.col] = Some(state);
            }
        }

        let lookup = |position: Position| state_grid[position.row * layout.cols() + position.col];
        // Start and goal cells are never walls, so both lookups succeed.
        let start = lookup(layout.start()).unwrap_or(StateId::new(0));
        let goal = lookup(layout.goal()).unwrap_or(StateId::new(0));

        Self {
            layout,
            positions,
            state_grid,
            start,
            goal,
            current: start,
        }
    }

    /// Parse a raw label table and build the environment in one go.
    pub fn from_grid<R, S>(table: &[R]) -> Result<Self>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        Ok(Self::new(Layout::parse(table)?))
    }

    /// Move back to the start state.
    pub fn reset(&mut self) {
        self.current = self.start;
    }

    pub fn current_state(&self) -> StateId {
        self.current
    }

    pub fn current_position(&self) -> Position {
        self.positions[self.current.index()]
    }

    /// Attribute of the cell at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` lies outside the layout.
    pub fn cell_attribute(&self, position: Position) -> Cell {
        match self.layout.get(position) {
            Some(cell) => cell,
            None => panic!(
                "position {position} outside {}x{} maze",
                self.layout.rows(),
                self.layout.cols()
            ),
        }
    }

    /// Force the current state. Unknown states are ignored.
    pub fn set_state(&mut self, state: StateId) {
        if state.index() < self.positions.len() {
            self.current = state;
        }
    }

    /// Outcome of taking `action` from the current state: `(reward, next_state)`.
    ///
    /// Leaving the grid or walking into a wall keeps the state and costs
    /// [`BUMP_REWARD`]. Otherwise the reward is that of the destination cell.
    /// The current state is left untouched.
    pub fn step(&self, action: Action) -> (f64, StateId) {
        let destination = self
            .current_position()
            .offset(action, self.layout.rows(), self.layout.cols())
            .and_then(|position| self.state_at(position));

        match destination {
            Some(next) => {
                let cell = self.cell_attribute(self.positions[next.index()]);
                (cell.entry_reward(), next)
            }
            None => (BUMP_REWARD, self.current),
        }
    }

    pub fn is_at_goal(&self) -> bool {
        self.current == self.goal
    }

    pub fn is_trapped(&self) -> bool {
        self.cell_attribute(self.current_position()) == Cell::Trap
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn state_count(&self) -> usize {
        self.positions.len()
    }

    /// All states in handle order.
    pub fn states(&self) -> impl Iterator<Item = StateId> + '_ {
        (0..self.positions.len()).map(StateId::new)
    }

    /// The fixed action set.
    pub fn actions(&self) -> &'static [Action] {
        &Action::ALL
    }

    pub fn start_state(&self) -> StateId {
        self.start
    }

    pub fn goal_state(&self) -> StateId {
        self.goal
    }

    pub fn position_of(&self, state: StateId) -> Option<Position> {
        self.positions.get(state.index()).copied()
    }

    /// State occupying `position`, or `None` for walls and outside coordinates.
    pub fn state_at(&self, position: Position) -> Option<StateId> {
        if position.row < self.layout.rows() && position.col < self.layout.cols() {
            self.state_grid[position.row * self.layout.cols() + position.col]
        } else {
            None
        }
    }

    /// Render the layout with `path` marked by `*` (start and goal keep their glyphs).
    pub fn render_path(&self, path: &[Position]) -> String {
        let mut out = String::new();
        for row in 0..self.layout.rows() {
            let line: Vec<String> = (0..self.layout.cols())
                .map(|col| {
                    let position = Position { row, col };
                    let cell = self.cell_attribute(position);
                    if path.contains(&position) && !matches!(cell, Cell::Start | Cell::Goal) {
                        "*".to_string()
                    } else {
                        cell.to_char().to_string()
                    }
                })
                .collect();
            out.push_str(&line.join(" "));
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for MazeEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===== Grid Maze World =====")?;
        write!(f, "{}", self.layout)?;
        write!(f, "===========================")
    }
}
