//! Newtype wrappers for improved type safety and domain modeling.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell coordinate inside the maze layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Neighbouring coordinate one step in `action`'s direction.
    ///
    /// Returns `None` when the move would leave a `rows` x `cols` rectangle.
    pub fn offset(self, action: Action, rows: usize, cols: usize) -> Option<Position> {
        let (row, col) = match action {
            Action::Up => (self.row.checked_sub(1)?, self.col),
            Action::Down => (self.row + 1, self.col),
            Action::Left => (self.row, self.col.checked_sub(1)?),
            Action::Right => (self.row, self.col + 1),
        };
        (row < rows && col < cols).then_some(Position { row, col })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Position { row, col }
    }
}

/// Dense handle for a non-wall cell of one layout.
///
/// Handles are assigned in column-major order starting at zero and are only
/// meaningful for the layout that produced them. They print as `s1`, `s2`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StateId(usize);

impl StateId {
    pub fn new(index: usize) -> Self {
        StateId(index)
    }

    /// Get the inner index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s{}", self.0 + 1)
    }
}

/// One of the four moves available in every state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
}

impl Action {
    /// Every action, in the order used for tie-breaking and table columns.
    pub const ALL: [Action; 4] = [Action::Up, Action::Down, Action::Left, Action::Right];

    pub const COUNT: usize = 4;

    pub fn index(self) -> usize {
        match self {
            Action::Up => 0,
            Action::Down => 1,
            Action::Left => 2,
            Action::Right => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Action> {
        Action::ALL.get(index).copied()
    }

    pub fn to_char(self) -> char {
        match self {
            Action::Up => 'U',
            Action::Down => 'D',
            Action::Left => 'L',
            Action::Right => 'R',
        }
    }

    pub fn from_char(c: char) -> Option<Action> {
        match c.to_ascii_uppercase() {
            'U' => Some(Action::Up),
            'D' => Some(Action::Down),
            'L' => Some(Action::Left),
            'R' => Some(Action::Right),
            _ => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// One SARSA experience tuple (s, a, r, s', a').
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub state: StateId,
    pub action: Action,
    pub reward: f64,
    pub next_state: StateId,
    pub next_action: Action,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_stays_inside_rectangle() {
        let corner = Position::new(0, 0);
        assert_eq!(corner.offset(Action::Up, 3, 3), None);
        assert_eq!(corner.offset(Action::Left, 3, 3), None);
        assert_eq!(corner.offset(Action::Down, 3, 3), Some(Position::new(1, 0)));
        assert_eq!(corner.offset(Action::Right, 3, 3), Some(Position::new(0, 1)));

        let far = Position::new(2, 2);
        assert_eq!(far.offset(Action::Down, 3, 3), None);
        assert_eq!(far.offset(Action::Right, 3, 3), None);
    }

    #[test]
    fn test_action_index_round_trip_matches_order() {
        for (i, action) in Action::ALL.iter().enumerate() {
            assert_eq!(action.index(), i);
            assert_eq!(Action::from_index(i), Some(*action));
        }
        assert_eq!(Action::from_index(4), None);
    }

    #[test]
    fn test_state_id_display_is_one_based() {
        assert_eq!(StateId::new(0).to_string(), "s1");
        assert_eq!(StateId::new(11).to_string(), "s12");
    }
}
