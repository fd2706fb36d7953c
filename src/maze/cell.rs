//! Cell attributes and label classification

use std::fmt;

use serde::{Deserialize, Serialize};

/// Attribute of a single maze cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Wall,
    Start,
    Goal,
    Trap,
    /// Reward cell worth 1 to 9
    Numeric(u8),
    /// Blank cell, rewarded like `Numeric(1)`
    Empty,
}

impl Cell {
    /// Classify a raw label. Blank input is `Empty`; unknown labels are `None`.
    ///
    /// Spreadsheet exports often write integers as `3.0`, so integral floats
    /// in range are accepted as numeric cells too.
    pub fn from_label(label: &str) -> Option<Cell> {
        let label = label.trim();
        match label {
            "" => Some(Cell::Empty),
            "S" => Some(Cell::Start),
            "G" => Some(Cell::Goal),
            "W" => Some(Cell::Wall),
            "T" => Some(Cell::Trap),
            _ => {
                if let Ok(n) = label.parse::<u8>() {
                    return (1..=9).contains(&n).then_some(Cell::Numeric(n));
                }
                let value = label.parse::<f64>().ok()?;
                (value.fract() == 0.0 && (1.0..=9.0).contains(&value))
                    .then(|| Cell::Numeric(value as u8))
            }
        }
    }

    /// Reward for successfully moving into this cell.
    ///
    /// Walls are never entered; the transition function charges the bump
    /// penalty before this is consulted.
    pub fn entry_reward(self) -> f64 {
        match self {
            Cell::Goal => 100.0,
            Cell::Trap => -100.0,
            Cell::Start | Cell::Empty => 1.0,
            Cell::Numeric(n) => f64::from(n),
            Cell::Wall => -1.0,
        }
    }

    pub fn is_passable(self) -> bool {
        !matches!(self, Cell::Wall)
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Wall => 'W',
            Cell::Start => 'S',
            Cell::Goal => 'G',
            Cell::Trap => 'T',
            Cell::Numeric(1) | Cell::Empty => '.',
            Cell::Numeric(n) => char::from(b'0' + n),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
