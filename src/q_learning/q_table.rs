//! Q-table implementation for temporal difference learning

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    types::{Action, StateId},
};

/// Dense Q-table indexed by (state handle, action)
///
/// The state universe is fixed at construction; every row starts at zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QTable {
    /// One row of action values per state, columns in [`Action::ALL`] order
    q_values: Vec<[f64; Action::COUNT]>,
    /// Learning rate α
    learning_rate: f64,
    /// Discount factor γ
    discount_factor: f64,
}

impl QTable {
    /// Create a zeroed Q-table for `state_count` states
    pub fn new(state_count: usize, learning_rate: f64, discount_factor: f64) -> Self {
        Self {
            q_values: vec![[0.0; Action::COUNT]; state_count],
            learning_rate,
            discount_factor,
        }
    }

    fn row(&self, state: StateId) -> Result<&[f64; Action::COUNT]> {
        self.q_values.get(state.index()).ok_or(Error::UnknownState {
            state: state.index(),
            count: self.q_values.len(),
        })
    }

    /// Get Q-value for a state-action pair
    pub fn get(&self, state: StateId, action: Action) -> Result<f64> {
        Ok(self.row(state)?[action.index()])
    }

    /// Set Q-value for a state-action pair
    pub fn set(&mut self, state: StateId, action: Action, value: f64) -> Result<()> {
        let count = self.q_values.len();
        let row = self
            .q_values
            .get_mut(state.index())
            .ok_or(Error::UnknownState {
                state: state.index(),
                count,
            })?;
        row[action.index()] = value;
        Ok(())
    }

    /// All action values of a state, in [`Action::ALL`] order
    pub fn values(&self, state: StateId) -> Result<[f64; Action::COUNT]> {
        self.row(state).copied()
    }

    /// Greedy action for a state; ties go to the earliest action in [`Action::ALL`]
    pub fn greedy_action(&self, state: StateId) -> Result<Action> {
        let row = self.row(state)?;
        let mut best = Action::Up;
        for action in Action::ALL {
            if row[action.index()] > row[best.index()] {
                best = action;
            }
        }
        Ok(best)
    }

    /// SARSA update: on-policy TD control
    ///
    /// Q(s,a) ← (1-α)·Q(s,a) + α·(r + γ·Q(s',a'))
    pub fn sarsa_update(
        &mut self,
        state: StateId,
        action: Action,
        reward: f64,
        next_state: StateId,
        next_action: Action,
    ) -> Result<()> {
        let current_q = self.get(state, action)?;
        let next_q = self.get(next_state, next_action)?;
        let td_target = reward + self.discount_factor * next_q;
        let new_q = (1.0 - self.learning_rate) * current_q + self.learning_rate * td_target;
        self.set(state, action, new_q)
    }

    /// Zero every entry
    pub fn reset(&mut self) {
        self.q_values
            .iter_mut()
            .for_each(|row| *row = [0.0; Action::COUNT]);
    }

    /// Number of states covered by the table
    pub fn state_count(&self) -> usize {
        self.q_values.len()
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn discount_factor(&self) -> f64 {
        self.discount_factor
    }

    /// Tab-separated dump: an `action` header row, then one row per state.
    pub fn render(&self) -> String {
        let mut out = String::from("action");
        for action in Action::ALL {
            out.push('\t');
            out.push(action.to_char());
        }
        out.push('\n');
        for (index, row) in self.q_values.iter().enumerate() {
            out.push_str(&StateId::new(index).to_string());
            for value in row {
                out.push('\t');
                out.push_str(&format_significant(*value, 4));
            }
            out.push('\n');
        }
        out
    }
}

/// Format with at most `digits` significant digits, trailing zeros trimmed.
fn format_significant(value: f64, digits: usize) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }
    let magnitude = value.abs().log10().floor() as i64;
    let decimals = (digits as i64 - 1 - magnitude).max(0) as usize;
    let formatted = format!("{value:.decimals$}");
    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}
