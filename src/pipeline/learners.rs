//! Non-adaptive learner implementations
//!
//! These drive the same episode loop as [`SarsaAgent`](crate::q_learning::SarsaAgent)
//! but never change: a greedy policy frozen from a trained table, and a
//! fixed script of moves.

use crate::{
    Error, Result,
    ports::Learner,
    q_learning::{QTable, SarsaAgent},
    types::{Action, StateId},
};

/// Greedy policy over a snapshot of a Q-table (ε = 0, no updates)
#[derive(Debug, Clone)]
pub struct FrozenLearner {
    name: String,
    q_table: QTable,
}

impl FrozenLearner {
    pub fn new(name: impl Into<String>, q_table: QTable) -> Self {
        Self {
            name: name.into(),
            q_table,
        }
    }

    /// Freeze the current table of a trained agent.
    pub fn from_agent(agent: &SarsaAgent) -> Self {
        Self::new(format!("Frozen-{}", Learner::name(agent)), agent.q_table().clone())
    }

    pub fn q_table(&self) -> &QTable {
        &self.q_table
    }
}

impl Learner for FrozenLearner {
    fn select_action(&mut self, state: StateId) -> Result<Action> {
        self.q_table.greedy_action(state)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Plays a fixed sequence of actions, one per selection
///
/// Useful for replaying a known path or forcing a particular move. Running
/// past the end of the script is an error.
#[derive(Debug, Clone)]
pub struct ScriptedLearner {
    actions: Vec<Action>,
    cursor: usize,
}

impl ScriptedLearner {
    pub fn new(actions: Vec<Action>) -> Self {
        Self { actions, cursor: 0 }
    }

    /// Build a script from move letters such as `"RRDD"`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] for any character other than
    /// `U`, `D`, `L` or `R` (case-insensitive).
    pub fn parse(script: &str) -> Result<Self> {
        let actions = script
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| {
                Action::from_char(c).ok_or_else(|| Error::InvalidConfiguration {
                    message: format!("unknown move '{c}' in script (expected U, D, L or R)"),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(actions))
    }

    /// Number of actions handed out so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl Learner for ScriptedLearner {
    fn select_action(&mut self, _state: StateId) -> Result<Action> {
        let action = self
            .actions
            .get(self.cursor)
            .copied()
            .ok_or(Error::ScriptExhausted {
                consumed: self.cursor,
            })?;
        self.cursor += 1;
        Ok(action)
    }

    fn name(&self) -> &str {
        "Scripted"
    }

    fn reset(&mut self) -> Result<()> {
        self.cursor = 0;
        Ok(())
    }
}
