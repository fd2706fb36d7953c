//! SARSA agent
//!
//! Tabular on-policy TD control with ε-greedy exploration over the four
//! maze moves.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    Result,
    ports::Learner,
    q_learning::{config::SarsaConfig, q_table::QTable},
    types::{Action, StateId, Transition},
};

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// SARSA agent (on-policy TD control)
///
/// Learns Q^π for the ε-greedy policy it follows. The bootstrap target uses
/// the action the policy actually picked for the next state, which is what
/// separates it from Q-learning.
#[derive(Debug, Clone)]
pub struct SarsaAgent {
    q_table: QTable,
    epsilon: f64,
    rng: StdRng,
    rng_seed: Option<u64>,
}

impl SarsaAgent {
    /// Create a SARSA agent for a universe of `state_count` states.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfiguration`] if a hyperparameter is out of range.
    pub fn new(state_count: usize, config: SarsaConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            q_table: QTable::new(state_count, config.alpha, config.gamma),
            epsilon: config.epsilon,
            rng: build_rng(config.seed),
            rng_seed: config.seed,
        })
    }

    /// ε-greedy action selection
    ///
    /// Draws one uniform value; at or above ε the greedy action is returned,
    /// otherwise a second draw picks one of the four actions uniformly. Moves
    /// into walls or off the grid are allowed here and resolved by the maze.
    pub fn select_action(&mut self, state: StateId) -> Result<Action> {
        let greedy = self.q_table.greedy_action(state)?;
        if self.rng.random::<f64>() >= self.epsilon {
            Ok(greedy)
        } else {
            Ok(Action::ALL[self.rng.random_range(0..Action::COUNT)])
        }
    }

    /// Apply the SARSA update for one experience tuple.
    pub fn update(
        &mut self,
        state: StateId,
        action: Action,
        reward: f64,
        next_state: StateId,
        next_action: Action,
    ) -> Result<()> {
        self.q_table
            .sarsa_update(state, action, reward, next_state, next_action)
    }

    /// Human-readable snapshot of every Q-value.
    pub fn dump_table(&self) -> String {
        self.q_table.render()
    }

    pub fn q_table(&self) -> &QTable {
        &self.q_table
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Greedy action for every state, in handle order.
    pub fn greedy_policy(&self) -> Result<Vec<Action>> {
        (0..self.q_table.state_count())
            .map(|index| self.q_table.greedy_action(StateId::new(index)))
            .collect()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self.rng_seed = Some(seed);
        self
    }

    fn reset_rng(&mut self) {
        self.rng = build_rng(self.rng_seed);
    }
}

impl Learner for SarsaAgent {
    fn select_action(&mut self, state: StateId) -> Result<Action> {
        SarsaAgent::select_action(self, state)
    }

    fn learn(&mut self, transition: &Transition) -> Result<()> {
        self.update(
            transition.state,
            transition.action,
            transition.reward,
            transition.next_state,
            transition.next_action,
        )
    }

    fn name(&self) -> &str {
        "SARSA"
    }

    fn reset(&mut self) -> Result<()> {
        self.q_table.reset();
        self.reset_rng();
        Ok(())
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        self.rng_seed = Some(seed);
        Ok(())
    }
}
