//! Learner port - abstraction over action-selecting agents
//!
//! The training loop only talks to agents through this trait, so the same
//! loop drives a learning SARSA agent, a frozen greedy policy, or a fixed
//! script of moves.

use crate::{
    Result,
    types::{Action, StateId, Transition},
};

/// Learner trait - unified interface for maze agents
///
/// # Examples
///
/// ```no_run
/// use maze_sarsa::{
///     maze::MazeEnvironment,
///     ports::Learner,
/// };
///
/// fn first_move<L: Learner>(agent: &mut L, env: &MazeEnvironment) -> maze_sarsa::Result<()> {
///     let action = agent.select_action(env.current_state())?;
///     let (reward, next_state) = env.step(action);
///     println!("{action} -> {next_state} ({reward})");
///     Ok(())
/// }
/// ```
pub trait Learner: Send {
    /// Select an action for the given state.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnknownState`] if the state is outside the
    /// learner's state universe.
    fn select_action(&mut self, state: StateId) -> Result<Action>;

    /// Learn from one (s, a, r, s', a') tuple.
    ///
    /// Called by the training loop after the next action has been chosen and
    /// before the next state is committed.
    ///
    /// # Default Implementation
    ///
    /// Does nothing, suitable for non-adaptive policies.
    fn learn(&mut self, _transition: &Transition) -> Result<()> {
        Ok(())
    }

    /// Get the learner's name.
    ///
    /// Used for identification in logs and summaries.
    fn name(&self) -> &str;

    /// Reset learner state to initial conditions.
    ///
    /// # Default Implementation
    ///
    /// Does nothing, suitable for stateless learners.
    fn reset(&mut self) -> Result<()> {
        Ok(())
    }

    /// Seed the learner's internal random number generator.
    ///
    /// Training pipelines call this when configured with a seed.
    ///
    /// # Default Implementation
    ///
    /// Does nothing and returns `Ok(())`.
    fn set_rng_seed(&mut self, _seed: u64) -> Result<()> {
        Ok(())
    }
}
