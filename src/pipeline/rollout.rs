//! Greedy rollout of a trained policy
//!
//! After training, the learned table is frozen and one episode is replayed
//! from the start with ε = 0. The visited positions are what a renderer or
//! animation needs.

use serde::{Deserialize, Serialize};

use super::{
    learners::FrozenLearner,
    observers::PathObserver,
    training::{EpisodeOutcome, TrainingConfig, TrainingPipeline},
};
use crate::{Result, maze::MazeEnvironment, q_learning::SarsaAgent, types::Position};

/// Result of replaying the greedy policy once
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rollout {
    pub outcome: EpisodeOutcome,
    /// Start position followed by every committed position
    pub path: Vec<Position>,
    pub total_reward: f64,
}

impl Rollout {
    /// Replay the agent's greedy policy for at most `step_budget` steps.
    ///
    /// The agent itself is not modified. The environment is reset first and
    /// left at the final position of the rollout.
    pub fn run(
        env: &mut MazeEnvironment,
        agent: &SarsaAgent,
        step_budget: usize,
    ) -> Result<Rollout> {
        let mut learner = FrozenLearner::from_agent(agent);
        let recorder = PathObserver::new();
        let config = TrainingConfig {
            episodes: 1,
            step_budget,
            seed: None,
        };
        config.validate()?;

        let mut pipeline = TrainingPipeline::new(config).with_observer(Box::new(recorder.clone()));
        let report = pipeline.run_episode(0, env, &mut learner)?;

        Ok(Rollout {
            outcome: report.outcome,
            path: recorder.path(),
            total_reward: report.total_reward,
        })
    }

    /// Number of moves made
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}
