//! Observer port - abstraction for training observation and data collection
//!
//! Observers receive training events without the training loop knowing how
//! they are displayed or stored.

use crate::{
    Result,
    pipeline::EpisodeOutcome,
    types::{Position, Transition},
};

/// One committed step of an episode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepEvent {
    /// Step number within the episode (0-based)
    pub step_num: usize,
    /// The SARSA tuple that was learned from
    pub transition: Transition,
    /// Position after the step was committed
    pub position: Position,
}

/// Observer trait for monitoring training
///
/// # Event Sequence
///
/// 1. `on_training_start(total_episodes)` - once
/// 2. For each episode:
///    - `on_episode_start(episode, start_position)`
///    - `on_step(episode, event)` - after every committed step
///    - `on_episode_end(episode, outcome, steps)`
/// 3. `on_training_end()` - once
///
/// # Examples
///
/// ```no_run
/// use maze_sarsa::{pipeline::EpisodeOutcome, ports::Observer};
///
/// struct GoalCounter {
///     goals: usize,
/// }
///
/// impl Observer for GoalCounter {
///     fn on_episode_end(
///         &mut self,
///         _episode: usize,
///         outcome: EpisodeOutcome,
///         _steps: usize,
///     ) -> maze_sarsa::Result<()> {
///         if outcome == EpisodeOutcome::Goal {
///             self.goals += 1;
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Observer: Send {
    /// Called once before the first episode.
    fn on_training_start(&mut self, _total_episodes: usize) -> Result<()> {
        Ok(())
    }

    /// Called after the environment has been reset for an episode.
    fn on_episode_start(&mut self, _episode: usize, _start: Position) -> Result<()> {
        Ok(())
    }

    /// Called after each step is learned from and committed.
    fn on_step(&mut self, _episode: usize, _event: &StepEvent) -> Result<()> {
        Ok(())
    }

    /// Called when an episode reaches the goal, falls into a trap, or runs
    /// out of steps.
    fn on_episode_end(
        &mut self,
        _episode: usize,
        _outcome: EpisodeOutcome,
        _steps: usize,
    ) -> Result<()> {
        Ok(())
    }

    /// Called once after the last episode.
    fn on_training_end(&mut self) -> Result<()> {
        Ok(())
    }
}
