//! Training pipeline for maze learners

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    maze::MazeEnvironment,
    ports::{Learner, Observer, StepEvent},
    types::Transition,
};

/// How an episode ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EpisodeOutcome {
    /// Reached the goal cell
    Goal,
    /// Stepped onto a trap
    Trapped,
    /// Ran out of steps
    BudgetExhausted,
}

impl fmt::Display for EpisodeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EpisodeOutcome::Goal => "goal",
            EpisodeOutcome::Trapped => "trapped",
            EpisodeOutcome::BudgetExhausted => "timeout",
        };
        write!(f, "{label}")
    }
}

/// Training configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Number of episodes
    pub episodes: usize,

    /// Maximum steps per episode
    pub step_budget: usize,

    /// Random seed handed to the learner before the first episode
    pub seed: Option<u64>,
}

impl TrainingConfig {
    pub const DEFAULT_EPISODES: usize = 7000;
    pub const DEFAULT_STEP_BUDGET: usize = 150;

    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if either count is zero.
    pub fn validate(&self) -> Result<()> {
        if self.episodes == 0 {
            return Err(Error::InvalidConfiguration {
                message: "episode count must be positive".to_string(),
            });
        }
        if self.step_budget == 0 {
            return Err(Error::InvalidConfiguration {
                message: "step budget must be positive".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            episodes: Self::DEFAULT_EPISODES,
            step_budget: Self::DEFAULT_STEP_BUDGET,
            seed: None,
        }
    }
}

/// Summary of a single episode
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpisodeReport {
    pub outcome: EpisodeOutcome,
    /// Steps taken, including the terminal one
    pub steps: usize,
    /// Sum of rewards collected
    pub total_reward: f64,
}

/// Result of a training run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingResult {
    /// Total episodes played
    pub total_episodes: usize,

    /// Episodes that reached the goal
    pub goals: usize,

    /// Episodes that ended in a trap
    pub traps: usize,

    /// Episodes that ran out of steps
    pub timeouts: usize,

    pub goal_rate: f64,
    pub trap_rate: f64,
    pub timeout_rate: f64,

    /// Mean episode length over successful episodes
    pub mean_steps_to_goal: Option<f64>,

    /// Index of the first episode that reached the goal
    pub first_goal_episode: Option<usize>,
}

impl TrainingResult {
    /// Build a summary from per-episode reports, in episode order.
    pub fn from_reports(reports: &[EpisodeReport]) -> Self {
        let total_episodes = reports.len();
        let count = |outcome: EpisodeOutcome| reports.iter().filter(|r| r.outcome == outcome).count();
        let goals = count(EpisodeOutcome::Goal);
        let traps = count(EpisodeOutcome::Trapped);
        let timeouts = count(EpisodeOutcome::BudgetExhausted);

        let rate = |n: usize| {
            if total_episodes > 0 {
                n as f64 / total_episodes as f64
            } else {
                0.0
            }
        };

        let goal_steps: usize = reports
            .iter()
            .filter(|r| r.outcome == EpisodeOutcome::Goal)
            .map(|r| r.steps)
            .sum();
        let mean_steps_to_goal = (goals > 0).then(|| goal_steps as f64 / goals as f64);
        let first_goal_episode = reports
            .iter()
            .position(|r| r.outcome == EpisodeOutcome::Goal);

        Self {
            total_episodes,
            goals,
            traps,
            timeouts,
            goal_rate: rate(goals),
            trap_rate: rate(traps),
            timeout_rate: rate(timeouts),
            mean_steps_to_goal,
            first_goal_episode,
        }
    }

    /// Save result to JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load result from JSON file
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let result = serde_json::from_reader(file)?;
        Ok(result)
    }
}

/// Episode runner driving a learner through a maze
///
/// Each step follows the SARSA ordering: act, pick the next action from the
/// resulting state with the not-yet-updated table, learn, commit the new
/// state, then check for the goal and for traps.
pub struct TrainingPipeline {
    config: TrainingConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl TrainingPipeline {
    /// Create a new training pipeline
    pub fn new(config: TrainingConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the pipeline
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Run every configured episode. Only the learner's state carries over
    /// between episodes; the environment is reset at the start of each one.
    pub fn run(
        &mut self,
        env: &mut MazeEnvironment,
        learner: &mut dyn Learner,
    ) -> Result<TrainingResult> {
        self.config.validate()?;
        if let Some(seed) = self.config.seed {
            learner.set_rng_seed(seed)?;
        }

        for observer in &mut self.observers {
            observer.on_training_start(self.config.episodes)?;
        }

        let mut reports = Vec::with_capacity(self.config.episodes);
        for episode in 0..self.config.episodes {
            reports.push(self.run_episode(episode, env, learner)?);
        }

        for observer in &mut self.observers {
            observer.on_training_end()?;
        }

        Ok(TrainingResult::from_reports(&reports))
    }

    /// Play one episode from the start state.
    pub fn run_episode(
        &mut self,
        episode: usize,
        env: &mut MazeEnvironment,
        learner: &mut dyn Learner,
    ) -> Result<EpisodeReport> {
        env.reset();
        let start = env.current_position();
        for observer in &mut self.observers {
            observer.on_episode_start(episode, start)?;
        }

        let mut action = learner.select_action(env.current_state())?;
        let mut outcome = EpisodeOutcome::BudgetExhausted;
        let mut total_reward = 0.0;
        let mut steps = 0;

        for step_num in 0..self.config.step_budget {
            let state = env.current_state();
            let (reward, next_state) = env.step(action);
            let next_action = learner.select_action(next_state)?;

            let transition = Transition {
                state,
                action,
                reward,
                next_state,
                next_action,
            };
            learner.learn(&transition)?;
            env.set_state(next_state);
            action = next_action;

            total_reward += reward;
            steps = step_num + 1;

            let event = StepEvent {
                step_num,
                transition,
                position: env.current_position(),
            };
            for observer in &mut self.observers {
                observer.on_step(episode, &event)?;
            }

            if env.is_at_goal() {
                outcome = EpisodeOutcome::Goal;
                break;
            }
            if env.is_trapped() {
                outcome = EpisodeOutcome::Trapped;
                break;
            }
        }

        for observer in &mut self.observers {
            observer.on_episode_end(episode, outcome, steps)?;
        }

        Ok(EpisodeReport {
            outcome,
            steps,
            total_reward,
        })
    }
}
