//! Training pipeline abstractions
//!
//! This module provides:
//! - The SARSA episode loop over a maze environment
//! - Non-adaptive learners (frozen greedy policy, scripted moves)
//! - Observers for progress display, logs and metrics
//! - Greedy rollout of a trained agent

pub mod learners;
pub mod observers;
pub mod rollout;
pub mod training;

pub use learners::{FrozenLearner, ScriptedLearner};
pub use observers::{
    EpisodeLogObserver, EpisodeRecord, JsonlObserver, MetricsObserver, MetricsSummary,
    PathObserver, ProgressObserver,
};
pub use rollout::Rollout;
pub use training::{EpisodeOutcome, EpisodeReport, TrainingConfig, TrainingPipeline, TrainingResult};

pub use crate::ports::{Learner, Observer};
