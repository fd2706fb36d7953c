//! Observer implementations for training pipelines
//!
//! Observers allow composable data collection during training without coupling
//! the episode loop to specific output formats.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
    sync::{Arc, Mutex, PoisonError},
};

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    pipeline::training::EpisodeOutcome,
    ports::{Observer, StepEvent},
    types::Position,
};

/// Progress bar observer - Shows training progress
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    goals: usize,
    traps: usize,
    timeouts: usize,
}

impl ProgressObserver {
    /// Create a new progress observer
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            goals: 0,
            traps: 0,
            timeouts: 0,
        }
    }

    fn message(&self) -> String {
        format!("{} T:{} -:{}", self.goals, self.traps, self.timeouts)
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_training_start(&mut self, total_episodes: usize) -> Result<()> {
        let pb = ProgressBar::new(total_episodes as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} episodes (G:{msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_episode_end(
        &mut self,
        episode: usize,
        outcome: EpisodeOutcome,
        _steps: usize,
    ) -> Result<()> {
        match outcome {
            EpisodeOutcome::Goal => self.goals += 1,
            EpisodeOutcome::Trapped => self.traps += 1,
            EpisodeOutcome::BudgetExhausted => self.timeouts += 1,
        }

        if let Some(pb) = &self.progress_bar {
            pb.set_position(episode as u64 + 1);
            pb.set_message(self.message());
        }
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.message());
        }
        Ok(())
    }
}

/// Text log observer - the episode-by-episode progress log
///
/// Writes a banner every `interval` episodes and a line for every episode
/// that ends at the goal or in a trap. Timeouts are silent.
pub struct EpisodeLogObserver<W: Write + Send> {
    writer: W,
    interval: usize,
    log_outcomes: bool,
}

impl EpisodeLogObserver<io::Stdout> {
    /// Log to standard output
    pub fn stdout(interval: usize) -> Self {
        Self::new(io::stdout(), interval)
    }
}

impl<W: Write + Send> EpisodeLogObserver<W> {
    /// Create a log observer; an `interval` of zero disables banners.
    pub fn new(writer: W, interval: usize) -> Self {
        Self {
            writer,
            interval,
            log_outcomes: true,
        }
    }

    /// Toggle the per-episode goal/trap lines
    pub fn with_outcomes(mut self, log_outcomes: bool) -> Self {
        self.log_outcomes = log_outcomes;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> Observer for EpisodeLogObserver<W> {
    fn on_episode_start(&mut self, episode: usize, _start: Position) -> Result<()> {
        if self.interval > 0 && episode.is_multiple_of(self.interval) {
            writeln!(self.writer, "---------- episode:{episode} -------------")?;
        }
        Ok(())
    }

    fn on_episode_end(
        &mut self,
        episode: usize,
        outcome: EpisodeOutcome,
        steps: usize,
    ) -> Result<()> {
        if !self.log_outcomes {
            return Ok(());
        }
        match outcome {
            EpisodeOutcome::Goal => {
                writeln!(self.writer, "Goal! at episode {episode} ({steps} steps)")?
            }
            EpisodeOutcome::Trapped => {
                writeln!(self.writer, "!! Trapped !! at episode {episode} ({steps} steps)")?
            }
            EpisodeOutcome::BudgetExhausted => {}
        }
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Summary of training metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub total_episodes: usize,
    pub goals: usize,
    pub traps: usize,
    pub timeouts: usize,
    pub avg_episode_length: f64,
    pub avg_reward: f64,
}

/// Metrics observer - Tracks training metrics
pub struct MetricsObserver {
    goals: usize,
    traps: usize,
    timeouts: usize,
    episode_lengths: Vec<usize>,
    episode_rewards: Vec<f64>,
}

impl MetricsObserver {
    /// Create a new metrics observer
    pub fn new() -> Self {
        Self {
            goals: 0,
            traps: 0,
            timeouts: 0,
            episode_lengths: Vec::new(),
            episode_rewards: Vec::new(),
        }
    }

    pub fn total_episodes(&self) -> usize {
        self.episode_lengths.len()
    }

    /// Fraction of finished episodes that reached the goal
    pub fn goal_rate(&self) -> f64 {
        if self.episode_lengths.is_empty() {
            0.0
        } else {
            self.goals as f64 / self.episode_lengths.len() as f64
        }
    }

    /// Rewards collected per episode, in order
    pub fn episode_rewards(&self) -> &[f64] {
        &self.episode_rewards
    }

    /// Get metrics summary
    pub fn summary(&self) -> MetricsSummary {
        let mean = |values: &[f64]| {
            if values.is_empty() {
                0.0
            } else {
                values.iter().sum::<f64>() / values.len() as f64
            }
        };
        let lengths: Vec<f64> = self.episode_lengths.iter().map(|&n| n as f64).collect();
        MetricsSummary {
            total_episodes: self.total_episodes(),
            goals: self.goals,
            traps: self.traps,
            timeouts: self.timeouts,
            avg_episode_length: mean(&lengths),
            avg_reward: mean(&self.episode_rewards),
        }
    }
}

impl Default for MetricsObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for MetricsObserver {
    fn on_episode_start(&mut self, _episode: usize, _start: Position) -> Result<()> {
        self.episode_rewards.push(0.0);
        Ok(())
    }

    fn on_step(&mut self, _episode: usize, event: &StepEvent) -> Result<()> {
        if let Some(total) = self.episode_rewards.last_mut() {
            *total += event.transition.reward;
        }
        Ok(())
    }

    fn on_episode_end(
        &mut self,
        _episode: usize,
        outcome: EpisodeOutcome,
        steps: usize,
    ) -> Result<()> {
        self.episode_lengths.push(steps);
        match outcome {
            EpisodeOutcome::Goal => self.goals += 1,
            EpisodeOutcome::Trapped => self.traps += 1,
            EpisodeOutcome::BudgetExhausted => self.timeouts += 1,
        }
        Ok(())
    }
}

/// One line of the JSONL episode log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeRecord {
    pub episode: usize,
    pub outcome: EpisodeOutcome,
    pub steps: usize,
    pub total_reward: f64,
    /// Positions visited, starting with the start cell
    pub path: Vec<Position>,
}

/// JSONL observer - Exports one JSON object per episode
pub struct JsonlObserver {
    writer: BufWriter<File>,
    current: Option<EpisodeRecord>,
}

impl JsonlObserver {
    /// Create a new JSONL observer
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        Ok(Self {
            writer,
            current: None,
        })
    }
}

impl Observer for JsonlObserver {
    fn on_episode_start(&mut self, episode: usize, start: Position) -> Result<()> {
        self.current = Some(EpisodeRecord {
            episode,
            outcome: EpisodeOutcome::BudgetExhausted,
            steps: 0,
            total_reward: 0.0,
            path: vec![start],
        });
        Ok(())
    }

    fn on_step(&mut self, _episode: usize, event: &StepEvent) -> Result<()> {
        if let Some(record) = &mut self.current {
            record.total_reward += event.transition.reward;
            record.path.push(event.position);
        }
        Ok(())
    }

    fn on_episode_end(
        &mut self,
        _episode: usize,
        outcome: EpisodeOutcome,
        steps: usize,
    ) -> Result<()> {
        if let Some(mut record) = self.current.take() {
            record.outcome = outcome;
            record.steps = steps;
            serde_json::to_writer(&mut self.writer, &record)?;
            writeln!(&mut self.writer)?;
        }
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Path observer - Records the positions of the most recent episode
///
/// The recording is shared, so a caller can keep a handle after boxing the
/// observer into a pipeline.
#[derive(Debug, Clone, Default)]
pub struct PathObserver {
    path: Arc<Mutex<Vec<Position>>>,
}

impl PathObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the positions recorded so far
    pub fn path(&self) -> Vec<Position> {
        self.path
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Observer for PathObserver {
    fn on_episode_start(&mut self, _episode: usize, start: Position) -> Result<()> {
        let mut path = self.path.lock().unwrap_or_else(PoisonError::into_inner);
        path.clear();
        path.push(start);
        Ok(())
    }

    fn on_step(&mut self, _episode: usize, event: &StepEvent) -> Result<()> {
        self.path
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.position);
        Ok(())
    }
}
