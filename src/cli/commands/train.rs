//! Train command - runs SARSA on a maze read from a CSV grid

use std::{
    fs::File,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use serde_json::to_writer_pretty;

use crate::{
    cli::{
        commands::load_maze,
        config::RunConfig,
        output::{print_kv, print_section, print_training_result},
    },
    pipeline::{
        EpisodeLogObserver, JsonlObserver, ProgressObserver, Rollout, TrainingPipeline,
        TrainingResult,
    },
    q_learning::{SarsaAgent, SarsaConfig},
    types::Position,
};

#[derive(Debug, Serialize)]
struct RolloutSummary {
    outcome: String,
    steps: usize,
    total_reward: f64,
    path: Vec<Position>,
}

impl From<&Rollout> for RolloutSummary {
    fn from(rollout: &Rollout) -> Self {
        Self {
            outcome: rollout.outcome.to_string(),
            steps: rollout.steps(),
            total_reward: rollout.total_reward,
            path: rollout.path.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
struct SummaryMetadata {
    grid: PathBuf,
    rows: usize,
    cols: usize,
    states: usize,
    episodes: usize,
    steps: usize,
}

#[derive(Debug, Serialize)]
struct TrainingSummaryFile {
    training: TrainingResult,
    hyperparameters: SarsaConfig,
    rollout: Option<RolloutSummary>,
    metadata: SummaryMetadata,
}

fn sanitize_summary_path(raw: &Path) -> PathBuf {
    let mut normalized = raw.to_path_buf();
    let raw_str = raw.as_os_str().to_string_lossy();

    // Treat trailing separators or missing filename as a directory target.
    if raw_str.ends_with(std::path::MAIN_SEPARATOR) || normalized.file_name().is_none() {
        normalized.push("training_summary.json");
        return normalized;
    }

    match normalized.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => normalized,
        _ => {
            normalized.set_extension("json");
            normalized
        }
    }
}

#[derive(Parser, Debug)]
#[command(about = "Train a SARSA agent on a maze", allow_negative_numbers = true)]
pub struct TrainArgs {
    /// Maze grid as a header-less CSV file
    pub grid: PathBuf,

    /// JSON run configuration (flags given here take precedence)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of training episodes [default: 7000]
    #[arg(long, short = 'n')]
    pub episodes: Option<usize>,

    /// Step budget per episode [default: 150]
    #[arg(long)]
    pub steps: Option<usize>,

    /// Exploration probability ε [default: 0.25]
    #[arg(long)]
    pub epsilon: Option<f64>,

    /// Learning rate α [default: 0.8]
    #[arg(long)]
    pub alpha: Option<f64>,

    /// Discount factor γ [default: 0.9]
    #[arg(long)]
    pub gamma: Option<f64>,

    /// Random seed for reproducibility
    #[arg(long, short = 's')]
    pub seed: Option<u64>,

    /// Field delimiter of the grid file
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,

    /// Print an episode banner every N episodes (0 disables banners)
    #[arg(long, default_value_t = 100)]
    pub log_interval: usize,

    /// Suppress the per-episode goal/trap lines
    #[arg(long, short = 'q', default_value_t = false)]
    pub quiet: bool,

    /// Show a progress bar
    #[arg(long, default_value_t = false)]
    pub progress: bool,

    /// Print the final Q-table
    #[arg(long, default_value_t = false)]
    pub show_table: bool,

    /// Replay the greedy policy once after training and draw its path
    #[arg(long, default_value_t = false)]
    pub rollout: bool,

    /// Optional path for writing a summary JSON file
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Optional path for a JSONL log with one record per episode
    #[arg(long)]
    pub episodes_log: Option<PathBuf>,
}

impl TrainArgs {
    fn overrides(&self) -> RunConfig {
        RunConfig {
            episodes: self.episodes,
            steps: self.steps,
            epsilon: self.epsilon,
            alpha: self.alpha,
            gamma: self.gamma,
            seed: self.seed,
        }
    }
}

/// Execute the train command
pub fn execute(args: TrainArgs) -> Result<()> {
    let file_config = match &args.config {
        Some(path) => RunConfig::load(path)
            .with_context(|| format!("Failed to load run config {}", path.display()))?,
        None => RunConfig::default(),
    };
    let run_config = file_config.merge(args.overrides());

    let sarsa_config = run_config.sarsa_config();
    sarsa_config.validate()?;
    let training_config = run_config.training_config();
    training_config.validate()?;

    let summary_target = args.summary.as_ref().map(|raw| {
        let sanitized = sanitize_summary_path(raw);
        let normalized = sanitized != *raw;
        (sanitized, normalized)
    });

    let mut env = load_maze(&args.grid, args.delimiter)?;

    println!("{env}");

    let mut agent = SarsaAgent::new(env.state_count(), sarsa_config)?;

    let mut pipeline = TrainingPipeline::new(training_config).with_observer(Box::new(
        EpisodeLogObserver::stdout(args.log_interval).with_outcomes(!args.quiet),
    ));
    if args.progress {
        pipeline = pipeline.with_observer(Box::new(ProgressObserver::new()));
    }
    if let Some(path) = &args.episodes_log {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let observer = JsonlObserver::new(path)
            .with_context(|| format!("Failed to create episode log {}", path.display()))?;
        pipeline = pipeline.with_observer(Box::new(observer));
    }

    let result = pipeline.run(&mut env, &mut agent)?;
    print_training_result(&result);

    if args.show_table {
        print_section("Q-table");
        print!("{}", agent.dump_table());
    }

    let rollout = if args.rollout {
        let rollout = Rollout::run(&mut env, &agent, training_config.step_budget)?;
        print_section("Greedy Rollout");
        print_kv("Outcome", &rollout.outcome.to_string());
        print_kv("Steps", &rollout.steps().to_string());
        print_kv("Total reward", &rollout.total_reward.to_string());
        println!();
        print!("{}", env.render_path(&rollout.path));
        Some(rollout)
    } else {
        None
    };

    if let Some((summary_path, normalized)) = summary_target {
        if normalized {
            println!(
                "\n⚠️  Normalizing summary path to {}",
                summary_path.display()
            );
        }

        if let Some(parent) = summary_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let summary = TrainingSummaryFile {
            training: result,
            hyperparameters: sarsa_config,
            rollout: rollout.as_ref().map(RolloutSummary::from),
            metadata: SummaryMetadata {
                grid: args.grid.clone(),
                rows: env.layout().rows(),
                cols: env.layout().cols(),
                states: env.state_count(),
                episodes: training_config.episodes,
                steps: training_config.step_budget,
            },
        };

        let file = File::create(&summary_path)?;
        to_writer_pretty(file, &summary)?;
        println!("\nSummary written to {}", summary_path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_summary_path() {
        assert_eq!(
            sanitize_summary_path(Path::new("out/run")),
            PathBuf::from("out/run.json")
        );
        assert_eq!(
            sanitize_summary_path(Path::new("out/run.JSON")),
            PathBuf::from("out/run.JSON")
        );
        assert_eq!(
            sanitize_summary_path(Path::new("out/run.txt")),
            PathBuf::from("out/run.json")
        );
    }

    #[test]
    fn test_flags_parse_into_overrides() {
        let args = TrainArgs::parse_from([
            "maze-train",
            "grid.csv",
            "--episodes",
            "10",
            "--epsilon",
            "0",
            "--seed",
            "3",
        ]);
        let overrides = args.overrides();
        assert_eq!(overrides.episodes, Some(10));
        assert_eq!(overrides.epsilon, Some(0.0));
        assert_eq!(overrides.seed, Some(3));
        assert_eq!(overrides.alpha, None);
        assert_eq!(args.log_interval, 100);
        assert_eq!(args.delimiter, ',');
    }
}
