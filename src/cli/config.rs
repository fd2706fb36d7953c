//! Run configuration shared by CLI commands
//!
//! A run can be described in a JSON file; any field left out falls back to
//! the built-in default, and explicit command-line flags win over the file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    pipeline::TrainingConfig,
    q_learning::SarsaConfig,
};

/// Optional overrides for a training run
///
/// ```json
/// { "episodes": 2000, "steps": 100, "epsilon": 0.1, "seed": 7 }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Number of training episodes
    pub episodes: Option<usize>,
    /// Step budget per episode
    pub steps: Option<usize>,
    pub epsilon: Option<f64>,
    pub alpha: Option<f64>,
    pub gamma: Option<f64>,
    /// Random seed for reproducible runs
    pub seed: Option<u64>,
}

impl RunConfig {
    /// Read a run configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read run config {}", path.display()),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Layer `overrides` on top of `self`; fields set in `overrides` win.
    pub fn merge(self, overrides: RunConfig) -> RunConfig {
        RunConfig {
            episodes: overrides.episodes.or(self.episodes),
            steps: overrides.steps.or(self.steps),
            epsilon: overrides.epsilon.or(self.epsilon),
            alpha: overrides.alpha.or(self.alpha),
            gamma: overrides.gamma.or(self.gamma),
            seed: overrides.seed.or(self.seed),
        }
    }

    /// Agent hyperparameters, defaulting anything unset.
    pub fn sarsa_config(&self) -> SarsaConfig {
        let defaults = SarsaConfig::default();
        SarsaConfig {
            epsilon: self.epsilon.unwrap_or(defaults.epsilon),
            alpha: self.alpha.unwrap_or(defaults.alpha),
            gamma: self.gamma.unwrap_or(defaults.gamma),
            seed: self.seed,
        }
    }

    /// Episode loop settings, defaulting anything unset.
    ///
    /// The seed stays with the agent, so it is not repeated here.
    pub fn training_config(&self) -> TrainingConfig {
        TrainingConfig {
            episodes: self.episodes.unwrap_or(TrainingConfig::DEFAULT_EPISODES),
            step_budget: self.steps.unwrap_or(TrainingConfig::DEFAULT_STEP_BUDGET),
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = RunConfig::default();
        assert_eq!(config.sarsa_config(), SarsaConfig::default());
        assert_eq!(config.training_config(), TrainingConfig::default());
    }

    #[test]
    fn test_flags_override_file() {
        let file = RunConfig {
            episodes: Some(10),
            epsilon: Some(0.1),
            seed: Some(1),
            ..RunConfig::default()
        };
        let flags = RunConfig {
            epsilon: Some(0.0),
            steps: Some(20),
            ..RunConfig::default()
        };

        let merged = file.merge(flags);
        assert_eq!(merged.episodes, Some(10));
        assert_eq!(merged.steps, Some(20));
        assert_eq!(merged.epsilon, Some(0.0));
        assert_eq!(merged.seed, Some(1));
        assert_eq!(merged.sarsa_config().alpha, SarsaConfig::DEFAULT_ALPHA);
    }

    #[test]
    fn test_load_partial_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "episodes": 50, "gamma": 0.5 }}"#).unwrap();

        let config = RunConfig::load(file.path()).unwrap();
        assert_eq!(config.episodes, Some(50));
        assert_eq!(config.gamma, Some(0.5));
        assert_eq!(config.steps, None);
    }

    #[test]
    fn test_load_rejects_unknown_fields() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "episode": 50 }}"#).unwrap();

        assert!(matches!(
            RunConfig::load(file.path()),
            Err(Error::Serialization(_))
        ));
    }

    #[test]
    fn test_load_missing_file_names_path() {
        let err = RunConfig::load("/nonexistent/run.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/run.json"));
    }
}
