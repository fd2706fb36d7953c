//! Hyperparameters for SARSA agents.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Configuration for creating a SARSA agent.
///
/// # Examples
///
/// ```
/// use maze_sarsa::q_learning::SarsaConfig;
///
/// let config = SarsaConfig::default().with_epsilon(0.1).with_seed(42);
/// assert_eq!(config.alpha, 0.8);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SarsaConfig {
    /// Exploration probability ε
    pub epsilon: f64,
    /// Learning rate α
    pub alpha: f64,
    /// Discount factor γ
    pub gamma: f64,
    /// Random seed for reproducibility (`None` draws from OS entropy)
    pub seed: Option<u64>,
}

impl SarsaConfig {
    pub const DEFAULT_EPSILON: f64 = 0.25;
    pub const DEFAULT_ALPHA: f64 = 0.8;
    pub const DEFAULT_GAMMA: f64 = 0.9;

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that every probability-like parameter lies in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] naming the first offending parameter.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("epsilon", self.epsilon),
            ("alpha", self.alpha),
            ("gamma", self.gamma),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidConfiguration {
                    message: format!("{name} must be within [0, 1], got {value}"),
                });
            }
        }
        Ok(())
    }
}

impl Default for SarsaConfig {
    fn default() -> Self {
        Self {
            epsilon: Self::DEFAULT_EPSILON,
            alpha: Self::DEFAULT_ALPHA,
            gamma: Self::DEFAULT_GAMMA,
            seed: None,
        }
    }
}
