//! Grid maze SARSA learner
//!
//! This crate provides:
//! - Parsing and validation of spreadsheet-drawn maze grids
//! - The maze as a deterministic MDP (states, moves, rewards, terminals)
//! - A tabular SARSA agent with ε-greedy exploration
//! - An observable training pipeline and greedy rollout of the result
//! - The `maze` command-line tool

pub mod adapters;
pub mod cli;
pub mod error;
pub mod maze;
pub mod pipeline;
pub mod ports;
pub mod q_learning;
pub mod types;

pub use error::{Error, Result};
pub use maze::{Cell, Layout, MazeEnvironment};
pub use q_learning::{SarsaAgent, SarsaConfig};
pub use types::{Action, Position, StateId};
