//! CLI infrastructure for the maze SARSA toolkit
//!
//! This module provides the command-line interface for validating maze grids
//! and training SARSA agents on them.

pub mod commands;
pub mod config;
pub mod output;
