//! Error types for the maze-sarsa crate

use thiserror::Error;

/// Main error type for the maze-sarsa crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("grid has no end-of-grid marker 'EOG'")]
    MissingSentinel,

    #[error("grid has {count} end-of-grid markers 'EOG' (expected exactly one)")]
    AmbiguousSentinel { count: usize },

    #[error(
        "end-of-grid marker at row {row}, column {col} leaves no usable rectangle (must not be in the first row or column)"
    )]
    DegenerateGrid { row: usize, col: usize },

    #[error("maze has no start cell 'S'")]
    MissingStart,

    #[error("maze has {count} start cells 'S' (expected exactly one)")]
    AmbiguousStart { count: usize },

    #[error("maze has no goal cell 'G'")]
    MissingGoal,

    #[error("maze has {count} goal cells 'G' (expected exactly one)")]
    AmbiguousGoal { count: usize },

    #[error("invalid cell label '{label}' at row {row}, column {col}")]
    InvalidCellLabel {
        row: usize,
        col: usize,
        label: String,
    },

    #[error("state s{} is not part of the state universe ({count} states)", .state + 1)]
    UnknownState { state: usize, count: usize },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("scripted learner ran out of actions after {consumed} selections")]
    ScriptExhausted { consumed: usize },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
