//! Ports (trait boundaries) for external dependencies.
//!
//! The domain owns these traits; adapters and pipelines implement them.

pub mod grid_source;
pub mod learner;
pub mod observer;

pub use grid_source::GridSource;
pub use learner::Learner;
pub use observer::{Observer, StepEvent};
