//! Grid maze world
//!
//! A maze is described by a rectangular table of cell labels. The usable
//! area runs from the top-left cell up to (but excluding) the row and column
//! of the single `EOG` (end of grid) marker; everything at or beyond the
//! marker is ignored.
//!
//! | Label | Cell | Reward on entry |
//! |-------|------|-----------------|
//! | `S` | start | +1 |
//! | `G` | goal | +100 (episode ends) |
//! | `W` | wall | impassable, bumping costs -1 |
//! | `T` | trap | -100 (episode ends) |
//! | `1`..`9` | numeric | the number itself |
//! | blank | empty | +1 |

pub mod cell;
pub mod environment;
pub mod layout;

pub use cell::Cell;
pub use environment::MazeEnvironment;
pub use layout::{Layout, SENTINEL};
