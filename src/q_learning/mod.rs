//! SARSA temporal difference learning
//!
//! TD methods bootstrap value estimates from successor states. SARSA is the
//! on-policy variant: it learns the value of the ε-greedy policy it actually
//! follows, updating each (s, a) against the (s', a') the policy picked next.
//!
//! | Aspect | SARSA | Q-learning |
//! |--------|-------|------------|
//! | Policy | On-policy (learns Q^π) | Off-policy (learns Q*) |
//! | Update | Uses actual Q(s',a') | Uses max_a Q(s',a') |
//! | Near traps | Keeps its distance while exploring | Hugs the edge |
//!
//! ## Usage Example
//!
//! ```
//! use maze_sarsa::q_learning::{SarsaAgent, SarsaConfig};
//! use maze_sarsa::types::{Action, StateId};
//!
//! let config = SarsaConfig::default().with_seed(42);
//! let mut agent = SarsaAgent::new(12, config).unwrap();
//!
//! let action = agent.select_action(StateId::new(0)).unwrap();
//! agent
//!     .update(StateId::new(0), action, 1.0, StateId::new(1), Action::Down)
//!     .unwrap();
//! ```

pub mod agent;
pub mod config;
pub mod q_table;

// Public re-exports
pub use agent::SarsaAgent;
pub use config::SarsaConfig;
pub use q_table::QTable;
