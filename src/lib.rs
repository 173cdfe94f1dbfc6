//! Optimal solver for the missionaries and cannibals river crossing puzzle.
//!
//! This crate models the puzzle as a state space problem (configurable
//! population sizes and boat capacity) and solves it with uninformed
//! search. The model answers pure queries; the generic search drivers own
//! all frontier and path bookkeeping.

pub mod puzzle;
pub mod search;

// Re-export main types
pub use puzzle::{Action, Bank, ConfigError, MissionariesCannibals, State};
pub use search::{breadth_first_search, uniform_cost_search, SearchProblem, Solution};
