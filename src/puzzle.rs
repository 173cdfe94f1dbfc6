//! State space model for the missionaries and cannibals puzzle.
//!
//! The whole party starts on one bank with the boat; the puzzle is solved
//! when everyone (and the boat) has reached the other bank without cannibals
//! ever outnumbering missionaries on a bank where missionaries are present.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::search::SearchProblem;

/// Which side of the river the boat is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bank {
    /// The bank everyone starts on.
    Start,
    /// The bank everyone needs to reach.
    Dest,
}

impl Bank {
    pub fn opposite(self) -> Bank {
        match self {
            Bank::Start => Bank::Dest,
            Bank::Dest => Bank::Start,
        }
    }
}

/// A puzzle state: who is still on the starting bank, and where the boat is.
///
/// Counts for the destination bank are derived (`total - count`), never
/// stored, so a state cannot disagree with itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct State {
    pub missionaries: u32,
    pub cannibals: u32,
    pub boat: Bank,
}

impl State {
    pub fn new(missionaries: u32, cannibals: u32, boat: Bank) -> Self {
        Self {
            missionaries,
            cannibals,
            boat,
        }
    }
}

impl fmt::Display for State {
    /// Renders the classic `(m, c, b)` tuple with the boat as `1`/`0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let boat = match self.boat {
            Bank::Start => 1,
            Bank::Dest => 0,
        };
        write!(f, "({}, {}, {})", self.missionaries, self.cannibals, boat)
    }
}

/// One boat trip: how many missionaries and cannibals cross together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    pub missionaries: u32,
    pub cannibals: u32,
}

impl Action {
    pub fn new(missionaries: u32, cannibals: u32) -> Self {
        Self {
            missionaries,
            cannibals,
        }
    }

    /// Total people aboard for this trip.
    pub fn people(self) -> u32 {
        self.missionaries + self.cannibals
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.missionaries, self.cannibals)
    }
}

/// Invalid puzzle configuration, rejected at construction.
///
/// Population counts are unsigned, so the only runtime check left is the
/// boat capacity.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("boat capacity must be at least 1, got {0}")]
    CapacityTooSmall(u32),
}

/// The puzzle model: configuration, initial and goal states, and an
/// expansion counter for search diagnostics.
///
/// All queries are pure; the counter is the only mutable state and is
/// atomic so the model tolerates concurrent expansion.
#[derive(Debug)]
pub struct MissionariesCannibals {
    missionaries: u32,
    cannibals: u32,
    boat_capacity: u32,
    initial: State,
    goal: State,
    expanded: AtomicUsize,
}

impl MissionariesCannibals {
    /// Create a model for `missionaries` + `cannibals` people and a boat
    /// holding up to `boat_capacity`. Everyone starts on the wrong bank.
    pub fn new(
        missionaries: u32,
        cannibals: u32,
        boat_capacity: u32,
    ) -> Result<Self, ConfigError> {
        if boat_capacity < 1 {
            return Err(ConfigError::CapacityTooSmall(boat_capacity));
        }
        Ok(Self {
            missionaries,
            cannibals,
            boat_capacity,
            initial: State::new(missionaries, cannibals, Bank::Start),
            goal: State::new(0, 0, Bank::Dest),
            expanded: AtomicUsize::new(0),
        })
    }

    pub fn total_missionaries(&self) -> u32 {
        self.missionaries
    }

    pub fn total_cannibals(&self) -> u32 {
        self.cannibals
    }

    pub fn boat_capacity(&self) -> u32 {
        self.boat_capacity
    }

    /// Check the safety invariant: counts within bounds, and on each bank
    /// any missionaries present are not outnumbered by cannibals.
    ///
    /// Pure predicate; does not touch the expansion counter.
    pub fn is_valid_state(&self, state: State) -> bool {
        let (m, c) = (state.missionaries, state.cannibals);
        if m > self.missionaries || c > self.cannibals {
            return false;
        }
        if m > 0 && m < c {
            return false;
        }
        let (rm, rc) = (self.missionaries - m, self.cannibals - c);
        if rm > 0 && rm < rc {
            return false;
        }
        true
    }

    /// Number of `actions` calls since construction (or the last reset).
    pub fn expansions(&self) -> usize {
        self.expanded.load(Ordering::Relaxed)
    }

    pub fn reset_expansions(&self) {
        self.expanded.store(0, Ordering::Relaxed);
    }

    /// People on the bank the boat is currently on.
    fn available(&self, state: &State) -> (u32, u32) {
        match state.boat {
            Bank::Start => (state.missionaries, state.cannibals),
            Bank::Dest => (
                self.missionaries - state.missionaries,
                self.cannibals - state.cannibals,
            ),
        }
    }
}

impl SearchProblem for MissionariesCannibals {
    type State = State;
    type Action = Action;

    fn initial_state(&self) -> State {
        self.initial
    }

    /// Goal requires exact equality: everyone across *and* the boat across.
    fn is_goal(&self, state: &State) -> bool {
        *state == self.goal
    }

    /// Enumerate legal boat trips from `state`, in ascending order of
    /// missionaries aboard, then cannibals aboard.
    ///
    /// Counts one expansion per call, even when no trip is legal. An empty
    /// result is a dead end, not an error.
    fn actions(&self, state: &State) -> SmallVec<[Action; 8]> {
        self.expanded.fetch_add(1, Ordering::Relaxed);

        let (avail_m, avail_c) = self.available(state);
        let mut actions = SmallVec::new();
        for i in 0..=self.boat_capacity {
            for j in 0..=self.boat_capacity {
                let people = i + j;
                if people < 1 || people > self.boat_capacity {
                    continue;
                }
                // Missionaries aboard must not be outnumbered during the
                // crossing itself; stricter than the bank invariant.
                if i > 0 && i < j {
                    continue;
                }
                if i > avail_m || j > avail_c {
                    continue;
                }
                let action = Action::new(i, j);
                if self.is_valid_state(self.result(state, &action)) {
                    actions.push(action);
                }
            }
        }
        actions
    }

    /// Apply a boat trip: move the party to the other bank and flip the boat.
    ///
    /// `action` must have been produced by [`SearchProblem::actions`] for
    /// this state; this is not re-validated here.
    fn result(&self, state: &State, action: &Action) -> State {
        let (avail_m, avail_c) = self.available(state);
        debug_assert!(action.missionaries <= avail_m && action.cannibals <= avail_c);
        debug_assert!(action.people() >= 1 && action.people() <= self.boat_capacity);

        match state.boat {
            Bank::Start => State::new(
                state.missionaries - action.missionaries,
                state.cannibals - action.cannibals,
                Bank::Dest,
            ),
            Bank::Dest => State::new(
                state.missionaries + action.missionaries,
                state.cannibals + action.cannibals,
                Bank::Start,
            ),
        }
    }
}
