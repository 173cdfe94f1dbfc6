//! Generic uninformed search over a state space problem.
//!
//! The puzzle model implements [`SearchProblem`]; the algorithms here only
//! see that trait, so breadth-first and uniform-cost exploration stay
//! pluggable. Both are graph searches: the puzzle's state graph has cycles
//! (every crossing can be undone), so a visited set guards re-expansion.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};
use std::hash::Hash;

use smallvec::SmallVec;

/// A state space problem a generic uninformed search can drive.
pub trait SearchProblem {
    type State: Clone + Eq + Hash;
    type Action: Clone;

    fn initial_state(&self) -> Self::State;

    fn is_goal(&self, state: &Self::State) -> bool;

    /// Legal actions from `state`, in a deterministic order. Empty means
    /// dead end.
    fn actions(&self, state: &Self::State) -> SmallVec<[Self::Action; 8]>;

    /// Successor state after applying `action`, which must have come from
    /// [`Self::actions`] for this state.
    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// Cost of one step; uniform by default.
    fn step_cost(&self, _state: &Self::State, _action: &Self::Action) -> u64 {
        1
    }
}

/// A path from the initial state to a goal state, inclusive of both.
#[derive(Debug, Clone)]
pub struct Solution<S, A> {
    /// Visited states, initial first, goal last.
    pub path: Vec<S>,
    /// Actions taken, one fewer than states.
    pub actions: Vec<A>,
    /// Total path cost.
    pub cost: u64,
}

impl<S, A> Solution<S, A> {
    /// Number of steps taken (crossings, for the river puzzle).
    pub fn steps(&self) -> usize {
        self.actions.len()
    }
}

/// A search tree node; parents are arena indices so paths can be rebuilt
/// after the search finishes.
#[derive(Debug, Clone)]
struct Node<S, A> {
    state: S,
    parent: Option<usize>,
    action: Option<A>,
    cost: u64,
}

fn reconstruct<S: Clone, A: Clone>(nodes: &[Node<S, A>], goal: usize) -> Solution<S, A> {
    let cost = nodes[goal].cost;
    let mut path = Vec::new();
    let mut actions = Vec::new();
    let mut index = goal;
    loop {
        let node = &nodes[index];
        path.push(node.state.clone());
        match (node.parent, &node.action) {
            (Some(parent), Some(action)) => {
                actions.push(action.clone());
                index = parent;
            }
            _ => break,
        }
    }
    path.reverse();
    actions.reverse();
    Solution { path, actions, cost }
}

/// Breadth-first graph search with a FIFO frontier.
///
/// Optimal for unit step costs. Returns `None` when the frontier empties
/// without reaching a goal; that is an ordinary outcome, not an error.
pub fn breadth_first_search<P: SearchProblem>(
    problem: &P,
) -> Option<Solution<P::State, P::Action>> {
    let initial = problem.initial_state();
    if problem.is_goal(&initial) {
        return Some(Solution {
            path: vec![initial],
            actions: Vec::new(),
            cost: 0,
        });
    }

    let mut nodes = vec![Node {
        state: initial.clone(),
        parent: None,
        action: None,
        cost: 0,
    }];
    let mut explored: HashSet<P::State> = HashSet::new();
    explored.insert(initial);
    let mut frontier: VecDeque<usize> = VecDeque::new();
    frontier.push_back(0);

    while let Some(index) = frontier.pop_front() {
        let state = nodes[index].state.clone();
        let cost = nodes[index].cost;
        for action in problem.actions(&state) {
            let child = problem.result(&state, &action);
            if !explored.insert(child.clone()) {
                continue;
            }
            let child_index = nodes.len();
            nodes.push(Node {
                state: child.clone(),
                parent: Some(index),
                action: Some(action.clone()),
                cost: cost + problem.step_cost(&state, &action),
            });
            // Goal test at generation: with a FIFO frontier the first
            // generated goal already sits on a shortest path.
            if problem.is_goal(&child) {
                return Some(reconstruct(&nodes, child_index));
            }
            frontier.push_back(child_index);
        }
    }

    None
}

/// Uniform-cost graph search with a cost-ordered frontier.
///
/// Ties between equal-cost entries break by insertion order, so exploration
/// is deterministic. Superseded frontier entries are skipped lazily rather
/// than removed from the heap.
pub fn uniform_cost_search<P: SearchProblem>(
    problem: &P,
) -> Option<Solution<P::State, P::Action>> {
    let initial = problem.initial_state();
    let mut nodes = vec![Node {
        state: initial.clone(),
        parent: None,
        action: None,
        cost: 0,
    }];
    let mut best_cost: HashMap<P::State, u64> = HashMap::new();
    best_cost.insert(initial, 0);
    // (cost, arena index): the index is monotonic, giving FIFO tie-breaks.
    let mut frontier: BinaryHeap<Reverse<(u64, usize)>> = BinaryHeap::new();
    frontier.push(Reverse((0, 0)));

    while let Some(Reverse((cost, index))) = frontier.pop() {
        let state = nodes[index].state.clone();
        if best_cost.get(&state).is_some_and(|&best| cost > best) {
            continue; // stale entry, a cheaper path got there first
        }
        // Goal test at expansion: nothing cheaper is left on the frontier.
        if problem.is_goal(&state) {
            return Some(reconstruct(&nodes, index));
        }
        for action in problem.actions(&state) {
            let child = problem.result(&state, &action);
            let child_cost = cost + problem.step_cost(&state, &action);
            if best_cost
                .get(&child)
                .is_some_and(|&best| child_cost >= best)
            {
                continue;
            }
            best_cost.insert(child.clone(), child_cost);
            let child_index = nodes.len();
            nodes.push(Node {
                state: child,
                parent: Some(index),
                action: Some(action.clone()),
                cost: child_cost,
            });
            frontier.push(Reverse((child_cost, child_index)));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::{Action, Bank, MissionariesCannibals, State};

    fn check_path(puzzle: &MissionariesCannibals, solution: &Solution<State, Action>) {
        assert_eq!(solution.path.first(), Some(&puzzle.initial_state()));
        assert!(puzzle.is_goal(solution.path.last().unwrap()));
        assert_eq!(solution.actions.len() + 1, solution.path.len());
        // Replay the actions and confirm every intermediate state.
        let mut state = puzzle.initial_state();
        for (action, expected) in solution.actions.iter().zip(&solution.path[1..]) {
            assert!(puzzle.is_valid_state(state));
            state = puzzle.result(&state, action);
            assert_eq!(&state, expected);
        }
    }

    #[test]
    fn test_bfs_solves_classic_puzzle() {
        // 3 missionaries, 3 cannibals, boat of 2: 11 crossings, 12 states.
        let puzzle = MissionariesCannibals::new(3, 3, 2).unwrap();
        let solution = breadth_first_search(&puzzle).unwrap();
        assert_eq!(solution.path.len(), 12);
        assert_eq!(solution.steps(), 11);
        assert_eq!(solution.cost, 11);
        check_path(&puzzle, &solution);
        assert!(puzzle.expansions() > 0);
    }

    #[test]
    fn test_bfs_four_four_boat_of_three() {
        // The crossing count is always odd (the boat must end on the far
        // bank), and exhaustive search puts the optimum at 9 crossings.
        let puzzle = MissionariesCannibals::new(4, 4, 3).unwrap();
        let solution = breadth_first_search(&puzzle).unwrap();
        assert_eq!(solution.path.len(), 10);
        assert_eq!(solution.steps(), 9);
        check_path(&puzzle, &solution);
    }

    #[test]
    fn test_ucs_matches_bfs_cost() {
        for (m, c, k) in [(3, 3, 2), (4, 4, 3), (2, 2, 2), (6, 6, 4)] {
            let puzzle = MissionariesCannibals::new(m, c, k).unwrap();
            let bfs = breadth_first_search(&puzzle).unwrap();
            let ucs = uniform_cost_search(&puzzle).unwrap();
            assert_eq!(bfs.cost, ucs.cost, "({m}, {c}, {k})");
            check_path(&puzzle, &ucs);
        }
    }

    #[test]
    fn test_ucs_six_six_boat_of_four() {
        let puzzle = MissionariesCannibals::new(6, 6, 4).unwrap();
        let solution = uniform_cost_search(&puzzle).unwrap();
        assert_eq!(solution.path.len(), 10);
        check_path(&puzzle, &solution);
    }

    #[test]
    fn test_cannibals_only_ferry() {
        // No missionaries, no safety constraint: ferry 3 over, row 1 back,
        // ferry the last 2. Three crossings.
        let puzzle = MissionariesCannibals::new(0, 4, 3).unwrap();
        let solution = breadth_first_search(&puzzle).unwrap();
        assert_eq!(solution.steps(), 3);
        check_path(&puzzle, &solution);
    }

    #[test]
    fn test_missionaries_only_ferry() {
        let puzzle = MissionariesCannibals::new(3, 0, 2).unwrap();
        let solution = breadth_first_search(&puzzle).unwrap();
        assert_eq!(solution.steps(), 3);
        check_path(&puzzle, &solution);
    }

    #[test]
    fn test_single_crossing() {
        let puzzle = MissionariesCannibals::new(1, 0, 1).unwrap();
        let solution = breadth_first_search(&puzzle).unwrap();
        assert_eq!(solution.path.len(), 2);
        assert_eq!(solution.actions, vec![Action::new(1, 0)]);
    }

    #[test]
    fn test_nobody_to_row_means_no_solution() {
        // The goal needs the boat across, but there is no one to row it.
        let puzzle = MissionariesCannibals::new(0, 0, 2).unwrap();
        assert!(breadth_first_search(&puzzle).is_none());
        assert!(uniform_cost_search(&puzzle).is_none());
    }

    #[test]
    fn test_solution_path_never_visits_invalid_state() {
        let puzzle = MissionariesCannibals::new(5, 5, 3).unwrap();
        let solution = breadth_first_search(&puzzle).unwrap();
        for state in &solution.path {
            assert!(puzzle.is_valid_state(*state));
        }
        // Consecutive states alternate boat sides.
        for pair in solution.path.windows(2) {
            assert_eq!(pair[1].boat, pair[0].boat.opposite());
        }
        assert_eq!(solution.path[0].boat, Bank::Start);
        assert_eq!(solution.path.last().unwrap().boat, Bank::Dest);
    }
}
