//! CLI entry point for the river crossing solver.
//!
//! Usage:
//!   crossing-solver solve --missionaries 4 --cannibals 4 --capacity 3
//!   crossing-solver solve -m 3 -c 3 -k 2 --algorithm ucs --json
//!
//! Prints the number of node expansions and the optimal path, one state per
//! line, or a JSON report with `--json`. Exits 0 when a solution is found
//! and 1 when none exists.

mod puzzle;
mod search;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use puzzle::{Action, MissionariesCannibals, State};
use search::{breadth_first_search, uniform_cost_search, Solution};

#[derive(Parser)]
#[command(name = "crossing-solver")]
#[command(about = "Optimal solver for the missionaries and cannibals puzzle")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find an optimal crossing sequence for a puzzle configuration
    Solve {
        /// Total number of missionaries
        #[arg(short, long)]
        missionaries: u32,

        /// Total number of cannibals
        #[arg(short, long)]
        cannibals: u32,

        /// Maximum number of people in the boat
        #[arg(short = 'k', long, default_value = "2")]
        capacity: u32,

        /// Search strategy to use
        #[arg(long, value_enum, default_value_t = Algorithm::Bfs)]
        algorithm: Algorithm,

        /// Emit a JSON report instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    /// Breadth-first graph search
    Bfs,
    /// Uniform-cost graph search
    Ucs,
}

impl Algorithm {
    fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Ucs => "ucs",
        }
    }
}

/// Output format for a solve report
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput {
    solved: bool,
    algorithm: &'static str,
    expanded: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    path_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    crossings: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cost: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<Vec<State>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    actions: Option<Vec<Action>>,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            missionaries,
            cannibals,
            capacity,
            algorithm,
            json,
        } => {
            let problem = match MissionariesCannibals::new(missionaries, cannibals, capacity) {
                Ok(p) => p,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            };

            let solution = match algorithm {
                Algorithm::Bfs => breadth_first_search(&problem),
                Algorithm::Ucs => uniform_cost_search(&problem),
            };

            let solved = solution.is_some();
            if json {
                let output = format_output(&problem, algorithm, solution.as_ref());
                println!("{}", serde_json::to_string_pretty(&output).unwrap());
            } else {
                print_report(&problem, solution.as_ref());
            }

            if solved {
                std::process::exit(0);
            } else {
                std::process::exit(1);
            }
        }
    }
}

fn print_report(problem: &MissionariesCannibals, solution: Option<&Solution<State, Action>>) {
    println!("Number of nodes expanded: {}", problem.expansions());
    match solution {
        Some(solution) => {
            println!(
                "Length of optimal path: {} states ({} crossings)",
                solution.path.len(),
                solution.steps()
            );
            println!();
            println!("The optimal path (each state is (missionaries, cannibals, boat)):");
            for state in &solution.path {
                println!("{}", state);
            }
        }
        None => println!("No solution found."),
    }
}

fn format_output(
    problem: &MissionariesCannibals,
    algorithm: Algorithm,
    solution: Option<&Solution<State, Action>>,
) -> SolveOutput {
    SolveOutput {
        solved: solution.is_some(),
        algorithm: algorithm.name(),
        expanded: problem.expansions(),
        path_length: solution.map(|s| s.path.len()),
        crossings: solution.map(|s| s.steps()),
        cost: solution.map(|s| s.cost),
        path: solution.map(|s| s.path.clone()),
        actions: solution.map(|s| s.actions.clone()),
    }
}
