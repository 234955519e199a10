//! # 8-Puzzle Solver Library
//!
//! This library models the 8-puzzle (tiles `1`-`8` plus a blank on a 3x3 board)
//! and finds minimum-move solutions between two arrangements using either
//! breadth-first search or A* with the Manhattan-distance heuristic.
//!
//! It is used by three binaries:
//! - `solver`: Takes a start and goal board, runs BFS and/or A*, and prints the
//!   optimal move sequence. It can also emit a sample of the state graph as DOT.
//! - `evaluator`: Compares the two solvers on seeded, scrambled boards.
//! - `player`: Lets a person slide tiles interactively, with A* hints.
//!
//! ## Modules
//! - `engine`: The board representation (`State`), move directions (`Direction`),
//!   neighbor generation and the parity (reachability) check.
//! - `heuristics`: Distance estimates between two states; `manhattan` drives A*.
//! - `solver`: `bfs`, `a_star`, `reconstruct_path` and the `solve` convenience wrapper.
//! - `sampler`: Bounded breadth-first sampling of the state graph and DOT rendering.
//! - `utils`: Parsing boards from text.
//! - `error`: The `PuzzleError` type.

pub mod engine;
pub mod error;
pub mod heuristics;
pub mod sampler;
pub mod solver;
pub mod utils;

pub use engine::{Direction, State};
pub use error::PuzzleError;
pub use solver::{a_star, bfs, reconstruct_path, solve, Algorithm, PredecessorMap, Solution};
