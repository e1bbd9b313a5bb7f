//! # Fifteen Puzzle Solver Library
//!
//! This library solves the sliding 15-puzzle (4×4 grid, tiles 1–15 and one
//! blank) with Iterative-Deepening A* (IDA*). Each board is first checked for
//! solvability with the inversion-parity test; solvable boards get a move
//! sequence to the goal layout (1..15 row-major, blank last).
//!
//! It is used by three binaries:
//! - `ida_solver`: Reads a batch of puzzles from a file and writes the
//!   solution log, one verdict per puzzle.
//! - `puzzle_generator`: Writes seeded, solvable scrambles in the input format.
//! - `heuristic_evaluator`: Compares the linear-conflict rules on the same
//!   scrambles.
//!
//! ## Modules
//! - `engine`: The board (`Board`), blank positions (`Position`), moves (`Move`),
//!   move generation and the solvability test.
//! - `heuristics`: Manhattan distance and the linear-conflict variants.
//! - `solver`: The IDA* driver (`solve`, `solve_all`) and its result types.
//! - `report`: Renders verdicts as the textual solution log.
//! - `utils`: Parses puzzles from whitespace-separated integers.
//! - `error`: The `PuzzleError` type raised while loading input.
//! - `logging`: Tracing subscriber setup for the binaries.

pub mod engine;
pub mod error;
pub mod heuristics;
pub mod logging;
pub mod report;
pub mod solver;
pub mod utils;

pub use error::{PuzzleError, Result};
