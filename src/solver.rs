//! Iterative-deepening A* search for the 15-puzzle.
//!
//! The outer loop runs a bounded depth-first search at the current cost bound.
//! A failed pass reports the smallest cost it had to prune, which becomes the
//! next bound, so the bound strictly increases until a solution fits under it.
//! All search state is threaded through arguments and return values; nothing
//! is shared between puzzles.
use crate::engine::{legal_moves, Board, Move};
use crate::heuristics::{evaluate, ConflictRule};
use std::fmt;
use tracing::{debug, info, info_span};

/// Solver settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolverConfig {
    /// Linear-conflict rule used by the cost estimate.
    pub conflict_rule: ConflictRule,
}

/// One move of a solution, together with where the blank ended up after it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub column: usize,
    pub row: usize,
    pub mv: Move,
}

impl fmt::Display for Step {
    /// Formats as `"<column> <row> <label>"`, e.g. `3 3 L`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.column, self.row, self.mv.label())
    }
}

/// Counters collected while searching.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of bounded depth-first passes.
    pub iterations: u32,
    /// Number of non-goal nodes whose successors were generated.
    pub nodes_expanded: u64,
    /// Estimate for the starting board, i.e. the first bound.
    pub initial_estimate: u32,
    /// Bound of the pass that found the solution.
    pub final_bound: u32,
}

/// A move sequence from the starting board to the goal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// Steps in the order they are played.
    pub steps: Vec<Step>,
    pub stats: SearchStats,
}

impl Solution {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.steps.iter().map(|step| step.mv)
    }

    /// Plays the solution from `start`, returning the final board, or `None`
    /// if some move would push the blank off the grid.
    pub fn replay(&self, start: &Board) -> Option<Board> {
        self.moves().try_fold(*start, |board, mv| board.play(mv))
    }
}

/// Outcome for one puzzle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    NotSolvable,
    Solved(Solution),
}

/// Result of one bounded depth-first pass.
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    /// Goal reached; steps are recorded goal-first while the recursion unwinds.
    Found(Vec<Step>),
    /// Nothing found; carries the smallest pruned cost (`u32::MAX` if nothing was pruned).
    Pruned(u32),
}

/// Solves `board`, or reports that it cannot be solved.
///
/// Solvability is checked first; the search is never entered for a board that
/// fails the parity test.
///
/// # Examples
/// ```
/// use fifteen_solver::engine::{Board, Move};
/// use fifteen_solver::solver::{solve, SolverConfig, Verdict};
///
/// let board = Board::goal().play(Move::Right).unwrap();
/// match solve(&board, &SolverConfig::default()) {
///     Verdict::Solved(solution) => {
///         assert_eq!(solution.len(), 1);
///         assert_eq!(solution.steps[0].to_string(), "3 3 L");
///     }
///     Verdict::NotSolvable => unreachable!(),
/// }
/// ```
pub fn solve(board: &Board, config: &SolverConfig) -> Verdict {
    if !board.is_solvable() {
        info!(event = "not_solvable", inversions = board.count_inversions());
        return Verdict::NotSolvable;
    }

    let solution = ida_star(board, config.conflict_rule);
    info!(
        event = "solved",
        moves = solution.len(),
        iterations = solution.stats.iterations,
        nodes_expanded = solution.stats.nodes_expanded,
    );
    Verdict::Solved(solution)
}

/// Solves each board in turn. Verdicts are returned in input order.
pub fn solve_all(boards: &[Board], config: &SolverConfig) -> Vec<Verdict> {
    boards
        .iter()
        .enumerate()
        .map(|(index, board)| {
            let _span = info_span!("puzzle", index).entered();
            solve(board, config)
        })
        .collect()
}

/// Runs IDA* on a board that passed the solvability test.
fn ida_star(board: &Board, rule: ConflictRule) -> Solution {
    let estimate = evaluate(board, rule);
    let mut stats = SearchStats {
        initial_estimate: estimate,
        ..SearchStats::default()
    };
    let mut bound = estimate;

    loop {
        stats.iterations += 1;
        debug!(iteration = stats.iterations, bound, "starting bounded search");

        match bounded_search(board, estimate, 0, None, bound, rule, &mut stats) {
            Outcome::Found(mut steps) => {
                steps.reverse();
                stats.final_bound = bound;
                return Solution { steps, stats };
            }
            Outcome::Pruned(min_exceeding) => {
                debug_assert!(min_exceeding > bound);
                debug!(
                    iteration = stats.iterations,
                    next_bound = min_exceeding,
                    nodes_expanded = stats.nodes_expanded,
                    "bound exhausted"
                );
                bound = min_exceeding;
            }
        }
    }
}

/// Depth-first search below `board` for paths whose cost stays within `bound`.
///
/// `estimate` is the heuristic value of `board` and `depth` the number of moves
/// already played. The first child that reaches the goal wins; its siblings are
/// not examined.
fn bounded_search(
    board: &Board,
    estimate: u32,
    depth: u32,
    previous: Option<Move>,
    bound: u32,
    rule: ConflictRule,
    stats: &mut SearchStats,
) -> Outcome {
    if estimate == 0 {
        return Outcome::Found(Vec::new());
    }
    stats.nodes_expanded += 1;

    let mut min_exceeding = u32::MAX;
    for mv in legal_moves(board.blank(), previous) {
        let Some(next) = board.play(mv) else {
            continue;
        };
        let next_estimate = evaluate(&next, rule);
        let cost = depth + 1 + next_estimate;

        if cost > bound {
            min_exceeding = min_exceeding.min(cost);
            continue;
        }

        match bounded_search(&next, next_estimate, depth + 1, Some(mv), bound, rule, stats) {
            Outcome::Found(mut steps) => {
                let blank = next.blank();
                steps.push(Step {
                    column: blank.column,
                    row: blank.row,
                    mv,
                });
                return Outcome::Found(steps);
            }
            Outcome::Pruned(cost) => min_exceeding = min_exceeding.min(cost),
        }
    }

    Outcome::Pruned(min_exceeding)
}
