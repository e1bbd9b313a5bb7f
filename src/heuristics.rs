//! Distance estimates from a board to the goal layout.
//!
//! Every estimate is Manhattan distance plus a linear-conflict term whose
//! exact form is selected by [`ConflictRule`]. All rules evaluate to zero on
//! the goal board and only there, so `evaluate(..) == 0` doubles as the goal test.
use crate::engine::{Board, Position, BLANK, BOARD_SIZE};

/// Selects how tiles that sit in their goal row or column, but not in their
/// goal cell, contribute to the estimate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum ConflictRule {
    /// For each row and column, count the in-line but misplaced tiles and add
    /// the count only when it is even.
    #[default]
    EvenCount,
    /// Textbook linear conflict: per line, two moves for every tile that has to
    /// step out of the line so the rest can reach their goal order.
    Canonical,
    /// Plain Manhattan distance.
    ManhattanOnly,
}

/// Sum over all non-blank tiles of the L1 distance to their goal cell.
///
/// # Examples
/// ```
/// use fifteen_solver::engine::{Board, Move};
/// use fifteen_solver::heuristics::manhattan_distance;
/// assert_eq!(manhattan_distance(&Board::goal()), 0);
/// let one_away = Board::goal().play(Move::Right).unwrap();
/// assert_eq!(manhattan_distance(&one_away), 1);
/// ```
pub fn manhattan_distance(board: &Board) -> u32 {
    let mut distance = 0;
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            let tile = board.get_tile(r, c);
            if tile != BLANK {
                distance += Position::new(r, c).manhattan(Position::goal_of(tile)) as u32;
            }
        }
    }
    distance
}

/// Linear-conflict term of the estimate under `rule`.
pub fn linear_conflict(board: &Board, rule: ConflictRule) -> u32 {
    match rule {
        ConflictRule::EvenCount => even_count_conflicts(board),
        ConflictRule::Canonical => canonical_conflicts(board),
        ConflictRule::ManhattanOnly => 0,
    }
}

/// Lower-bound-style estimate of the number of moves left: Manhattan distance
/// plus the linear-conflict term under `rule`.
pub fn evaluate(board: &Board, rule: ConflictRule) -> u32 {
    manhattan_distance(board) + linear_conflict(board, rule)
}

fn even_count_conflicts(board: &Board) -> u32 {
    let mut row_counts = [0u32; BOARD_SIZE];
    let mut column_counts = [0u32; BOARD_SIZE];

    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            let tile = board.get_tile(r, c);
            if tile == BLANK {
                continue;
            }
            let goal = Position::goal_of(tile);
            if goal == Position::new(r, c) {
                continue;
            }
            if goal.row == r {
                row_counts[r] += 1;
            }
            if goal.column == c {
                column_counts[c] += 1;
            }
        }
    }

    row_counts
        .iter()
        .chain(column_counts.iter())
        .filter(|&&count| count % 2 == 0)
        .sum()
}

fn canonical_conflicts(board: &Board) -> u32 {
    let mut total = 0;
    for line in 0..BOARD_SIZE {
        // Goal columns of the tiles in row `line` that belong to that row, left to right.
        let in_row: Vec<usize> = (0..BOARD_SIZE)
            .map(|c| board.get_tile(line, c))
            .filter(|&tile| tile != BLANK)
            .map(Position::goal_of)
            .filter(|goal| goal.row == line)
            .map(|goal| goal.column)
            .collect();
        // Goal rows of the tiles in column `line` that belong to that column, top to bottom.
        let in_column: Vec<usize> = (0..BOARD_SIZE)
            .map(|r| board.get_tile(r, line))
            .filter(|&tile| tile != BLANK)
            .map(Position::goal_of)
            .filter(|goal| goal.column == line)
            .map(|goal| goal.row)
            .collect();

        total += 2 * (tiles_out_of_order(&in_row) + tiles_out_of_order(&in_column));
    }
    total
}

/// Minimum number of entries to remove so the rest are strictly increasing.
fn tiles_out_of_order(goal_indices: &[usize]) -> u32 {
    let mut longest = vec![1usize; goal_indices.len()];
    for i in 0..goal_indices.len() {
        for j in 0..i {
            if goal_indices[j] < goal_indices[i] {
                longest[i] = longest[i].max(longest[j] + 1);
            }
        }
    }
    let kept = longest.iter().copied().max().unwrap_or(0);
    (goal_indices.len() - kept) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::legal_moves;
    use crate::utils::board_from_rows;

    const ALL_RULES: [ConflictRule; 3] = [
        ConflictRule::EvenCount,
        ConflictRule::Canonical,
        ConflictRule::ManhattanOnly,
    ];

    #[test]
    fn test_goal_evaluates_to_zero() {
        for rule in ALL_RULES {
            assert_eq!(evaluate(&Board::goal(), rule), 0, "{:?}", rule);
        }
    }

    #[test]
    fn test_zero_only_on_goal() {
        for seed in 0..50 {
            let board = Board::scrambled(seed, 1 + seed as usize % 20);
            for rule in ALL_RULES {
                assert_eq!(evaluate(&board, rule) == 0, board.is_goal(), "{:?}\n{}", rule, board);
            }
        }
    }

    #[test]
    fn test_single_misplaced_tile_in_line_adds_nothing() {
        let one_away = board_from_rows(&["1 2 3 4", "5 6 7 8", "9 10 11 12", "13 14 -1 15"]).unwrap();
        assert_eq!(manhattan_distance(&one_away), 1);
        assert_eq!(evaluate(&one_away, ConflictRule::EvenCount), 1);
        assert_eq!(evaluate(&one_away, ConflictRule::Canonical), 1);
    }

    #[test]
    fn test_swapped_pair_in_row() {
        let board = board_from_rows(&["2 1 3 4", "5 6 7 8", "9 10 11 12", "13 14 15 -1"]).unwrap();
        assert_eq!(manhattan_distance(&board), 2);
        assert_eq!(linear_conflict(&board, ConflictRule::EvenCount), 2);
        assert_eq!(linear_conflict(&board, ConflictRule::Canonical), 2);
        assert_eq!(evaluate(&board, ConflictRule::ManhattanOnly), 2);
    }

    #[test]
    fn test_swapped_pair_in_column() {
        let board = board_from_rows(&["5 2 3 4", "1 6 7 8", "9 10 11 12", "13 14 15 -1"]).unwrap();
        assert_eq!(manhattan_distance(&board), 2);
        assert_eq!(linear_conflict(&board, ConflictRule::EvenCount), 2);
        assert_eq!(linear_conflict(&board, ConflictRule::Canonical), 2);
    }

    #[test]
    fn test_odd_misplaced_count_is_ignored_by_even_rule() {
        // Three tiles of row 0 are in their goal row but all in the wrong cell.
        let board = board_from_rows(&["2 3 1 4", "5 6 7 8", "9 10 11 12", "13 14 15 -1"]).unwrap();
        assert_eq!(manhattan_distance(&board), 4);
        assert_eq!(linear_conflict(&board, ConflictRule::EvenCount), 0);
        // Only tile 1 has to leave the row.
        assert_eq!(linear_conflict(&board, ConflictRule::Canonical), 2);
    }

    #[test]
    fn test_even_rule_adds_full_count() {
        let board = board_from_rows(&["4 1 2 3", "5 6 7 8", "9 10 11 12", "13 14 15 -1"]).unwrap();
        assert_eq!(manhattan_distance(&board), 6);
        assert_eq!(linear_conflict(&board, ConflictRule::EvenCount), 4);
        assert_eq!(linear_conflict(&board, ConflictRule::Canonical), 2);
    }

    #[test]
    fn test_tiles_out_of_order() {
        assert_eq!(tiles_out_of_order(&[]), 0);
        assert_eq!(tiles_out_of_order(&[0, 1, 2, 3]), 0);
        assert_eq!(tiles_out_of_order(&[3, 2, 1, 0]), 3);
        assert_eq!(tiles_out_of_order(&[1, 2, 0]), 1);
    }

    #[test]
    fn test_admissible_rules_never_exceed_walk_length() {
        for seed in 0..40 {
            let walk_len = 1 + seed as usize % 25;
            let board = Board::scrambled(seed, walk_len);
            assert!(evaluate(&board, ConflictRule::Canonical) as usize <= walk_len);
            assert!(evaluate(&board, ConflictRule::ManhattanOnly) as usize <= walk_len);
        }
    }

    #[test]
    fn test_single_move_changes_are_bounded() {
        for seed in 0..30 {
            let board = Board::scrambled(seed, 35);
            for mv in legal_moves(board.blank(), None) {
                let next = board.play(mv).unwrap();
                for rule in [ConflictRule::Canonical, ConflictRule::ManhattanOnly] {
                    // Consistent: one move lowers the estimate by at most one.
                    assert!(evaluate(&next, rule) + 1 >= evaluate(&board, rule));
                }
                assert_eq!(
                    manhattan_distance(&board).abs_diff(manhattan_distance(&next)),
                    1
                );
                // One row count and one column count can each toggle parity.
                let even_before = evaluate(&board, ConflictRule::EvenCount);
                let even_after = evaluate(&next, ConflictRule::EvenCount);
                assert!(even_before.abs_diff(even_after) <= 1 + 2 * BOARD_SIZE as u32);
            }
        }
    }
}
