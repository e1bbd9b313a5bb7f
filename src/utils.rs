use crate::engine::{Board, CELL_COUNT};
use crate::error::{PuzzleError, Result};
use std::fs;
use std::path::Path;

/// Parses every puzzle in `input`.
///
/// The input is a stream of whitespace-separated integers. Each run of 16
/// consecutive integers is one board in row-major order, with `-1` marking the
/// blank; line breaks carry no meaning. Empty input yields no puzzles.
///
/// # Errors
/// * [`PuzzleError::InvalidToken`] if a token is not an integer.
/// * [`PuzzleError::WrongTileCount`] if the last puzzle is incomplete.
/// * Any validation error from [`Board::from_tiles`].
///
/// # Examples
/// ```
/// use fifteen_solver::utils::parse_puzzles;
///
/// let input = "1 2 3 4\n5 6 7 8\n9 10 11 12\n13 14 15 -1\n";
/// let puzzles = parse_puzzles(input).unwrap();
/// assert_eq!(puzzles.len(), 1);
/// assert!(puzzles[0].is_goal());
///
/// assert!(parse_puzzles("1 2 x").is_err());
/// ```
pub fn parse_puzzles(input: &str) -> Result<Vec<Board>> {
    let labels = input
        .split_whitespace()
        .enumerate()
        .map(|(index, token)| {
            token.parse::<i32>().map_err(|_| PuzzleError::InvalidToken {
                index,
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<i32>>>()?;

    if labels.len() % CELL_COUNT != 0 {
        return Err(PuzzleError::WrongTileCount {
            expected: CELL_COUNT,
            found: labels.len() % CELL_COUNT,
        });
    }

    labels.chunks(CELL_COUNT).map(Board::from_tiles).collect()
}

/// Reads and parses the puzzle file at `path`.
pub fn load_puzzles(path: &Path) -> Result<Vec<Board>> {
    let content = fs::read_to_string(path).map_err(|source| PuzzleError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_puzzles(&content)
}

/// Builds a single board from its rows, e.g. `["1 2 3 4", ..., "13 14 15 -1"]`.
///
/// Mostly useful in tests and examples.
pub fn board_from_rows(rows: &[&str]) -> Result<Board> {
    let puzzles = parse_puzzles(&rows.join("\n"))?;
    match puzzles.as_slice() {
        [board] => Ok(*board),
        _ => Err(PuzzleError::WrongTileCount {
            expected: CELL_COUNT,
            found: puzzles.len() * CELL_COUNT,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_PUZZLES: &str = "\
1 2 3 4
5 6 7 8
9 10 11 12
13 14 15 -1
1 2 3 4 5 6 7 8
9 10 11 12 13 15 14 -1
";

    #[test]
    fn test_parse_puzzles_ignores_line_layout() {
        let puzzles = parse_puzzles(TWO_PUZZLES).unwrap();
        assert_eq!(puzzles.len(), 2);
        assert!(puzzles[0].is_goal());
        assert_eq!(puzzles[1].get_tile(3, 1), 15);
        assert_eq!(puzzles[1].get_tile(3, 2), 14);
    }

    #[test]
    fn test_parse_puzzles_empty_input() {
        assert!(parse_puzzles("").unwrap().is_empty());
        assert!(parse_puzzles("  \n\t\n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_puzzles_invalid_token() {
        let result = parse_puzzles("1 2 three 4");
        match result {
            Err(PuzzleError::InvalidToken { index, token }) => {
                assert_eq!(index, 2);
                assert_eq!(token, "three");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_parse_puzzles_trailing_partial_puzzle() {
        let input = format!("{}1 2 3", TWO_PUZZLES);
        let err = parse_puzzles(&input).unwrap_err();
        assert!(matches!(
            err,
            PuzzleError::WrongTileCount { expected: 16, found: 3 }
        ));
        assert!(err.to_string().contains("expected 16 tiles, found 3"));
    }

    #[test]
    fn test_parse_puzzles_rejects_duplicate_tiles() {
        let input = "1 1 3 4 5 6 7 8 9 10 11 12 13 14 15 -1";
        assert!(matches!(
            parse_puzzles(input),
            Err(PuzzleError::DuplicateTile(1))
        ));
    }

    #[test]
    fn test_board_from_rows_requires_one_board() {
        assert!(board_from_rows(&["1 2 3 4", "5 6 7 8", "9 10 11 12", "13 14 15 -1"]).is_ok());
        assert!(board_from_rows(&[]).is_err());
    }

    #[test]
    fn test_load_puzzles_missing_file() {
        let err = load_puzzles(Path::new("definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, PuzzleError::Io { .. }));
        assert!(err.to_string().contains("definitely/not/here.txt"));
    }
}
