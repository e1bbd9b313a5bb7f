//! Core board representation for the 15-puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Position`: a (row, column) cell coordinate, used to track the blank.
//! - `Move`: the four sliding moves, labelled by the direction the displaced tile slides.
//! - `Board`: an immutable-by-convention value type holding the grid and the blank position,
//!   with the solvability test and move application.
//! - `legal_moves`: move generation with pruning of the immediate reversal.
use crate::error::{PuzzleError, Result};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Side length of the board. The goal layout is row-major `1..BOARD_SIZE²-1` with the blank last.
pub const BOARD_SIZE: usize = 4;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Internal encoding of the blank cell.
pub const BLANK: u8 = 0;

/// Encoding of the blank used by puzzle files and console output.
pub const BLANK_SENTINEL: i32 = -1;

/// A 0-indexed (row, column) coordinate on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub fn new(row: usize, column: usize) -> Self {
        Position { row, column }
    }

    /// Returns the cell tile `tile` occupies in the goal layout.
    ///
    /// The blank's goal is the last cell.
    ///
    /// # Examples
    /// ```
    /// use fifteen_solver::engine::{Position, BLANK};
    /// assert_eq!(Position::goal_of(1), Position::new(0, 0));
    /// assert_eq!(Position::goal_of(8), Position::new(1, 3));
    /// assert_eq!(Position::goal_of(BLANK), Position::new(3, 3));
    /// ```
    pub fn goal_of(tile: u8) -> Self {
        if tile == BLANK {
            return Position::new(BOARD_SIZE - 1, BOARD_SIZE - 1);
        }
        let index = tile as usize - 1;
        Position::new(index / BOARD_SIZE, index % BOARD_SIZE)
    }

    /// L1 distance between two cells.
    pub fn manhattan(self, other: Position) -> usize {
        self.row.abs_diff(other.row) + self.column.abs_diff(other.column)
    }

    /// Shifts the position by `(d_row, d_column)`, or `None` if that leaves the board.
    fn offset(self, (d_row, d_column): (isize, isize)) -> Option<Position> {
        let row = self.row.checked_add_signed(d_row)?;
        let column = self.column.checked_add_signed(d_column)?;
        if row < BOARD_SIZE && column < BOARD_SIZE {
            Some(Position::new(row, column))
        } else {
            None
        }
    }
}

/// One sliding move.
///
/// A move is named after the direction the displaced tile slides, which is the
/// opposite of the direction the blank travels: `Left` moves the blank one column
/// to the right, `Up` moves the blank one row down, and so on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Left,
    Right,
    Down,
    Up,
}

impl Move {
    /// All moves in generation order.
    pub const ALL: [Move; 4] = [Move::Left, Move::Right, Move::Down, Move::Up];

    /// Displacement `(d_row, d_column)` applied to the blank.
    pub fn blank_offset(&self) -> (isize, isize) {
        match self {
            Move::Left => (0, 1),
            Move::Right => (0, -1),
            Move::Down => (-1, 0),
            Move::Up => (1, 0),
        }
    }

    /// The move that undoes this one.
    pub fn opposite(&self) -> Self {
        match self {
            Move::Left => Move::Right,
            Move::Right => Move::Left,
            Move::Down => Move::Up,
            Move::Up => Move::Down,
        }
    }

    /// Single-letter code used in solution logs.
    ///
    /// # Examples
    /// ```
    /// use fifteen_solver::engine::Move;
    /// assert_eq!(Move::Left.label(), 'L');
    /// assert_eq!(Move::Up.label(), 'U');
    /// ```
    pub fn label(&self) -> char {
        match self {
            Move::Left => 'L',
            Move::Right => 'R',
            Move::Down => 'D',
            Move::Up => 'U',
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Enumerates the moves available to a blank at `blank`.
///
/// Every move that keeps the blank on the grid is returned, except the one that
/// would undo `previous`. With `previous == None` (the root of a search) all
/// geometrically valid moves are returned: 2 in a corner, 3 on an edge, 4 inside.
/// The order is always a subsequence of [`Move::ALL`].
///
/// # Examples
/// ```
/// use fifteen_solver::engine::{legal_moves, Move, Position};
/// let moves = legal_moves(Position::new(0, 0), None);
/// assert_eq!(moves, vec![Move::Left, Move::Up]);
///
/// let moves = legal_moves(Position::new(0, 0), Some(Move::Right));
/// assert_eq!(moves, vec![Move::Up]);
/// ```
pub fn legal_moves(blank: Position, previous: Option<Move>) -> Vec<Move> {
    Move::ALL
        .into_iter()
        .filter(|mv| blank.offset(mv.blank_offset()).is_some())
        .filter(|mv| previous.map_or(true, |prev| *mv != prev.opposite()))
        .collect()
}

/// A puzzle state: the grid plus the position of its blank.
///
/// Boards are small `Copy` values. Applying a move yields a new board and leaves
/// the original untouched, so search branches never share state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    grid: [[u8; BOARD_SIZE]; BOARD_SIZE],
    blank: Position,
}

impl Board {
    /// Returns the solved layout: `1..15` row-major with the blank in the last cell.
    pub fn goal() -> Self {
        let mut grid = [[BLANK; BOARD_SIZE]; BOARD_SIZE];
        for (index, cell) in grid.iter_mut().flatten().enumerate().take(CELL_COUNT - 1) {
            *cell = index as u8 + 1;
        }
        Board {
            grid,
            blank: Position::new(BOARD_SIZE - 1, BOARD_SIZE - 1),
        }
    }

    /// Creates a board from a grid using the internal encoding (`BLANK` for the blank).
    ///
    /// # Errors
    /// Fails unless the grid holds exactly one blank and each of `1..=15` exactly once.
    pub fn from_grid(grid: [[u8; BOARD_SIZE]; BOARD_SIZE]) -> Result<Self> {
        let blanks: Vec<Position> = (0..BOARD_SIZE)
            .flat_map(|r| (0..BOARD_SIZE).map(move |c| Position::new(r, c)))
            .filter(|p| grid[p.row][p.column] == BLANK)
            .collect();
        let blank = match blanks.as_slice() {
            [] => return Err(PuzzleError::MissingBlank),
            [only] => *only,
            many => return Err(PuzzleError::MultipleBlanks(many.len())),
        };

        let mut seen = [false; CELL_COUNT];
        for &tile in grid.iter().flatten() {
            if tile as usize >= CELL_COUNT {
                return Err(PuzzleError::TileOutOfRange(tile as i32));
            }
            if tile != BLANK && seen[tile as usize] {
                return Err(PuzzleError::DuplicateTile(tile));
            }
            seen[tile as usize] = true;
        }

        Ok(Board { grid, blank })
    }

    /// Creates a board from row-major labels in the external encoding.
    ///
    /// The blank may be written as `-1` (the file sentinel) or `0`.
    ///
    /// # Examples
    /// ```
    /// use fifteen_solver::engine::Board;
    /// let tiles = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, -1];
    /// assert!(Board::from_tiles(&tiles).unwrap().is_goal());
    /// ```
    pub fn from_tiles(tiles: &[i32]) -> Result<Self> {
        if tiles.len() != CELL_COUNT {
            return Err(PuzzleError::WrongTileCount {
                expected: CELL_COUNT,
                found: tiles.len(),
            });
        }
        let mut grid = [[BLANK; BOARD_SIZE]; BOARD_SIZE];
        for (cell, &label) in grid.iter_mut().flatten().zip(tiles) {
            *cell = match label {
                BLANK_SENTINEL | 0 => BLANK,
                1..=15 => label as u8,
                _ => return Err(PuzzleError::TileOutOfRange(label)),
            };
        }
        Board::from_grid(grid)
    }

    /// Returns the tile at row `r`, column `c`.
    ///
    /// # Panics
    /// Panics if `r` or `c` are outside the board.
    pub fn get_tile(&self, r: usize, c: usize) -> u8 {
        self.grid[r][c]
    }

    pub fn grid(&self) -> &[[u8; BOARD_SIZE]; BOARD_SIZE] {
        &self.grid
    }

    /// Position of the blank cell.
    pub fn blank(&self) -> Position {
        self.blank
    }

    pub fn is_goal(&self) -> bool {
        *self == Board::goal()
    }

    /// Counts pairs `(i, j)`, `i < j` in row-major order where `tile[i] > tile[j]`
    /// and `tile[j]` is not the blank.
    pub fn count_inversions(&self) -> usize {
        let flat: Vec<u8> = self.grid.iter().flatten().copied().collect();
        flat.iter()
            .enumerate()
            .map(|(i, &tile)| {
                flat[i + 1..]
                    .iter()
                    .filter(|&&later| later != BLANK && tile > later)
                    .count()
            })
            .sum()
    }

    /// Parity test for the 4×4 goal layout.
    ///
    /// A board is solvable iff the parity of its inversion count differs from
    /// the parity of the blank's row. Search must only start on boards that pass.
    ///
    /// # Examples
    /// ```
    /// use fifteen_solver::engine::Board;
    /// assert!(Board::goal().is_solvable());
    ///
    /// let swapped = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 15, 14, -1];
    /// assert!(!Board::from_tiles(&swapped).unwrap().is_solvable());
    /// ```
    pub fn is_solvable(&self) -> bool {
        self.count_inversions() % 2 != self.blank.row % 2
    }

    /// Applies `mv`, returning the successor board, or `None` if the blank would leave the grid.
    pub fn play(&self, mv: Move) -> Option<Board> {
        let target = self.blank.offset(mv.blank_offset())?;
        let mut next = *self;
        next.grid[self.blank.row][self.blank.column] = self.grid[target.row][target.column];
        next.grid[target.row][target.column] = BLANK;
        next.blank = target;
        Some(next)
    }

    /// Scrambles the goal with a seeded random walk of `walk_len` moves.
    ///
    /// The walk never immediately undoes its previous move. Boards produced this
    /// way are always solvable, and the same seed always yields the same board.
    pub fn scrambled(seed: u64, walk_len: usize) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::goal();
        let mut previous = None;
        for _ in 0..walk_len {
            let moves = legal_moves(board.blank, previous);
            let mv = moves[rng.gen_range(0..moves.len())];
            if let Some(next) = board.play(mv) {
                board = next;
                previous = Some(mv);
            }
        }
        board
    }
}

impl fmt::Display for Board {
    /// One row per line, tiles separated by spaces, blank printed as `-1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.grid.iter().enumerate() {
            let cells: Vec<String> = row
                .iter()
                .map(|&tile| {
                    if tile == BLANK {
                        BLANK_SENTINEL.to_string()
                    } else {
                        tile.to_string()
                    }
                })
                .collect();
            write!(f, "{}", cells.join(" "))?;
            if r < BOARD_SIZE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
