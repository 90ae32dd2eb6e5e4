//! Board geometry: coordinates, bounds, neighbours and the `A1` notation.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::common::{GameError, GameResult};
use crate::config::MAX_BOARD_SIZE;

/// A cell on the board, `row` and `col` both zero-based.
///
/// Ordering is row-major, which the targeting code relies on for its
/// lowest-coordinate tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Parity class of the cell on a checkerboard colouring.
    pub fn parity(&self) -> usize {
        (self.row + self.col) % 2
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// Renders as a row letter followed by a 1-based column, e.g. `C5`.
/// Rows past `Z` have no letter and render as `(row, col)`.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.row >= 26 {
            return write!(f, "({}, {})", self.row, self.col);
        }
        let letter = (b'A' + self.row as u8) as char;
        write!(f, "{}{}", letter, self.col + 1)
    }
}

/// A square N×N playing field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    size: usize,
}

impl Grid {
    /// Create a grid; sizes outside `1..=MAX_BOARD_SIZE` are rejected.
    pub fn new(size: usize) -> GameResult<Self> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(GameError::InvalidBoardSize { size });
        }
        Ok(Self { size })
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    pub fn in_bounds(&self, coord: Coordinate) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    /// Row-major index of an in-bounds coordinate.
    pub(crate) fn index(&self, coord: Coordinate) -> usize {
        coord.row * self.size + coord.col
    }

    /// Orthogonal neighbours in up, down, left, right order, clipped to the grid.
    pub fn neighbors(&self, coord: Coordinate) -> Vec<Coordinate> {
        let mut out = Vec::with_capacity(4);
        if coord.row > 0 {
            out.push(Coordinate::new(coord.row - 1, coord.col));
        }
        if coord.row + 1 < self.size {
            out.push(Coordinate::new(coord.row + 1, coord.col));
        }
        if coord.col > 0 {
            out.push(Coordinate::new(coord.row, coord.col - 1));
        }
        if coord.col + 1 < self.size {
            out.push(Coordinate::new(coord.row, coord.col + 1));
        }
        out
    }

    /// Iterate every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let size = self.size;
        (0..size * size).map(move |i| Coordinate::new(i / size, i % size))
    }

    /// Parse `A1`-style notation: a row letter then a 1-based column number.
    pub fn parse(&self, text: &str) -> GameResult<Coordinate> {
        let invalid = || GameError::InvalidCoordinate(text.to_string());
        let trimmed = text.trim();
        let mut chars = trimmed.chars();
        let letter = chars.next().ok_or_else(invalid)?;
        if !letter.is_ascii_alphabetic() {
            return Err(invalid());
        }
        let digits = chars.as_str();
        if digits.is_empty() || digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let col: usize = digits.parse().map_err(|_| invalid())?;
        let row = (letter.to_ascii_uppercase() as u8 - b'A') as usize;
        let coord = Coordinate::new(row, col - 1);
        if !self.in_bounds(coord) {
            return Err(invalid());
        }
        Ok(coord)
    }

    /// Inverse of [`Grid::parse`].
    pub fn format(&self, coord: Coordinate) -> String {
        coord.to_string()
    }
}
