//! Incrementally summarized N×N board.
//!
//! The board keeps, next to the raw cells, the sum of every row, every
//! column and both diagonals plus the number of empty cells. A line whose
//! sum has magnitude N is full of one player's marks, so terminal positions
//! are detected without rescanning the grid.
//!
//! Cell-level access goes through a single staged cursor: [`Board::select`]
//! stores a coordinate, and the read/write/clear operations act on it.

use super::types::{Cell, Coord, Player};
use std::fmt;
use tracing::{instrument, trace};

/// Errors raised by board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// Coordinate lies outside `[0, size)`.
    #[display("cell ({x}, {y}) is outside the {size}x{size} grid")]
    OutOfRange {
        /// Requested row.
        x: usize,
        /// Requested column.
        y: usize,
        /// Board size.
        size: usize,
    },

    /// Row or column index lies outside `[0, size)`.
    #[display("line {index} is outside the {size}x{size} grid")]
    LineOutOfRange {
        /// Requested row or column.
        index: usize,
        /// Board size.
        size: usize,
    },

    /// A cell-level operation ran without an active selection.
    #[display("no cell selected")]
    NoSelection,
}

/// Derived line sums and empty-cell count of a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregates {
    /// Sum of each row.
    pub row_sums: Vec<i32>,
    /// Sum of each column.
    pub col_sums: Vec<i32>,
    /// Sum of the main diagonal.
    pub trace: i32,
    /// Sum of the anti-diagonal.
    pub anti_trace: i32,
    /// Number of empty cells.
    pub empty_count: usize,
}

impl Aggregates {
    /// Computes the aggregates of a row-major grid by direct scan.
    fn scan(size: usize, cells: &[Cell]) -> Self {
        let mut row_sums = vec![0; size];
        let mut col_sums = vec![0; size];
        let mut trace = 0;
        let mut anti_trace = 0;
        let mut empty_count = 0;

        for x in 0..size {
            for y in 0..size {
                let cell = cells[x * size + y];
                let value = cell.value();
                row_sums[x] += value;
                col_sums[y] += value;
                if x == y {
                    trace += value;
                }
                if y == size - 1 - x {
                    anti_trace += value;
                }
                if cell.is_empty() {
                    empty_count += 1;
                }
            }
        }

        Self {
            row_sums,
            col_sums,
            trace,
            anti_trace,
            empty_count,
        }
    }
}

/// N×N board with cached line sums.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Cells in row-major order.
    cells: Vec<Cell>,
    empty_count: usize,
    row_sums: Vec<i32>,
    col_sums: Vec<i32>,
    trace: i32,
    anti_trace: i32,
    selection: Option<Coord>,
}

impl Board {
    /// Creates an empty board of the given size.
    #[instrument]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
            empty_count: size * size,
            row_sums: vec![0; size],
            col_sums: vec![0; size],
            trace: 0,
            anti_trace: 0,
            selection: None,
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Stages `(x, y)` as the current cell.
    #[instrument(level = "trace", skip(self))]
    pub fn select(&mut self, x: usize, y: usize) -> Result<(), BoardError> {
        self.check_range(x, y)?;
        self.selection = Some(Coord::new(x, y));
        Ok(())
    }

    /// Drops the staged cell.
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Returns true if no cell is staged.
    pub fn is_selection_empty(&self) -> bool {
        self.selection.is_none()
    }

    /// The staged cell, if any.
    pub fn selection(&self) -> Option<Coord> {
        self.selection
    }

    /// Returns true if the staged cell holds no mark.
    pub fn is_cell_empty(&self) -> Result<bool, BoardError> {
        Ok(self.read_from_cell()?.is_empty())
    }

    /// Returns the staged cell's content.
    pub fn read_from_cell(&self) -> Result<Cell, BoardError> {
        let index = self.selected_index()?;
        Ok(self.cells[index])
    }

    /// Writes `player`'s mark into the staged cell.
    ///
    /// Writing the mark a cell already holds is a no-op.
    #[instrument(level = "trace", skip(self))]
    pub fn write_to_cell(&mut self, player: Player) -> Result<(), BoardError> {
        let index = self.selected_index()?;
        let previous = self.cells[index];
        let next = Cell::Occupied(player);
        if previous.is_empty() {
            self.empty_count -= 1;
        }
        if previous != next {
            self.cells[index] = next;
            self.recompute_aggregates();
        }
        Ok(())
    }

    /// Removes any mark from the staged cell.
    #[instrument(level = "trace", skip(self))]
    pub fn clear_cell(&mut self) -> Result<(), BoardError> {
        let index = self.selected_index()?;
        if !self.cells[index].is_empty() {
            self.cells[index] = Cell::Empty;
            self.empty_count += 1;
            self.recompute_aggregates();
        }
        Ok(())
    }

    /// Reads a cell by coordinate without touching the selection.
    pub fn get(&self, x: usize, y: usize) -> Result<Cell, BoardError> {
        self.check_range(x, y)?;
        Ok(self.cells[x * self.size + y])
    }

    /// Number of empty cells.
    pub fn empty_cell_count(&self) -> usize {
        self.empty_count
    }

    /// Number of cells holding `player`'s mark.
    pub fn occupied(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Occupied(player))
            .count()
    }

    /// Sum of the main diagonal.
    pub fn trace(&self) -> i32 {
        self.trace
    }

    /// Sum of the anti-diagonal.
    pub fn anti_trace(&self) -> i32 {
        self.anti_trace
    }

    /// Sum of row `index`.
    pub fn row_sum(&self, index: usize) -> Result<i32, BoardError> {
        self.row_sums
            .get(index)
            .copied()
            .ok_or(BoardError::LineOutOfRange {
                index,
                size: self.size,
            })
    }

    /// Sum of column `index`.
    pub fn col_sum(&self, index: usize) -> Result<i32, BoardError> {
        self.col_sums
            .get(index)
            .copied()
            .ok_or(BoardError::LineOutOfRange {
                index,
                size: self.size,
            })
    }

    /// All row sums.
    pub fn row_sums(&self) -> &[i32] {
        &self.row_sums
    }

    /// All column sums.
    pub fn col_sums(&self) -> &[i32] {
        &self.col_sums
    }

    /// Snapshot of the cached aggregates.
    pub fn aggregates(&self) -> Aggregates {
        Aggregates {
            row_sums: self.row_sums.clone(),
            col_sums: self.col_sums.clone(),
            trace: self.trace,
            anti_trace: self.anti_trace,
            empty_count: self.empty_count,
        }
    }

    /// Aggregates recomputed from the cells by full scan.
    pub fn expected_aggregates(&self) -> Aggregates {
        Aggregates::scan(self.size, &self.cells)
    }

    /// Clears every cell, every aggregate and the selection.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn reset(&mut self) {
        *self = Self::new(self.size);
    }

    fn check_range(&self, x: usize, y: usize) -> Result<(), BoardError> {
        if x >= self.size || y >= self.size {
            return Err(BoardError::OutOfRange {
                x,
                y,
                size: self.size,
            });
        }
        Ok(())
    }

    fn selected_index(&self) -> Result<usize, BoardError> {
        let coord = self.selection.ok_or(BoardError::NoSelection)?;
        Ok(coord.x * self.size + coord.y)
    }

    /// Full O(N²) recompute of the line sums.
    fn recompute_aggregates(&mut self) {
        let Aggregates {
            row_sums,
            col_sums,
            trace,
            anti_trace,
            ..
        } = Aggregates::scan(self.size, &self.cells);
        self.row_sums = row_sums;
        self.col_sums = col_sums;
        self.trace = trace;
        self.anti_trace = anti_trace;
        trace!(trace, anti_trace, empty = self.empty_count, "aggregates recomputed");
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(3)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for x in 0..self.size {
            if x > 0 {
                writeln!(f)?;
            }
            for y in 0..self.size {
                let symbol = match self.cells[x * self.size + y] {
                    Cell::Empty => '.',
                    Cell::Occupied(Player::X) => 'X',
                    Cell::Occupied(Player::O) => 'O',
                };
                write!(f, "{symbol}")?;
            }
        }
        Ok(())
    }
}
