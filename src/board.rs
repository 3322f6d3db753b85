//! The NxN occupation grid.
//!
//! Cells are stored row-major in a flat vector. A cell is either free or owned
//! by exactly one player, and ownership never changes once set.

use std::fmt;

use crate::constants::MAX_BOARD_SIZE;
use crate::error::BoardError;
use crate::player::PlayerId;

/// A cell position as `(row, col)`.
pub type Coord = (usize, usize);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<PlayerId>>,
}

impl Board {
    /// Create an empty `size`x`size` board, `size` in `1..=MAX_BOARD_SIZE`.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(BoardError::InvalidSize(size));
        }
        let area = size.checked_mul(size).ok_or(BoardError::InvalidSize(size))?;
        Ok(Self {
            size,
            cells: vec![None; area],
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, (row, col): Coord) -> bool {
        row < self.size && col < self.size
    }

    fn idx(&self, coord: Coord) -> Result<usize, BoardError> {
        if !self.contains(coord) {
            return Err(BoardError::OutOfBounds {
                row: coord.0,
                col: coord.1,
                size: self.size,
            });
        }
        Ok(coord.0 * self.size + coord.1)
    }

    /// Owner of the cell, or `None` when it is free.
    pub fn cell_owner(&self, coord: Coord) -> Result<Option<PlayerId>, BoardError> {
        Ok(self.cells[self.idx(coord)?])
    }

    pub fn is_free(&self, coord: Coord) -> Result<bool, BoardError> {
        Ok(self.cell_owner(coord)?.is_none())
    }

    /// Mark a free cell as owned by `player`.
    ///
    /// Returns `Ok(true)` when the mark landed and `Ok(false)` when the cell was
    /// already owned, in which case the board is left untouched.
    pub fn place(&mut self, player: PlayerId, coord: Coord) -> Result<bool, BoardError> {
        let i = self.idx(coord)?;
        if self.cells[i].is_some() {
            return Ok(false);
        }
        self.cells[i] = Some(player);
        Ok(true)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// All cells with their owner, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Option<PlayerId>)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, owner)| ((i / size, i % size), *owner))
    }

    /// Free cells in row-major order.
    pub fn free_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells()
            .filter(|(_, owner)| owner.is_none())
            .map(|(coord, _)| coord)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let ch = match self.cells[row * self.size + col] {
                    Some(id) => char::from_digit(id.get() % 36, 36).unwrap_or('#'),
                    None => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
