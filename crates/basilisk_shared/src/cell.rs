//! Board cells - the fixed-size positional record everything runs on.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::direction::Direction;

/// One board position: 1-based row and column, matching terminal
/// cursor addressing.
///
/// `Cell` is the record type stored in the snake queue: plain old
/// data, four bytes, structurally comparable. The derived ordering is
/// row-major and only exists so queues of cells form a total order.
#[repr(C)]
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Pod, Zeroable, Serialize,
    Deserialize,
)]
pub struct Cell {
    /// Row (screen y), 1-based.
    pub row: i16,
    /// Column (screen x), 1-based.
    pub col: i16,
}

impl Cell {
    /// Creates a cell at `row`, `col`.
    #[inline]
    #[must_use]
    pub const fn new(row: i16, col: i16) -> Self {
        Self { row, col }
    }

    /// Returns the neighboring cell one step in `direction`.
    #[inline]
    #[must_use]
    pub const fn stepped(self, direction: Direction) -> Self {
        let (row_delta, col_delta) = direction.delta();
        Self {
            row: self.row + row_delta,
            col: self.col + col_delta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stepped() {
        let cell = Cell::new(5, 10);
        assert_eq!(cell.stepped(Direction::Up), Cell::new(4, 10));
        assert_eq!(cell.stepped(Direction::Down), Cell::new(6, 10));
        assert_eq!(cell.stepped(Direction::Left), Cell::new(5, 9));
        assert_eq!(cell.stepped(Direction::Right), Cell::new(5, 11));
    }

    #[test]
    fn test_row_major_order() {
        assert!(Cell::new(1, 9) < Cell::new(2, 1));
        assert!(Cell::new(3, 4) < Cell::new(3, 5));
    }
}
