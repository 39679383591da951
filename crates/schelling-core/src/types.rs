//! Core type definitions for the simulation.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a simulation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(pub Uuid);

impl RunId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// State of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    Empty,
    GroupA,
    GroupB,
}

impl CellState {
    pub fn is_occupied(&self) -> bool {
        !matches!(self, CellState::Empty)
    }

    /// Numeric encoding used by history frames: Empty=0, GroupA=1, GroupB=2
    pub fn encode(&self) -> u8 {
        match self {
            CellState::Empty => 0,
            CellState::GroupA => 1,
            CellState::GroupB => 2,
        }
    }
}

/// 2D position on the grid, (row, col), 0-indexed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn offset(&self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// Whether the position lies inside a size x size grid.
    ///
    /// The grid is clipped at its edges: positions outside the square simply
    /// do not exist, there is no wraparound.
    pub fn in_bounds(&self, size: u32) -> bool {
        self.row >= 0 && self.col >= 0 && self.row < size as i32 && self.col < size as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_state_encoding() {
        assert_eq!(CellState::Empty.encode(), 0);
        assert_eq!(CellState::GroupA.encode(), 1);
        assert_eq!(CellState::GroupB.encode(), 2);
    }

    #[test]
    fn test_cell_state_occupancy() {
        assert!(!CellState::Empty.is_occupied());
        assert!(CellState::GroupA.is_occupied());
        assert!(CellState::GroupB.is_occupied());
    }

    #[test]
    fn test_position_bounds() {
        assert!(Position::new(0, 0).in_bounds(10));
        assert!(Position::new(9, 9).in_bounds(10));
        assert!(!Position::new(-1, 0).in_bounds(10));
        assert!(!Position::new(0, -1).in_bounds(10));
        assert!(!Position::new(10, 0).in_bounds(10));
        assert!(!Position::new(0, 10).in_bounds(10));
    }

    #[test]
    fn test_position_offset() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.offset(-1, 1), Position::new(4, 6));
        assert_eq!(pos.offset(0, 0), pos);
    }
}
