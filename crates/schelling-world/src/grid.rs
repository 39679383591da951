//! 2D grid for the neighborhood.

use crate::history::Frame;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use schelling_core::{CellState, Position, Result, SimConfig};
use serde::{Deserialize, Serialize};

/// A square 2D grid of cells, stored row-major
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    pub size: u32,
    cells: Vec<CellState>,
}

impl Grid {
    pub fn new(size: u32) -> Self {
        let total = (size as usize) * (size as usize);
        Self {
            size,
            cells: vec![CellState::Empty; total],
        }
    }

    /// Create the initial randomized grid from a configuration.
    ///
    /// Both groups get `floor(total * group_ratio / 2)` agents; the remaining
    /// cells are empty. The flat cell list is shuffled uniformly and reshaped
    /// row-major.
    pub fn from_config(config: &SimConfig, rng: &mut ChaCha8Rng) -> Result<Self> {
        config.validate()?;

        let group_count = config.group_count();
        let empty_count = config.empty_count();

        let mut cells = Vec::with_capacity(config.total_cells());
        cells.extend(std::iter::repeat(CellState::GroupA).take(group_count));
        cells.extend(std::iter::repeat(CellState::GroupB).take(group_count));
        cells.extend(std::iter::repeat(CellState::Empty).take(empty_count));
        cells.shuffle(rng);

        Ok(Self {
            size: config.size,
            cells,
        })
    }

    /// Get cell state at position
    pub fn get(&self, pos: Position) -> CellState {
        self.cells[self.pos_to_index(pos)]
    }

    /// Set cell state at position
    pub fn set(&mut self, pos: Position, state: CellState) {
        let index = self.pos_to_index(pos);
        self.cells[index] = state;
    }

    fn pos_to_index(&self, pos: Position) -> usize {
        debug_assert!(pos.in_bounds(self.size), "position out of bounds: {pos:?}");
        (pos.row as usize) * (self.size as usize) + (pos.col as usize)
    }

    /// Iterator over all positions in row-major scan order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let size = self.size as i32;
        (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }

    /// Iterator over the states of the Moore neighborhood of a position.
    ///
    /// Up to 8 neighbors; edge and corner cells have fewer since the grid is
    /// clipped, not toroidal.
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = CellState> + '_ {
        let size = self.size;
        (-1..=1)
            .flat_map(move |dr| (-1..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .map(move |(dr, dc)| pos.offset(dr, dc))
            .filter(move |neighbor| neighbor.in_bounds(size))
            .map(move |neighbor| self.get(neighbor))
    }

    /// Count cells per state: (empty, group_a, group_b)
    pub fn counts(&self) -> (usize, usize, usize) {
        let mut empty = 0;
        let mut group_a = 0;
        let mut group_b = 0;

        for cell in &self.cells {
            match cell {
                CellState::Empty => empty += 1,
                CellState::GroupA => group_a += 1,
                CellState::GroupB => group_b += 1,
            }
        }

        (empty, group_a, group_b)
    }

    /// Numeric snapshot of the grid state for the history.
    ///
    /// The frame owns its data; mutating the grid afterwards does not touch
    /// frames already taken.
    pub fn frame(&self) -> Frame {
        let size = self.size as usize;
        (0..size)
            .map(|row| {
                self.cells[row * size..(row + 1) * size]
                    .iter()
                    .map(|cell| cell.encode())
                    .collect()
            })
            .collect()
    }
}
