//! Registry of empty cells available as relocation targets.

use crate::grid::Grid;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use schelling_core::{CellState, Position};
use std::collections::HashMap;

/// Set of empty positions supporting uniform random draws.
///
/// Positions live in a slot vector for O(1) uniform choice; a position-to-slot
/// map makes removal O(1) via swap-remove. Invariant: the registry holds
/// exactly the positions where the grid is empty.
#[derive(Debug, Clone, Default)]
pub struct VacancyRegistry {
    slots: Vec<Position>,
    index: HashMap<Position, usize>,
}

impl VacancyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan the grid for empty cells
    pub fn from_grid(grid: &Grid) -> Self {
        let mut registry = Self::new();
        for pos in grid.positions() {
            if grid.get(pos) == CellState::Empty {
                registry.insert(pos);
            }
        }
        registry
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn contains(&self, pos: &Position) -> bool {
        self.index.contains_key(pos)
    }

    /// Register a newly vacated position
    pub fn insert(&mut self, pos: Position) {
        debug_assert!(!self.contains(&pos), "position already vacant: {pos:?}");
        self.index.insert(pos, self.slots.len());
        self.slots.push(pos);
    }

    /// Remove a position that is about to be occupied. Returns false if the
    /// position was not registered.
    pub fn remove(&mut self, pos: &Position) -> bool {
        let Some(slot) = self.index.remove(pos) else {
            return false;
        };
        self.remove_slot(slot);
        true
    }

    /// Draw a uniformly random vacant position, removing it from the registry
    pub fn take_random(&mut self, rng: &mut ChaCha8Rng) -> Option<Position> {
        if self.slots.is_empty() {
            return None;
        }
        let slot = rng.gen_range(0..self.slots.len());
        let pos = self.slots[slot];
        self.index.remove(&pos);
        self.remove_slot(slot);
        Some(pos)
    }

    fn remove_slot(&mut self, slot: usize) {
        let last = self.slots.len() - 1;
        self.slots.swap(slot, last);
        self.slots.pop();
        if slot < self.slots.len() {
            self.index.insert(self.slots[slot], slot);
        }
    }

    /// Iterate registered positions (arbitrary order)
    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.slots.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    fn vacant_set(registry: &VacancyRegistry) -> HashSet<Position> {
        registry.iter().copied().collect()
    }

    fn grid_empty_set(grid: &Grid) -> HashSet<Position> {
        grid.positions()
            .filter(|&p| grid.get(p) == CellState::Empty)
            .collect()
    }

    #[test]
    fn test_scan_matches_grid() {
        let mut grid = Grid::new(4);
        grid.set(Position::new(0, 0), CellState::GroupA);
        grid.set(Position::new(3, 2), CellState::GroupB);

        let registry = VacancyRegistry::from_grid(&grid);
        assert_eq!(registry.len(), 14);
        assert_eq!(vacant_set(&registry), grid_empty_set(&grid));
    }

    #[test]
    fn test_insert_remove_keeps_index_consistent() {
        let mut registry = VacancyRegistry::new();
        let positions: Vec<Position> = (0..6).map(|i| Position::new(i, i)).collect();
        for &pos in &positions {
            registry.insert(pos);
        }

        // Remove from the middle to exercise the swap-remove path
        assert!(registry.remove(&positions[2]));
        assert!(registry.remove(&positions[0]));
        assert!(!registry.remove(&positions[2]));

        assert_eq!(registry.len(), 4);
        for &pos in &positions[3..] {
            assert!(registry.contains(&pos));
        }
        assert!(registry.contains(&positions[1]));

        registry.insert(positions[0]);
        assert_eq!(registry.len(), 5);
        assert!(registry.contains(&positions[0]));
    }

    #[test]
    fn test_take_random_draws_a_member() {
        let mut registry = VacancyRegistry::new();
        for i in 0..9 {
            registry.insert(Position::new(i / 3, i % 3));
        }
        let before = vacant_set(&registry);

        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let drawn = registry.take_random(&mut rng).unwrap();

        assert!(before.contains(&drawn));
        assert!(!registry.contains(&drawn));
        assert_eq!(registry.len(), 8);
    }

    #[test]
    fn test_take_random_exhausts_to_none() {
        let mut registry = VacancyRegistry::new();
        registry.insert(Position::new(1, 1));

        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(registry.take_random(&mut rng), Some(Position::new(1, 1)));
        assert_eq!(registry.take_random(&mut rng), None);
    }
}
