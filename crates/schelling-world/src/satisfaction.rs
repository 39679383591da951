//! Satisfaction predicate for occupied cells.

use crate::grid::Grid;
use schelling_core::Position;

/// Whether the agent at `pos` wants to move.
///
/// An agent is unsatisfied when the fraction of same-group neighbors among
/// its occupied Moore neighbors is below the threshold. Empty cells are never
/// unsatisfied, and neither is an agent with no occupied neighbors at all.
pub fn is_unsatisfied(grid: &Grid, pos: Position, threshold: f64) -> bool {
    let own = grid.get(pos);
    if !own.is_occupied() {
        return false;
    }

    let mut same_group = 0u32;
    let mut occupied = 0u32;

    for neighbor in grid.neighbors(pos) {
        if neighbor.is_occupied() {
            occupied += 1;
            if neighbor == own {
                same_group += 1;
            }
        }
    }

    occupied > 0 && (same_group as f64) / (occupied as f64) < threshold
}
