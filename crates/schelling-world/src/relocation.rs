//! Relocation pass: move every unsatisfied agent to a random empty cell.

use crate::grid::Grid;
use crate::satisfaction::is_unsatisfied;
use crate::vacancy::VacancyRegistry;
use rand_chacha::ChaCha8Rng;
use schelling_core::{CellState, Error, Result};
use tracing::debug;

/// Outcome of a single relocation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassOutcome {
    /// Agents found unsatisfied by the identification scan
    pub unsatisfied: usize,
    /// Agents actually relocated
    pub moved: usize,
}

/// Run one relocation pass over the grid.
///
/// First a full row-major scan collects every unsatisfied agent. Then each
/// collected agent, in scan order, draws a uniformly random destination from
/// the registry; the vacated source goes back into the registry before the
/// next draw, so a cell emptied earlier in the pass can be chosen as a later
/// destination. Agents moved this pass are not re-evaluated until the next.
///
/// Fails with [`Error::ExhaustedCapacity`] if the registry runs dry while
/// agents still wait; moves applied up to that point remain in place and the
/// grid and registry stay mutually consistent.
pub fn relocate_unsatisfied(
    grid: &mut Grid,
    vacancies: &mut VacancyRegistry,
    threshold: f64,
    rng: &mut ChaCha8Rng,
) -> Result<PassOutcome> {
    let unsatisfied: Vec<_> = grid
        .positions()
        .filter(|&pos| is_unsatisfied(grid, pos, threshold))
        .collect();
    let total = unsatisfied.len();

    for (moved, &source) in unsatisfied.iter().enumerate() {
        let Some(destination) = vacancies.take_random(rng) else {
            return Err(Error::ExhaustedCapacity {
                unplaced: total - moved,
            });
        };

        let agent = grid.get(source);
        grid.set(destination, agent);
        grid.set(source, CellState::Empty);
        vacancies.insert(source);
    }

    debug!(unsatisfied = total, "Relocation pass complete");

    Ok(PassOutcome {
        unsatisfied: total,
        moved: total,
    })
}
