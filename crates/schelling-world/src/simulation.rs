//! Simulation driver: repeated relocation passes with snapshot history.

use crate::grid::Grid;
use crate::history::History;
use crate::relocation::relocate_unsatisfied;
use crate::vacancy::VacancyRegistry;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use schelling_core::{Result, RunId, SimConfig};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Signal returned by a progress observer after each pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    /// Stop after the current pass and return the partial history
    Stop,
}

/// A single simulation run.
///
/// Owns the grid, the vacancy registry and the seeded random source for the
/// whole run; none of them are shared across runs.
pub struct Simulation {
    config: SimConfig,
    grid: Grid,
    vacancies: VacancyRegistry,
    rng: ChaCha8Rng,
    run_id: RunId,
    pass: u32,
}

impl Simulation {
    pub fn new(config: SimConfig) -> Result<Self> {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let grid = Grid::from_config(&config, &mut rng)?;
        let vacancies = VacancyRegistry::from_grid(&grid);

        Ok(Self {
            config,
            grid,
            vacancies,
            rng,
            run_id: RunId::new(),
            pass: 0,
        })
    }

    pub fn run_id(&self) -> RunId {
        self.run_id
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Run the configured number of relocation passes.
    ///
    /// Always runs the full iteration count; there is no convergence check,
    /// a stabilized grid simply produces identical snapshots.
    pub fn run(&mut self) -> Result<RunReport> {
        self.run_with_progress(|_| Control::Continue)
    }

    /// Run, reporting the fraction complete to `observer` after each pass.
    ///
    /// The observer is invoked with a value in (0, 1]; returning
    /// [`Control::Stop`] aborts the run and the report carries the partial
    /// history recorded so far.
    #[instrument(skip(self, observer), fields(run_id = %self.run_id, iterations = self.config.iterations))]
    pub fn run_with_progress(
        &mut self,
        mut observer: impl FnMut(f64) -> Control,
    ) -> Result<RunReport> {
        info!(
            size = self.config.size,
            threshold = self.config.threshold,
            seed = self.config.seed,
            "Starting simulation"
        );

        let mut history = History::new();
        history.push(self.grid.frame());

        let mut total_moves = 0usize;
        let iterations = self.config.iterations;

        for pass in 0..iterations {
            self.pass = pass + 1;

            let outcome = relocate_unsatisfied(
                &mut self.grid,
                &mut self.vacancies,
                self.config.threshold,
                &mut self.rng,
            )?;
            total_moves += outcome.moved;
            history.push(self.grid.frame());

            debug!(
                pass = self.pass,
                moved = outcome.moved,
                "Pass {}/{}: {} agents relocated",
                self.pass,
                iterations,
                outcome.moved
            );

            let fraction = f64::from(self.pass) / f64::from(iterations);
            if observer(fraction) == Control::Stop {
                warn!(pass = self.pass, "Run aborted by observer");
                break;
            }
        }

        let (empty, group_a, group_b) = self.grid.counts();
        info!(
            passes = self.pass,
            total_moves,
            empty,
            group_a,
            group_b,
            "Simulation finished"
        );

        Ok(RunReport {
            run_id: self.run_id,
            config: self.config.clone(),
            passes: self.pass,
            total_moves,
            history,
        })
    }
}

/// Serializable result of a run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub run_id: RunId,
    pub config: SimConfig,
    /// Passes actually executed (less than `config.iterations` on abort)
    pub passes: u32,
    pub total_moves: usize,
    pub history: History,
}
