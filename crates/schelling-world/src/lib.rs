//! Simulation engine for Schelling's model of segregation.
//!
//! This module implements the square grid neighborhood where agents from two
//! groups relocate to empty cells whenever too few of their neighbors belong
//! to their own group, producing a history of grid snapshots.

pub mod grid;
pub mod satisfaction;
pub mod vacancy;
pub mod relocation;
pub mod history;
pub mod simulation;

pub use grid::Grid;
pub use history::{Frame, History};
pub use relocation::{relocate_unsatisfied, PassOutcome};
pub use satisfaction::is_unsatisfied;
pub use simulation::{Control, RunReport, Simulation};
pub use vacancy::VacancyRegistry;
