//! Configuration types for the simulation.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Simulation run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Edge length of the square grid
    pub size: u32,
    /// Fraction of cells left empty. Accepted for compatibility with the
    /// classic parameterization; the actual empty count is derived by
    /// subtraction from the group counts, not from this value.
    pub empty_ratio: f64,
    /// Fraction of cells occupied by agents, split equally between groups (0.0 to 1.0)
    pub group_ratio: f64,
    /// Minimum same-group fraction among occupied neighbors for an agent to be satisfied (0.0 to 1.0)
    pub threshold: f64,
    /// Number of relocation passes to run
    pub iterations: u32,
    /// Random seed for reproducibility
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            size: 100,
            empty_ratio: 0.2,
            group_ratio: 0.8,
            threshold: 0.5,
            iterations: 30,
            seed: 0,
        }
    }
}

impl SimConfig {
    /// Total number of cells on the grid
    pub fn total_cells(&self) -> usize {
        (self.size as usize) * (self.size as usize)
    }

    /// Number of agents per group (each group gets half of group_ratio, floored)
    pub fn group_count(&self) -> usize {
        (self.total_cells() as f64 * self.group_ratio / 2.0) as usize
    }

    /// Number of empty cells; absorbs the flooring remainder of the group counts
    pub fn empty_count(&self) -> usize {
        self.total_cells() - 2 * self.group_count()
    }

    /// Fail-fast parameter validation.
    ///
    /// Counts are derived by subtraction, so an out-of-range group ratio
    /// would otherwise produce a malformed cell list instead of an error.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(Error::InvalidParameter("size must be positive".into()));
        }
        if !(0.0..=1.0).contains(&self.empty_ratio) {
            return Err(Error::InvalidParameter(format!(
                "empty_ratio must be in [0, 1], got {}",
                self.empty_ratio
            )));
        }
        if !(0.0..=1.0).contains(&self.group_ratio) {
            return Err(Error::InvalidParameter(format!(
                "group_ratio must be in [0, 1], got {}",
                self.group_ratio
            )));
        }
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(Error::InvalidParameter(format!(
                "threshold must be in [0, 1], got {}",
                self.threshold
            )));
        }
        if 2 * self.group_count() > self.total_cells() {
            return Err(Error::InvalidParameter(format!(
                "group_ratio {} leaves a negative number of empty cells",
                self.group_ratio
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimConfig::default();
        assert_eq!(config.size, 100);
        assert_eq!(config.iterations, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_derived_counts() {
        let config = SimConfig {
            size: 3,
            group_ratio: 1.0,
            ..Default::default()
        };

        // 9 cells, floor(9 * 1.0 / 2) = 4 per group, 1 empty absorbs the remainder
        assert_eq!(config.total_cells(), 9);
        assert_eq!(config.group_count(), 4);
        assert_eq!(config.empty_count(), 1);
    }

    #[test]
    fn test_validation_rejects_bad_parameters() {
        let config = SimConfig {
            size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = SimConfig {
            group_ratio: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = SimConfig {
            threshold: -0.1,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = SimConfig {
            group_ratio: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_serialization() {
        let config = SimConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SimConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config.size, deserialized.size);
        assert_eq!(config.threshold, deserialized.threshold);
        assert_eq!(config.seed, deserialized.seed);
    }
}
