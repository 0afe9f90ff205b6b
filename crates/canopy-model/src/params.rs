use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Lower bound on the number of planted trees.
pub const MIN_TREES: u32 = 1;

/// Bounds on the projection horizon, in whole years.
pub const MIN_YEARS: u32 = 1;
pub const MAX_YEARS: u32 = 50;

/// Built-in defaults, used when neither a CLI flag nor the config file
/// supplies a value.
pub const DEFAULT_TREES: u32 = 100;
pub const DEFAULT_CO2_PER_TREE_KG: f64 = 21.77;
pub const DEFAULT_YEARS: u32 = 20;

/// Validated inputs to the projection calculator.
///
/// Construction goes through [`ProjectionParams::new`] so that everything
/// downstream (the engine, export, the dashboard) can assume the ranges
/// hold. The fields stay private for the same reason.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionParams {
    trees: u32,
    co2_per_tree_kg: f64,
    years: u32,
}

impl ProjectionParams {
    /// Validate and construct projection parameters.
    ///
    /// Rejects `trees < 1`, non-positive or non-finite absorption rates,
    /// and horizons outside `1..=50` years.
    pub fn new(trees: u32, co2_per_tree_kg: f64, years: u32) -> Result<Self> {
        if trees < MIN_TREES {
            return Err(Error::TreesOutOfRange(trees));
        }
        if !co2_per_tree_kg.is_finite() || co2_per_tree_kg <= 0.0 {
            return Err(Error::RateOutOfRange(co2_per_tree_kg));
        }
        if !(MIN_YEARS..=MAX_YEARS).contains(&years) {
            return Err(Error::YearsOutOfRange(years));
        }

        Ok(Self {
            trees,
            co2_per_tree_kg,
            years,
        })
    }

    pub fn trees(&self) -> u32 {
        self.trees
    }

    pub fn co2_per_tree_kg(&self) -> f64 {
        self.co2_per_tree_kg
    }

    pub fn years(&self) -> u32 {
        self.years
    }
}

impl Default for ProjectionParams {
    fn default() -> Self {
        Self {
            trees: DEFAULT_TREES,
            co2_per_tree_kg: DEFAULT_CO2_PER_TREE_KG,
            years: DEFAULT_YEARS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_params() {
        let params = ProjectionParams::new(100, 21.77, 20).unwrap();
        assert_eq!(params.trees(), 100);
        assert_eq!(params.co2_per_tree_kg(), 21.77);
        assert_eq!(params.years(), 20);
    }

    #[test]
    fn test_default_params_are_valid() {
        let defaults = ProjectionParams::default();
        let rebuilt = ProjectionParams::new(
            defaults.trees(),
            defaults.co2_per_tree_kg(),
            defaults.years(),
        );
        assert!(rebuilt.is_ok());
    }

    #[test]
    fn test_zero_trees_rejected() {
        assert_eq!(
            ProjectionParams::new(0, 21.77, 20),
            Err(Error::TreesOutOfRange(0))
        );
    }

    #[test]
    fn test_non_positive_rate_rejected() {
        assert_eq!(
            ProjectionParams::new(100, 0.0, 20),
            Err(Error::RateOutOfRange(0.0))
        );
        assert_eq!(
            ProjectionParams::new(100, -3.5, 20),
            Err(Error::RateOutOfRange(-3.5))
        );
    }

    #[test]
    fn test_non_finite_rate_rejected() {
        assert!(ProjectionParams::new(100, f64::NAN, 20).is_err());
        assert!(ProjectionParams::new(100, f64::INFINITY, 20).is_err());
    }

    #[test]
    fn test_years_bounds() {
        assert!(ProjectionParams::new(1, 1.0, MIN_YEARS).is_ok());
        assert!(ProjectionParams::new(1, 1.0, MAX_YEARS).is_ok());
        assert_eq!(
            ProjectionParams::new(1, 1.0, 0),
            Err(Error::YearsOutOfRange(0))
        );
        assert_eq!(
            ProjectionParams::new(1, 1.0, 51),
            Err(Error::YearsOutOfRange(51))
        );
    }
}
