//! The projection calculator.
//!
//! The whole model is linear: each tree absorbs a constant number of
//! kilograms of CO2 per year, so the cumulative total at year `i` is
//! `trees * co2_per_tree_kg * i`. Kept pure and free of presentation so
//! it can be exercised directly in tests.

use canopy_model::{ProjectionParams, ProjectionPoint};

/// Compute the cumulative CO2 absorption sequence.
///
/// Returns exactly `params.years()` points, 1-based, strictly increasing
/// for the (validated, positive) inputs.
pub fn project(params: &ProjectionParams) -> Vec<ProjectionPoint> {
    let per_year = params.trees() as f64 * params.co2_per_tree_kg();

    (1..=params.years())
        .map(|year| ProjectionPoint {
            year,
            cumulative_co2_kg: per_year * year as f64,
        })
        .collect()
}
