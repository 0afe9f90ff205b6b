// Engine module - the projection calculator and everything derived from it
// This layer sits between validated inputs (model) and CLI presentation

pub mod chart;
pub mod projection;
pub mod summary;

pub use chart::{bar_lengths, y_axis_bounds, y_tick_labels};
pub use summary::ProjectionSummary;

use canopy_model::{ProjectionParams, ProjectionPoint};

// Façade API - Stable public interface for the CLI layer

/// Compute the cumulative absorption sequence, one point per year.
pub fn project(params: &ProjectionParams) -> Vec<ProjectionPoint> {
    projection::project(params)
}

/// Summarize a computed projection for the closing sentence.
pub fn summarize(params: &ProjectionParams, points: &[ProjectionPoint]) -> ProjectionSummary {
    summary::summarize(params, points)
}
