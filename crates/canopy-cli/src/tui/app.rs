//! Dashboard state.
//!
//! Adjustments clamp at the validation bounds, so the held params are
//! always valid and the projection can be recomputed unconditionally.

use canopy_engine::ProjectionSummary;
use canopy_model::{params, PlantingSite, ProjectionParams, ProjectionPoint};

const TREES_STEP: u32 = 10;
const RATE_STEP: f64 = 0.25;
/// Interactive floor for the absorption rate; validation only requires > 0.
const MIN_RATE: f64 = 0.01;

pub struct AppState {
    params: ProjectionParams,
    pub site: PlantingSite,
    pub points: Vec<ProjectionPoint>,
    pub summary: ProjectionSummary,
}

impl AppState {
    pub fn new(params: ProjectionParams, site: PlantingSite) -> Self {
        let points = canopy_engine::project(&params);
        let summary = canopy_engine::summarize(&params, &points);
        Self {
            params,
            site,
            points,
            summary,
        }
    }

    pub fn params(&self) -> &ProjectionParams {
        &self.params
    }

    pub fn increase_trees(&mut self) {
        self.set(
            self.params.trees().saturating_add(TREES_STEP),
            self.params.co2_per_tree_kg(),
            self.params.years(),
        );
    }

    pub fn decrease_trees(&mut self) {
        self.set(
            self.params
                .trees()
                .saturating_sub(TREES_STEP)
                .max(params::MIN_TREES),
            self.params.co2_per_tree_kg(),
            self.params.years(),
        );
    }

    pub fn increase_rate(&mut self) {
        self.set(
            self.params.trees(),
            self.params.co2_per_tree_kg() + RATE_STEP,
            self.params.years(),
        );
    }

    pub fn decrease_rate(&mut self) {
        self.set(
            self.params.trees(),
            (self.params.co2_per_tree_kg() - RATE_STEP).max(MIN_RATE),
            self.params.years(),
        );
    }

    pub fn increase_years(&mut self) {
        self.set(
            self.params.trees(),
            self.params.co2_per_tree_kg(),
            (self.params.years() + 1).min(params::MAX_YEARS),
        );
    }

    pub fn decrease_years(&mut self) {
        self.set(
            self.params.trees(),
            self.params.co2_per_tree_kg(),
            self.params
                .years()
                .saturating_sub(1)
                .max(params::MIN_YEARS),
        );
    }

    /// Replace the params and recompute the projection. Clamped callers
    /// always pass valid values; anything else keeps the previous state.
    fn set(&mut self, trees: u32, co2_per_tree_kg: f64, years: u32) {
        if let Ok(params) = ProjectionParams::new(trees, co2_per_tree_kg, years) {
            self.params = params;
            self.points = canopy_engine::project(&self.params);
            self.summary = canopy_engine::summarize(&self.params, &self.points);
        }
    }
}
