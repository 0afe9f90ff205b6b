use chrono::{DateTime, Utc};
use serde::Serialize;

use canopy_engine::ProjectionSummary;
use canopy_model::{PlantingSite, ProjectionParams, ProjectionPoint};

/// The machine-readable rendition of a computed projection, shared by
/// `--format json` output and JSON export.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectionDocument {
    pub generated_at: DateTime<Utc>,
    pub params: ProjectionParams,
    pub site: PlantingSite,
    pub points: Vec<ProjectionPoint>,
    pub summary: ProjectionSummary,
}

impl ProjectionDocument {
    pub fn new(params: ProjectionParams, site: PlantingSite, points: Vec<ProjectionPoint>) -> Self {
        let summary = canopy_engine::summarize(&params, &points);
        Self {
            generated_at: Utc::now(),
            params,
            site,
            points,
            summary,
        }
    }
}
