use serde::{Deserialize, Serialize};

/// One step of the projection: total CO2 absorbed from planting through
/// the end of `year`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub year: u32,
    pub cumulative_co2_kg: f64,
}
