use canopy_model::{ProjectionParams, ProjectionPoint};
use serde::Serialize;

/// Headline figures for a computed projection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionSummary {
    pub trees: u32,
    pub years: u32,
    pub total_co2_kg: f64,
}

/// Derive the summary from a projection.
///
/// The total is the cumulative value at the final year; an empty slice
/// cannot happen for validated params (years >= 1) but degrades to zero.
pub fn summarize(params: &ProjectionParams, points: &[ProjectionPoint]) -> ProjectionSummary {
    let total_co2_kg = points.last().map(|p| p.cumulative_co2_kg).unwrap_or(0.0);

    ProjectionSummary {
        trees: params.trees(),
        years: params.years(),
        total_co2_kg,
    }
}

impl ProjectionSummary {
    /// The closing sentence shown after every projection.
    pub fn sentence(&self) -> String {
        format!(
            "By planting {} trees, you can absorb approximately {} kg of CO2 over {} years.",
            self.trees,
            format_kg(self.total_co2_kg),
            self.years
        )
    }
}

/// Format kilograms with thousands separators and two decimals,
/// e.g. `43540.0` -> `"43,540.00"`.
pub fn format_kg(kg: f64) -> String {
    let fixed = format!("{:.2}", kg);
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}.{}", grouped, fraction)
}
