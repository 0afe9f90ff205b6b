use anyhow::{Context, Result};
use std::path::Path;

use crate::args::ParamArgs;
use crate::config::Config;
use crate::display_model::ProjectionDocument;
use crate::types::ExportFormat;

pub fn handle(
    config: &Config,
    params: &ParamArgs,
    output: &Path,
    strategy: Option<ExportFormat>,
) -> Result<()> {
    let params = params.resolve(config)?;
    let points = canopy_engine::project(&params);
    let strategy = strategy.unwrap_or_else(|| infer_format(output));

    match strategy {
        ExportFormat::Csv => {
            let mut writer = csv::Writer::from_path(output)
                .with_context(|| format!("failed to create {}", output.display()))?;
            for point in &points {
                writer.serialize(point)?;
            }
            writer.flush()?;
        }
        ExportFormat::Json => {
            let doc = ProjectionDocument::new(params, config.site.clone(), points.clone());
            let content = serde_json::to_string_pretty(&doc)?;
            std::fs::write(output, content)
                .with_context(|| format!("failed to write {}", output.display()))?;
        }
    }

    println!(
        "Exported {} points to {} ({})",
        points.len(),
        output.display(),
        strategy
    );
    Ok(())
}

/// CSV unless the extension says JSON.
fn infer_format(output: &Path) -> ExportFormat {
    match output.extension().and_then(|ext| ext.to_str()) {
        Some("json") => ExportFormat::Json,
        _ => ExportFormat::Csv,
    }
}
