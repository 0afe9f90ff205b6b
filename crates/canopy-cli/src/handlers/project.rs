use anyhow::Result;

use crate::args::ParamArgs;
use crate::config::Config;
use crate::display_model::ProjectionDocument;
use crate::types::OutputFormat;
use crate::views;

pub fn handle(
    config: &Config,
    params: &ParamArgs,
    chart: bool,
    format: OutputFormat,
    use_color: bool,
) -> Result<()> {
    let params = params.resolve(config)?;
    let points = canopy_engine::project(&params);

    match format {
        OutputFormat::Json => {
            let doc = ProjectionDocument::new(params, config.site.clone(), points);
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
        OutputFormat::Plain => {
            let summary = canopy_engine::summarize(&params, &points);

            println!("{}", views::projection::format_table(&points));
            if chart {
                println!();
                println!("{}", views::projection::format_bar_chart(&points));
            }
            println!();
            views::projection::print_summary(&summary, use_color);
        }
    }

    Ok(())
}
