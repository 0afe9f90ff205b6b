use anyhow::Result;

use canopy_model::RESOURCE_LINKS;

use crate::types::OutputFormat;
use crate::views;

pub fn handle(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(RESOURCE_LINKS)?),
        OutputFormat::Plain => println!("{}", views::links::format_links(RESOURCE_LINKS)),
    }

    Ok(())
}
