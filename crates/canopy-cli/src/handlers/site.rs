use anyhow::Result;

use crate::config::Config;
use crate::types::OutputFormat;
use crate::views;

pub fn handle(config: &Config, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&config.site)?),
        OutputFormat::Plain => println!("{}", views::site::format_site(&config.site)),
    }

    Ok(())
}
