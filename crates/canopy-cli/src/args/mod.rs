mod commands;
mod common;

pub use commands::*;
pub use common::*;

use clap::Parser;

use crate::types::OutputFormat;

#[derive(Parser)]
#[command(name = "canopy")]
#[command(about = "Project cumulative CO2 absorption from planted trees", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the config file (falls back to CANOPY_CONFIG, then the
    /// platform config directory)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    /// Disable ANSI styling in plain output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
