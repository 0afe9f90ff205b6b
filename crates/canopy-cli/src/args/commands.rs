use clap::Subcommand;
use std::path::PathBuf;

use super::common::ParamArgs;
use crate::types::ExportFormat;

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the projection and print it
    Project {
        #[command(flatten)]
        params: ParamArgs,

        /// Also render a horizontal bar chart of the projection
        #[arg(long)]
        chart: bool,
    },

    /// Interactive fullscreen dashboard (chart, site map, live inputs)
    Dashboard {
        #[command(flatten)]
        params: ParamArgs,
    },

    /// Write the projection to a file
    Export {
        #[command(flatten)]
        params: ParamArgs,

        /// Destination path
        #[arg(long, short)]
        output: PathBuf,

        /// Export format; inferred from the file extension when omitted
        #[arg(long)]
        strategy: Option<ExportFormat>,
    },

    /// Show the planting site
    Site,

    /// Show the resource links
    Links,
}
