use anyhow::Result;
use is_terminal::IsTerminal;

use super::args::{Cli, Commands};
use super::handlers;
use crate::config::Config;

pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let use_color = !cli.no_color && std::io::stdout().is_terminal();

    let Some(command) = cli.command else {
        show_guidance();
        return Ok(());
    };

    match command {
        Commands::Project { params, chart } => {
            handlers::project::handle(&config, &params, chart, cli.format, use_color)
        }

        Commands::Dashboard { params } => handlers::dashboard::handle(&config, &params),

        Commands::Export {
            params,
            output,
            strategy,
        } => handlers::export::handle(&config, &params, &output, strategy),

        Commands::Site => handlers::site::handle(&config, cli.format),

        Commands::Links => handlers::links::handle(cli.format),
    }
}

fn show_guidance() {
    println!("canopy - project cumulative CO2 absorption from planted trees");
    println!();
    println!("Common commands:");
    println!("  canopy project              Print the projection and summary");
    println!("  canopy project --chart      Same, with a bar chart");
    println!("  canopy dashboard            Interactive chart + site map");
    println!("  canopy export -o out.csv    Write the projection to a file");
    println!("  canopy site                 Show the planting site");
    println!("  canopy links                Show the resource links");
    println!();
    println!("Run 'canopy --help' for the full list of options.");
}
