use anyhow::Result;

use crate::args::ParamArgs;
use crate::config::Config;
use crate::tui;

pub fn handle(config: &Config, params: &ParamArgs) -> Result<()> {
    let params = params.resolve(config)?;
    tui::run(params, config.site.clone())
}
