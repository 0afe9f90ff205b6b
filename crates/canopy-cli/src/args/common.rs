use anyhow::Result;
use clap::Args;

use canopy_model::{params, ProjectionParams};

use crate::config::Config;

/// Projection inputs shared by every computing subcommand.
///
/// Each field resolves independently: CLI flag, else the config file's
/// `[defaults]` entry, else the built-in default. Validation happens on
/// the resolved tuple, so an out-of-range value fails loudly no matter
/// where it came from.
#[derive(Args)]
pub struct ParamArgs {
    /// Number of trees planted
    #[arg(long)]
    pub trees: Option<u32>,

    /// CO2 absorbed per tree per year, in kilograms
    #[arg(long)]
    pub co2_per_tree: Option<f64>,

    /// Projection horizon in years (1-50)
    #[arg(long)]
    pub years: Option<u32>,
}

impl ParamArgs {
    pub fn resolve(&self, config: &Config) -> Result<ProjectionParams> {
        let trees = self
            .trees
            .or(config.defaults.trees)
            .unwrap_or(params::DEFAULT_TREES);
        let co2_per_tree_kg = self
            .co2_per_tree
            .or(config.defaults.co2_per_tree_kg)
            .unwrap_or(params::DEFAULT_CO2_PER_TREE_KG);
        let years = self
            .years
            .or(config.defaults.years)
            .unwrap_or(params::DEFAULT_YEARS);

        Ok(ProjectionParams::new(trees, co2_per_tree_kg, years)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(trees: Option<u32>, co2: Option<f64>, years: Option<u32>) -> ParamArgs {
        ParamArgs {
            trees,
            co2_per_tree: co2,
            years,
        }
    }

    #[test]
    fn test_resolve_builtin_defaults() {
        let params = args(None, None, None).resolve(&Config::default()).unwrap();
        assert_eq!(params.trees(), 100);
        assert_eq!(params.co2_per_tree_kg(), 21.77);
        assert_eq!(params.years(), 20);
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = Config::default();
        config.defaults.trees = Some(500);
        config.defaults.years = Some(10);

        let params = args(Some(7), None, None).resolve(&config).unwrap();
        assert_eq!(params.trees(), 7);
        assert_eq!(params.years(), 10);
    }

    #[test]
    fn test_invalid_config_value_rejected() {
        let mut config = Config::default();
        config.defaults.years = Some(99);

        let result = args(None, None, None).resolve(&config);
        assert!(result.is_err());
    }
}
