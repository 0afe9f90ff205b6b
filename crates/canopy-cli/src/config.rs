use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use canopy_model::PlantingSite;

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. CANOPY_CONFIG environment variable (with tilde expansion)
/// 3. `<platform config dir>/canopy/config.toml`
///
/// `None` means no candidate path exists on this system; the caller
/// falls back to built-in defaults.
pub fn resolve_config_path(explicit_path: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("CANOPY_CONFIG") {
        return Some(expand_tilde(&env_path));
    }

    dirs::config_dir().map(|dir| dir.join("canopy").join("config.toml"))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Overridable projection defaults. Absent fields fall back to the
/// built-in values at resolution time.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub trees: Option<u32>,
    #[serde(default)]
    pub co2_per_tree_kg: Option<f64>,
    #[serde(default)]
    pub years: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub site: PlantingSite,
}

impl Config {
    /// Load the config from the resolved path, or built-in defaults when
    /// no config file exists.
    pub fn load(explicit_path: Option<&str>) -> Result<Self> {
        match resolve_config_path(explicit_path) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.defaults.trees, None);
        assert_eq!(config.site.name, "Chennai");
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.defaults.trees = Some(250);
        config.defaults.years = Some(30);
        config.site.name = "Madurai".to_string();

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.defaults.trees, Some(250));
        assert_eq!(loaded.defaults.co2_per_tree_kg, None);
        assert_eq!(loaded.defaults.years, Some(30));
        assert_eq!(loaded.site.name, "Madurai");

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.defaults.trees, None);

        Ok(())
    }

    #[test]
    fn test_partial_config_parses() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[defaults]\ntrees = 42\n")?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.defaults.trees, Some(42));
        assert_eq!(config.defaults.years, None);
        assert_eq!(config.site.name, "Chennai");

        Ok(())
    }
}
