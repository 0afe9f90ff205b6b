use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Where the trees are planted. One fixed site per run; the config file
/// can swap it out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantingSite {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// The built-in plantation site: Chennai.
pub static DEFAULT_SITE: Lazy<PlantingSite> = Lazy::new(|| PlantingSite {
    name: "Chennai".to_string(),
    latitude: 13.0827,
    longitude: 80.2707,
});

impl Default for PlantingSite {
    fn default() -> Self {
        DEFAULT_SITE.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_site_is_chennai() {
        let site = PlantingSite::default();
        assert_eq!(site.name, "Chennai");
        assert_eq!(site.latitude, 13.0827);
        assert_eq!(site.longitude, 80.2707);
    }
}
