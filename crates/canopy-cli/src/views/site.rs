use canopy_model::PlantingSite;

pub fn format_site(site: &PlantingSite) -> String {
    format!(
        "Planting site: {}\n  Latitude:  {}\n  Longitude: {}",
        site.name, site.latitude, site.longitude
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_default_site() {
        let site = PlantingSite::default();
        assert_eq!(
            format_site(&site),
            "Planting site: Chennai\n  Latitude:  13.0827\n  Longitude: 80.2707"
        );
    }
}
