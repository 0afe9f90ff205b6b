use canopy_model::ResourceLink;

pub fn format_links(links: &[ResourceLink]) -> String {
    let mut lines = vec!["Learn more & take action:".to_string()];
    for link in links {
        lines.push(format!("- {}: {}", link.label, link.url));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use canopy_model::RESOURCE_LINKS;

    #[test]
    fn test_format_links() {
        insta::assert_snapshot!(format_links(RESOURCE_LINKS), @r"
Learn more & take action:
- One Tree Planted: https://onetreeplanted.org/
- Plant-for-the-Planet: https://www.plant-for-the-planet.org/
- Global Forest Watch: https://www.globalforestwatch.org/
");
    }
}
