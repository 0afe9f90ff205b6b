use serde::Serialize;

/// An outbound "learn more" link shown after the projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResourceLink {
    pub label: &'static str,
    pub url: &'static str,
}

/// Static awareness links, printed verbatim by `canopy links` and the
/// dashboard footer.
pub const RESOURCE_LINKS: &[ResourceLink] = &[
    ResourceLink {
        label: "One Tree Planted",
        url: "https://onetreeplanted.org/",
    },
    ResourceLink {
        label: "Plant-for-the-Planet",
        url: "https://www.plant-for-the-planet.org/",
    },
    ResourceLink {
        label: "Global Forest Watch",
        url: "https://www.globalforestwatch.org/",
    },
];
