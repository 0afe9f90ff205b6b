pub mod error;
pub mod links;
pub mod params;
pub mod point;
pub mod site;

pub use error::{Error, Result};
pub use links::{ResourceLink, RESOURCE_LINKS};
pub use params::ProjectionParams;
pub use point::ProjectionPoint;
pub use site::{PlantingSite, DEFAULT_SITE};
