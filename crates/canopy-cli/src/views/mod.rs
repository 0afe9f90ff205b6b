pub mod links;
pub mod projection;
pub mod site;
