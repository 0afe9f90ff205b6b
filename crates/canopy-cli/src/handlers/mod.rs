pub mod dashboard;
pub mod export;
pub mod links;
pub mod project;
pub mod site;
