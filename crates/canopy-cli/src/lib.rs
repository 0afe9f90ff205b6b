// NOTE: canopy Architecture Rationale
//
// Why a pure engine behind the CLI?
// - The projection itself is one multiplication over a small range;
//   every surface (table, JSON, CSV, dashboard) must agree on it
// - Keeping it in canopy-engine means it is unit-tested once, with no
//   terminal or serialization concerns in the way
//
// Why reject (not clamp) invalid flag/config values?
// - The original widget UI made bad values unrepresentable; flags and
//   config files do not, so errors must be loud
// - The dashboard is the exception: interactive adjustment clamps at the
//   bounds, matching the widget behavior it replaces

mod args;
mod commands;
pub mod config;
mod display_model;
mod handlers;
pub mod types;
mod tui;
mod views;

pub use args::{Cli, Commands, ParamArgs};
pub use commands::run;
