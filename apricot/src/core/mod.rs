mod action;
mod chain;
mod config;
mod display;
mod geometry;
mod snapper;

pub use action::*;
pub use chain::*;
pub use config::*;
pub use display::*;
pub use geometry::*;
pub use snapper::*;
