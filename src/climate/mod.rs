//! Moisture propagation from ocean tiles.

mod config;
mod moisture;

pub use config::MoistureConfig;
pub use moisture::propagate_moisture;
