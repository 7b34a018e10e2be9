//! PNG map export: the rendering consumer of a generated world.
//!
//! Every map shares the tile projection used by the boundary geometry, so
//! exported images and in-pipeline positions always agree.

mod biome_map;
mod plate_map;
mod png;

pub use biome_map::export_biome_map;
pub use plate_map::{export_plate_map, generate_plate_colors, PlateMapOptions};
pub use png::{
    export_elevation_map, export_moisture_map, ExportError, MapImageOptions,
};
