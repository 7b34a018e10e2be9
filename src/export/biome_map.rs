//! Biome map export.

use std::path::Path;

use crate::world::World;

use super::png::{ExportError, HexRaster, MapImageOptions};

/// Exports the biome classification as a PNG map.
///
/// Unassigned tiles keep the biome table's neutral fallback color, so a
/// partially generated world still renders.
pub fn export_biome_map(
    world: &World,
    path: &Path,
    options: &MapImageOptions,
) -> Result<(), ExportError> {
    let mut raster = HexRaster::new(&world.grid, options);
    for tile in world.grid.tiles() {
        raster.fill_hex(tile.coord, tile.biome.color());
    }
    raster.save(path)
}
