//! Top-level world container shared by the generation stages.

use crate::grid::{Axial, HexGrid};
use crate::tectonics::Plate;

/// A generated (or in-progress) hexagonal world.
///
/// The grid is built once and owns every tile. The plate table and boundary
/// tile list are filled in by their stages and stay `None` until then;
/// consumers must tolerate their absence.
#[derive(Debug, Clone)]
pub struct World {
    pub grid: HexGrid,
    pub plates: Option<Vec<Plate>>,
    pub boundary_tiles: Option<Vec<Axial>>,
}

impl World {
    pub fn new(radius: u32) -> Self {
        Self {
            grid: HexGrid::new(radius),
            plates: None,
            boundary_tiles: None,
        }
    }

    pub fn tile_count(&self) -> usize {
        self.grid.len()
    }

    /// Minimum and maximum tile elevation.
    pub fn elevation_range(&self) -> (f32, f32) {
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        for tile in self.grid.tiles() {
            min = min.min(tile.elevation);
            max = max.max(tile.elevation);
        }
        (min, max)
    }
}
