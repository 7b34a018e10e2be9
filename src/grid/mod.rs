//! Hexagonal tile grid with axial addressing.

mod coord;
mod flood;

pub use coord::{Axial, DIRECTIONS};
pub use flood::flood_fill;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::biomes::Biome;

/// A single hexagonal map tile.
///
/// Mutable fields are written by the pipeline stages in order: plate
/// assignment sets `plate_id` (and depresses oceanic tiles), boundary
/// classification accumulates `elevation`, moisture propagation fills
/// `moisture`, biome assignment writes `biome`. Tiles are owned by the grid
/// and never destroyed during a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HexTile {
    pub coord: Axial,
    /// Height relative to sea level; negative values are below sea level.
    pub elevation: f32,
    /// Surface moisture in [0, 1].
    pub moisture: f32,
    pub biome: Biome,
    /// Owning plate id, absent until assignment runs. Ids index the world's
    /// plate table.
    pub plate_id: Option<usize>,
}

impl HexTile {
    fn new(coord: Axial) -> Self {
        Self {
            coord,
            elevation: 0.0,
            moisture: 0.0,
            biome: Biome::Unassigned,
            plate_id: None,
        }
    }
}

/// Hexagonal region of tiles addressed by axial coordinates.
///
/// Tiles are stored in generation order so enumeration is deterministic for
/// a fixed radius. Topology never changes after construction; tile fields
/// are mutated in place by the generation stages.
#[derive(Debug, Clone)]
pub struct HexGrid {
    radius: u32,
    tiles: Vec<HexTile>,
    index: HashMap<Axial, usize>,
}

impl HexGrid {
    /// Builds the grid of all coordinates with `max(|q|, |r|, |s|) <= radius`.
    pub fn new(radius: u32) -> Self {
        let bound = radius as i32;
        let mut tiles = Vec::new();
        let mut index = HashMap::new();
        for q in -bound..=bound {
            let r_lo = (-bound).max(-q - bound);
            let r_hi = bound.min(-q + bound);
            for r in r_lo..=r_hi {
                let coord = Axial::new(q, r);
                index.insert(coord, tiles.len());
                tiles.push(HexTile::new(coord));
            }
        }
        Self {
            radius,
            tiles,
            index,
        }
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn contains(&self, coord: Axial) -> bool {
        self.index.contains_key(&coord)
    }

    pub fn tile(&self, coord: Axial) -> Option<&HexTile> {
        self.index.get(&coord).map(|&i| &self.tiles[i])
    }

    pub fn tile_mut(&mut self, coord: Axial) -> Option<&mut HexTile> {
        self.index.get(&coord).map(|&i| &mut self.tiles[i])
    }

    /// In-grid neighbors of a coordinate; edge tiles have fewer than six.
    /// Out-of-range coordinates simply have no entry here.
    pub fn neighbors(&self, coord: Axial) -> Vec<Axial> {
        coord
            .neighbors()
            .into_iter()
            .filter(|c| self.index.contains_key(c))
            .collect()
    }

    /// Every tile, in generation order.
    pub fn tiles(&self) -> impl Iterator<Item = &HexTile> {
        self.tiles.iter()
    }

    pub fn tiles_mut(&mut self) -> impl Iterator<Item = &mut HexTile> {
        self.tiles.iter_mut()
    }

    /// Every coordinate, in the same order as [`HexGrid::tiles`].
    pub fn coords(&self) -> impl Iterator<Item = Axial> + '_ {
        self.tiles.iter().map(|t| t.coord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex_count(radius: u32) -> usize {
        (3 * radius * radius + 3 * radius + 1) as usize
    }

    #[test]
    fn tile_count_matches_hex_number() {
        for radius in 0..=4 {
            let grid = HexGrid::new(radius);
            assert_eq!(grid.len(), hex_count(radius), "radius {radius}");
        }
    }

    #[test]
    fn all_tiles_satisfy_cube_invariant() {
        let grid = HexGrid::new(3);
        for tile in grid.tiles() {
            assert_eq!(tile.coord.q + tile.coord.r + tile.coord.s(), 0);
        }
    }

    #[test]
    fn all_tiles_are_within_radius() {
        let grid = HexGrid::new(3);
        for tile in grid.tiles() {
            let c = tile.coord;
            let dist = c.q.abs().max(c.r.abs()).max(c.s().abs());
            assert!(dist <= 3);
        }
    }

    #[test]
    fn center_has_six_neighbors_and_corner_has_three() {
        let grid = HexGrid::new(2);
        assert_eq!(grid.neighbors(Axial::new(0, 0)).len(), 6);
        assert_eq!(grid.neighbors(Axial::new(2, 0)).len(), 3);
    }

    #[test]
    fn out_of_range_lookup_is_none() {
        let grid = HexGrid::new(1);
        assert!(grid.tile(Axial::new(2, 0)).is_none());
        assert!(grid.neighbors(Axial::new(5, 5)).is_empty());
    }

    #[test]
    fn enumeration_order_is_deterministic() {
        let a: Vec<Axial> = HexGrid::new(3).coords().collect();
        let b: Vec<Axial> = HexGrid::new(3).coords().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn new_tiles_have_default_fields() {
        let grid = HexGrid::new(1);
        for tile in grid.tiles() {
            assert_eq!(tile.elevation, 0.0);
            assert_eq!(tile.moisture, 0.0);
            assert_eq!(tile.biome, Biome::Unassigned);
            assert!(tile.plate_id.is_none());
        }
    }
}
