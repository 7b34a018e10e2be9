//! Biome classification from elevation and moisture.

use serde::{Deserialize, Serialize};

use crate::grid::HexGrid;

/// Closed set of biome labels.
///
/// `Unassigned` is the default until the biome stage runs; map consumers
/// render it with the neutral fallback color instead of erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Biome {
    #[default]
    Unassigned,
    Ocean,
    Desert,
    Steppe,
    Plain,
    Rainforest,
    Swamp,
    AlpineDesert,
    AlpineShrubland,
    Tundra,
    Taiga,
}

impl Biome {
    /// Display color for map export.
    pub fn color(self) -> [u8; 3] {
        match self {
            Biome::Unassigned => [0, 0, 0],
            Biome::Ocean => [31, 120, 180],
            Biome::Desert => [237, 201, 175],
            Biome::Steppe => [194, 178, 128],
            Biome::Plain => [136, 204, 68],
            Biome::Rainforest => [34, 139, 34],
            Biome::Swamp => [85, 107, 47],
            Biome::AlpineDesert => [128, 128, 128],
            Biome::AlpineShrubland => [169, 169, 169],
            Biome::Tundra => [255, 255, 255],
            Biome::Taiga => [46, 139, 87],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Biome::Unassigned => "unassigned",
            Biome::Ocean => "ocean",
            Biome::Desert => "desert",
            Biome::Steppe => "steppe",
            Biome::Plain => "plain",
            Biome::Rainforest => "rainforest",
            Biome::Swamp => "swamp",
            Biome::AlpineDesert => "alpine desert",
            Biome::AlpineShrubland => "alpine shrubland",
            Biome::Tundra => "tundra",
            Biome::Taiga => "taiga",
        }
    }
}

/// Classifies a tile by its final elevation and moisture.
///
/// Pure threshold table, checked in order: below sea level is ocean;
/// lowlands split by moisture from desert through swamp; highlands use the
/// alpine bands; peaks are alpine desert or tundra. Bone-dry tiles (the
/// moisture flood never reached them) become deserts regardless of band.
pub fn classify(elevation: f32, moisture: f32) -> Biome {
    if elevation < 0.0 {
        Biome::Ocean
    } else if elevation < 5.0 {
        if moisture == 0.0 {
            Biome::Desert
        } else if moisture < 0.3 {
            Biome::Steppe
        } else if moisture < 0.5 {
            Biome::Plain
        } else if moisture < 0.9 {
            Biome::Rainforest
        } else {
            Biome::Swamp
        }
    } else if elevation < 7.0 {
        if moisture == 0.0 {
            Biome::AlpineDesert
        } else if moisture < 0.3 {
            Biome::AlpineShrubland
        } else if moisture < 0.5 {
            Biome::Tundra
        } else {
            Biome::Taiga
        }
    } else if moisture < 0.5 {
        Biome::AlpineDesert
    } else {
        Biome::Tundra
    }
}

/// Writes a biome onto every tile.
///
/// Must run strictly after elevation and moisture are finalized; it reads
/// both and writes only the biome field.
pub fn assign_biomes(grid: &mut HexGrid) {
    for tile in grid.tiles_mut() {
        tile.biome = classify(tile.elevation, tile.moisture);
    }
}
