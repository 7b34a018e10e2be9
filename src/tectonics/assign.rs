//! Seeded plate growth over the hex grid.

use std::collections::HashSet;
use std::f32::consts::TAU;

use rand::seq::index;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::grid::{flood_fill, HexGrid};

use super::config::TectonicConfig;
use super::error::TectonicError;
use super::plate::{Plate, PlateKind};

/// Seeds and grows tectonic plates until every tile is claimed.
///
/// The random draw order is part of the reproducibility contract: seed
/// tiles first, then the oceanic subset, then per-plate motion angle and
/// speed in plate-id order. Growth is a multi-source FIFO flood fill, so a
/// tile belongs to whichever plate's frontier reaches it first. Tiles of
/// oceanic plates are pushed below sea level when first popped.
///
/// Fails if the configuration asks for more plates than there are tiles, or
/// for more oceanic plates than plates.
pub fn assign_plates(
    grid: &mut HexGrid,
    config: &TectonicConfig,
    rng: &mut ChaCha8Rng,
) -> Result<Vec<Plate>, TectonicError> {
    let tile_count = grid.len();
    if config.num_plates > tile_count {
        return Err(TectonicError::NotEnoughTiles {
            plates: config.num_plates,
            tiles: tile_count,
        });
    }
    if config.num_oceans > config.num_plates {
        return Err(TectonicError::TooManyOceanPlates {
            oceans: config.num_oceans,
            plates: config.num_plates,
        });
    }

    let coords: Vec<_> = grid.coords().collect();
    let seed_coords: Vec<_> = index::sample(rng, tile_count, config.num_plates)
        .into_iter()
        .map(|i| coords[i])
        .collect();

    let ocean_ids: HashSet<usize> = index::sample(rng, config.num_plates, config.num_oceans)
        .into_iter()
        .collect();

    let mut plates: Vec<Plate> = (0..config.num_plates)
        .map(|id| {
            let kind = if ocean_ids.contains(&id) {
                PlateKind::Oceanic
            } else {
                PlateKind::Continental
            };
            let angle = rng.random_range(0.0..TAU);
            let speed = rng.random_range(config.min_speed..config.max_speed);
            Plate::new(id, kind, angle, speed)
        })
        .collect();

    // Claim the seeds up front so no frontier can claim a tile twice.
    for (id, &coord) in seed_coords.iter().enumerate() {
        if let Some(tile) = grid.tile_mut(coord) {
            tile.plate_id = Some(id);
        }
        plates[id].tiles.push(coord);
    }

    flood_fill(seed_coords, |coord| {
        let Some(id) = grid.tile(coord).and_then(|t| t.plate_id) else {
            return Vec::new();
        };
        if plates[id].is_oceanic() {
            // Every tile is claimed before it is enqueued, so it pops exactly
            // once and the depression is applied exactly once.
            if let Some(tile) = grid.tile_mut(coord) {
                tile.elevation -= config.ocean_depth;
            }
        }
        let mut claimed = Vec::new();
        for neighbor in grid.neighbors(coord) {
            let Some(tile) = grid.tile_mut(neighbor) else {
                continue;
            };
            if tile.plate_id.is_none() {
                tile.plate_id = Some(id);
                plates[id].tiles.push(neighbor);
                claimed.push(neighbor);
            }
        }
        claimed
    });

    Ok(plates)
}
