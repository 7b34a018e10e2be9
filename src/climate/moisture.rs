//! Decay-weighted moisture flood fill.

use crate::grid::{flood_fill, HexGrid};

use super::config::MoistureConfig;

/// Propagates moisture inland from ocean tiles.
///
/// Every tile below sea level is saturated to 1.0 and seeds a FIFO
/// frontier. Moisture crossing an edge is scaled by the per-hop decay and
/// by an elevation factor `clamp(1 - 2*(from - to), 0, 1)` of the step's
/// height difference. A neighbor is updated and re-enqueued only when the
/// propagated value beats its current moisture, so per-tile moisture is
/// monotone non-decreasing, stays within [0, 1], and the relaxation
/// terminates on a finite grid.
pub fn propagate_moisture(grid: &mut HexGrid, config: &MoistureConfig) {
    let mut seeds = Vec::new();
    for tile in grid.tiles_mut() {
        if tile.elevation < 0.0 {
            tile.moisture = 1.0;
            seeds.push(tile.coord);
        }
    }

    let keep = 1.0 - config.decay;
    flood_fill(seeds, |coord| {
        let Some((elevation, moisture)) = grid.tile(coord).map(|t| (t.elevation, t.moisture))
        else {
            return Vec::new();
        };

        let mut improved = Vec::new();
        for neighbor in grid.neighbors(coord) {
            let Some(tile) = grid.tile_mut(neighbor) else {
                continue;
            };
            let factor = (1.0 - 2.0 * (elevation - tile.elevation)).clamp(0.0, 1.0);
            let propagated = (moisture * keep * factor).min(1.0);
            if propagated > tile.moisture {
                tile.moisture = propagated;
                improved.push(neighbor);
            }
        }
        improved
    });
}
