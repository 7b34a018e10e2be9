//! Plate map export: plate fills and motion indicators.

use std::path::Path;

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::world::World;

use super::png::{ExportError, HexRaster, MapImageOptions};

/// Color used for tiles with no plate id.
const UNCLAIMED: [u8; 3] = [200, 200, 200];

/// Options for plate map export.
#[derive(Debug, Clone)]
pub struct PlateMapOptions {
    pub map: MapImageOptions,
    /// Whether to draw per-plate motion arrows from the seed tiles.
    pub show_motion: bool,
    /// Seed for the plate color palette.
    pub color_seed: u64,
}

impl Default for PlateMapOptions {
    fn default() -> Self {
        Self {
            map: MapImageOptions::default(),
            show_motion: true,
            color_seed: 7,
        }
    }
}

/// Generates distinct colors for plates using golden ratio distribution.
///
/// This produces visually distinct colors that stay stable for a fixed
/// seed, so repeated exports of the same world look the same.
pub fn generate_plate_colors(num_plates: usize, seed: u64) -> Vec<[u8; 3]> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let golden_ratio = 0.618_034f32;

    let mut colors = Vec::with_capacity(num_plates);
    let mut hue = rng.random::<f32>();

    for _ in 0..num_plates {
        hue = (hue + golden_ratio) % 1.0;
        let saturation = 0.5 + rng.random::<f32>() * 0.4;
        let value = 0.6 + rng.random::<f32>() * 0.3;
        colors.push(hsv_to_rgb(hue, saturation, value));
    }

    colors
}

/// Converts HSV color to RGB.
fn hsv_to_rgb(h: f32, s: f32, v: f32) -> [u8; 3] {
    let h = h * 6.0;
    let i = h.floor() as i32;
    let f = h - i as f32;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match i.rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    [
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
    ]
}

/// Exports the plate partition as a PNG map.
///
/// Unclaimed tiles render light gray. Each plate's motion vector is drawn
/// as an arrow anchored at its seed tile, scaled by the hex size.
pub fn export_plate_map(
    world: &World,
    path: &Path,
    options: &PlateMapOptions,
) -> Result<(), ExportError> {
    let plates = world.plates.as_ref().ok_or(ExportError::NoPlateData)?;
    let colors = generate_plate_colors(plates.len(), options.color_seed);

    let mut raster = HexRaster::new(&world.grid, &options.map);
    for tile in world.grid.tiles() {
        let color = match tile.plate_id {
            Some(id) if !colors.is_empty() => colors[id % colors.len()],
            _ => UNCLAIMED,
        };
        raster.fill_hex(tile.coord, color);
    }

    if options.show_motion {
        for plate in plates {
            let Some(seed) = plate.seed_tile() else {
                continue;
            };
            let from = raster.center(seed);
            let to = from + plate.motion_vector() * (options.map.hex_size * 2.0);
            raster.draw_arrow(from, to, [0, 0, 0]);
        }
    }

    raster.save(path)
}
