//! Shared hex rasterization and scalar map export.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use glam::Vec2;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, Rgb, RgbImage};
use thiserror::Error;

use crate::grid::{Axial, HexGrid};
use crate::world::World;

/// Errors that can occur during map export.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
    #[error("No plate data available - run the plate stage first")]
    NoPlateData,
    #[error("Invalid elevation range: min ({0}) >= max ({1})")]
    InvalidElevationRange(f32, f32),
}

/// Options shared by all map exports.
#[derive(Debug, Clone)]
pub struct MapImageOptions {
    /// Hex circumradius in pixels.
    pub hex_size: f32,
    /// Margin around the map in pixels.
    pub margin: f32,
    /// Background fill color.
    pub background: [u8; 3],
}

impl Default for MapImageOptions {
    fn default() -> Self {
        Self {
            hex_size: 12.0,
            margin: 16.0,
            background: [24, 24, 32],
        }
    }
}

/// Rasterizes one filled hexagon per tile onto an RGB image.
///
/// Tile centers come from the crate's single axial projection scaled to
/// `hex_size` pixels; adjacent hexes then tile edge to edge.
pub(crate) struct HexRaster {
    origin: Vec2,
    hex_size: f32,
    image: RgbImage,
}

impl HexRaster {
    pub fn new(grid: &HexGrid, options: &MapImageOptions) -> Self {
        let mut min = Vec2::splat(f32::INFINITY);
        let mut max = Vec2::splat(f32::NEG_INFINITY);
        for coord in grid.coords() {
            let center = coord.to_pixel(options.hex_size);
            min = min.min(center);
            max = max.max(center);
        }
        if grid.is_empty() {
            min = Vec2::ZERO;
            max = Vec2::ZERO;
        }

        let pad = options.hex_size + options.margin;
        let origin = min - Vec2::splat(pad);
        let span = max - min + Vec2::splat(2.0 * pad);
        let width = span.x.ceil().max(1.0) as u32;
        let height = span.y.ceil().max(1.0) as u32;

        let bg = Rgb(options.background);
        let image = RgbImage::from_pixel(width, height, bg);

        Self {
            origin,
            hex_size: options.hex_size,
            image,
        }
    }

    /// Image-space center of a tile.
    pub fn center(&self, coord: Axial) -> Vec2 {
        coord.to_pixel(self.hex_size) - self.origin
    }

    /// Fills the hexagon for `coord` with `color`.
    pub fn fill_hex(&mut self, coord: Axial, color: [u8; 3]) {
        let center = self.center(coord);
        let corners = hex_corners(center, self.hex_size);

        let x_lo = (center.x - self.hex_size).floor().max(0.0) as u32;
        let x_hi = ((center.x + self.hex_size).ceil() as u32).min(self.image.width());
        let y_lo = (center.y - self.hex_size).floor().max(0.0) as u32;
        let y_hi = ((center.y + self.hex_size).ceil() as u32).min(self.image.height());

        for y in y_lo..y_hi {
            for x in x_lo..x_hi {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                if polygon_contains(&corners, p) {
                    self.image.put_pixel(x, y, Rgb(color));
                }
            }
        }
    }

    /// Draws a line segment by stamping pixels along it.
    pub fn draw_line(&mut self, from: Vec2, to: Vec2, color: [u8; 3]) {
        let span = to - from;
        let steps = (span.length().ceil() as u32 * 2).max(1);
        for i in 0..=steps {
            let p = from + span * (i as f32 / steps as f32);
            let (x, y) = (p.x.round() as i64, p.y.round() as i64);
            if x >= 0 && y >= 0 && (x as u32) < self.image.width() && (y as u32) < self.image.height()
            {
                self.image.put_pixel(x as u32, y as u32, Rgb(color));
            }
        }
    }

    /// Draws an arrow from `from` to `to` with a two-stroke head.
    pub fn draw_arrow(&mut self, from: Vec2, to: Vec2, color: [u8; 3]) {
        self.draw_line(from, to, color);

        let shaft = to - from;
        if shaft.length() < 1e-3 {
            return;
        }
        let back = -shaft.normalize() * (self.hex_size * 0.4);
        for angle in [0.5f32, -0.5f32] {
            let (sin, cos) = angle.sin_cos();
            let wing = Vec2::new(back.x * cos - back.y * sin, back.x * sin + back.y * cos);
            self.draw_line(to, to + wing, color);
        }
    }

    /// Encodes the image as a PNG file.
    pub fn save(self, path: &Path) -> Result<(), ExportError> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        let encoder = PngEncoder::new(writer);
        let (width, height) = self.image.dimensions();
        encoder.write_image(self.image.as_raw(), width, height, ExtendedColorType::Rgb8)?;
        Ok(())
    }
}

/// Corner points of a flat-top hexagon.
fn hex_corners(center: Vec2, size: f32) -> [Vec2; 6] {
    let mut corners = [Vec2::ZERO; 6];
    for (i, corner) in corners.iter_mut().enumerate() {
        let angle = std::f32::consts::FRAC_PI_3 * i as f32;
        *corner = center + size * Vec2::new(angle.cos(), angle.sin());
    }
    corners
}

/// Point-in-convex-polygon test via edge cross products.
fn polygon_contains(corners: &[Vec2; 6], p: Vec2) -> bool {
    let mut positive = false;
    let mut negative = false;
    for i in 0..corners.len() {
        let a = corners[i];
        let b = corners[(i + 1) % corners.len()];
        let cross = (b - a).perp_dot(p - a);
        if cross > 0.0 {
            positive = true;
        } else if cross < 0.0 {
            negative = true;
        }
    }
    !(positive && negative)
}

/// Linear blend between two colors.
pub(crate) fn lerp_color(a: [u8; 3], b: [u8; 3], t: f32) -> [u8; 3] {
    let t = t.clamp(0.0, 1.0);
    let mut out = [0u8; 3];
    for (i, channel) in out.iter_mut().enumerate() {
        *channel = (a[i] as f32 + (b[i] as f32 - a[i] as f32) * t).round() as u8;
    }
    out
}

/// Terrain-style ramp for normalized elevation: deep water through shoreline
/// greens up to snow.
fn terrain_color(t: f32) -> [u8; 3] {
    const STOPS: [(f32, [u8; 3]); 6] = [
        (0.00, [16, 42, 112]),
        (0.25, [60, 130, 200]),
        (0.45, [120, 190, 120]),
        (0.65, [170, 160, 90]),
        (0.85, [130, 100, 70]),
        (1.00, [245, 245, 245]),
    ];
    let t = t.clamp(0.0, 1.0);
    for window in STOPS.windows(2) {
        let (t0, c0) = window[0];
        let (t1, c1) = window[1];
        if t <= t1 {
            let local = if t1 > t0 { (t - t0) / (t1 - t0) } else { 0.0 };
            return lerp_color(c0, c1, local);
        }
    }
    STOPS[STOPS.len() - 1].1
}

/// Exports tile elevation as a PNG map, normalized over the world's
/// elevation range.
pub fn export_elevation_map(
    world: &World,
    path: &Path,
    options: &MapImageOptions,
) -> Result<(), ExportError> {
    let (min, max) = world.elevation_range();
    if min >= max {
        return Err(ExportError::InvalidElevationRange(min, max));
    }
    let span = max - min;

    let mut raster = HexRaster::new(&world.grid, options);
    for tile in world.grid.tiles() {
        let t = (tile.elevation - min) / span;
        raster.fill_hex(tile.coord, terrain_color(t));
    }
    raster.save(path)
}

/// Exports tile moisture as a white-to-blue PNG map.
pub fn export_moisture_map(
    world: &World,
    path: &Path,
    options: &MapImageOptions,
) -> Result<(), ExportError> {
    const DRY: [u8; 3] = [247, 251, 255];
    const WET: [u8; 3] = [8, 48, 107];

    let mut raster = HexRaster::new(&world.grid, options);
    for tile in world.grid.tiles() {
        raster.fill_hex(tile.coord, lerp_color(DRY, WET, tile.moisture));
    }
    raster.save(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::HexGrid;
    use tempfile::tempdir;

    #[test]
    fn raster_covers_the_grid_with_margin() {
        let grid = HexGrid::new(2);
        let options = MapImageOptions::default();
        let raster = HexRaster::new(&grid, &options);
        for coord in grid.coords() {
            let c = raster.center(coord);
            assert!(c.x >= options.margin && c.y >= options.margin);
            assert!(c.x < raster.image.width() as f32);
            assert!(c.y < raster.image.height() as f32);
        }
    }

    #[test]
    fn hexagon_contains_its_center_but_not_far_points() {
        let corners = hex_corners(Vec2::new(10.0, 10.0), 5.0);
        assert!(polygon_contains(&corners, Vec2::new(10.0, 10.0)));
        assert!(polygon_contains(&corners, Vec2::new(12.0, 11.0)));
        assert!(!polygon_contains(&corners, Vec2::new(20.0, 10.0)));
        assert!(!polygon_contains(&corners, Vec2::new(10.0, 17.0)));
    }

    #[test]
    fn terrain_ramp_spans_water_to_snow() {
        assert_eq!(terrain_color(0.0), [16, 42, 112]);
        assert_eq!(terrain_color(1.0), [245, 245, 245]);
        // Interior values interpolate between the stops.
        let mid = terrain_color(0.5);
        assert_ne!(mid, terrain_color(0.0));
        assert_ne!(mid, terrain_color(1.0));
    }

    #[test]
    fn flat_world_elevation_export_is_rejected() {
        let world = World::new(1);
        let dir = tempdir().unwrap();
        let path = dir.path().join("flat.png");
        let err = export_elevation_map(&world, &path, &MapImageOptions::default()).unwrap_err();
        assert!(matches!(err, ExportError::InvalidElevationRange(_, _)));
    }

    #[test]
    fn moisture_map_writes_a_png() {
        let mut world = World::new(1);
        for tile in world.grid.tiles_mut() {
            tile.moisture = 0.5;
        }
        let dir = tempdir().unwrap();
        let path = dir.path().join("moisture.png");
        export_moisture_map(&world, &path, &MapImageOptions::default()).unwrap();
        assert!(path.metadata().unwrap().len() > 0);
    }

    #[test]
    fn elevation_map_writes_a_png_for_varied_terrain() {
        let mut world = World::new(1);
        for (i, tile) in world.grid.tiles_mut().enumerate() {
            tile.elevation = i as f32 - 3.0;
        }
        let dir = tempdir().unwrap();
        let path = dir.path().join("elevation.png");
        export_elevation_map(&world, &path, &MapImageOptions::default()).unwrap();
        assert!(path.metadata().unwrap().len() > 0);
    }
}
