//! Plate boundary detection and classification.

use glam::Vec2;

use crate::grid::{Axial, HexGrid};

use super::plate::Plate;

/// Type of plate boundary based on relative motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryType {
    /// Plates moving toward each other; crust piles up.
    Convergent,
    /// Plates moving apart; crust thins and drops.
    Divergent,
    /// Plates sliding past each other; no elevation change.
    Transform,
}

/// Finds every tile with at least one neighbor on a different plate.
///
/// Each boundary tile appears once, appended when its first differing
/// neighbor is found. Order follows the grid's tile enumeration.
pub fn find_boundary_tiles(grid: &HexGrid) -> Vec<Axial> {
    let mut boundary = Vec::new();
    for tile in grid.tiles() {
        for neighbor in grid.neighbors(tile.coord) {
            let differs = grid
                .tile(neighbor)
                .is_some_and(|n| n.plate_id != tile.plate_id);
            if differs {
                boundary.push(tile.coord);
                break;
            }
        }
    }
    boundary
}

/// Classifies the relative motion of two plates across a boundary axis.
///
/// `axis` is the unit vector from the near tile toward the far tile; `va`
/// and `vb` are the owning plates' motion vectors. Both projections
/// positive means the plates push into each other; both negative means they
/// pull apart; mixed sign or zero is shear.
pub fn classify_relative_motion(va: Vec2, vb: Vec2, axis: Vec2) -> BoundaryType {
    let approach_a = va.dot(axis);
    let approach_b = vb.dot(-axis);
    if approach_a > 0.0 && approach_b > 0.0 {
        BoundaryType::Convergent
    } else if approach_a < 0.0 && approach_b < 0.0 {
        BoundaryType::Divergent
    } else {
        BoundaryType::Transform
    }
}

/// Applies boundary elevation deltas to every boundary tile.
///
/// For each neighbor on a different, non-null plate the projected
/// inter-tile distance is added (convergent) or subtracted (divergent) from
/// the tile's elevation; deltas accumulate when a tile borders several
/// foreign tiles. Degenerate zero-distance pairs are skipped.
pub fn classify_boundaries(grid: &mut HexGrid, plates: &[Plate], boundary_tiles: &[Axial]) {
    for &coord in boundary_tiles {
        let Some(plate_id) = grid.tile(coord).and_then(|t| t.plate_id) else {
            continue;
        };

        let mut delta = 0.0f32;
        for neighbor in grid.neighbors(coord) {
            let Some(neighbor_id) = grid.tile(neighbor).and_then(|t| t.plate_id) else {
                continue;
            };
            if neighbor_id == plate_id {
                continue;
            }

            let span = neighbor.to_pixel(1.0) - coord.to_pixel(1.0);
            let distance = span.length();
            if distance == 0.0 {
                continue;
            }
            let axis = span / distance;

            let near = plates[plate_id].motion_vector();
            let far = plates[neighbor_id].motion_vector();
            match classify_relative_motion(near, far, axis) {
                BoundaryType::Convergent => delta += distance,
                BoundaryType::Divergent => delta -= distance,
                BoundaryType::Transform => {}
            }
        }

        if let Some(tile) = grid.tile_mut(coord) {
            tile.elevation += delta;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tectonics::plate::PlateKind;
    use std::f32::consts::PI;

    const HOP: f32 = 1.732_050_8; // projected inter-tile distance at size 1

    /// Splits a grid into two plates along the q axis: q < 0 -> plate 0,
    /// q >= 0 -> plate 1.
    fn split_grid(radius: u32, angle_a: f32, angle_b: f32) -> (HexGrid, Vec<Plate>) {
        let mut grid = HexGrid::new(radius);
        for tile in grid.tiles_mut() {
            tile.plate_id = Some(if tile.coord.q < 0 { 0 } else { 1 });
        }
        let plates = vec![
            Plate::new(0, PlateKind::Continental, angle_a, 1.0),
            Plate::new(1, PlateKind::Continental, angle_b, 1.0),
        ];
        (grid, plates)
    }

    #[test]
    fn boundary_tiles_are_found_once_each() {
        let (grid, _) = split_grid(2, 0.0, 0.0);
        let boundary = find_boundary_tiles(&grid);

        // No duplicates.
        for (i, a) in boundary.iter().enumerate() {
            assert!(!boundary[i + 1..].contains(a));
        }
        // Exactly the tiles adjacent to the q = -1 / q = 0 seam.
        for tile in grid.tiles() {
            let expected = grid.neighbors(tile.coord).iter().any(|&n| {
                grid.tile(n).unwrap().plate_id != tile.plate_id
            });
            assert_eq!(boundary.contains(&tile.coord), expected);
        }
    }

    #[test]
    fn uniform_plate_has_no_boundary() {
        let mut grid = HexGrid::new(2);
        for tile in grid.tiles_mut() {
            tile.plate_id = Some(0);
        }
        assert!(find_boundary_tiles(&grid).is_empty());
    }

    #[test]
    fn head_on_motion_is_convergent() {
        let axis = Vec2::X;
        let kind = classify_relative_motion(Vec2::X, Vec2::NEG_X, axis);
        assert_eq!(kind, BoundaryType::Convergent);
    }

    #[test]
    fn opposed_motion_is_divergent() {
        let axis = Vec2::X;
        let kind = classify_relative_motion(Vec2::NEG_X, Vec2::X, axis);
        assert_eq!(kind, BoundaryType::Divergent);
    }

    #[test]
    fn shear_motion_is_transform() {
        let axis = Vec2::X;
        let kind = classify_relative_motion(Vec2::Y, Vec2::NEG_Y, axis);
        assert_eq!(kind, BoundaryType::Transform);
    }

    #[test]
    fn convergent_seam_raises_boundary_elevation() {
        // Plate 0 (west) moves east, plate 1 (east) moves west: collision.
        let (mut grid, plates) = split_grid(2, 0.0, PI);
        let boundary = find_boundary_tiles(&grid);
        classify_boundaries(&mut grid, &plates, &boundary);

        for &coord in &boundary {
            assert!(
                grid.tile(coord).unwrap().elevation > 0.0,
                "expected uplift at {coord:?}"
            );
        }
        // Non-boundary tiles are untouched.
        for tile in grid.tiles() {
            if !boundary.contains(&tile.coord) {
                assert_eq!(tile.elevation, 0.0);
            }
        }
    }

    #[test]
    fn divergent_seam_lowers_boundary_elevation() {
        // Plates pull apart: west moves west, east moves east.
        let (mut grid, plates) = split_grid(2, PI, 0.0);
        let boundary = find_boundary_tiles(&grid);
        classify_boundaries(&mut grid, &plates, &boundary);

        for &coord in &boundary {
            assert!(grid.tile(coord).unwrap().elevation < 0.0);
        }
    }

    #[test]
    fn deltas_accumulate_per_foreign_neighbor() {
        // Head-on collision on a radius-1 grid: the center tile at (0,0)
        // belongs to the east plate and borders two west-plate tiles,
        // (-1, 0) and (-1, 1), so it gains exactly two hops of uplift.
        let (mut grid, plates) = split_grid(1, 0.0, PI);
        let boundary = find_boundary_tiles(&grid);
        classify_boundaries(&mut grid, &plates, &boundary);

        let center = grid.tile(Axial::new(0, 0)).unwrap();
        assert!((center.elevation - 2.0 * HOP).abs() < 1e-4);
    }

    #[test]
    fn unassigned_neighbors_are_ignored() {
        let mut grid = HexGrid::new(1);
        for tile in grid.tiles_mut() {
            tile.plate_id = if tile.coord.q >= 0 { Some(0) } else { None };
        }
        let plates = vec![Plate::new(0, PlateKind::Continental, 0.0, 1.0)];
        let boundary = find_boundary_tiles(&grid);
        classify_boundaries(&mut grid, &plates, &boundary);

        // Differing (null) neighbors mark tiles as boundary, but no plate
        // pair exists so no elevation changes.
        assert!(!boundary.is_empty());
        assert!(grid.tiles().all(|t| t.elevation == 0.0));
    }
}
