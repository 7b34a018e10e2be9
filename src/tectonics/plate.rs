//! Tectonic plate data structures.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::grid::Axial;

/// Kind of crustal material carried by a plate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlateKind {
    /// Continental crust: keeps the base elevation it grows over.
    Continental,
    /// Oceanic crust: depresses its tiles below sea level.
    Oceanic,
}

/// A tectonic plate: a connected partition of tiles sharing a rigid motion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plate {
    /// Dense id; also the plate's index in the world's plate table.
    pub id: usize,
    pub kind: PlateKind,
    /// Member tiles in growth order. The first entry is the seed tile.
    pub tiles: Vec<Axial>,
    /// Motion direction in radians.
    pub motion_angle: f32,
    /// Motion speed in map units.
    pub motion_speed: f32,
}

impl Plate {
    pub fn new(id: usize, kind: PlateKind, motion_angle: f32, motion_speed: f32) -> Self {
        Self {
            id,
            kind,
            tiles: Vec::new(),
            motion_angle,
            motion_speed,
        }
    }

    /// The plate's rigid-body motion as a Cartesian vector.
    pub fn motion_vector(&self) -> Vec2 {
        Vec2::new(self.motion_angle.cos(), self.motion_angle.sin()) * self.motion_speed
    }

    /// Representative member tile for drawing a motion indicator.
    pub fn seed_tile(&self) -> Option<Axial> {
        self.tiles.first().copied()
    }

    pub fn is_oceanic(&self) -> bool {
        self.kind == PlateKind::Oceanic
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn motion_vector_follows_angle_and_speed() {
        let east = Plate::new(0, PlateKind::Continental, 0.0, 2.0);
        let v = east.motion_vector();
        assert!((v.x - 2.0).abs() < 1e-6);
        assert!(v.y.abs() < 1e-6);

        let north = Plate::new(1, PlateKind::Continental, FRAC_PI_2, 0.5);
        let v = north.motion_vector();
        assert!(v.x.abs() < 1e-6);
        assert!((v.y - 0.5).abs() < 1e-6);
    }

    #[test]
    fn seed_tile_is_first_grown_member() {
        let mut plate = Plate::new(0, PlateKind::Oceanic, 0.0, 1.0);
        assert!(plate.seed_tile().is_none());

        plate.tiles.push(Axial::new(1, -1));
        plate.tiles.push(Axial::new(1, 0));
        assert_eq!(plate.seed_tile(), Some(Axial::new(1, -1)));
    }

    #[test]
    fn kind_predicates() {
        assert!(Plate::new(0, PlateKind::Oceanic, 0.0, 1.0).is_oceanic());
        assert!(!Plate::new(1, PlateKind::Continental, 0.0, 1.0).is_oceanic());
    }
}
