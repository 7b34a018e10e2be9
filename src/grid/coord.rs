//! Axial hex coordinates and the shared map projection.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// The six axial direction offsets, in neighbor-visit order.
pub const DIRECTIONS: [(i32, i32); 6] = [
    (1, 0),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (0, -1),
    (1, -1),
];

const SQRT_3: f32 = 1.732_050_8;

/// Axial hex-grid coordinate.
///
/// The third cube coordinate is derived as `s = -q - r`, so
/// `q + r + s == 0` holds for every coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Axial {
    pub q: i32,
    pub r: i32,
}

impl Axial {
    pub fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Derived cube coordinate.
    pub fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// The six adjacent coordinates, whether or not they exist in a grid.
    pub fn neighbors(self) -> [Axial; 6] {
        DIRECTIONS.map(|(dq, dr)| Axial::new(self.q + dq, self.r + dr))
    }

    /// Projects this coordinate to Cartesian space (flat-top layout).
    ///
    /// This is the single projection used for both boundary geometry and map
    /// rendering; `size` is the hex circumradius.
    pub fn to_pixel(self, size: f32) -> Vec2 {
        let x = size * 1.5 * self.q as f32;
        let y = size * SQRT_3 * (self.r as f32 + self.q as f32 / 2.0);
        Vec2::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_coordinates_sum_to_zero() {
        for q in -3..=3 {
            for r in -3..=3 {
                let coord = Axial::new(q, r);
                assert_eq!(coord.q + coord.r + coord.s(), 0);
            }
        }
    }

    #[test]
    fn direction_offsets_cancel_out() {
        let (sum_q, sum_r) = DIRECTIONS
            .iter()
            .fold((0, 0), |(q, r), (dq, dr)| (q + dq, r + dr));
        assert_eq!((sum_q, sum_r), (0, 0));
    }

    #[test]
    fn neighbors_are_distinct_and_adjacent() {
        let origin = Axial::new(0, 0);
        let neighbors = origin.neighbors();
        for (i, a) in neighbors.iter().enumerate() {
            assert_ne!(*a, origin);
            for b in &neighbors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn projected_neighbor_distance_is_uniform() {
        // In the flat-top layout all six neighbors sit sqrt(3)*size away.
        let origin = Axial::new(2, -1).to_pixel(1.0);
        for neighbor in Axial::new(2, -1).neighbors() {
            let dist = (neighbor.to_pixel(1.0) - origin).length();
            assert!((dist - 3.0f32.sqrt()).abs() < 1e-5, "distance {dist}");
        }
    }

    #[test]
    fn projection_scales_with_size() {
        let coord = Axial::new(3, -2);
        assert_eq!(coord.to_pixel(2.0), coord.to_pixel(1.0) * 2.0);
    }
}
