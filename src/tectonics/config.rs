//! Configuration for plate assignment.

use serde::{Deserialize, Serialize};

/// Configuration parameters for tectonic plate assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TectonicConfig {
    /// Number of plates to seed.
    pub num_plates: usize,
    /// How many of those plates are oceanic.
    pub num_oceans: usize,
    /// Lower bound of the random motion speed range.
    pub min_speed: f32,
    /// Upper bound of the random motion speed range.
    pub max_speed: f32,
    /// Elevation subtracted from every tile of an oceanic plate.
    pub ocean_depth: f32,
    /// Random seed for reproducible generation.
    pub seed: u64,
}

impl Default for TectonicConfig {
    fn default() -> Self {
        Self {
            num_plates: 9,
            num_oceans: 3,
            min_speed: 0.1,
            max_speed: 1.0,
            ocean_depth: 3.0,
            seed: 42,
        }
    }
}

impl TectonicConfig {
    /// Earth-like mix of continental and oceanic plates.
    pub fn earth_like(seed: u64) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    /// Many small plates: busier boundaries, more relief.
    pub fn fragmented(seed: u64) -> Self {
        Self {
            num_plates: 15,
            num_oceans: 5,
            seed,
            ..Default::default()
        }
    }

    /// Few large plates dominated by a single landmass.
    pub fn continental(seed: u64) -> Self {
        Self {
            num_plates: 5,
            num_oceans: 1,
            seed,
            ..Default::default()
        }
    }
}
