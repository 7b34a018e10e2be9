//! Tectonic configuration errors.

use thiserror::Error;

/// Errors raised while validating plate assignment configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TectonicError {
    #[error("cannot seed {plates} plates on a grid of {tiles} tiles")]
    NotEnoughTiles { plates: usize, tiles: usize },
    #[error("ocean plate count {oceans} exceeds plate count {plates}")]
    TooManyOceanPlates { oceans: usize, plates: usize },
}
