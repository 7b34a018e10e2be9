//! Tectonic plate assignment and boundary classification.

mod assign;
mod boundary;
mod config;
mod error;
mod plate;

pub use assign::assign_plates;
pub use boundary::{
    classify_boundaries, classify_relative_motion, find_boundary_tiles, BoundaryType,
};
pub use config::TectonicConfig;
pub use error::TectonicError;
pub use plate::{Plate, PlateKind};
