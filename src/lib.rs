//! Procedural hexagonal planetary map generator.
//!
//! Partitions a hex grid into tectonic plates, derives elevation from
//! simulated plate-boundary interactions, propagates moisture inland from
//! ocean tiles, and classifies every tile into a biome. The pipeline is a
//! deterministic function of its configuration: a fixed seed reproduces the
//! same map bit for bit.

pub mod biomes;
pub mod climate;
pub mod export;
pub mod grid;
pub mod pipeline;
pub mod tectonics;
pub mod world;

pub use biomes::{assign_biomes, classify, Biome};
pub use climate::{propagate_moisture, MoistureConfig};
pub use grid::{Axial, HexGrid, HexTile};
pub use pipeline::{
    BiomeStage, BoundaryStage, GenerationStage, MoistureStage, Pipeline, PipelineError,
    PlateStage, StageId,
};
pub use tectonics::{BoundaryType, Plate, PlateKind, TectonicConfig, TectonicError};
pub use world::World;
