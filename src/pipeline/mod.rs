//! Pipeline module for orchestrating map generation stages.
//!
//! Provides a trait-based architecture for modular generation stages that
//! compose into the fixed plates -> boundaries -> moisture -> biomes order.

mod stage;

pub use stage::{
    BiomeStage, BoundaryStage, GenerationStage, MoistureStage, Pipeline, PipelineError,
    PlateStage, StageId,
};
