//! Generation stage trait and pipeline orchestration.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use crate::biomes::assign_biomes;
use crate::climate::{propagate_moisture, MoistureConfig};
use crate::tectonics::{
    assign_plates, classify_boundaries, find_boundary_tiles, TectonicConfig,
};
use crate::world::World;

/// Unique identifier for generation stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageId {
    /// Plate seeding and growth.
    Plates,
    /// Boundary detection and elevation deltas.
    Boundaries,
    /// Moisture flood fill.
    Moisture,
    /// Biome classification.
    Biomes,
}

impl StageId {
    /// Returns the name of the stage.
    pub fn name(&self) -> &'static str {
        match self {
            StageId::Plates => "plates",
            StageId::Boundaries => "boundaries",
            StageId::Moisture => "moisture",
            StageId::Biomes => "biomes",
        }
    }
}

/// Errors that can occur during pipeline execution.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Stage '{0}' failed: {1}")]
    StageFailed(String, String),
    #[error("Missing dependency: stage '{0}' requires '{1}'")]
    MissingDependency(String, String),
}

/// Trait for implementing generation stages.
///
/// Each stage mutates the world in place, building on the stages before
/// it. The trait-based design keeps the stages composable and lets callers
/// run a partial pipeline when later data is not needed.
pub trait GenerationStage {
    /// Returns the unique identifier for this stage.
    fn id(&self) -> StageId;

    /// Returns a human-readable name for the stage.
    fn name(&self) -> &str;

    /// Returns the stage IDs that must be executed before this stage.
    fn dependencies(&self) -> &[StageId] {
        &[]
    }

    /// Executes the generation stage, modifying the world in place.
    fn execute(&self, world: &mut World) -> Result<(), PipelineError>;
}

/// Orchestrates generation stages into a complete pipeline.
#[derive(Default)]
pub struct Pipeline {
    stages: Vec<Box<dyn GenerationStage>>,
}

impl Pipeline {
    /// Creates a new empty pipeline.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Adds a stage to the pipeline.
    pub fn add_stage<S: GenerationStage + 'static>(&mut self, stage: S) -> &mut Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Returns the number of stages in the pipeline.
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Executes all stages in order on the given world.
    pub fn run(&self, world: &mut World) -> Result<(), PipelineError> {
        let mut completed: Vec<StageId> = Vec::new();

        for stage in &self.stages {
            for dep in stage.dependencies() {
                if !completed.contains(dep) {
                    return Err(PipelineError::MissingDependency(
                        stage.name().to_string(),
                        dep.name().to_string(),
                    ));
                }
            }

            stage.execute(world)?;
            completed.push(stage.id());
        }

        Ok(())
    }

    /// Executes all stages with progress callbacks.
    ///
    /// # Arguments
    /// * `world` - The world to generate
    /// * `on_stage_start` - Called when each stage begins
    /// * `on_stage_complete` - Called when each stage finishes
    pub fn run_with_callbacks<F1, F2>(
        &self,
        world: &mut World,
        mut on_stage_start: F1,
        mut on_stage_complete: F2,
    ) -> Result<(), PipelineError>
    where
        F1: FnMut(&str, usize, usize),
        F2: FnMut(&str, usize, usize),
    {
        let total = self.stages.len();
        let mut completed: Vec<StageId> = Vec::new();

        for (i, stage) in self.stages.iter().enumerate() {
            on_stage_start(stage.name(), i, total);

            for dep in stage.dependencies() {
                if !completed.contains(dep) {
                    return Err(PipelineError::MissingDependency(
                        stage.name().to_string(),
                        dep.name().to_string(),
                    ));
                }
            }

            stage.execute(world)?;
            completed.push(stage.id());

            on_stage_complete(stage.name(), i, total);
        }

        Ok(())
    }
}

/// Plate seeding and growth stage.
pub struct PlateStage {
    pub config: TectonicConfig,
}

impl PlateStage {
    /// Creates a new plate stage with the given configuration.
    pub fn new(config: TectonicConfig) -> Self {
        Self { config }
    }

    /// Creates a plate stage with Earth-like defaults.
    pub fn earth_like(seed: u64) -> Self {
        Self::new(TectonicConfig::earth_like(seed))
    }
}

impl GenerationStage for PlateStage {
    fn id(&self) -> StageId {
        StageId::Plates
    }

    fn name(&self) -> &str {
        "Plate Assignment"
    }

    fn execute(&self, world: &mut World) -> Result<(), PipelineError> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        let plates = assign_plates(&mut world.grid, &self.config, &mut rng)
            .map_err(|e| PipelineError::StageFailed(self.name().to_string(), e.to_string()))?;
        world.plates = Some(plates);
        Ok(())
    }
}

/// Boundary classification stage: applies elevation deltas along plate
/// seams.
pub struct BoundaryStage;

impl GenerationStage for BoundaryStage {
    fn id(&self) -> StageId {
        StageId::Boundaries
    }

    fn name(&self) -> &str {
        "Boundary Classification"
    }

    fn dependencies(&self) -> &[StageId] {
        &[StageId::Plates]
    }

    fn execute(&self, world: &mut World) -> Result<(), PipelineError> {
        let Some(plates) = world.plates.as_ref() else {
            return Err(PipelineError::StageFailed(
                self.name().to_string(),
                "no plate table on world (run the plate stage first)".to_string(),
            ));
        };
        let boundary_tiles = find_boundary_tiles(&world.grid);
        classify_boundaries(&mut world.grid, plates, &boundary_tiles);
        world.boundary_tiles = Some(boundary_tiles);
        Ok(())
    }
}

/// Moisture propagation stage.
pub struct MoistureStage {
    pub config: MoistureConfig,
}

impl MoistureStage {
    pub fn new(config: MoistureConfig) -> Self {
        Self { config }
    }
}

impl GenerationStage for MoistureStage {
    fn id(&self) -> StageId {
        StageId::Moisture
    }

    fn name(&self) -> &str {
        "Moisture Propagation"
    }

    fn dependencies(&self) -> &[StageId] {
        // Moisture reads final elevations, so boundaries must have run.
        &[StageId::Boundaries]
    }

    fn execute(&self, world: &mut World) -> Result<(), PipelineError> {
        propagate_moisture(&mut world.grid, &self.config);
        Ok(())
    }
}

/// Biome classification stage.
pub struct BiomeStage;

impl GenerationStage for BiomeStage {
    fn id(&self) -> StageId {
        StageId::Biomes
    }

    fn name(&self) -> &str {
        "Biome Assignment"
    }

    fn dependencies(&self) -> &[StageId] {
        &[StageId::Moisture]
    }

    fn execute(&self, world: &mut World) -> Result<(), PipelineError> {
        assign_biomes(&mut world.grid);
        Ok(())
    }
}
