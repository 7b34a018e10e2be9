//! Hexworld CLI - procedural hex-map planet generator.
//!
//! Generates a hexagonal planetary map from a seeded tectonic simulation
//! and exports plate, elevation, moisture, and biome maps as PNG images.

use clap::{Parser, Subcommand};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Instant;

use hexworld::export::{
    export_biome_map, export_elevation_map, export_moisture_map, export_plate_map,
    MapImageOptions, PlateMapOptions,
};
use hexworld::{
    BiomeStage, BoundaryStage, MoistureConfig, MoistureStage, Pipeline, PlateStage,
    TectonicConfig, World,
};

/// Procedural hexagonal planetary map generator.
#[derive(Parser)]
#[command(name = "hexworld")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new world and export map images.
    Generate {
        /// Grid radius in tiles (tile count is 3r^2 + 3r + 1).
        #[arg(short, long, default_value = "15")]
        radius: u32,

        /// Number of tectonic plates.
        #[arg(short, long, default_value = "9")]
        plates: usize,

        /// Number of oceanic plates.
        #[arg(long, default_value = "3")]
        oceans: usize,

        /// Random seed for reproducible generation.
        #[arg(short, long)]
        seed: Option<u64>,

        /// Moisture lost per hop during propagation (0-1).
        #[arg(long, default_value = "0.15")]
        decay: f32,

        /// Output directory for map images.
        #[arg(short, long, default_value = "./output")]
        output: PathBuf,

        /// Base name for output files.
        #[arg(short, long, default_value = "world")]
        name: String,

        /// Hex circumradius in pixels for exported maps.
        #[arg(long, default_value = "12")]
        hex_size: f32,

        /// Skip exporting the plate map.
        #[arg(long)]
        no_plate_map: bool,

        /// Skip exporting the elevation map.
        #[arg(long)]
        no_elevation_map: bool,

        /// Skip exporting the moisture map.
        #[arg(long)]
        no_moisture_map: bool,

        /// Skip exporting the biome map.
        #[arg(long)]
        no_biome_map: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            radius,
            plates,
            oceans,
            seed,
            decay,
            output,
            name,
            hex_size,
            no_plate_map,
            no_elevation_map,
            no_moisture_map,
            no_biome_map,
        } => generate(
            radius,
            plates,
            oceans,
            seed,
            decay,
            output,
            name,
            hex_size,
            no_plate_map,
            no_elevation_map,
            no_moisture_map,
            no_biome_map,
        ),
    }
}

#[allow(clippy::too_many_arguments)]
fn generate(
    radius: u32,
    plates: usize,
    oceans: usize,
    seed: Option<u64>,
    decay: f32,
    output: PathBuf,
    name: String,
    hex_size: f32,
    no_plate_map: bool,
    no_elevation_map: bool,
    no_moisture_map: bool,
    no_biome_map: bool,
) {
    // Validate parameters
    if radius > 100 {
        eprintln!("Error: Radius must be between 0 and 100");
        std::process::exit(1);
    }

    if plates == 0 {
        eprintln!("Error: At least one plate is required");
        std::process::exit(1);
    }

    if oceans > plates {
        eprintln!("Error: Ocean plate count must not exceed plate count");
        std::process::exit(1);
    }

    if !(0.0..1.0).contains(&decay) {
        eprintln!("Error: Decay must be in [0, 1)");
        std::process::exit(1);
    }

    if hex_size < 1.0 || hex_size > 64.0 {
        eprintln!("Error: Hex size must be between 1 and 64 pixels");
        std::process::exit(1);
    }

    // Generate seed if not provided
    let seed = seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos() as u64
    });

    println!("Hexworld - Procedural Planet Generator");
    println!("======================================");
    println!("Radius: {} ({} tiles)", radius, 3 * radius * radius + 3 * radius + 1);
    println!("Plates: {} ({} oceanic)", plates, oceans);
    println!("Seed: {}", seed);
    println!("Output: {}", output.display());

    let start = Instant::now();

    let tectonic_config = TectonicConfig {
        num_plates: plates,
        num_oceans: oceans,
        seed,
        ..Default::default()
    };
    let moisture_config = MoistureConfig { decay };

    let mut world = World::new(radius);

    println!("\nRunning generation pipeline...");
    let mut pipeline = Pipeline::new();
    pipeline.add_stage(PlateStage::new(tectonic_config));
    pipeline.add_stage(BoundaryStage);
    pipeline.add_stage(MoistureStage::new(moisture_config));
    pipeline.add_stage(BiomeStage);

    pipeline
        .run_with_callbacks(
            &mut world,
            |name, i, total| {
                println!("  [{}/{}] Starting: {}", i + 1, total, name);
            },
            |name, i, total| {
                println!("  [{}/{}] Completed: {}", i + 1, total, name);
            },
        )
        .unwrap_or_else(|e| {
            eprintln!("Error during generation: {}", e);
            std::process::exit(1);
        });

    let gen_time = start.elapsed();
    println!("Generation completed in {:.2?}", gen_time);

    println!("Total tiles: {}", world.tile_count());
    let (min_e, max_e) = world.elevation_range();
    println!("Elevation range: [{:.3}, {:.3}]", min_e, max_e);

    let mut biome_counts: HashMap<_, usize> = HashMap::new();
    for tile in world.grid.tiles() {
        *biome_counts.entry(tile.biome).or_default() += 1;
    }
    let mut biome_counts: Vec<_> = biome_counts.into_iter().collect();
    biome_counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.name().cmp(b.0.name())));
    println!("Biomes:");
    for (biome, count) in &biome_counts {
        println!("  {:<16} {}", biome.name(), count);
    }

    // Export
    println!("\nExporting maps...");
    std::fs::create_dir_all(&output).unwrap_or_else(|e| {
        eprintln!("Error creating output directory: {}", e);
        std::process::exit(1);
    });

    let map_options = MapImageOptions {
        hex_size,
        ..Default::default()
    };

    if !no_plate_map {
        let path = output.join(format!("{}_plates.png", name));
        let options = PlateMapOptions {
            map: map_options.clone(),
            ..Default::default()
        };
        export_plate_map(&world, &path, &options).unwrap_or_else(|e| {
            eprintln!("Error exporting plate map: {}", e);
            std::process::exit(1);
        });
        println!("  Plate map: {}", path.display());
    }

    if !no_elevation_map {
        let path = output.join(format!("{}_elevation.png", name));
        export_elevation_map(&world, &path, &map_options).unwrap_or_else(|e| {
            eprintln!("Error exporting elevation map: {}", e);
            std::process::exit(1);
        });
        println!("  Elevation map: {}", path.display());
    }

    if !no_moisture_map {
        let path = output.join(format!("{}_moisture.png", name));
        export_moisture_map(&world, &path, &map_options).unwrap_or_else(|e| {
            eprintln!("Error exporting moisture map: {}", e);
            std::process::exit(1);
        });
        println!("  Moisture map: {}", path.display());
    }

    if !no_biome_map {
        let path = output.join(format!("{}_biomes.png", name));
        export_biome_map(&world, &path, &map_options).unwrap_or_else(|e| {
            eprintln!("Error exporting biome map: {}", e);
            std::process::exit(1);
        });
        println!("  Biome map: {}", path.display());
    }

    println!("\nDone in {:.2?}", start.elapsed());
}
