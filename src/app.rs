use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::cli::Cli;
use crate::map_core::{
    LookupPolicy, MapDocument, NoiseFieldParams, NoiseMap, StructuralCuts, ThresholdTable,
};
use crate::render::{ascii, png};

pub fn run(cli: Cli) -> anyhow::Result<()> {
    match &cli.view {
        Some(path) => view(path),
        None => generate(&cli),
    }
}

fn view(path: &Path) -> anyhow::Result<()> {
    let doc = MapDocument::load(path)
        .with_context(|| format!("failed to load {}", path.display()))?;
    let map = NoiseMap::from_document(&doc, LookupPolicy::Descending)?;

    println!("file:\t\t{}", path.display());

    print!("{}", ascii::legend());
    // saved maps may lack a moisture grid; fall back to elevation bands
    let rendered = match map.moisture_map() {
        Some(_) => ascii::render_biomes(&map)?,
        None => ascii::render_bands(&map)?,
    };
    print!("{rendered}");
    Ok(())
}

fn generate(cli: &Cli) -> anyhow::Result<()> {
    // the noise field works in scale terms; the flag surface keeps the
    // historical frequency form
    let scale = cli.frequency * cli.octaves as f64;
    let moisture_scale = cli.moisture_frequency * cli.moisture_octaves as f64;

    log::info!(
        "generating {}x{} map, algorithm {}, octaves {}, scale {}",
        cli.width,
        cli.height,
        cli.algorithm,
        cli.octaves,
        scale
    );

    let cuts = StructuralCuts {
        water: cli.water,
        shallow_water: cli.shallowwater,
        sand: cli.sand,
        land: cli.land,
        mountain: cli.mountain,
        huge_mountain: cli.hugemountain,
    };
    let ranges = ThresholdTable::from_cuts(LookupPolicy::Descending, &cuts);

    let mut map = NoiseMap::new(cli.width, cli.height, ranges.clone())?;
    map.generate(&NoiseFieldParams {
        algorithm: cli.algorithm,
        scale,
        octaves: cli.octaves,
        persistence: cli.persistence,
        lacunarity: cli.lacunarity,
        seed: cli.seed,
    })?;

    let mut moisture = NoiseMap::new(cli.width, cli.height, ranges)?;
    moisture.generate_moisture(&NoiseFieldParams {
        algorithm: cli.moisture_algorithm,
        scale: moisture_scale,
        octaves: cli.moisture_octaves,
        persistence: cli.persistence,
        lacunarity: cli.lacunarity,
        // offset so the moisture field never mirrors the terrain
        seed: cli.seed.wrapping_add(1),
    })?;
    map.attach_moisture(moisture)?;

    print!("{}", ascii::legend());
    print!("{}", ascii::render_biomes(&map)?);

    if let Some(path) = &cli.png {
        png::export_png(&map, path, cli.tile_size)
            .with_context(|| format!("failed to export {}", path.display()))?;
    }

    match &cli.file {
        Some(path) => map.to_document()?.save(path)?,
        None => {
            if confirm("Save map?")? {
                let path = free_file_name();
                map.to_document()?.save(&path)?;
                println!("saved to {}", path.display());
            }
        }
    }

    Ok(())
}

fn confirm(prompt: &str) -> anyhow::Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

/// First `noise_map_NNN.json` name not already taken.
fn free_file_name() -> PathBuf {
    (0..)
        .map(|i| PathBuf::from(format!("noise_map_{i:03}.json")))
        .find(|path| !path.exists())
        .unwrap_or_else(|| PathBuf::from("noise_map.json"))
}
