use std::path::PathBuf;

use clap::Parser;

use crate::map_core::NoiseAlgorithm;

/// Generate or view a 2D noise terrain map.
#[derive(Debug, Parser)]
#[command(
    name = "noise-map",
    about = "Generate or view a noise map",
    allow_negative_numbers = true
)]
pub struct Cli {
    /// Display an existing map file instead of generating one.
    #[arg(short, long)]
    pub view: Option<PathBuf>,

    /// Save the generated map to this file without prompting.
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Map width in tiles.
    #[arg(long, default_value_t = 164)]
    pub width: u32,

    /// Map height in tiles.
    #[arg(long, default_value_t = 32)]
    pub height: u32,

    /// Noise algorithm.
    #[arg(long, default_value = "simplex")]
    pub algorithm: NoiseAlgorithm,

    /// Octaves used for generation.
    #[arg(short, long, default_value_t = 8)]
    pub octaves: u32,

    /// Noise frequency; the sampling scale is frequency * octaves.
    #[arg(long, default_value_t = 4.0)]
    pub frequency: f64,

    /// Amplitude falloff per octave.
    #[arg(long, default_value_t = 0.5)]
    pub persistence: f64,

    /// Frequency growth per octave.
    #[arg(long, default_value_t = 2.0)]
    pub lacunarity: f64,

    /// Noise seed.
    #[arg(long, default_value_t = 0)]
    pub seed: u32,

    /// Height level of the water.
    #[arg(long, default_value_t = -1.0)]
    pub water: f64,

    /// Height level of the shallow water.
    #[arg(long, default_value_t = -0.3)]
    pub shallowwater: f64,

    /// Height level of the sand.
    #[arg(long, default_value_t = -0.1)]
    pub sand: f64,

    /// Height of normal grass/land/forest.
    #[arg(long, default_value_t = 0.0)]
    pub land: f64,

    /// Height of mountains.
    #[arg(long, default_value_t = 0.4)]
    pub mountain: f64,

    /// Height of huge mountains.
    #[arg(long, default_value_t = 0.5)]
    pub hugemountain: f64,

    /// Moisture noise algorithm.
    #[arg(long = "moisture-algorithm", default_value = "simplex")]
    pub moisture_algorithm: NoiseAlgorithm,

    /// Moisture noise octaves.
    #[arg(long = "moisture-octaves", default_value_t = 8)]
    pub moisture_octaves: u32,

    /// Moisture noise frequency.
    #[arg(long = "moisture-frequency", default_value_t = 4.0)]
    pub moisture_frequency: f64,

    /// Also export the map as a PNG image to this file.
    #[arg(long)]
    pub png: Option<PathBuf>,

    /// Pixels per tile in the PNG export.
    #[arg(long, default_value_t = 8)]
    pub tile_size: u32,
}
