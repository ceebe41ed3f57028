use std::fmt;
use std::str::FromStr;

use noise::{Fbm, MultiFractal, NoiseFn, Perlin, Simplex};
use serde::{Deserialize, Serialize};

use crate::map_core::error::MapError;

/// Seed used when the caller does not ask for a specific one. Keeping it
/// fixed makes repeated runs reproduce the same field byte for byte.
pub const DEFAULT_SEED: u32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoiseAlgorithm {
    Perlin,
    Simplex,
}

impl NoiseAlgorithm {
    pub fn as_str(self) -> &'static str {
        match self {
            NoiseAlgorithm::Perlin => "perlin",
            NoiseAlgorithm::Simplex => "simplex",
        }
    }
}

impl fmt::Display for NoiseAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NoiseAlgorithm {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "perlin" => Ok(NoiseAlgorithm::Perlin),
            "simplex" => Ok(NoiseAlgorithm::Simplex),
            other => Err(MapError::Config(format!(
                "unknown noise algorithm '{other}', expected 'perlin' or 'simplex'"
            ))),
        }
    }
}

/// Shape parameters for one noise field.
///
/// `scale` is an inverse zoom: grid coordinates are divided by it before
/// sampling, so a higher scale means more detail per cell. Callers who
/// think in frequency terms pre-multiply (`scale = frequency * octaves`).
#[derive(Debug, Clone, Copy)]
pub struct NoiseFieldParams {
    pub algorithm: NoiseAlgorithm,
    pub scale: f64,
    pub octaves: u32,
    pub persistence: f64,
    pub lacunarity: f64,
    pub seed: u32,
}

impl Default for NoiseFieldParams {
    fn default() -> Self {
        Self {
            algorithm: NoiseAlgorithm::Simplex,
            scale: 32.0,
            octaves: 8,
            persistence: 0.5,
            lacunarity: 2.0,
            seed: DEFAULT_SEED,
        }
    }
}

#[derive(Debug)]
enum FbmSource {
    Perlin(Fbm<Perlin>),
    Simplex(Fbm<Simplex>),
}

impl FbmSource {
    fn get(&self, point: [f64; 2]) -> f64 {
        match self {
            FbmSource::Perlin(fbm) => fbm.get(point),
            FbmSource::Simplex(fbm) => fbm.get(point),
        }
    }
}

/// A seeded, multi-octave scalar noise field over integer grid coordinates.
///
/// Sampling is pure: the same coordinate and the same construction
/// parameters always yield the same value, within a process and across
/// process restarts. Output is approximately [-1, 1] but not strictly
/// bounded, so consumers must not assume hard limits.
#[derive(Debug)]
pub struct NoiseField {
    source: FbmSource,
    scale: f64,
}

impl NoiseField {
    /// Builds the field, rejecting bad parameters before any grid work.
    pub fn new(params: &NoiseFieldParams) -> Result<Self, MapError> {
        if !(params.scale > 0.0) {
            return Err(MapError::Config(format!(
                "scale must be positive, got {}",
                params.scale
            )));
        }
        if params.octaves == 0 {
            return Err(MapError::Config("octaves must be at least 1".into()));
        }

        let source = match params.algorithm {
            NoiseAlgorithm::Perlin => FbmSource::Perlin(
                Fbm::<Perlin>::new(params.seed)
                    .set_octaves(params.octaves as usize)
                    .set_persistence(params.persistence)
                    .set_lacunarity(params.lacunarity),
            ),
            NoiseAlgorithm::Simplex => FbmSource::Simplex(
                Fbm::<Simplex>::new(params.seed)
                    .set_octaves(params.octaves as usize)
                    .set_persistence(params.persistence)
                    .set_lacunarity(params.lacunarity),
            ),
        };

        Ok(Self {
            source,
            scale: params.scale,
        })
    }

    /// Samples the field at a grid coordinate.
    pub fn sample(&self, x: u32, y: u32) -> f64 {
        self.source
            .get([x as f64 / self.scale, y as f64 / self.scale])
    }

    /// Samples the field remapped into [0, 1], for the moisture role.
    pub fn sample_unit(&self, x: u32, y: u32) -> f64 {
        (self.sample(x, y) * 0.5 + 0.5).clamp(0.0, 1.0)
    }
}
