use rayon::prelude::*;

use crate::map_core::biome::{classify, Biome};
use crate::map_core::error::MapError;
use crate::map_core::noise_field::{NoiseAlgorithm, NoiseField, NoiseFieldParams};
use crate::map_core::ranges::ThresholdTable;

/// One grid cell. Immutable once generated; its identity is its (x, y)
/// position within the owning grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    pub x: u32,
    pub y: u32,
    pub elevation: f64,
}

/// Generation parameters worth remembering for serialization.
/// Persistence, lacunarity and seed are deliberately not part of this:
/// the document format replays materialized tiles, it does not regenerate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationMeta {
    pub algorithm: NoiseAlgorithm,
    pub scale: f64,
    pub octaves: u32,
}

/// A width x height grid of elevation tiles plus the threshold table that
/// bands them. A second map of the same shape can be attached to supply
/// the moisture scalar during classification; it is only ever read.
#[derive(Debug)]
pub struct NoiseMap {
    width: u32,
    height: u32,
    ranges: ThresholdTable,
    tiles: Vec<Tile>,
    moisture_map: Option<Box<NoiseMap>>,
    meta: Option<GenerationMeta>,
}

impl NoiseMap {
    /// Creates an ungenerated map: the grid shape and banding are fixed,
    /// tiles are filled in by `generate`.
    pub fn new(width: u32, height: u32, ranges: ThresholdTable) -> Result<Self, MapError> {
        if width == 0 || height == 0 {
            return Err(MapError::Config(format!(
                "map dimensions must be positive, got {width}x{height}"
            )));
        }
        Ok(Self {
            width,
            height,
            ranges,
            tiles: Vec::new(),
            moisture_map: None,
            meta: None,
        })
    }

    /// Fills the grid from the noise field, replacing any previous tiles
    /// wholesale. Parameters are validated before any grid work, so on
    /// error the map keeps its prior state.
    pub fn generate(&mut self, params: &NoiseFieldParams) -> Result<(), MapError> {
        let field = NoiseField::new(params)?;
        self.tiles = self.fill(|x, y| field.sample(x, y));
        self.meta = Some(GenerationMeta {
            algorithm: params.algorithm,
            scale: params.scale,
            octaves: params.octaves,
        });
        Ok(())
    }

    /// Like `generate`, but samples remapped into [0, 1] for the
    /// moisture role.
    pub fn generate_moisture(&mut self, params: &NoiseFieldParams) -> Result<(), MapError> {
        let field = NoiseField::new(params)?;
        self.tiles = self.fill(|x, y| field.sample_unit(x, y));
        self.meta = Some(GenerationMeta {
            algorithm: params.algorithm,
            scale: params.scale,
            octaves: params.octaves,
        });
        Ok(())
    }

    // Row-major fill, index = y * width + x. Each tile is independent,
    // so the fill runs on the rayon pool; the indexed collect keeps
    // insertion order.
    fn fill(&self, sample: impl Fn(u32, u32) -> f64 + Sync) -> Vec<Tile> {
        let width = self.width;
        let total = self.width as usize * self.height as usize;
        (0..total)
            .into_par_iter()
            .map(|idx| {
                let x = idx as u32 % width;
                let y = idx as u32 / width;
                Tile {
                    x,
                    y,
                    elevation: sample(x, y),
                }
            })
            .collect()
    }

    /// Attaches the moisture grid read during classification. Its shape
    /// must match this map's exactly.
    pub fn attach_moisture(&mut self, moisture: NoiseMap) -> Result<(), MapError> {
        if moisture.width != self.width || moisture.height != self.height {
            return Err(MapError::Config(format!(
                "moisture map is {}x{}, expected {}x{}",
                moisture.width, moisture.height, self.width, self.height
            )));
        }
        self.moisture_map = Some(Box::new(moisture));
        Ok(())
    }

    pub fn tile_at(&self, x: u32, y: u32) -> Result<&Tile, MapError> {
        if !self.is_generated() {
            return Err(MapError::Config("map has not been generated".into()));
        }
        if x >= self.width || y >= self.height {
            return Err(MapError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(&self.tiles[(y * self.width + x) as usize])
    }

    /// The elevation and moisture scalars at (x, y), read from this grid
    /// and the attached moisture grid.
    pub fn scalars_at(&self, x: u32, y: u32) -> Result<(f64, f64), MapError> {
        let elevation = self.tile_at(x, y)?.elevation;
        let moisture_map = self.moisture_map.as_deref().ok_or(MapError::MissingMoisture)?;
        let moisture = moisture_map.tile_at(x, y)?.elevation;
        Ok((elevation, moisture))
    }

    /// Resolves the biome at (x, y) by combining this grid's elevation
    /// with the attached moisture grid's scalar at the same cell.
    pub fn biome_of(&self, x: u32, y: u32) -> Result<Biome, MapError> {
        let (elevation, moisture) = self.scalars_at(x, y)?;
        Ok(classify(elevation, moisture, &self.ranges))
    }

    /// Classifies the whole grid in row-major order.
    pub fn biome_grid(&self) -> Result<Vec<Biome>, MapError> {
        let moisture_map = self.moisture_map.as_deref().ok_or(MapError::MissingMoisture)?;
        if !self.is_generated() || !moisture_map.is_generated() {
            return Err(MapError::Config("map has not been generated".into()));
        }
        Ok(self
            .tiles
            .iter()
            .zip(moisture_map.tiles.iter())
            .map(|(tile, wet)| classify(tile.elevation, wet.elevation, &self.ranges))
            .collect())
    }

    pub fn is_generated(&self) -> bool {
        self.tiles.len() == self.width as usize * self.height as usize
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn ranges(&self) -> &ThresholdTable {
        &self.ranges
    }

    pub fn moisture_map(&self) -> Option<&NoiseMap> {
        self.moisture_map.as_deref()
    }

    pub fn meta(&self) -> Option<&GenerationMeta> {
        self.meta.as_ref()
    }

    pub(crate) fn restore(
        width: u32,
        height: u32,
        ranges: ThresholdTable,
        tiles: Vec<Tile>,
        moisture_map: Option<NoiseMap>,
        meta: GenerationMeta,
    ) -> Self {
        Self {
            width,
            height,
            ranges,
            tiles,
            moisture_map: moisture_map.map(Box::new),
            meta: Some(meta),
        }
    }
}
