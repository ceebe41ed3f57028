use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::map_core::error::MapError;
use crate::map_core::map::{GenerationMeta, NoiseMap, Tile};
use crate::map_core::noise_field::NoiseAlgorithm;
use crate::map_core::ranges::{LookupPolicy, ThresholdEntry, ThresholdTable};

/// The persisted map shape. Tiles carry their materialized values
/// verbatim; `algorithm`/`scale`/`octaves` are informational metadata and
/// are not enough to regenerate the grid (persistence, lacunarity and
/// seed are not stored).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapDocument {
    pub width: u32,
    pub height: u32,
    pub algorithm: NoiseAlgorithm,
    pub scale: f64,
    pub octaves: u32,
    pub noise_ranges: Vec<RangeDocument>,
    pub tiles: Vec<TileDocument>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moisture_map: Option<Box<MapDocument>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeDocument {
    pub name: String,
    pub threshold: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileDocument {
    pub x: u32,
    pub y: u32,
    pub noise_value: f64,
}

impl MapDocument {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let doc: MapDocument = serde_json::from_str(&contents)?;
        log::info!("loaded map document from {}", path.display());
        Ok(doc)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("saved map document to {}", path.display());
        Ok(())
    }
}

impl NoiseMap {
    /// Serializes this map (and its moisture map, if attached) into the
    /// persisted document shape. The map must have been generated.
    pub fn to_document(&self) -> Result<MapDocument, MapError> {
        let meta = self
            .meta()
            .filter(|_| self.is_generated())
            .ok_or_else(|| MapError::Config("map has not been generated".into()))?;

        let moisture_map = self
            .moisture_map()
            .map(|m| m.to_document().map(Box::new))
            .transpose()?;

        Ok(MapDocument {
            width: self.width(),
            height: self.height(),
            algorithm: meta.algorithm,
            scale: meta.scale,
            octaves: meta.octaves,
            noise_ranges: self
                .ranges()
                .entries()
                .iter()
                .map(|e| RangeDocument {
                    name: e.name.clone(),
                    threshold: e.threshold,
                })
                .collect(),
            tiles: self
                .tiles()
                .iter()
                .map(|t| TileDocument {
                    x: t.x,
                    y: t.y,
                    noise_value: t.elevation,
                })
                .collect(),
            moisture_map,
        })
    }

    /// Reconstructs a map from a persisted document, preserving tile
    /// order and values exactly. The document's entry order is kept as
    /// written, under the given lookup policy.
    pub fn from_document(doc: &MapDocument, policy: LookupPolicy) -> Result<Self, MapError> {
        if doc.width == 0 || doc.height == 0 {
            return Err(MapError::Format(format!(
                "document has {}x{} dimensions",
                doc.width, doc.height
            )));
        }

        let expected = doc.width as usize * doc.height as usize;
        if doc.tiles.len() != expected {
            return Err(MapError::Format(format!(
                "document holds {} tiles for a {}x{} grid (expected {expected})",
                doc.tiles.len(),
                doc.width,
                doc.height
            )));
        }

        let entries: Vec<ThresholdEntry> = doc
            .noise_ranges
            .iter()
            .map(|r| ThresholdEntry::new(r.name.clone(), r.threshold))
            .collect();
        let ranges = ThresholdTable::new(entries, policy)
            .map_err(|e| MapError::Format(e.to_string()))?;

        let tiles: Vec<Tile> = doc
            .tiles
            .iter()
            .map(|t| Tile {
                x: t.x,
                y: t.y,
                elevation: t.noise_value,
            })
            .collect();

        let moisture_map = doc
            .moisture_map
            .as_deref()
            .map(|m| NoiseMap::from_document(m, policy))
            .transpose()?;

        if let Some(moisture) = &moisture_map {
            if moisture.width() != doc.width || moisture.height() != doc.height {
                return Err(MapError::Format(format!(
                    "moisture map is {}x{}, expected {}x{}",
                    moisture.width(),
                    moisture.height(),
                    doc.width,
                    doc.height
                )));
            }
        }

        Ok(NoiseMap::restore(
            doc.width,
            doc.height,
            ranges,
            tiles,
            moisture_map,
            GenerationMeta {
                algorithm: doc.algorithm,
                scale: doc.scale,
                octaves: doc.octaves,
            },
        ))
    }
}
