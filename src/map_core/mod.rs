pub mod biome;
pub mod document;
pub mod error;
pub mod map;
pub mod noise_field;
pub mod ranges;

pub use biome::{classify, Biome};
pub use document::MapDocument;
pub use error::MapError;
pub use map::{GenerationMeta, NoiseMap, Tile};
pub use noise_field::{NoiseAlgorithm, NoiseField, NoiseFieldParams};
pub use ranges::{LookupPolicy, StructuralCuts, ThresholdEntry, ThresholdTable};
