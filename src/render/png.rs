//! Raster export of a classified map.

use std::path::Path;

use image::{Rgb, RgbImage};
use thiserror::Error;

use crate::map_core::{Biome, MapError, NoiseMap};

#[derive(Debug, Error)]
pub enum PngExportError {
    #[error("image encoding error: {0}")]
    Image(#[from] image::ImageError),
    #[error(transparent)]
    Map(#[from] MapError),
    #[error("tile size must be at least 1 pixel")]
    ZeroTileSize,
}

/// Fill color for one biome.
pub fn biome_color(biome: Biome) -> Rgb<u8> {
    let (r, g, b) = match biome {
        Biome::Ocean => (54, 62, 150),
        Biome::Shallows => (88, 205, 237),
        Biome::Beach => (247, 247, 119),
        Biome::Swamp => (92, 112, 104),
        Biome::Scorched => (247, 149, 119),
        Biome::Bare => (168, 166, 165),
        Biome::Tundra => (132, 173, 158),
        Biome::Snow => (255, 255, 255),
        Biome::TemperateDesert => (227, 155, 0),
        Biome::Shrubland => (62, 110, 58),
        Biome::Taiga => (62, 87, 71),
        Biome::SubtropicalDesert => (255, 214, 153),
        Biome::Grassland => (55, 181, 43),
        Biome::TemperateDeciduousForest => (62, 138, 55),
        Biome::TemperateRainForest => (161, 38, 255),
        Biome::TropicalSeasonalForest => (143, 80, 109),
        Biome::TropicalRainForest => (255, 0, 119),
    };
    Rgb([r, g, b])
}

/// Renders the classified map into an image, one `tile_size` square per
/// tile, row-major top to bottom.
pub fn render_image(map: &NoiseMap, tile_size: u32) -> Result<RgbImage, PngExportError> {
    if tile_size == 0 {
        return Err(PngExportError::ZeroTileSize);
    }

    let biomes = map.biome_grid()?;
    let width = map.width();

    let image = RgbImage::from_fn(
        map.width() * tile_size,
        map.height() * tile_size,
        |px, py| {
            let x = px / tile_size;
            let y = py / tile_size;
            biome_color(biomes[(y * width + x) as usize])
        },
    );
    Ok(image)
}

/// Renders and writes the map as a PNG file.
pub fn export_png(map: &NoiseMap, path: &Path, tile_size: u32) -> Result<(), PngExportError> {
    let image = render_image(map, tile_size)?;
    image.save(path)?;
    log::info!(
        "wrote {}x{} biome image to {}",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(())
}
