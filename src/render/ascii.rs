//! ANSI terminal rendering of a classified map, plus the legend.

use crate::map_core::{Biome, MapError, NoiseMap};

/// Glyph and truecolor foreground/background for one biome cell.
pub fn biome_cell(biome: Biome) -> (char, (u8, u8, u8), (u8, u8, u8)) {
    match biome {
        Biome::Ocean => (' ', (88, 205, 237), (54, 62, 150)),
        Biome::Shallows => ('~', (54, 62, 150), (88, 205, 237)),
        Biome::Beach => ('b', (90, 90, 90), (247, 247, 119)),
        Biome::Swamp => ('s', (255, 255, 255), (92, 112, 104)),
        Biome::Scorched => ('S', (60, 60, 60), (247, 149, 119)),
        Biome::Bare => ('B', (60, 60, 60), (168, 166, 165)),
        Biome::Tundra => ('t', (255, 255, 255), (132, 173, 158)),
        Biome::Snow => ('s', (120, 120, 120), (255, 255, 255)),
        Biome::TemperateDesert => ('d', (90, 90, 90), (227, 155, 0)),
        Biome::Shrubland => ('s', (55, 181, 43), (62, 110, 58)),
        Biome::Taiga => ('i', (200, 220, 200), (62, 87, 71)),
        Biome::SubtropicalDesert => ('D', (255, 255, 255), (255, 214, 153)),
        Biome::Grassland => (' ', (90, 90, 90), (55, 181, 43)),
        Biome::TemperateDeciduousForest => ('f', (200, 220, 200), (62, 138, 55)),
        Biome::TemperateRainForest => ('r', (230, 230, 230), (161, 38, 255)),
        Biome::TropicalSeasonalForest => ('F', (230, 230, 230), (143, 80, 109)),
        Biome::TropicalRainForest => ('R', (230, 230, 230), (255, 0, 119)),
    }
}

/// Glyph for an elevation band, keyed by its structural name. Used by
/// the bands-only view when no moisture map is available.
fn band_glyph(name: &str) -> char {
    match name {
        "hugemountain" => '∆',
        "mountain" => '^',
        "land" => '.',
        "sand" => ':',
        "shallowwater" => '~',
        "water" => '≈',
        _ => '?',
    }
}

fn ansi_cell(ch: char, fg: (u8, u8, u8), bg: (u8, u8, u8)) -> String {
    format!(
        "\x1b[38;2;{};{};{}m\x1b[48;2;{};{};{}m{}\x1b[0m",
        fg.0, fg.1, fg.2, bg.0, bg.1, bg.2, ch
    )
}

/// Renders the classified map, one ANSI-colored glyph per tile, rows
/// separated by newlines.
pub fn render_biomes(map: &NoiseMap) -> Result<String, MapError> {
    let biomes = map.biome_grid()?;
    let width = map.width() as usize;

    let mut out = String::new();
    for row in biomes.chunks(width) {
        for biome in row {
            let (ch, fg, bg) = biome_cell(*biome);
            out.push_str(&ansi_cell(ch, fg, bg));
        }
        out.push('\n');
    }
    Ok(out)
}

/// Renders elevation bands only, resolving each tile through the
/// threshold table. This is the fallback view for maps without moisture.
pub fn render_bands(map: &NoiseMap) -> Result<String, MapError> {
    if !map.is_generated() {
        return Err(MapError::Config("map has not been generated".into()));
    }
    let width = map.width() as usize;

    let mut out = String::new();
    for row in map.tiles().chunks(width) {
        for tile in row {
            let band = map.ranges().band_for(tile.elevation);
            out.push(band_glyph(&band.name));
        }
        out.push('\n');
    }
    Ok(out)
}

/// The biome legend, five entries per row.
pub fn legend() -> String {
    let mut out = String::new();
    for row in Biome::ALL.chunks(5) {
        for biome in row {
            let (ch, fg, bg) = biome_cell(*biome);
            let key = format!("{} {}", ansi_cell(ch, fg, bg), biome);
            // pad by display name, the escape codes have no width
            out.push_str(&key);
            for _ in biome.name().len()..30 {
                out.push(' ');
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map_core::{
        LookupPolicy, NoiseFieldParams, NoiseMap, StructuralCuts, ThresholdTable,
    };

    fn generated_with_moisture() -> NoiseMap {
        let ranges = ThresholdTable::from_cuts(
            LookupPolicy::Descending,
            &StructuralCuts {
                water: -1.0,
                shallow_water: -0.3,
                sand: -0.1,
                land: 0.0,
                mountain: 0.4,
                huge_mountain: 0.5,
            },
        );
        let mut map = NoiseMap::new(10, 4, ranges.clone()).unwrap();
        map.generate(&NoiseFieldParams::default()).unwrap();
        let mut moisture = NoiseMap::new(10, 4, ranges).unwrap();
        moisture
            .generate_moisture(&NoiseFieldParams {
                seed: 3,
                ..Default::default()
            })
            .unwrap();
        map.attach_moisture(moisture).unwrap();
        map
    }

    #[test]
    fn renders_one_line_per_row() {
        let map = generated_with_moisture();
        let text = render_biomes(&map).unwrap();
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn bands_view_needs_no_moisture() {
        let ranges = ThresholdTable::from_cuts(
            LookupPolicy::Descending,
            &StructuralCuts {
                water: -1.0,
                shallow_water: -0.3,
                sand: -0.1,
                land: 0.0,
                mountain: 0.4,
                huge_mountain: 0.5,
            },
        );
        let mut map = NoiseMap::new(6, 3, ranges).unwrap();
        map.generate(&NoiseFieldParams::default()).unwrap();

        let text = render_bands(&map).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert!(text.lines().all(|line| line.chars().count() == 6));
    }

    #[test]
    fn legend_names_every_biome() {
        let legend = legend();
        for biome in Biome::ALL {
            assert!(legend.contains(biome.name()), "missing {biome}");
        }
    }
}
