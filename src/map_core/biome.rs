use std::fmt;

use crate::map_core::ranges::ThresholdTable;

/// The closed set of terrain categories a cell can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Biome {
    Ocean,
    Shallows,
    Beach,
    Swamp,
    Scorched,
    Bare,
    Tundra,
    Snow,
    TemperateDesert,
    Shrubland,
    Taiga,
    SubtropicalDesert,
    Grassland,
    TemperateDeciduousForest,
    TemperateRainForest,
    TropicalSeasonalForest,
    TropicalRainForest,
}

impl Biome {
    pub const ALL: [Biome; 17] = [
        Biome::Ocean,
        Biome::Shallows,
        Biome::Beach,
        Biome::Swamp,
        Biome::Scorched,
        Biome::Bare,
        Biome::Tundra,
        Biome::Snow,
        Biome::TemperateDesert,
        Biome::Shrubland,
        Biome::Taiga,
        Biome::SubtropicalDesert,
        Biome::Grassland,
        Biome::TemperateDeciduousForest,
        Biome::TemperateRainForest,
        Biome::TropicalSeasonalForest,
        Biome::TropicalRainForest,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Biome::Ocean => "ocean",
            Biome::Shallows => "shallows",
            Biome::Beach => "beach",
            Biome::Swamp => "swamp",
            Biome::Scorched => "scorched",
            Biome::Bare => "bare",
            Biome::Tundra => "tundra",
            Biome::Snow => "snow",
            Biome::TemperateDesert => "temperate desert",
            Biome::Shrubland => "shrubland",
            Biome::Taiga => "taiga",
            Biome::SubtropicalDesert => "subtropical desert",
            Biome::Grassland => "grassland",
            Biome::TemperateDeciduousForest => "temperate deciduous forest",
            Biome::TemperateRainForest => "temperate rain forest",
            Biome::TropicalSeasonalForest => "tropical seasonal forest",
            Biome::TropicalRainForest => "tropical rain forest",
        }
    }
}

impl fmt::Display for Biome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolves a cell's biome from its elevation and moisture.
///
/// The guards run top to bottom and the first match wins. Swamp is
/// checked before the shallows and beach bands on purpose: it is a
/// moisture-conditioned override of what would otherwise be an
/// elevation-only band.
///
/// Moisture is expected in [0, 1]; values outside that are the caller's
/// contract violation and are not validated here.
pub fn classify(elevation: f64, moisture: f64, ranges: &ThresholdTable) -> Biome {
    let cuts = ranges.structural();

    if elevation <= cuts.water {
        return Biome::Ocean;
    }
    if elevation <= cuts.sand && moisture >= 0.2 {
        return Biome::Swamp;
    }
    if elevation <= cuts.shallow_water {
        return Biome::Shallows;
    }
    if elevation <= cuts.sand {
        return Biome::Beach;
    }

    if elevation > cuts.huge_mountain {
        if moisture < 0.1 {
            return Biome::Scorched;
        }
        if moisture < 0.2 {
            return Biome::Bare;
        }
        if moisture < 0.5 {
            return Biome::Tundra;
        }
        return Biome::Snow;
    }

    if elevation > cuts.mountain {
        if moisture < 0.33 {
            return Biome::TemperateDesert;
        }
        if moisture < 0.66 {
            return Biome::Shrubland;
        }
        return Biome::Taiga;
    }

    if moisture < 0.16 {
        return Biome::SubtropicalDesert;
    }
    if moisture < 0.33 {
        return Biome::Grassland;
    }
    if moisture < 0.66 {
        return Biome::TropicalSeasonalForest;
    }
    Biome::TropicalRainForest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map_core::ranges::{LookupPolicy, StructuralCuts, ThresholdTable};

    fn table() -> ThresholdTable {
        ThresholdTable::from_cuts(
            LookupPolicy::Descending,
            &StructuralCuts {
                water: 0.0,
                shallow_water: 0.05,
                sand: 0.1,
                land: 0.15,
                mountain: 0.5,
                huge_mountain: 0.6,
            },
        )
    }

    #[test]
    fn swamp_overrides_beach_and_shallows() {
        // elevation sits in the shallows/beach band, but the moisture
        // override fires first
        assert_eq!(classify(0.08, 0.25, &table()), Biome::Swamp);
        assert_eq!(classify(0.03, 0.2, &table()), Biome::Swamp);
    }

    #[test]
    fn dry_low_elevations_stay_shallows_and_beach() {
        assert_eq!(classify(0.03, 0.1, &table()), Biome::Shallows);
        assert_eq!(classify(0.08, 0.1, &table()), Biome::Beach);
    }

    #[test]
    fn below_water_threshold_is_always_ocean() {
        // ocean wins even at swamp-level moisture
        assert_eq!(classify(-0.5, 0.9, &table()), Biome::Ocean);
        assert_eq!(classify(0.0, 0.0, &table()), Biome::Ocean);
    }

    #[test]
    fn high_peaks_split_on_moisture() {
        assert_eq!(classify(0.65, 0.05, &table()), Biome::Scorched);
        assert_eq!(classify(0.65, 0.15, &table()), Biome::Bare);
        assert_eq!(classify(0.65, 0.4, &table()), Biome::Tundra);
        assert_eq!(classify(0.65, 0.8, &table()), Biome::Snow);
    }

    #[test]
    fn mountains_split_on_moisture() {
        assert_eq!(classify(0.55, 0.05, &table()), Biome::TemperateDesert);
        assert_eq!(classify(0.55, 0.5, &table()), Biome::Shrubland);
        assert_eq!(classify(0.55, 0.7, &table()), Biome::Taiga);
    }

    #[test]
    fn general_land_band_splits_on_moisture() {
        assert_eq!(classify(0.3, 0.1, &table()), Biome::SubtropicalDesert);
        assert_eq!(classify(0.3, 0.2, &table()), Biome::Grassland);
        assert_eq!(classify(0.3, 0.5, &table()), Biome::TropicalSeasonalForest);
        assert_eq!(classify(0.3, 0.7, &table()), Biome::TropicalRainForest);
    }

    #[test]
    fn mountain_cut_is_exclusive_at_the_boundary() {
        // exactly at the mountain threshold the cell is still general land
        assert_eq!(classify(0.5, 0.05, &table()), Biome::SubtropicalDesert);
        // exactly at the huge mountain threshold it is still mountain
        assert_eq!(classify(0.6, 0.05, &table()), Biome::TemperateDesert);
    }
}
