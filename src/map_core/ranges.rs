use serde::{Deserialize, Serialize};

use crate::map_core::error::MapError;

/// The band names the classifier depends on. Every table must carry all
/// six; absence is a configuration error at construction time.
pub const STRUCTURAL_NAMES: [&str; 6] = [
    "water",
    "shallowwater",
    "sand",
    "land",
    "mountain",
    "hugemountain",
];

/// One named elevation cut point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdEntry {
    pub name: String,
    pub threshold: f64,
}

impl ThresholdEntry {
    pub fn new(name: impl Into<String>, threshold: f64) -> Self {
        Self {
            name: name.into(),
            threshold,
        }
    }
}

/// Which way `band_for` scans the table. The two policies are not
/// interchangeable: an entry's threshold is the band's floor under
/// `Descending` and its ceiling under `Ascending`, so a table must be
/// constructed in the order its policy expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupPolicy {
    /// Entries ordered highest threshold first; a band matches when the
    /// elevation is at or above its threshold. Falls back to the last
    /// (lowest) entry.
    Descending,
    /// Entries ordered lowest threshold first; a band matches when its
    /// threshold is at or above the elevation. Falls back to the last
    /// (highest) entry.
    Ascending,
}

/// The six structural cut points, resolved once so the classifier never
/// has to search the table by name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StructuralCuts {
    pub water: f64,
    pub shallow_water: f64,
    pub sand: f64,
    pub land: f64,
    pub mountain: f64,
    pub huge_mountain: f64,
}

/// An ordered list of named elevation bands.
///
/// Order is semantically significant: `band_for` is a first-match scan,
/// not a sorted lookup, so entries must be constructed in the order the
/// table's policy expects. `from_cuts` does this for you.
#[derive(Debug, Clone)]
pub struct ThresholdTable {
    entries: Vec<ThresholdEntry>,
    policy: LookupPolicy,
    cuts: StructuralCuts,
}

impl ThresholdTable {
    /// Builds a table from pre-ordered entries, validating that all six
    /// structural names are present exactly once.
    pub fn new(entries: Vec<ThresholdEntry>, policy: LookupPolicy) -> Result<Self, MapError> {
        let find = |name: &str| -> Result<f64, MapError> {
            let mut matches = entries.iter().filter(|e| e.name == name);
            let threshold = matches
                .next()
                .ok_or_else(|| {
                    MapError::Config(format!("threshold table is missing the '{name}' entry"))
                })?
                .threshold;
            if matches.next().is_some() {
                return Err(MapError::Config(format!(
                    "threshold table has duplicate '{name}' entries"
                )));
            }
            Ok(threshold)
        };

        let cuts = StructuralCuts {
            water: find("water")?,
            shallow_water: find("shallowwater")?,
            sand: find("sand")?,
            land: find("land")?,
            mountain: find("mountain")?,
            huge_mountain: find("hugemountain")?,
        };

        Ok(Self {
            entries,
            policy,
            cuts,
        })
    }

    /// Builds the six structural bands ordered to match the policy.
    pub fn from_cuts(policy: LookupPolicy, cuts: &StructuralCuts) -> Self {
        let mut entries = vec![
            ThresholdEntry::new("water", cuts.water),
            ThresholdEntry::new("shallowwater", cuts.shallow_water),
            ThresholdEntry::new("sand", cuts.sand),
            ThresholdEntry::new("land", cuts.land),
            ThresholdEntry::new("mountain", cuts.mountain),
            ThresholdEntry::new("hugemountain", cuts.huge_mountain),
        ];
        if policy == LookupPolicy::Descending {
            entries.reverse();
        }
        Self {
            entries,
            policy,
            cuts: *cuts,
        }
    }

    /// Resolves the band an elevation falls in. Total over all reals:
    /// values outside every band land on the table's fallback entry.
    pub fn band_for(&self, elevation: f64) -> &ThresholdEntry {
        let matched = match self.policy {
            LookupPolicy::Descending => {
                self.entries.iter().find(|e| elevation >= e.threshold)
            }
            LookupPolicy::Ascending => {
                self.entries.iter().find(|e| e.threshold >= elevation)
            }
        };
        // `new` rejects empty tables (the structural names are required),
        // so a fallback entry always exists.
        matched.unwrap_or_else(|| &self.entries[self.entries.len() - 1])
    }

    pub fn structural(&self) -> &StructuralCuts {
        &self.cuts
    }

    pub fn entries(&self) -> &[ThresholdEntry] {
        &self.entries
    }

    pub fn policy(&self) -> LookupPolicy {
        self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cuts() -> StructuralCuts {
        StructuralCuts {
            water: -1.0,
            shallow_water: -0.3,
            sand: -0.1,
            land: 0.0,
            mountain: 0.4,
            huge_mountain: 0.5,
        }
    }

    #[test]
    fn descending_lookup_matches_band_floor() {
        let table = ThresholdTable::from_cuts(LookupPolicy::Descending, &cuts());

        assert_eq!(table.band_for(0.7).name, "hugemountain");
        assert_eq!(table.band_for(0.45).name, "mountain");
        assert_eq!(table.band_for(0.0).name, "land");
        assert_eq!(table.band_for(-0.05).name, "sand");
        assert_eq!(table.band_for(-0.2).name, "shallowwater");
        assert_eq!(table.band_for(-0.5).name, "water");
    }

    #[test]
    fn descending_falls_back_below_the_lowest_threshold() {
        let table = ThresholdTable::from_cuts(LookupPolicy::Descending, &cuts());
        assert_eq!(table.band_for(-5.0).name, "water");
    }

    #[test]
    fn ascending_lookup_matches_band_ceiling() {
        let table = ThresholdTable::from_cuts(LookupPolicy::Ascending, &cuts());

        assert_eq!(table.band_for(-2.0).name, "water");
        assert_eq!(table.band_for(-0.5).name, "shallowwater");
        assert_eq!(table.band_for(-0.2).name, "sand");
        assert_eq!(table.band_for(-0.05).name, "land");
        assert_eq!(table.band_for(0.2).name, "mountain");
        assert_eq!(table.band_for(0.45).name, "hugemountain");
    }

    #[test]
    fn ascending_falls_back_above_the_highest_threshold() {
        let table = ThresholdTable::from_cuts(LookupPolicy::Ascending, &cuts());
        assert_eq!(table.band_for(3.0).name, "hugemountain");
    }

    #[test]
    fn every_real_maps_to_exactly_one_band() {
        let table = ThresholdTable::from_cuts(LookupPolicy::Descending, &cuts());
        let mut probe = -2.0;
        while probe < 2.0 {
            // band_for is total; this must never panic
            let _ = table.band_for(probe);
            probe += 0.01;
        }
    }

    #[test]
    fn rejects_missing_structural_name() {
        let entries = vec![
            ThresholdEntry::new("hugemountain", 0.5),
            ThresholdEntry::new("mountain", 0.4),
            ThresholdEntry::new("land", 0.0),
            ThresholdEntry::new("sand", -0.1),
            ThresholdEntry::new("water", -1.0),
        ];
        let err = ThresholdTable::new(entries, LookupPolicy::Descending).unwrap_err();
        match err {
            MapError::Config(msg) => assert!(msg.contains("shallowwater")),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_duplicate_structural_name() {
        let mut entries: Vec<_> = STRUCTURAL_NAMES
            .iter()
            .map(|name| ThresholdEntry::new(*name, 0.0))
            .collect();
        entries.push(ThresholdEntry::new("water", -1.0));
        let err = ThresholdTable::new(entries, LookupPolicy::Ascending).unwrap_err();
        assert!(matches!(err, MapError::Config(_)));
    }

    #[test]
    fn from_cuts_orders_entries_per_policy() {
        let descending = ThresholdTable::from_cuts(LookupPolicy::Descending, &cuts());
        assert_eq!(descending.entries()[0].name, "hugemountain");
        assert_eq!(descending.entries()[5].name, "water");

        let ascending = ThresholdTable::from_cuts(LookupPolicy::Ascending, &cuts());
        assert_eq!(ascending.entries()[0].name, "water");
        assert_eq!(ascending.entries()[5].name, "hugemountain");
    }
}
