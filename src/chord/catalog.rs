//! Scale-degree catalog — degree 1–7 → root offset, chord intervals, successors.

use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use super::error::CatalogError;

/// Number of diatonic degrees in a catalog.
pub const DEGREE_COUNT: usize = 7;

/// Semitone offset of each major-scale degree from the tonic.
pub const MAJOR_SCALE_SEMITONES: [i32; DEGREE_COUNT] = [0, 2, 4, 5, 7, 9, 11];

/// Roman-numeral label of each major-scale degree.
pub const ROMAN_NUMERALS: [&str; DEGREE_COUNT] = ["I", "ii", "iii", "IV", "V", "vi", "vii°"];

/// Minimum number of intervals a chord definition must carry.
pub const MIN_INTERVALS: usize = 3;

/// Intervals must stay within two octaves of the chord root.
const MAX_INTERVAL: i32 = 24;

/// Roman-numeral label for a degree (1–7).
///
/// Panics on a degree outside 1–7.
pub fn roman_numeral(degree: u8) -> &'static str {
    ROMAN_NUMERALS[degree_index(degree)]
}

fn degree_index(degree: u8) -> usize {
    assert!(
        (1..=DEGREE_COUNT as u8).contains(&degree),
        "degree {degree} is outside 1-7"
    );
    degree as usize - 1
}

/// Immutable definition of the chord built on one scale degree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDefinition")]
pub struct ScaleDegreeDefinition {
    degree: u8,
    semitone_distance: i32,
    intervals: Vec<i32>,
    next_chord_idxs: Vec<u8>,
}

impl ScaleDegreeDefinition {
    /// Define the chord on `degree`, taking its root offset from the major scale.
    pub fn new(
        degree: u8,
        intervals: Vec<i32>,
        next_chord_idxs: Vec<u8>,
    ) -> Result<Self, CatalogError> {
        if !(1..=DEGREE_COUNT as u8).contains(&degree) {
            return Err(CatalogError::InvalidDegree(degree));
        }
        if intervals.len() < MIN_INTERVALS {
            return Err(CatalogError::TooFewIntervals {
                degree,
                count: intervals.len(),
            });
        }
        if let Some(&interval) = intervals.iter().find(|i| !(0..MAX_INTERVAL).contains(*i)) {
            return Err(CatalogError::IntervalOutOfRange { degree, interval });
        }
        Ok(Self {
            degree,
            semitone_distance: MAJOR_SCALE_SEMITONES[degree as usize - 1],
            intervals,
            next_chord_idxs,
        })
    }

    /// Override the root offset (for catalogs built on another scale).
    pub fn with_semitone_distance(mut self, semitone_distance: i32) -> Self {
        self.semitone_distance = semitone_distance;
        self
    }

    pub fn degree(&self) -> u8 {
        self.degree
    }

    pub fn semitone_distance(&self) -> i32 {
        self.semitone_distance
    }

    pub fn intervals(&self) -> &[i32] {
        &self.intervals
    }

    /// Plausible successor degrees. Carried for callers; the pattern engine
    /// does not read it.
    pub fn next_chord_idxs(&self) -> &[u8] {
        &self.next_chord_idxs
    }
}

/// On-disk shape of a definition; `semitone_distance` may be omitted.
#[derive(Deserialize)]
struct RawDefinition {
    degree: u8,
    #[serde(default)]
    semitone_distance: Option<i32>,
    intervals: Vec<i32>,
    #[serde(default)]
    next_chord_idxs: Vec<u8>,
}

impl TryFrom<RawDefinition> for ScaleDegreeDefinition {
    type Error = CatalogError;

    fn try_from(raw: RawDefinition) -> Result<Self, Self::Error> {
        let def = Self::new(raw.degree, raw.intervals, raw.next_chord_idxs)?;
        Ok(match raw.semitone_distance {
            Some(distance) => def.with_semitone_distance(distance),
            None => def,
        })
    }
}

/// The seven chord definitions a progression draws from, indexed by degree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DegreeCatalog {
    entries: Vec<ScaleDegreeDefinition>,
}

impl DegreeCatalog {
    /// Build a catalog from exactly seven definitions ordered by degree.
    pub fn new(entries: Vec<ScaleDegreeDefinition>) -> Result<Self, CatalogError> {
        if entries.len() != DEGREE_COUNT {
            return Err(CatalogError::WrongEntryCount(entries.len()));
        }
        for (index, def) in entries.iter().enumerate() {
            if def.degree as usize != index + 1 {
                return Err(CatalogError::OutOfOrder {
                    index,
                    degree: def.degree,
                });
            }
        }
        Ok(Self { entries })
    }

    /// The built-in lofi major catalog (maj9, m9, m7(11), maj9, 9, m9, ø11).
    pub fn major() -> &'static DegreeCatalog {
        static MAJOR: OnceLock<DegreeCatalog> = OnceLock::new();
        MAJOR.get_or_init(|| DegreeCatalog {
            entries: vec![
                authored(1, &[0, 4, 7, 11, 14], &[2, 3, 4, 5, 6]),
                authored(2, &[0, 3, 7, 10, 14], &[5, 7]),
                authored(3, &[0, 3, 7, 10, 17], &[4, 6]),
                authored(4, &[0, 4, 7, 11, 14], &[1, 2, 5]),
                authored(5, &[0, 4, 7, 10, 14], &[1, 6]),
                authored(6, &[0, 3, 7, 10, 14], &[2, 4, 5]),
                authored(7, &[0, 3, 6, 10, 17], &[1, 3]),
            ],
        })
    }

    /// Look up the definition for a degree (1–7).
    ///
    /// Panics on a degree outside 1–7; patterns only ever hold valid degrees.
    pub fn get(&self, degree: u8) -> &ScaleDegreeDefinition {
        &self.entries[degree_index(degree)]
    }

    pub fn entries(&self) -> &[ScaleDegreeDefinition] {
        &self.entries
    }
}

impl Default for DegreeCatalog {
    fn default() -> Self {
        Self::major().clone()
    }
}

fn authored(degree: u8, intervals: &[i32], next: &[u8]) -> ScaleDegreeDefinition {
    ScaleDegreeDefinition {
        degree,
        semitone_distance: MAJOR_SCALE_SEMITONES[degree as usize - 1],
        intervals: intervals.to_vec(),
        next_chord_idxs: next.to_vec(),
    }
}

/// Parse a catalog from a YAML list of definitions.
pub fn parse_catalog(yaml: &str) -> Result<DegreeCatalog, CatalogError> {
    let entries: Vec<ScaleDegreeDefinition> = serde_yaml::from_str(yaml)?;
    DegreeCatalog::new(entries)
}

/// Load a catalog from a YAML file.
pub fn load_catalog(path: &Path) -> Result<DegreeCatalog, CatalogError> {
    let content = std::fs::read_to_string(path)?;
    parse_catalog(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn major_catalog_has_seven_ordered_degrees() {
        let catalog = DegreeCatalog::major();
        assert_eq!(catalog.entries().len(), DEGREE_COUNT);
        for (i, def) in catalog.entries().iter().enumerate() {
            assert_eq!(def.degree() as usize, i + 1);
            assert_eq!(def.semitone_distance(), MAJOR_SCALE_SEMITONES[i]);
            assert!(def.intervals().len() >= MIN_INTERVALS);
        }
    }

    #[test]
    fn authored_catalog_passes_validation() {
        let entries = DegreeCatalog::major().entries().to_vec();
        assert!(DegreeCatalog::new(entries).is_ok());
    }

    #[test]
    fn lookup_is_total_over_valid_degrees() {
        let catalog = DegreeCatalog::major();
        for degree in 1..=7 {
            assert_eq!(catalog.get(degree).degree(), degree);
        }
    }

    #[test]
    #[should_panic]
    fn lookup_out_of_range_panics() {
        DegreeCatalog::major().get(8);
    }

    #[test]
    fn roman_numerals() {
        assert_eq!(roman_numeral(1), "I");
        assert_eq!(roman_numeral(6), "vi");
        assert_eq!(roman_numeral(7), "vii°");
    }

    #[test]
    fn rejects_bad_degree() {
        assert!(matches!(
            ScaleDegreeDefinition::new(0, vec![0, 4, 7], vec![]),
            Err(CatalogError::InvalidDegree(0))
        ));
        assert!(matches!(
            ScaleDegreeDefinition::new(8, vec![0, 4, 7], vec![]),
            Err(CatalogError::InvalidDegree(8))
        ));
    }

    #[test]
    fn rejects_short_interval_list() {
        assert!(matches!(
            ScaleDegreeDefinition::new(1, vec![0, 4], vec![]),
            Err(CatalogError::TooFewIntervals { degree: 1, count: 2 })
        ));
    }

    #[test]
    fn rejects_interval_beyond_two_octaves() {
        assert!(matches!(
            ScaleDegreeDefinition::new(1, vec![0, 4, 26], vec![]),
            Err(CatalogError::IntervalOutOfRange { interval: 26, .. })
        ));
    }

    #[test]
    fn rejects_wrong_count_and_order() {
        let mut entries = DegreeCatalog::major().entries().to_vec();
        entries.pop();
        assert!(matches!(
            DegreeCatalog::new(entries.clone()),
            Err(CatalogError::WrongEntryCount(6))
        ));

        entries.push(ScaleDegreeDefinition::new(1, vec![0, 4, 7], vec![]).unwrap());
        assert!(matches!(
            DegreeCatalog::new(entries),
            Err(CatalogError::OutOfOrder { index: 6, degree: 1 })
        ));
    }

    #[test]
    fn parse_yaml_catalog_derives_root_offsets() {
        let yaml = r#"
- { degree: 1, intervals: [0, 4, 7] }
- { degree: 2, intervals: [0, 3, 7] }
- { degree: 3, intervals: [0, 3, 7] }
- { degree: 4, intervals: [0, 4, 7] }
- { degree: 5, intervals: [0, 4, 7, 10], next_chord_idxs: [1] }
- { degree: 6, intervals: [0, 3, 7] }
- { degree: 7, intervals: [0, 3, 6], semitone_distance: 10 }
"#;
        let catalog = parse_catalog(yaml).unwrap();
        assert_eq!(catalog.get(4).semitone_distance(), 5);
        assert_eq!(catalog.get(5).next_chord_idxs(), &[1]);
        assert_eq!(catalog.get(7).semitone_distance(), 10);
    }

    #[test]
    fn parse_yaml_catalog_surfaces_validation_errors() {
        let yaml = "- { degree: 9, intervals: [0, 4, 7] }\n";
        assert!(parse_catalog(yaml).is_err());
    }
}
