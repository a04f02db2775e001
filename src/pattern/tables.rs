//! Harmonic rule tables — context-aware substitutions and passing chords.
//!
//! Both tables are keyed by an ordered degree pair. Only the major tables are
//! authored; every scale type reads them.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::scale::ScaleType;

/// An ordered pair of scale degrees: (this chord, the chord after it).
pub type DegreePair = (u8, u8);

const MAJOR_SUBSTITUTIONS: &[(DegreePair, &[u8])] = &[
    ((1, 5), &[6]), // I-V → vi-V
    ((1, 6), &[4]), // I-vi → IV-vi
    ((2, 5), &[4]), // ii-V → IV-V
    ((2, 6), &[4]), // ii-vi → IV-vi
    ((3, 4), &[1]), // iii-IV → I-IV
    ((3, 6), &[1]), // iii-vi → I-vi
    ((4, 5), &[2]), // IV-V → ii-V
    ((4, 1), &[2]), // IV-I → ii-I
    ((5, 1), &[6]), // V-I → vi-I
    ((5, 6), &[1]), // V-vi → I-vi
    ((6, 4), &[2]), // vi-IV → ii-IV
    ((6, 2), &[4]), // vi-ii → IV-ii
    ((7, 1), &[5]), // vii°-I → V-I
    ((7, 3), &[1]), // vii°-iii → I-iii
];

const MAJOR_PASSING_CHORDS: &[(DegreePair, u8)] = &[
    ((1, 5), 2), // I → ii → V
    ((4, 1), 5), // IV → V → I
    ((5, 6), 1), // V → I → vi
    ((2, 5), 4), // ii → IV → V
    ((6, 4), 2), // vi → ii → IV
];

/// Alternatives that may replace a chord without breaking its move into the next.
#[derive(Debug, Clone)]
pub struct SubstitutionTable {
    entries: HashMap<DegreePair, &'static [u8]>,
}

impl SubstitutionTable {
    /// The table for `scale` (the major table for every scale type).
    pub fn for_scale(_scale: &ScaleType) -> &'static SubstitutionTable {
        static MAJOR: OnceLock<SubstitutionTable> = OnceLock::new();
        MAJOR.get_or_init(|| SubstitutionTable {
            entries: MAJOR_SUBSTITUTIONS.iter().copied().collect(),
        })
    }

    /// Candidates for `current` when followed by `next`; empty when none apply.
    pub fn candidates(&self, current: u8, next: u8) -> &'static [u8] {
        self.entries.get(&(current, next)).copied().unwrap_or(&[])
    }
}

/// A single passing chord that smooths the move between two degrees.
#[derive(Debug, Clone)]
pub struct PassingChordTable {
    entries: HashMap<DegreePair, u8>,
}

impl PassingChordTable {
    /// The table for `scale` (the major table for every scale type).
    pub fn for_scale(_scale: &ScaleType) -> &'static PassingChordTable {
        static MAJOR: OnceLock<PassingChordTable> = OnceLock::new();
        MAJOR.get_or_init(|| PassingChordTable {
            entries: MAJOR_PASSING_CHORDS.iter().copied().collect(),
        })
    }

    /// The passing chord from `from` to `to`, if one is authored.
    pub fn between(&self, from: u8, to: u8) -> Option<u8> {
        self.entries.get(&(from, to)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitution_lookup() {
        let table = SubstitutionTable::for_scale(&ScaleType::Major);
        assert_eq!(table.candidates(1, 5), &[6]);
        assert_eq!(table.candidates(4, 1), &[2]);
        assert!(table.candidates(1, 4).is_empty());
    }

    #[test]
    fn substitution_key_is_ordered() {
        let table = SubstitutionTable::for_scale(&ScaleType::Major);
        assert_eq!(table.candidates(5, 1), &[6]);
        assert_eq!(table.candidates(1, 5), &[6]);
        assert_eq!(table.candidates(6, 2), &[4]);
        assert!(table.candidates(2, 1).is_empty());
    }

    #[test]
    fn passing_chord_lookup() {
        let table = PassingChordTable::for_scale(&ScaleType::Major);
        assert_eq!(table.between(1, 5), Some(2));
        assert_eq!(table.between(6, 4), Some(2));
        assert_eq!(table.between(5, 1), None);
    }

    #[test]
    fn other_scales_fall_back_to_major() {
        let other = ScaleType::from("lydian");
        assert_eq!(SubstitutionTable::for_scale(&other).candidates(2, 5), &[4]);
        assert_eq!(PassingChordTable::for_scale(&other).between(4, 1), Some(5));
        let pentatonic = ScaleType::MajorPentatonic;
        assert_eq!(PassingChordTable::for_scale(&pentatonic).between(5, 6), Some(1));
    }

    #[test]
    fn tables_only_name_valid_degrees() {
        for ((a, b), subs) in MAJOR_SUBSTITUTIONS {
            assert!((1..=7).contains(a) && (1..=7).contains(b));
            assert!(subs.iter().all(|d| (1..=7).contains(d)));
        }
        for ((a, b), p) in MAJOR_PASSING_CHORDS {
            assert!((1..=7).contains(a) && (1..=7).contains(b) && (1..=7).contains(p));
        }
    }
}
