//! Chord model — degree definitions, randomized voicings, folded modes.
//!
//! A [`Chord`] is built fresh for each progression slot from a
//! [`ScaleDegreeDefinition`]. Voicings are semitone offsets above the chord
//! root (first entry always 0) handed to the playback layer.

pub mod catalog;
pub mod error;
pub mod voicing;

pub use catalog::{
    load_catalog, parse_catalog, roman_numeral, DegreeCatalog, ScaleDegreeDefinition,
    DEGREE_COUNT, MAJOR_SCALE_SEMITONES, MIN_INTERVALS,
};
pub use error::CatalogError;

use serde::Serialize;

use crate::random::RandomSource;

/// Below this many voices a voicing is the chord's first three intervals verbatim.
pub const MIN_VOICES: usize = 3;

/// Probability that a chained voicing is pulled toward the previous one.
pub const DEFAULT_VOICE_LEADING_CHANCE: f64 = 0.3;

/// A playable chord on one scale degree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chord {
    degree: u8,
    semitone_distance: i32,
    intervals: Vec<i32>,
    next_chord_idxs: Vec<u8>,
}

impl Chord {
    /// Build a chord owning its own copy of the definition's data.
    pub fn from_definition(def: &ScaleDegreeDefinition) -> Self {
        Self {
            degree: def.degree(),
            semitone_distance: def.semitone_distance(),
            intervals: def.intervals().to_vec(),
            next_chord_idxs: def.next_chord_idxs().to_vec(),
        }
    }

    pub fn degree(&self) -> u8 {
        self.degree
    }

    /// Offset of the chord root from the scale tonic.
    pub fn semitone_distance(&self) -> i32 {
        self.semitone_distance
    }

    pub fn intervals(&self) -> &[i32] {
        &self.intervals
    }

    pub fn next_chord_idxs(&self) -> &[u8] {
        &self.next_chord_idxs
    }

    pub fn roman_numeral(&self) -> &'static str {
        roman_numeral(self.degree)
    }

    /// Generate a voicing of `size` voices, optionally chained to `previous`.
    ///
    /// See [`Chord::generate_voicing_with`]; voice leading fires with
    /// [`DEFAULT_VOICE_LEADING_CHANCE`].
    pub fn generate_voicing(
        &self,
        size: usize,
        previous: Option<&[i32]>,
        rng: &mut impl RandomSource,
    ) -> Vec<i32> {
        self.generate_voicing_with(size, previous, DEFAULT_VOICE_LEADING_CHANCE, rng)
    }

    /// Generate a voicing with an explicit voice-leading probability.
    ///
    /// - `size < 3`: the first three intervals, untouched and without drawing.
    /// - otherwise: `size - 1` upper tones in a uniformly random order, each
    ///   raised by octaves until the stack ascends, with the root (0) prepended.
    /// - when `previous` has exactly `size` voices, one draw decides whether
    ///   [`voicing::lead_voices`] pulls large leaps back toward it.
    pub fn generate_voicing_with(
        &self,
        size: usize,
        previous: Option<&[i32]>,
        voice_leading_chance: f64,
        rng: &mut impl RandomSource,
    ) -> Vec<i32> {
        if size < MIN_VOICES {
            return self.intervals[..MIN_VOICES].to_vec();
        }

        let mut upper = voicing::upper_tones(&self.intervals, size - 1);
        rng.shuffle(&mut upper);
        voicing::stack_above(0, &mut upper);

        let mut voiced = Vec::with_capacity(size);
        voiced.push(0);
        voiced.extend(upper);

        match previous {
            Some(prev) if prev.len() == voiced.len() && rng.chance(voice_leading_chance) => {
                voicing::lead_voices(&voiced, prev)
            }
            _ => voiced,
        }
    }

    /// Fold every interval of an octave or more down by one octave.
    pub fn generate_mode(&self) -> Vec<i32> {
        self.intervals
            .iter()
            .map(|&n| if n >= voicing::OCTAVE { n - voicing::OCTAVE } else { n })
            .collect()
    }
}
