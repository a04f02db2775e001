//! Chord progressions — pattern degrees materialized as [`Chord`]s.
//!
//! [`ChordProgressionBuilder`] asks the [`PatternLibrary`] for exactly the
//! requested number of degrees and resolves each one in a [`DegreeCatalog`].
//! The resulting [`Progression`] is handed to a playback layer, which voices
//! each chord in turn via [`Progression::playback_steps`].

use std::ops::Index;

use serde::Serialize;

use crate::chord::{Chord, DegreeCatalog, DEFAULT_VOICE_LEADING_CHANCE};
use crate::pattern::{pattern_description, PatternLibrary, ScaleType};
use crate::random::RandomSource;

/// Fewer chords than this do not form a progression.
pub const MIN_PROGRESSION_LENGTH: usize = 2;

/// An ordered sequence of chords, one per slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Progression {
    scale: ScaleType,
    chords: Vec<Chord>,
}

impl Progression {
    pub fn chords(&self) -> &[Chord] {
        &self.chords
    }

    pub fn scale(&self) -> &ScaleType {
        &self.scale
    }

    pub fn len(&self) -> usize {
        self.chords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Chord> {
        self.chords.iter()
    }

    /// Scale degree of each chord.
    pub fn degrees(&self) -> Vec<u8> {
        self.chords.iter().map(Chord::degree).collect()
    }

    /// Roman-numeral summary, e.g. `I-V-vi-IV`.
    pub fn description(&self) -> String {
        pattern_description(&self.degrees(), &self.scale)
    }

    /// Voice every chord in order, chaining each voicing to the previous one.
    pub fn voicings(&self, voices: usize, rng: &mut impl RandomSource) -> Vec<Vec<i32>> {
        self.voicings_with(voices, DEFAULT_VOICE_LEADING_CHANCE, rng)
    }

    /// [`Progression::voicings`] with an explicit voice-leading probability.
    pub fn voicings_with(
        &self,
        voices: usize,
        voice_leading_chance: f64,
        rng: &mut impl RandomSource,
    ) -> Vec<Vec<i32>> {
        let mut voicings: Vec<Vec<i32>> = Vec::with_capacity(self.chords.len());
        for chord in &self.chords {
            let previous = voicings.last().map(Vec::as_slice);
            let voicing =
                chord.generate_voicing_with(voices, previous, voice_leading_chance, rng);
            voicings.push(voicing);
        }
        voicings
    }

    /// Chained voicings packaged for the playback layer.
    pub fn playback_steps(
        &self,
        voices: usize,
        voice_leading_chance: f64,
        rng: &mut impl RandomSource,
    ) -> Vec<PlaybackStep> {
        self.voicings_with(voices, voice_leading_chance, rng)
            .into_iter()
            .zip(&self.chords)
            .map(|(voicing, chord)| PlaybackStep {
                degree: chord.degree(),
                numeral: chord.roman_numeral(),
                root: chord.semitone_distance(),
                voicing,
            })
            .collect()
    }
}

impl Index<usize> for Progression {
    type Output = Chord;

    fn index(&self, index: usize) -> &Chord {
        &self.chords[index]
    }
}

impl<'a> IntoIterator for &'a Progression {
    type Item = &'a Chord;
    type IntoIter = std::slice::Iter<'a, Chord>;

    fn into_iter(self) -> Self::IntoIter {
        self.chords.iter()
    }
}

/// One voiced chord as the playback layer consumes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaybackStep {
    pub degree: u8,
    pub numeral: &'static str,
    /// Chord root in semitones above the tonic.
    pub root: i32,
    /// Semitone offsets above the chord root, ascending from 0.
    pub voicing: Vec<i32>,
}

impl PlaybackStep {
    /// Offsets above the tonic: the voicing shifted by the chord root.
    pub fn absolute_offsets(&self) -> Vec<i32> {
        self.voicing.iter().map(|n| n + self.root).collect()
    }
}

/// Builds progressions from a pattern library and a degree catalog.
#[derive(Debug, Clone, Default)]
pub struct ChordProgressionBuilder {
    library: PatternLibrary,
    catalog: DegreeCatalog,
}

impl ChordProgressionBuilder {
    pub fn new(library: PatternLibrary, catalog: DegreeCatalog) -> Self {
        Self { library, catalog }
    }

    /// Swap in a custom chord vocabulary.
    pub fn with_catalog(mut self, catalog: DegreeCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn catalog(&self) -> &DegreeCatalog {
        &self.catalog
    }

    pub fn library(&self) -> &PatternLibrary {
        &self.library
    }

    /// Generate `length` chords in `scale`.
    ///
    /// Returns `None` when `length` is below [`MIN_PROGRESSION_LENGTH`].
    pub fn generate(
        &self,
        length: usize,
        scale: &ScaleType,
        rng: &mut impl RandomSource,
    ) -> Option<Progression> {
        build(&self.library, &self.catalog, length, scale, rng)
    }
}

/// Generate a progression with the default pattern library.
///
/// `custom_chords` replaces the built-in major catalog when given. Returns
/// `None` when `length` is below [`MIN_PROGRESSION_LENGTH`].
pub fn generate_progression(
    length: usize,
    scale: &ScaleType,
    custom_chords: Option<&DegreeCatalog>,
    rng: &mut impl RandomSource,
) -> Option<Progression> {
    let catalog = custom_chords.unwrap_or_else(|| DegreeCatalog::major());
    build(&PatternLibrary::default(), catalog, length, scale, rng)
}

fn build(
    library: &PatternLibrary,
    catalog: &DegreeCatalog,
    length: usize,
    scale: &ScaleType,
    rng: &mut impl RandomSource,
) -> Option<Progression> {
    if length < MIN_PROGRESSION_LENGTH {
        log::debug!("{length} chords do not form a progression");
        return None;
    }

    let chords = library
        .generate(scale, length, rng)
        .into_iter()
        .map(|degree| Chord::from_definition(catalog.get(degree)))
        .collect();

    Some(Progression {
        scale: scale.clone(),
        chords,
    })
}
