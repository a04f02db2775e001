//! Progression patterns — authored cadences, variation, and resizing.
//!
//! Every generated progression derives from one of the authored degree
//! sequences, so each loop keeps a plausible cadence shape. The
//! [`PatternLibrary`] picks one uniformly, runs it through the
//! [`VariationEngine`], then tiles or truncates it to the requested length.

pub mod pentatonic;
pub mod scale;
pub mod tables;
pub mod variation;

pub use scale::ScaleType;
pub use tables::{DegreePair, PassingChordTable, SubstitutionTable};
pub use variation::{VariationEngine, VariationProbabilities};

use crate::chord::roman_numeral;
use crate::random::RandomSource;

/// Authored major-scale cadences (degrees 1–7).
pub static MAJOR_PATTERNS: [&[u8]; 14] = [
    // Pop/lofi loops
    &[1, 5, 6, 4], // I-V-vi-IV
    &[1, 6, 4, 5], // I-vi-IV-V
    &[1, 4, 5, 1], // I-IV-V-I
    &[2, 5, 1, 6], // ii-V-I-vi
    &[6, 4, 1, 5], // vi-IV-I-V
    &[1, 4, 1, 5], // I-IV-I-V
    // Eight-chord loops pairing contrasting halves
    &[1, 4, 5, 1, 2, 5, 1, 6],
    &[1, 2, 4, 1, 5, 6, 4, 5],
    &[1, 6, 2, 5, 1, 6, 4, 5],
    &[1, 5, 6, 4, 2, 5, 1, 6],
    &[1, 6, 4, 5, 2, 5, 1, 6],
    &[6, 4, 1, 5, 1, 4, 5, 1],
    // Exact repeats
    &[1, 5, 6, 4, 1, 5, 6, 4],
    &[2, 5, 1, 6, 2, 5, 1, 6],
];

/// The authored major catalog.
pub fn major_patterns() -> &'static [&'static [u8]] {
    &MAJOR_PATTERNS
}

/// The catalog used for `scale`. Only major is authored; every other scale
/// type reads it too.
pub fn patterns_for(scale: &ScaleType) -> &'static [&'static [u8]] {
    match scale {
        ScaleType::Major | ScaleType::MajorPentatonic => major_patterns(),
        ScaleType::Other(name) => {
            log::debug!("no pattern catalog for scale {name:?}, using major");
            major_patterns()
        }
    }
}

/// Truncate `pattern` to `length`, or repeat it verbatim end-to-end until it
/// reaches `length` and then truncate.
pub fn resize(pattern: &[u8], length: usize) -> Vec<u8> {
    pattern.iter().copied().cycle().take(length).collect()
}

/// Roman numerals joined by `-`, e.g. `I-V-vi-IV`.
pub fn pattern_description(pattern: &[u8], _scale: &ScaleType) -> String {
    pattern
        .iter()
        .map(|&degree| roman_numeral(degree))
        .collect::<Vec<_>>()
        .join("-")
}

/// Selects, varies, and sizes degree patterns.
#[derive(Debug, Clone, Default)]
pub struct PatternLibrary {
    engine: VariationEngine,
}

impl PatternLibrary {
    pub fn new(engine: VariationEngine) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &VariationEngine {
        &self.engine
    }

    /// Pick one authored pattern for `scale` uniformly at random.
    pub fn select(&self, scale: &ScaleType, rng: &mut impl RandomSource) -> &'static [u8] {
        let patterns = patterns_for(scale);
        patterns[rng.range_usize(0, patterns.len())]
    }

    /// Produce exactly `length` degrees: select, vary, then resize.
    pub fn generate(
        &self,
        scale: &ScaleType,
        length: usize,
        rng: &mut impl RandomSource,
    ) -> Vec<u8> {
        let pattern = self.select(scale, rng);
        let varied = self.engine.add_variation(pattern, scale, rng);
        log::debug!(
            "pattern {} varied to {}",
            pattern_description(pattern, scale),
            pattern_description(&varied, scale)
        );
        resize(&varied, length)
    }
}
