//! Pattern variation — substitution, passing-chord insertion, section reversal.
//!
//! Each step is an independent Bernoulli trial with its own structural guard.
//! Steps run in a fixed order on a copy of the input pattern.

use serde::{Deserialize, Serialize};

use super::scale::ScaleType;
use super::tables::{PassingChordTable, SubstitutionTable};
use crate::random::RandomSource;

/// Substitution needs more chords than this (endpoints are never touched).
pub const SUBSTITUTION_MIN_LEN: usize = 5;
/// Passing chords are only inserted into patterns shorter than this.
pub const PASSING_MAX_LEN: usize = 8;
/// Reversal needs at least this many chords.
pub const REVERSAL_MIN_LEN: usize = 6;

/// Firing probability of each variation step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariationProbabilities {
    pub substitution: f64,
    pub passing_chord: f64,
    pub reversal: f64,
}

impl Default for VariationProbabilities {
    fn default() -> Self {
        Self {
            substitution: 0.3,
            passing_chord: 0.2,
            reversal: 0.15,
        }
    }
}

impl VariationProbabilities {
    /// Probabilities that never fire.
    pub fn none() -> Self {
        Self {
            substitution: 0.0,
            passing_chord: 0.0,
            reversal: 0.0,
        }
    }
}

/// Applies controlled randomness to authored patterns.
#[derive(Debug, Clone, Default)]
pub struct VariationEngine {
    probabilities: VariationProbabilities,
}

impl VariationEngine {
    pub fn new(probabilities: VariationProbabilities) -> Self {
        Self { probabilities }
    }

    pub fn probabilities(&self) -> &VariationProbabilities {
        &self.probabilities
    }

    /// Return a varied copy of `pattern`.
    ///
    /// Every step draws its probability first, so each call consumes one draw
    /// per step before any index choices.
    pub fn add_variation(
        &self,
        pattern: &[u8],
        scale: &ScaleType,
        rng: &mut impl RandomSource,
    ) -> Vec<u8> {
        let mut varied = pattern.to_vec();

        if rng.chance(self.probabilities.substitution) && varied.len() >= SUBSTITUTION_MIN_LEN {
            substitute(&mut varied, scale, rng);
        }

        if rng.chance(self.probabilities.passing_chord)
            && varied.len() >= 2
            && varied.len() < PASSING_MAX_LEN
        {
            insert_passing_chord(&mut varied, scale, rng);
        }

        if rng.chance(self.probabilities.reversal) && varied.len() >= REVERSAL_MIN_LEN {
            reverse_section(&mut varied, rng);
        }

        varied
    }
}

/// Replace one inner chord with a context-appropriate alternative.
///
/// The index is drawn from `1..=len-2`; the choice is keyed on the chord and
/// its successor. Returns the index changed, if any. Requires `len >= 3`.
pub fn substitute(
    pattern: &mut [u8],
    scale: &ScaleType,
    rng: &mut impl RandomSource,
) -> Option<usize> {
    let index = rng.range_usize(1, pattern.len() - 1);
    let candidates =
        SubstitutionTable::for_scale(scale).candidates(pattern[index], pattern[index + 1]);
    if candidates.is_empty() {
        return None;
    }
    let replacement = candidates[rng.range_usize(0, candidates.len())];
    log::debug!("substitution at {index}: {} -> {replacement}", pattern[index]);
    pattern[index] = replacement;
    Some(index)
}

/// Insert a passing chord between one adjacent pair, if the pair has one.
///
/// Returns the insertion index, if any. Requires `len >= 2`.
pub fn insert_passing_chord(
    pattern: &mut Vec<u8>,
    scale: &ScaleType,
    rng: &mut impl RandomSource,
) -> Option<usize> {
    let index = rng.range_usize(1, pattern.len());
    let passing =
        PassingChordTable::for_scale(scale).between(pattern[index - 1], pattern[index])?;
    log::debug!(
        "passing chord {passing} between {} and {} at {index}",
        pattern[index - 1],
        pattern[index]
    );
    pattern.insert(index, passing);
    Some(index)
}

/// Reverse a run of 2–3 chords starting at position 2–4, clamped to the end.
///
/// Returns the reversed range. Requires `len >= 5`.
pub fn reverse_section(
    pattern: &mut [u8],
    rng: &mut impl RandomSource,
) -> std::ops::Range<usize> {
    let start = rng.range_usize(2, 5);
    let span = rng.range_usize(2, 4);
    let end = (start + span).min(pattern.len());
    log::debug!("reversing section {start}..{end}");
    pattern[start..end].reverse();
    start..end
}
