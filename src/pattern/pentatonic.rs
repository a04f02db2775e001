//! Major-pentatonic interval weights for melodic suggestions.
//!
//! Favors stepwise motion inside the pentatonic scale.

use crate::random::RandomSource;

/// Semitone offset of each weighted step: unison, 2nd, 3rd, 5th, 6th, then the
/// same steps above the octave (2nd, 3rd, 5th, 6th).
pub const PENTATONIC_STEPS: [i32; 9] = [0, 2, 4, 7, 9, 14, 16, 19, 21];

/// Relative weight of each entry in [`PENTATONIC_STEPS`].
pub const PENTATONIC_WEIGHTS: [f64; 9] = [0.15, 0.30, 0.25, 0.20, 0.10, 0.15, 0.10, 0.05, 0.05];

/// Draw one pentatonic interval (semitones above the tonic) by weight.
pub fn pick_interval(rng: &mut impl RandomSource) -> i32 {
    let total: f64 = PENTATONIC_WEIGHTS.iter().sum();
    let mut target = rng.next_f64() * total;
    for (step, weight) in PENTATONIC_STEPS.iter().zip(PENTATONIC_WEIGHTS) {
        if target < weight {
            return *step;
        }
        target -= weight;
    }
    PENTATONIC_STEPS[PENTATONIC_STEPS.len() - 1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{seeded, ScriptedSource};

    #[test]
    fn lowest_draw_picks_unison() {
        let mut rng = ScriptedSource::constant(0.0);
        assert_eq!(pick_interval(&mut rng), 0);
    }

    #[test]
    fn highest_draw_picks_last_step() {
        let mut rng = ScriptedSource::constant(0.9999);
        assert_eq!(pick_interval(&mut rng), 21);
    }

    #[test]
    fn second_is_most_common() {
        let mut rng = seeded(42);
        let mut counts = [0usize; 9];
        for _ in 0..20_000 {
            let step = pick_interval(&mut rng);
            let idx = PENTATONIC_STEPS.iter().position(|&s| s == step).unwrap();
            counts[idx] += 1;
        }
        let max_idx = (0..9).max_by_key(|&i| counts[i]).unwrap();
        assert_eq!(PENTATONIC_STEPS[max_idx], 2);
        assert!(counts.iter().all(|&c| c > 0));
    }
}
