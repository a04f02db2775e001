//! Chordloop — procedural lofi chord progressions with voice-led voicings.
//!
//! An authored cadence is picked, varied, and sized by [`pattern`], resolved
//! to [`chord::Chord`]s by [`progression`], and voiced on demand for a
//! playback layer. All randomness flows through [`random::RandomSource`].

pub mod chord;
pub mod config;
pub mod pattern;
pub mod progression;
pub mod random;

pub use chord::{Chord, DegreeCatalog, ScaleDegreeDefinition};
pub use pattern::{PatternLibrary, ScaleType, VariationEngine};
pub use progression::{generate_progression, ChordProgressionBuilder, PlaybackStep, Progression};
pub use random::RandomSource;
