//! Voicing helpers — stacking upper tones and gentle voice leading.

/// Semitones in an octave.
pub const OCTAVE: i32 = 12;

/// Movement (in semitones) beyond which a voice is pulled toward its previous note.
pub const MAX_COMFORTABLE_LEAP: i32 = 6;

/// Pick `count` upper tones from `intervals[1..]`, cycling one octave higher
/// each time the chord's upper tones run out.
pub fn upper_tones(intervals: &[i32], count: usize) -> Vec<i32> {
    let source = &intervals[1..];
    if source.is_empty() {
        return Vec::new();
    }
    (0..count)
        .map(|k| source[k % source.len()] + OCTAVE * (k / source.len()) as i32)
        .collect()
}

/// Raise each tone by octaves until it is no lower than the tone before it.
///
/// The first tone is compared against `floor` (the root).
pub fn stack_above(floor: i32, tones: &mut [i32]) {
    let mut prev = floor;
    for tone in tones.iter_mut() {
        while *tone < prev {
            *tone += OCTAVE;
        }
        prev = *tone;
    }
}

/// Shift voices that leap more than a tritone from the previous voicing by an
/// octave toward their previous note, then re-sort.
///
/// A shift down must stay above one octave below the previous lowest note; a
/// shift up must stay below one octave above the previous highest note. The
/// final sort may hand pitches to different voices.
pub fn lead_voices(voicing: &[i32], previous: &[i32]) -> Vec<i32> {
    let (Some(&lowest), Some(&highest)) = (previous.iter().min(), previous.iter().max()) else {
        return voicing.to_vec();
    };

    let mut adjusted = voicing.to_vec();
    for (note, &prev) in adjusted.iter_mut().zip(previous) {
        let movement = (*note - prev).abs();
        if movement <= MAX_COMFORTABLE_LEAP {
            continue;
        }
        let down = *note - OCTAVE;
        let up = *note + OCTAVE;
        if (down - prev).abs() < movement && down > lowest - OCTAVE {
            log::trace!("voice {note} -> {down} (prev {prev})");
            *note = down;
        } else if (up - prev).abs() < movement && up < highest + OCTAVE {
            log::trace!("voice {note} -> {up} (prev {prev})");
            *note = up;
        }
    }
    adjusted.sort_unstable();
    adjusted
}
