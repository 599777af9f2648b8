//! Sliding-window search for all playable voicings of a chord.

use std::collections::HashSet;

use crate::{
    chord::ChordQuality,
    diagnostic::Diagnostic,
    fretboard::{FretPosition, Tuning, FRET_COUNT, MAX_HAND_SPAN},
    note::PitchClass,
    voicing::{combinations::Combinations, fretted_span, longest_inner_muted_run, ChordVoicing},
};

// -------------------------------------------------------------------------------------------------

/// Resolve a chord from its root and quality names. Emits a diagnostic and returns None when
/// either name is unknown.
pub(crate) fn resolve_chord(root: &str, quality: &str) -> Option<(PitchClass, ChordQuality)> {
    let root = match PitchClass::try_from(root) {
        Ok(root) => root,
        Err(_) => {
            Diagnostic::UnknownRoot(root.to_string()).emit();
            return None;
        }
    };
    let quality = match ChordQuality::try_from(quality) {
        Ok(quality) => quality,
        Err(_) => {
            Diagnostic::UnknownQuality(quality.to_string()).emit();
            return None;
        }
    };
    Some((root, quality))
}

// -------------------------------------------------------------------------------------------------

/// Generate all playable voicings for the named chord on the given tuning, sorted by their
/// lowest fret. Unknown roots or qualities produce an empty list.
///
/// ### Example
///
/// ```rust
/// use fretwise::prelude::*;
/// let shapes = solve_chord_shapes("C", "Major", Tuning::standard());
/// assert!(shapes.iter().any(|v| v.to_string() == "x 3 2 0 1 0"));
/// ```
pub fn solve_chord_shapes(root: &str, quality: &str, tuning: &Tuning) -> Vec<ChordVoicing> {
    match resolve_chord(root, quality) {
        Some((root, quality)) => solve_chord_shapes_for(root, quality, tuning),
        None => Vec::new(),
    }
}

/// Generate all playable voicings for the given chord on the given tuning.
///
/// A fret window of `MAX_HAND_SPAN` frets slides up the neck. Within each window every string
/// is either muted or fretted on a chord tone (open strings which are chord tones are always
/// available) and the full cross product of these options is filtered down to playable shapes.
pub fn solve_chord_shapes_for(
    root: PitchClass,
    quality: ChordQuality,
    tuning: &Tuning,
) -> Vec<ChordVoicing> {
    let targets = quality.pitch_classes(root);
    let min_notes = if targets.len() >= 4 { 3 } else { 2 };

    let mut seen = HashSet::new();
    let mut voicings = Vec::new();
    for window_start in 0..FRET_COUNT - MAX_HAND_SPAN + 1 {
        let options = (0..tuning.string_count())
            .map(|string| string_options(tuning, string, window_start, &targets))
            .collect::<Vec<_>>();
        for frets in Combinations::new(&options) {
            if !is_valid_shape(&frets, tuning, root, min_notes) || seen.contains(&frets) {
                continue;
            }
            seen.insert(frets.clone());
            voicings.push(ChordVoicing::new(frets, tuning, Some(root)));
        }
    }
    // stable: equal lowest frets keep their discovery order
    voicings.sort_by_key(ChordVoicing::lowest_fret);

    log::debug!(
        "found {} voicings for {}{} in {}",
        voicings.len(),
        root,
        quality.symbol(),
        tuning
    );
    voicings
}

// -------------------------------------------------------------------------------------------------

/// Options of a single string in the given window: muted, then all chord tone frets.
fn string_options(
    tuning: &Tuning,
    string: usize,
    window_start: u8,
    targets: &[PitchClass],
) -> Vec<FretPosition> {
    let is_chord_tone = |fret: u8| targets.contains(&tuning.pitch_class_at(string, fret));
    let mut options = vec![FretPosition::Muted];
    if window_start > 0 && is_chord_tone(0) {
        options.push(FretPosition::Fretted(0));
    }
    options.extend(
        (window_start..window_start + MAX_HAND_SPAN)
            .filter(|fret| is_chord_tone(*fret))
            .map(FretPosition::Fretted),
    );
    options
}

fn is_valid_shape(
    frets: &[FretPosition],
    tuning: &Tuning,
    root: PitchClass,
    min_notes: usize,
) -> bool {
    let notes = frets
        .iter()
        .enumerate()
        .filter_map(|(string, position)| {
            position
                .fret()
                .map(|fret| tuning.pitch_class_at(string, fret))
        })
        .collect::<Vec<_>>();
    if notes.len() < min_notes || !notes.contains(&root) {
        return false;
    }
    let distinct = notes.iter().collect::<HashSet<_>>().len();
    distinct >= min_notes
        && fretted_span(frets) <= MAX_HAND_SPAN
        && longest_inner_muted_run(frets) < 2
}

// --------------------------------------------------------------------------------------------------
