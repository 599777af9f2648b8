//! Closed-position triads and their inversions on adjacent string groups.

use std::collections::HashSet;

use derive_more::Display;

use crate::{
    chord::ChordQuality,
    diagnostic::Diagnostic,
    fretboard::{FretPosition, Tuning, FRET_COUNT, MAX_HAND_SPAN},
    note::PitchClass,
    voicing::{combinations::Combinations, fretted_span, solver::resolve_chord, ChordVoicing},
};

// -------------------------------------------------------------------------------------------------

/// Which chord tone of a triad sounds lowest.
#[derive(Debug, Display, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Inversion {
    /// Root, third, fifth.
    #[display("root position")]
    Root,
    /// Third, fifth, root.
    #[display("first inversion")]
    First,
    /// Fifth, root, third.
    #[display("second inversion")]
    Second,
}

/// All inversions, in the order in which they are generated.
pub const INVERSIONS: [Inversion; 3] = [Inversion::Root, Inversion::First, Inversion::Second];

impl Inversion {
    /// Rotation of the triad tones: how many tones are moved from the bottom to the top.
    fn rotation(&self) -> usize {
        match self {
            Self::Root => 0,
            Self::First => 1,
            Self::Second => 2,
        }
    }

    /// Detect the inversion of a triad voicing from its bass note. Returns None if the
    /// bass note is not a tone of the given triad.
    pub fn of(voicing: &ChordVoicing, root: PitchClass, quality: ChordQuality) -> Option<Self> {
        let bass = voicing.bass_note()?;
        let tones = quality.pitch_classes(root);
        let position = tones.iter().position(|tone| *tone == bass)?;
        INVERSIONS.get(position).copied()
    }
}

// -------------------------------------------------------------------------------------------------

/// Generate closed triad voicings for the named chord. Unknown roots or qualities, and
/// qualities which are not triads, produce an empty list.
pub fn solve_triads(root: &str, quality: &str, tuning: &Tuning) -> Vec<ChordVoicing> {
    match resolve_chord(root, quality) {
        Some((root, quality)) => solve_triads_for(root, quality, tuning),
        None => Vec::new(),
    }
}

/// Generate closed triad voicings in all inversions on every group of three adjacent strings.
///
/// Each string of a group plays exactly one assigned triad tone. Results are ordered by
/// string group (bass strings first), then by lowest fret.
pub fn solve_triads_for(
    root: PitchClass,
    quality: ChordQuality,
    tuning: &Tuning,
) -> Vec<ChordVoicing> {
    let tones = quality.pitch_classes(root);
    if tones.len() != 3 {
        Diagnostic::NotATriad(quality.name().to_string()).emit();
        return Vec::new();
    }
    let string_count = tuning.string_count();

    let mut seen = HashSet::new();
    let mut voicings = Vec::new();
    for group in 0..string_count.saturating_sub(2) {
        for inversion in INVERSIONS {
            let mut assigned = tones.clone();
            assigned.rotate_left(inversion.rotation());
            for base_fret in 0..FRET_COUNT {
                let window = base_fret..(base_fret + MAX_HAND_SPAN).min(FRET_COUNT);
                let options = assigned
                    .iter()
                    .enumerate()
                    .map(|(offset, tone)| {
                        let string = group + offset;
                        window
                            .clone()
                            .filter(|fret| tuning.pitch_class_at(string, *fret) == *tone)
                            .map(FretPosition::Fretted)
                            .collect::<Vec<_>>()
                    })
                    .collect::<Vec<_>>();
                for group_frets in Combinations::new(&options) {
                    if fretted_span(&group_frets) > MAX_HAND_SPAN {
                        continue;
                    }
                    let mut frets = vec![FretPosition::Muted; string_count];
                    frets[group..group + 3].copy_from_slice(&group_frets);
                    if seen.insert(frets.clone()) {
                        voicings.push(ChordVoicing::new(frets, tuning, Some(root)));
                    }
                }
            }
        }
    }
    voicings.sort_by_key(|voicing| (voicing.lowest_played_string(), voicing.lowest_fret()));

    log::debug!(
        "found {} triads for {}{} in {}",
        voicings.len(),
        root,
        quality.symbol(),
        tuning
    );
    voicings
}

// --------------------------------------------------------------------------------------------------
