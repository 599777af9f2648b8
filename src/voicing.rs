//! Chord voicings: one `FretPosition` per string, plus the solvers, ranking and tuning
//! adaptation which produce them.

use std::fmt::Display;

use crate::{
    fretboard::{FretPosition, Tuning},
    note::PitchClass,
};

// -------------------------------------------------------------------------------------------------

pub mod combinations;
pub mod ranker;
pub mod solver;
pub mod triads;
pub mod tuning;

// -------------------------------------------------------------------------------------------------

/// A playable chord shape on a specific tuning.
///
/// Voicings are immutable after construction. Lowest and highest frets are computed over
/// played strings only, so open strings count as fret 0.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChordVoicing {
    frets: Vec<FretPosition>,
    lowest_fret: u8,
    highest_fret: u8,
    notes: Vec<PitchClass>,
    bass_note: Option<PitchClass>,
    is_inversion: Option<bool>,
}

impl ChordVoicing {
    /// Create a voicing from per-string fret positions on the given tuning. When a chord `root`
    /// is known, the voicing is flagged as inversion if its bass note differs from the root.
    ///
    /// ### Panics
    ///
    /// Panics if `frets` addresses more strings than the tuning has.
    pub fn new(frets: Vec<FretPosition>, tuning: &Tuning, root: Option<PitchClass>) -> Self {
        assert!(
            frets.len() <= tuning.string_count(),
            "Voicing has more strings than its tuning"
        );
        let played = frets
            .iter()
            .enumerate()
            .filter_map(|(string, position)| position.fret().map(|fret| (string, fret)))
            .collect::<Vec<_>>();
        let lowest_fret = played.iter().map(|(_, fret)| *fret).min().unwrap_or(0);
        let highest_fret = played.iter().map(|(_, fret)| *fret).max().unwrap_or(0);
        let notes = played
            .iter()
            .map(|(string, fret)| tuning.pitch_class_at(*string, *fret))
            .collect::<Vec<_>>();
        let bass_note = notes.first().copied();
        let is_inversion = match (bass_note, root) {
            (Some(bass), Some(root)) => Some(bass != root),
            _ => None,
        };
        Self {
            frets,
            lowest_fret,
            highest_fret,
            notes,
            bass_note,
            is_inversion,
        }
    }

    /// Per-string positions, lowest string first.
    pub fn frets(&self) -> &[FretPosition] {
        &self.frets
    }

    /// Lowest played fret, including open strings.
    pub fn lowest_fret(&self) -> u8 {
        self.lowest_fret
    }

    /// Highest played fret.
    pub fn highest_fret(&self) -> u8 {
        self.highest_fret
    }

    /// Sounding pitch classes, one per played string in string order.
    pub fn notes(&self) -> &[PitchClass] {
        &self.notes
    }

    /// Sounding note names, one per played string in string order.
    pub fn note_names(&self) -> Vec<&'static str> {
        self.notes.iter().map(|note| note.name()).collect()
    }

    /// Pitch class of the lowest played string.
    pub fn bass_note(&self) -> Option<PitchClass> {
        self.bass_note
    }

    /// Whether the bass note differs from the chord root. None when the root is unknown.
    pub fn is_inversion(&self) -> Option<bool> {
        self.is_inversion
    }

    /// Number of played strings.
    pub fn played_count(&self) -> usize {
        self.notes.len()
    }

    /// Number of open strings.
    pub fn open_count(&self) -> usize {
        self.frets.iter().filter(|position| position.is_open()).count()
    }

    /// Index of the lowest played string.
    pub fn lowest_played_string(&self) -> Option<usize> {
        self.frets.iter().position(FretPosition::is_played)
    }

    /// Distance between the lowest and highest fretted position, ignoring open strings.
    pub fn hand_span(&self) -> u8 {
        fretted_span(&self.frets)
    }

    /// True if any muted string lies between the first and the last played string.
    pub fn has_muted_gap(&self) -> bool {
        longest_inner_muted_run(&self.frets) > 0
    }
}

impl Display for ChordVoicing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let frets = self
            .frets
            .iter()
            .map(|position| position.to_string())
            .collect::<Vec<_>>();
        write!(f, "{}", frets.join(" "))
    }
}

// -------------------------------------------------------------------------------------------------

/// Distance between the lowest and highest fretted (non-open) position.
pub(crate) fn fretted_span(frets: &[FretPosition]) -> u8 {
    let fretted = frets
        .iter()
        .filter_map(FretPosition::fret)
        .filter(|fret| *fret > 0);
    let (min, max) = fretted.fold((u8::MAX, 0), |(min, max), fret| {
        (min.min(fret), max.max(fret))
    });
    max.saturating_sub(min)
}

/// Length of the longest run of muted strings strictly between the first and last played string.
pub(crate) fn longest_inner_muted_run(frets: &[FretPosition]) -> usize {
    let first = frets.iter().position(FretPosition::is_played);
    let last = frets.iter().rposition(FretPosition::is_played);
    match (first, last) {
        (Some(first), Some(last)) => {
            let mut longest = 0;
            let mut run = 0;
            for position in &frets[first..=last] {
                if position.is_played() {
                    run = 0;
                } else {
                    run += 1;
                    longest = longest.max(run);
                }
            }
            longest
        }
        _ => 0,
    }
}

// --------------------------------------------------------------------------------------------------
