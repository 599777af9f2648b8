//! Reverse lookup of fretted notes: chord names, voicing shapes and keys.

use crate::{
    diagnostic::Diagnostic,
    fretboard::{FretPosition, Tuning},
    note::PitchClass,
};

// -------------------------------------------------------------------------------------------------

pub mod key;
pub mod suggestions;
pub mod voicing_type;

use key::{detect_keys, KeyMatch};
use suggestions::{suggest_chords, ChordSuggestion};
use voicing_type::{detect_voicing_type, VoicingType};

// -------------------------------------------------------------------------------------------------

/// Result of [`analyze_voicing`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VoicingAnalysis {
    /// Sounding pitch classes in string order, one per played string.
    pub notes: Vec<PitchClass>,
    /// Pitch class of the lowest played string.
    pub bass: Option<PitchClass>,
    /// Shape of the best suggestion. None when less than two strings are played.
    pub voicing_type: Option<VoicingType>,
    /// Chords which may be formed by the notes, best first.
    pub suggestions: Vec<ChordSuggestion>,
}

impl VoicingAnalysis {
    /// Keys which contain the analyzed notes, preferring the bass note and the root of the
    /// best chord suggestion.
    pub fn keys(&self) -> Vec<KeyMatch> {
        detect_keys(
            &self.notes,
            self.bass,
            self.suggestions.first().map(|suggestion| suggestion.root),
        )
    }
}

// -------------------------------------------------------------------------------------------------

/// Name the chords and the voicing shape of some fretted strings.
///
/// `frets` holds one position per string of the tuning, starting with the lowest string.
/// Extra frets or strings are ignored after logging a diagnostic.
pub fn analyze_voicing(frets: &[FretPosition], tuning: &Tuning) -> VoicingAnalysis {
    if frets.len() != tuning.string_count() {
        Diagnostic::StringCountMismatch {
            expected: tuning.string_count(),
            got: frets.len(),
        }
        .emit();
    }
    let notes = frets
        .iter()
        .take(tuning.string_count())
        .enumerate()
        .filter_map(|(string, position)| {
            position
                .fret()
                .map(|fret| tuning.pitch_class_at(string, fret))
        })
        .collect::<Vec<_>>();
    let bass = notes.first().copied();
    let Some(bass_note) = bass.filter(|_| notes.len() >= 2) else {
        return VoicingAnalysis {
            notes,
            bass,
            ..Default::default()
        };
    };

    let suggestions = suggest_chords(&notes, bass_note);
    let voicing_type = match suggestions.first() {
        Some(best) => best.voicing_type,
        None => detect_voicing_type(
            &notes
                .iter()
                .map(|note| note.interval_from(bass_note) as i32)
                .collect::<Vec<_>>(),
        ),
    };
    log::debug!(
        "found {} chord suggestions for '{}'",
        suggestions.len(),
        frets
            .iter()
            .map(|position| position.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    );
    VoicingAnalysis {
        notes,
        bass,
        voicing_type: Some(voicing_type),
        suggestions,
    }
}

// --------------------------------------------------------------------------------------------------
