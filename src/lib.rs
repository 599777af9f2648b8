//! Guitar chord voicing solver and analyzer.
//!
//! Finds playable fingerings for chords on arbitrary tunings, ranks them for playability,
//! adapts them between tunings, and names the chords, voicing shapes and keys of fretted notes.

pub mod note;
pub use note::{Pitch, PitchClass};

pub mod chord;
pub use chord::ChordQuality;

pub mod scale;
pub use scale::{KeyMode, Scale};

pub mod fretboard;
pub use fretboard::{FretPosition, Tuning};

pub mod diagnostic;
pub use diagnostic::Diagnostic;

pub mod voicing;
pub use voicing::ChordVoicing;

pub mod analysis;
pub use analysis::{
    key::KeyMatch, suggestions::ChordSuggestion, voicing_type::VoicingType, VoicingAnalysis,
};

pub mod prelude;

// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use crate::prelude::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn solve_and_analyze() {
        let tuning = Tuning::standard();
        for (root, quality) in [("C", "Major"), ("A", "m7"), ("F#", "dim"), ("Bb", "7")] {
            let voicings = get_best_voicings(root, quality, 3, tuning);
            assert!(!voicings.is_empty());
            let expected_root = PitchClass::try_from(root).unwrap();
            let expected_quality = ChordQuality::try_from(quality).unwrap();
            for voicing in voicings {
                // every solved voicing names its own chord, with or without inversions
                let analysis = analyze_voicing(voicing.frets(), tuning);
                assert!(
                    analysis
                        .suggestions
                        .iter()
                        .any(|s| s.root == expected_root && s.quality == expected_quality),
                    "'{}' is not recognized as {}{}",
                    voicing,
                    root,
                    quality
                );
            }
        }
    }

    #[test]
    fn drop_d_roundtrip() {
        let drop_d = Tuning::from_name("Drop D").unwrap();
        let standard = solve_chord_shapes("D", "Major", Tuning::standard());
        let adapted = adapt_voicings(&standard, &drop_d);
        assert!(!adapted.is_empty());
        for voicing in &adapted {
            let analysis = analyze_voicing(voicing.frets(), &drop_d);
            assert_eq!(analysis.notes, voicing.notes());
        }
    }
}
