use crate::{
    analysis::voicing_type::{detect_voicing_type, VoicingType},
    chord::{interval_label, ChordQuality, CHORD_QUALITIES},
    note::PitchClass,
};

// -------------------------------------------------------------------------------------------------

/// A chord which may be formed by a set of played notes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordSuggestion {
    pub root: PitchClass,
    pub quality: ChordQuality,
    /// Chord name, e.g. "Am7" or "C/E" when the bass is not the root.
    pub name: String,
    /// Match confidence in range `[0, 100]`.
    pub confidence: u8,
    pub voicing_type: VoicingType,
    /// Scale degree labels of the chord tones which are played.
    pub present: Vec<&'static str>,
    /// Scale degree labels of the chord tones which are not played.
    pub missing: Vec<&'static str>,
}

// -------------------------------------------------------------------------------------------------

/// Rank all chords which contain the given played pitch classes.
///
/// Every played pitch class, then every other chromatic pitch class, is tried as root. A
/// quality matches when all played notes are chord tones of it; chord tones may be missing.
/// Chords with an unplayed root need at least two played chord tones. Suggestions rooted on
/// the bass come first, followed by the other roots in alphabetical order, then simpler
/// qualities before complex ones.
pub fn suggest_chords(played: &[PitchClass], bass: PitchClass) -> Vec<ChordSuggestion> {
    let mut played_unique = Vec::with_capacity(played.len());
    for pitch_class in played {
        if !played_unique.contains(pitch_class) {
            played_unique.push(*pitch_class);
        }
    }
    let candidate_roots = played_unique.iter().copied().chain(
        PitchClass::all().filter(|pitch_class| !played_unique.contains(pitch_class)),
    );

    let mut suggestions = Vec::new();
    for root in candidate_roots {
        let intervals = played_unique
            .iter()
            .map(|pitch_class| pitch_class.interval_from(root))
            .collect::<Vec<_>>();
        for quality in CHORD_QUALITIES {
            if let Some(suggestion) = match_quality(root, quality, &intervals, bass) {
                let duplicate = suggestion_as_full_chord(&suggestion);
                suggestions.push(suggestion);
                suggestions.extend(duplicate);
            }
        }
    }
    suggestions.sort_by_key(|suggestion| {
        (
            suggestion.root != bass,
            suggestion.root.name(),
            suggestion.quality.complexity(),
        )
    });
    suggestions
}

// -------------------------------------------------------------------------------------------------

fn match_quality(
    root: PitchClass,
    quality: ChordQuality,
    intervals: &[u8],
    bass: PitchClass,
) -> Option<ChordSuggestion> {
    let expected = quality.interval_classes();
    if !intervals.iter().all(|interval| expected.contains(interval)) {
        return None;
    }
    let root_played = intervals.contains(&0);
    if !root_played && intervals.len() < 2 {
        return None;
    }
    let (present, missing): (Vec<u8>, Vec<u8>) = quality
        .intervals()
        .iter()
        .copied()
        .partition(|interval| intervals.contains(&(interval % 12)));
    // the fifth may be left out of seventh chords, e.g. in shell voicings
    let exact = root_played
        && missing
            .iter()
            .all(|interval| quality.has_seventh() && *interval == 7);
    let voicing_type = if exact {
        detect_voicing_type(&intervals.iter().map(|i| *i as i32).collect::<Vec<_>>())
    } else {
        VoicingType::Partial
    };

    let mut confidence = 50;
    if root == bass {
        confidence += 30;
    }
    confidence += 10 * intervals.len() as i32;
    confidence -= 2 * quality.complexity() as i32;
    if !exact {
        confidence -= 10;
    }
    if !root_played {
        confidence -= 20;
    }

    let mut missing_labels = Vec::with_capacity(missing.len() + 1);
    if !root_played {
        missing_labels.push("R");
    }
    missing_labels.extend(
        missing
            .iter()
            .filter(|interval| **interval != 0)
            .map(|interval| interval_label(*interval)),
    );

    let name = if root == bass {
        format!("{}{}", root, quality.symbol())
    } else {
        format!("{}{}/{}", root, quality.symbol(), bass)
    };
    Some(ChordSuggestion {
        root,
        quality,
        name,
        confidence: confidence.clamp(0, 100) as u8,
        voicing_type,
        present: present.into_iter().map(interval_label).collect(),
        missing: missing_labels,
    })
}

/// Exact triad and shell matches may also be read as a fuller chord.
fn suggestion_as_full_chord(suggestion: &ChordSuggestion) -> Option<ChordSuggestion> {
    if suggestion.voicing_type.is_triad() || suggestion.voicing_type.is_shell() {
        Some(ChordSuggestion {
            confidence: suggestion.confidence.saturating_sub(5),
            voicing_type: VoicingType::Full,
            ..suggestion.clone()
        })
    } else {
        None
    }
}

// --------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn major_triad() {
        let played = [PitchClass::C, PitchClass::E, PitchClass::G, PitchClass::C];
        let suggestions = suggest_chords(&played, PitchClass::C);

        let top = &suggestions[0];
        assert_eq!(top.name, "C");
        assert_eq!(top.quality, ChordQuality::Major);
        assert_eq!(top.voicing_type, VoicingType::TriadMajor);
        assert_eq!(top.confidence, 100);
        assert_eq!(top.present, vec!["R", "3", "5"]);
        assert!(top.missing.is_empty());

        let full = &suggestions[1];
        assert_eq!(full.quality, ChordQuality::Major);
        assert_eq!(full.voicing_type, VoicingType::Full);
        assert_eq!(full.confidence, 95);

        // extensions of the triad follow, all partial
        let c_major7 = suggestions
            .iter()
            .find(|s| s.root == PitchClass::C && s.quality == ChordQuality::Major7)
            .unwrap();
        assert_eq!(c_major7.voicing_type, VoicingType::Partial);
        assert_eq!(c_major7.missing, vec!["7"]);
        // 50 + 30 + 3 * 10 - 2 * 3 - 10
        assert_eq!(c_major7.confidence, 94);

        // A minor 7 without its root
        let a_minor7 = suggestions
            .iter()
            .find(|s| s.root == PitchClass::A && s.quality == ChordQuality::Minor7)
            .unwrap();
        assert_eq!(a_minor7.name, "Am7/C");
        assert_eq!(a_minor7.voicing_type, VoicingType::Partial);
        assert_eq!(a_minor7.missing, vec!["R"]);
        // 50 + 3 * 10 - 2 * 3 - 10 - 20
        assert_eq!(a_minor7.confidence, 44);
    }

    #[test]
    fn shell_voicing() {
        let played = [PitchClass::C, PitchClass::E, PitchClass::AS];
        let suggestions = suggest_chords(&played, PitchClass::C);
        let top = &suggestions[0];
        assert_eq!(top.name, "C7");
        assert_eq!(top.voicing_type, VoicingType::ShellDominant);
        assert_eq!(top.present, vec!["R", "3", "b7"]);
        assert_eq!(top.missing, vec!["5"]);
        assert_eq!(suggestions[1].voicing_type, VoicingType::Full);

        let c_ninth = suggestions
            .iter()
            .find(|s| s.root == PitchClass::C && s.quality == ChordQuality::Dominant9)
            .unwrap();
        assert_eq!(c_ninth.voicing_type, VoicingType::Partial);
        assert_eq!(c_ninth.missing, vec!["5", "9"]);
    }

    #[test]
    fn ranking() {
        let played = [PitchClass::E, PitchClass::G, PitchClass::C];
        let suggestions = suggest_chords(&played, PitchClass::E);
        assert!(suggestions.len() > 2);
        // no chord rooted on E contains C, E and G, so alphabetical order applies
        assert!(suggestions.iter().all(|s| s.root != PitchClass::E));
        let roots = suggestions.iter().map(|s| s.root.name()).collect::<Vec<_>>();
        let mut sorted_roots = roots.clone();
        sorted_roots.sort();
        assert_eq!(roots, sorted_roots);

        let c_major = suggestions
            .iter()
            .find(|s| s.root == PitchClass::C && s.quality == ChordQuality::Major)
            .unwrap();
        assert_eq!(c_major.name, "C/E");
        assert_eq!(c_major.voicing_type, VoicingType::TriadMajor);
        // 50 + 3 * 10
        assert_eq!(c_major.confidence, 80);

        for pair in suggestions.windows(2) {
            if pair[0].root == pair[1].root {
                assert!(pair[0].quality.complexity() <= pair[1].quality.complexity());
            }
        }
    }

    #[test]
    fn subset_matching() {
        // a power chord matches every quality containing a perfect fifth
        let played = [PitchClass::A, PitchClass::E];
        let suggestions = suggest_chords(&played, PitchClass::A);
        assert_eq!(suggestions[0].quality, ChordQuality::Major);
        assert_eq!(suggestions[0].voicing_type, VoicingType::Partial);
        let power = suggestions
            .iter()
            .find(|s| s.root == PitchClass::A && s.quality == ChordQuality::Power)
            .unwrap();
        assert_eq!(power.voicing_type, VoicingType::Partial);
        assert!(power.missing.is_empty());
        // 50 + 30 + 2 * 10 - 2
        assert_eq!(power.confidence, 98);
        // a single played tone never suggests a rootless chord
        let single = suggest_chords(&[PitchClass::A], PitchClass::A);
        assert!(single.iter().all(|s| s.root == PitchClass::A));
    }
}
