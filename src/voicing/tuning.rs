//! Reuse of voicings across tunings by shifting frets, so that every string keeps its pitch.

use std::collections::HashMap;

use crate::{
    chord::ChordQuality,
    diagnostic::Diagnostic,
    fretboard::{FretPosition, Tuning, MAX_FRET},
    note::PitchClass,
    voicing::{solver::solve_chord_shapes_for, ChordVoicing},
};

// -------------------------------------------------------------------------------------------------

/// A table of hand-authored chord shapes for the standard tuning, consulted before solving.
pub trait CuratedVoicings {
    /// Shapes for the given chord, or None if the table has no entry for it.
    fn lookup(&self, root: PitchClass, quality: ChordQuality) -> Option<Vec<Vec<FretPosition>>>;
}

impl CuratedVoicings for HashMap<(PitchClass, ChordQuality), Vec<Vec<FretPosition>>> {
    fn lookup(&self, root: PitchClass, quality: ChordQuality) -> Option<Vec<Vec<FretPosition>>> {
        self.get(&(root, quality)).cloned()
    }
}

// -------------------------------------------------------------------------------------------------

/// Move a voicing from the `source` to the `target` tuning, keeping every sounding pitch.
///
/// Returns None if the string counts differ or any shifted fret leaves `[0, MAX_FRET]`.
pub fn transpose_voicing(
    voicing: &ChordVoicing,
    source: &Tuning,
    target: &Tuning,
) -> Option<ChordVoicing> {
    if source.string_count() != target.string_count()
        || voicing.frets().len() != target.string_count()
    {
        log::trace!(
            "can't adapt voicing '{}' from '{}' to '{}': string counts differ",
            voicing,
            source,
            target
        );
        return None;
    }
    let frets = voicing
        .frets()
        .iter()
        .enumerate()
        .map(|(string, position)| match position {
            FretPosition::Muted => Some(FretPosition::Muted),
            FretPosition::Fretted(fret) => {
                let shift = source.open_midi(string) as i32 - target.open_midi(string) as i32;
                let shifted = *fret as i32 + shift;
                if (0..=MAX_FRET as i32).contains(&shifted) {
                    Some(FretPosition::Fretted(shifted as u8))
                } else {
                    None
                }
            }
        })
        .collect::<Option<Vec<_>>>();
    match frets {
        // sounding pitches are unchanged, so is the inversion state
        Some(frets) => Some(ChordVoicing {
            is_inversion: voicing.is_inversion(),
            ..ChordVoicing::new(frets, target, None)
        }),
        None => {
            log::trace!("rejected voicing '{}' in tuning '{}'", voicing, target);
            None
        }
    }
}

/// Adapt a voicing computed for the standard tuning to the given tuning.
pub fn adapt_voicing(voicing: &ChordVoicing, target: &Tuning) -> Option<ChordVoicing> {
    transpose_voicing(voicing, Tuning::standard(), target)
}

/// Adapt a list of standard tuning voicings, dropping all voicings which don't fit.
pub fn adapt_voicings(voicings: &[ChordVoicing], target: &Tuning) -> Vec<ChordVoicing> {
    voicings
        .iter()
        .filter_map(|voicing| adapt_voicing(voicing, target))
        .collect()
}

// -------------------------------------------------------------------------------------------------

/// Voicings for a chord in the given tuning: curated shapes when available and adaptable,
/// else all shapes found by the solver in that tuning.
pub fn resolve_voicings(
    curated: &dyn CuratedVoicings,
    root: PitchClass,
    quality: ChordQuality,
    tuning: &Tuning,
) -> Vec<ChordVoicing> {
    if let Some(shapes) = curated.lookup(root, quality) {
        let standard = Tuning::standard();
        let adapted = shapes
            .into_iter()
            .filter(|frets| {
                if frets.len() == standard.string_count() {
                    true
                } else {
                    Diagnostic::StringCountMismatch {
                        expected: standard.string_count(),
                        got: frets.len(),
                    }
                    .emit();
                    false
                }
            })
            .map(|frets| ChordVoicing::new(frets, standard, Some(root)))
            .filter_map(|voicing| adapt_voicing(&voicing, tuning))
            .collect::<Vec<_>>();
        if !adapted.is_empty() {
            return adapted;
        }
        log::debug!(
            "no curated {}{} voicing fits '{}', solving instead",
            root,
            quality.symbol(),
            tuning
        );
    }
    solve_chord_shapes_for(root, quality, tuning)
}

// --------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::voicing::solver::solve_chord_shapes;
    use pretty_assertions::assert_eq;
    use rand::{seq::IndexedRandom, SeedableRng};
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn sounding_midi(voicing: &ChordVoicing, tuning: &Tuning) -> Vec<Option<u8>> {
        voicing
            .frets()
            .iter()
            .enumerate()
            .map(|(string, position)| position.fret().map(|fret| tuning.midi_at(string, fret)))
            .collect()
    }

    #[test]
    fn drop_d() -> Result<(), String> {
        let drop_d = Tuning::from_name("drop d").unwrap();
        let standard = Tuning::standard();
        let g_major = ChordVoicing::new(
            FretPosition::parse_tab("320003")?,
            standard,
            Some(PitchClass::G),
        );
        let adapted = adapt_voicing(&g_major, &drop_d).unwrap();
        assert_eq!(adapted.to_string(), "5 2 0 0 0 3");
        assert_eq!(adapted.notes(), g_major.notes());
        assert_eq!(adapted.lowest_fret(), 0);
        assert_eq!(adapted.highest_fret(), 5);
        assert_eq!(adapted.is_inversion(), Some(false));

        let e_major = ChordVoicing::new(
            FretPosition::parse_tab("022100")?,
            standard,
            Some(PitchClass::E),
        );
        assert_eq!(
            adapt_voicing(&e_major, &drop_d).map(|v| v.to_string()),
            Some("2 2 2 1 0 0".to_string())
        );
        assert_eq!(adapt_voicings(&[g_major, e_major], &drop_d).len(), 2);
        Ok(())
    }

    #[test]
    fn open_e() -> Result<(), String> {
        let open_e = Tuning::from_name("open e").unwrap();
        let standard = Tuning::standard();
        let e_major = ChordVoicing::new(
            FretPosition::parse_tab("022100")?,
            standard,
            Some(PitchClass::E),
        );
        assert_eq!(
            adapt_voicing(&e_major, &open_e).map(|v| v.to_string()),
            Some("0 0 0 0 0 0".to_string())
        );
        // the open D string is below the open E tuning's third string
        let g_major = ChordVoicing::new(
            FretPosition::parse_tab("320003")?,
            standard,
            Some(PitchClass::G),
        );
        assert_eq!(adapt_voicing(&g_major, &open_e), None);
        Ok(())
    }

    #[test]
    fn rejects_out_of_range_frets() -> Result<(), String> {
        let standard = Tuning::standard();
        let half_step_up = Tuning::new(standard.strings().iter().map(|p| *p + 1).collect());
        let open_e = ChordVoicing::new(FretPosition::parse_tab("022100")?, standard, None);
        assert!(adapt_voicing(&open_e, &half_step_up).is_none());

        let full_step_down = Tuning::from_name("full step down").unwrap();
        let high = ChordVoicing::new(
            FretPosition::parse_tab("x x x x 22 23")?,
            standard,
            None,
        );
        assert!(adapt_voicing(&high, &full_step_down).is_none());

        let seven_strings = Tuning::try_from(["B1", "E2", "A2", "D3", "G3", "B3", "E4"].as_slice())
            .map_err(|e| e.to_string())?;
        assert!(adapt_voicing(&open_e, &seven_strings).is_none());
        Ok(())
    }

    #[test]
    fn preserves_pitches() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(0xfeed);
        let standard = Tuning::standard();
        let voicings = solve_chord_shapes("A", "Minor7", standard);
        let presets = Tuning::preset_names();
        for _ in 0..16 {
            let target = Tuning::from_name(presets.choose(&mut rng).unwrap()).unwrap();
            let voicing = voicings.choose(&mut rng).unwrap();
            match adapt_voicing(voicing, &target) {
                Some(adapted) => {
                    assert_eq!(
                        sounding_midi(&adapted, &target),
                        sounding_midi(voicing, standard)
                    );
                    assert_eq!(adapted.notes(), voicing.notes());
                    assert_eq!(adapted.bass_note(), voicing.bass_note());
                }
                None => assert!(voicing
                    .frets()
                    .iter()
                    .enumerate()
                    .filter_map(|(string, position)| position.fret().map(|fret| (string, fret)))
                    .any(|(string, fret)| {
                        let shifted = fret as i32 + standard.open_midi(string) as i32
                            - target.open_midi(string) as i32;
                        !(0..=MAX_FRET as i32).contains(&shifted)
                    })),
            }
        }
    }

    #[test]
    fn curated_lookup_and_fallback() -> Result<(), String> {
        let mut curated = HashMap::new();
        curated.insert(
            (PitchClass::E, ChordQuality::Major),
            vec![FretPosition::parse_tab("022100")?],
        );
        curated.insert(
            (PitchClass::G, ChordQuality::Major),
            vec![FretPosition::parse_tab("320003")?],
        );
        let standard = Tuning::standard();
        let drop_d = Tuning::from_name("drop d").unwrap();

        // curated and adaptable
        let g_major = resolve_voicings(&curated, PitchClass::G, ChordQuality::Major, &drop_d);
        assert_eq!(
            g_major.iter().map(|v| v.to_string()).collect::<Vec<_>>(),
            vec!["5 2 0 0 0 3"]
        );
        // curated, but nothing fits: solve in the target tuning
        let open_e = Tuning::from_name("open e").unwrap();
        let g_major = resolve_voicings(&curated, PitchClass::G, ChordQuality::Major, &open_e);
        assert_eq!(
            g_major,
            solve_chord_shapes_for(PitchClass::G, ChordQuality::Major, &open_e)
        );
        let e_major = resolve_voicings(&curated, PitchClass::E, ChordQuality::Major, &open_e);
        assert_eq!(e_major.len(), 1);
        // not curated at all
        let a_minor = resolve_voicings(&curated, PitchClass::A, ChordQuality::Minor, standard);
        assert_eq!(
            a_minor,
            solve_chord_shapes_for(PitchClass::A, ChordQuality::Minor, standard)
        );
        Ok(())
    }
}
