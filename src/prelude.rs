//! The fretwise prelude.
//!
//! The purpose of this module is to alleviate imports of common fretwise types and functions:
//!
//! ```
//! # #![allow(unused_imports)]
//! use fretwise::prelude::*;
//! ```

pub use super::{
    // all public solver, ranking and analysis functions
    analysis::{
        analyze_voicing, key::detect_keys, suggestions::suggest_chords,
        voicing_type::detect_voicing_type,
    },
    chord::{chord_names, interval_label},
    diagnostic::DIAGNOSTIC_TARGET,
    fretboard::{FRET_COUNT, MAX_FRET, MAX_HAND_SPAN, STRING_COUNT},
    voicing::{
        ranker::{get_best_voicings, get_best_voicings_for, rank_voicings, score_voicing},
        solver::{solve_chord_shapes, solve_chord_shapes_for},
        triads::{solve_triads, solve_triads_for, Inversion},
        tuning::{
            adapt_voicing, adapt_voicings, resolve_voicings, transpose_voicing, CuratedVoicings,
        },
    },
    // all public basic types
    ChordQuality,
    ChordSuggestion,
    ChordVoicing,
    Diagnostic,
    FretPosition,
    KeyMatch,
    KeyMode,
    Pitch,
    PitchClass,
    Scale,
    Tuning,
    VoicingAnalysis,
    VoicingType,
};
