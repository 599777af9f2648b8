//! Heuristic ranking of solved voicings, preferring open, low and compact shapes.

use crate::{
    chord::ChordQuality,
    fretboard::Tuning,
    note::PitchClass,
    voicing::{
        solver::{resolve_chord, solve_chord_shapes_for},
        ChordVoicing,
    },
};

// -------------------------------------------------------------------------------------------------

/// Score a voicing for practical playability. Higher is better.
pub fn score_voicing(voicing: &ChordVoicing, root: PitchClass) -> i32 {
    let mut score = 0;
    if voicing.highest_fret() <= 4 {
        score += 100;
    }
    score += 15 * voicing.open_count() as i32;
    score -= 8 * voicing.lowest_fret() as i32;
    if voicing.bass_note() == Some(root) {
        score += 25;
    }
    match voicing.played_count() {
        4..=6 => score += 20,
        3 => score += 10,
        _ => (),
    }
    score -= 3 * (voicing.highest_fret() - voicing.lowest_fret()) as i32;
    if !voicing.has_muted_gap() {
        score += 10;
    }
    score
}

/// Pick the `limit` best scoring voicings, returned in ascending lowest fret order.
/// Ties keep the order of the given voicings.
pub fn rank_voicings(
    voicings: &[ChordVoicing],
    root: PitchClass,
    limit: usize,
) -> Vec<ChordVoicing> {
    let mut ranked = voicings
        .iter()
        .enumerate()
        .map(|(index, voicing)| (index, score_voicing(voicing, root)))
        .collect::<Vec<_>>();
    ranked.sort_by(|(_, a), (_, b)| b.cmp(a));
    ranked.truncate(limit);
    ranked.sort_by_key(|(index, _)| (voicings[*index].lowest_fret(), *index));
    ranked
        .into_iter()
        .map(|(index, _)| voicings[index].clone())
        .collect()
}

/// Solve the named chord and return its `limit` best voicings, sorted by lowest fret.
pub fn get_best_voicings(
    root: &str,
    quality: &str,
    limit: usize,
    tuning: &Tuning,
) -> Vec<ChordVoicing> {
    match resolve_chord(root, quality) {
        Some((root, quality)) => get_best_voicings_for(root, quality, limit, tuning),
        None => Vec::new(),
    }
}

/// Solve the given chord and return its `limit` best voicings, sorted by lowest fret.
pub fn get_best_voicings_for(
    root: PitchClass,
    quality: ChordQuality,
    limit: usize,
    tuning: &Tuning,
) -> Vec<ChordVoicing> {
    rank_voicings(&solve_chord_shapes_for(root, quality, tuning), root, limit)
}

// --------------------------------------------------------------------------------------------------
