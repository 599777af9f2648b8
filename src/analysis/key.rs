use crate::{
    note::PitchClass,
    scale::{KeyMode, Scale, KEY_MODES},
};

// -------------------------------------------------------------------------------------------------

/// Max number of keys returned by [`detect_keys`].
pub const MAX_KEY_MATCHES: usize = 8;

// -------------------------------------------------------------------------------------------------

/// A major or minor key which contains a set of played notes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMatch {
    pub root: PitchClass,
    pub mode: KeyMode,
    /// Key name, e.g. "C Major".
    pub name: String,
    pub score: u32,
    /// Why the key matched: "bass match", "chord-root match" or "all N notes diatonic".
    pub reason: String,
}

impl KeyMatch {
    /// The diatonic scale of this key.
    pub fn scale(&self) -> Scale {
        Scale::new(self.root, self.mode)
    }
}

// -------------------------------------------------------------------------------------------------

/// Find major and minor keys whose scales contain all given pitch classes.
///
/// Keys rooted on the `bass` note are preferred, then keys rooted on the `chord_root`.
/// Returns at most [`MAX_KEY_MATCHES`] keys, best first. Equally scored keys keep their
/// chromatic order, with major before minor.
pub fn detect_keys(
    pitch_classes: &[PitchClass],
    bass: Option<PitchClass>,
    chord_root: Option<PitchClass>,
) -> Vec<KeyMatch> {
    // every key trivially contains no notes, so an empty set names no key
    if pitch_classes.is_empty() {
        return Vec::new();
    }
    let mut distinct = pitch_classes.to_vec();
    distinct.sort();
    distinct.dedup();

    let mut keys = Vec::new();
    for root in PitchClass::all() {
        for mode in KEY_MODES {
            let scale = Scale::new(root, mode);
            if !distinct.iter().all(|pitch_class| scale.contains(*pitch_class)) {
                continue;
            }
            let mut score = 50;
            let reason = if Some(root) == bass {
                score += 50;
                "bass match".to_string()
            } else if Some(root) == chord_root {
                score += 30;
                "chord-root match".to_string()
            } else {
                format!("all {} notes diatonic", distinct.len())
            };
            score += 2 * distinct.len() as u32;
            keys.push(KeyMatch {
                root,
                mode,
                name: scale.to_string(),
                score,
                reason,
            });
        }
    }
    keys.sort_by(|a, b| b.score.cmp(&a.score));
    keys.truncate(MAX_KEY_MATCHES);
    keys
}

// --------------------------------------------------------------------------------------------------
