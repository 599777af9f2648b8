use derive_more::Display;

// -------------------------------------------------------------------------------------------------

/// Shape classification of a set of intervals above a root.
#[derive(Debug, Display, Copy, Clone, PartialEq, Eq, Hash)]
pub enum VoicingType {
    /// Root, major third, major seventh.
    #[display("shell-major")]
    ShellMajor,
    /// Root, minor third, minor seventh.
    #[display("shell-minor")]
    ShellMinor,
    /// Root, major third, minor seventh.
    #[display("shell-dominant")]
    ShellDominant,
    #[display("triad-major")]
    TriadMajor,
    #[display("triad-minor")]
    TriadMinor,
    #[display("triad-diminished")]
    TriadDiminished,
    #[display("triad-augmented")]
    TriadAugmented,
    /// Four or more distinct notes.
    #[display("full")]
    Full,
    /// Two notes, or three notes which form neither a shell nor a triad.
    #[display("partial")]
    Partial,
    /// Less than two notes.
    #[display("unknown")]
    Unknown,
}

impl VoicingType {
    pub fn is_shell(&self) -> bool {
        matches!(self, Self::ShellMajor | Self::ShellMinor | Self::ShellDominant)
    }

    pub fn is_triad(&self) -> bool {
        matches!(
            self,
            Self::TriadMajor | Self::TriadMinor | Self::TriadDiminished | Self::TriadAugmented
        )
    }
}

/// Three note patterns, tested in order. Shells take precedence over triads.
const THREE_NOTE_PATTERNS: [([u8; 3], VoicingType); 7] = [
    ([0, 4, 11], VoicingType::ShellMajor),
    ([0, 3, 10], VoicingType::ShellMinor),
    ([0, 4, 10], VoicingType::ShellDominant),
    ([0, 4, 7], VoicingType::TriadMajor),
    ([0, 3, 7], VoicingType::TriadMinor),
    ([0, 3, 6], VoicingType::TriadDiminished),
    ([0, 4, 8], VoicingType::TriadAugmented),
];

// -------------------------------------------------------------------------------------------------

/// Classify a set of intervals (semitones above a root, in any order and octave).
///
/// Intervals are reduced to unique pitch class distances first, so `[7, 0, 16, 12]` is
/// treated as `[0, 4, 7]`.
pub fn detect_voicing_type(intervals: &[i32]) -> VoicingType {
    let mut normalized = intervals
        .iter()
        .map(|interval| interval.rem_euclid(12) as u8)
        .collect::<Vec<_>>();
    normalized.sort_unstable();
    normalized.dedup();
    match normalized.len() {
        0 | 1 => VoicingType::Unknown,
        2 => VoicingType::Partial,
        3 => THREE_NOTE_PATTERNS
            .iter()
            .find(|(pattern, _)| pattern.as_slice() == normalized.as_slice())
            .map(|(_, voicing_type)| *voicing_type)
            .unwrap_or(VoicingType::Partial),
        _ => VoicingType::Full,
    }
}

// --------------------------------------------------------------------------------------------------
