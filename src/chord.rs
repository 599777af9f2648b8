//! Chord qualities as closed table of intervals, display symbols and complexity ranks.

use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::note::PitchClass;

// --------------------------------------------------------------------------------------------------

// triads
const MAJOR: [u8; 3] = [0, 4, 7];
const MINOR: [u8; 3] = [0, 3, 7];
const DIMINISHED: [u8; 3] = [0, 3, 6];
const AUG: [u8; 3] = [0, 4, 8];
const SUS2: [u8; 3] = [0, 2, 7];
const SUS4: [u8; 3] = [0, 5, 7];
const FIVE: [u8; 2] = [0, 7];
// sevenths and sixths
const DOM7: [u8; 4] = [0, 4, 7, 10];
const MAJOR7: [u8; 4] = [0, 4, 7, 11];
const MINOR7: [u8; 4] = [0, 3, 7, 10];
const SIX: [u8; 4] = [0, 4, 7, 9];
const MINOR6: [u8; 4] = [0, 3, 7, 9];
const ADD9: [u8; 4] = [0, 4, 7, 14];
const SEVEN_SUS4: [u8; 4] = [0, 5, 7, 10];
const MINOR7FLAT5: [u8; 4] = [0, 3, 6, 10];
const DIMINISHED7: [u8; 4] = [0, 3, 6, 9];
const MINOR_MAJOR7: [u8; 4] = [0, 3, 7, 11];
// extended
const NINE: [u8; 5] = [0, 4, 7, 10, 14];
const MAJOR9: [u8; 5] = [0, 4, 7, 11, 14];
const MINOR9: [u8; 5] = [0, 3, 7, 10, 14];

// --------------------------------------------------------------------------------------------------

/// Known chord qualities. The declaration order is the order in which qualities are tested
/// when analyzing fretted notes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChordQuality {
    Major,
    Minor,
    Power,
    Sus2,
    Sus4,
    Diminished,
    Augmented,
    Dominant7,
    Major7,
    Minor7,
    Major6,
    Minor6,
    Add9,
    Dominant7Sus4,
    HalfDiminished7,
    Diminished7,
    MinorMajor7,
    Dominant9,
    Major9,
    Minor9,
}

/// All chord qualities in analysis order.
pub const CHORD_QUALITIES: [ChordQuality; 20] = [
    ChordQuality::Major,
    ChordQuality::Minor,
    ChordQuality::Power,
    ChordQuality::Sus2,
    ChordQuality::Sus4,
    ChordQuality::Diminished,
    ChordQuality::Augmented,
    ChordQuality::Dominant7,
    ChordQuality::Major7,
    ChordQuality::Minor7,
    ChordQuality::Major6,
    ChordQuality::Minor6,
    ChordQuality::Add9,
    ChordQuality::Dominant7Sus4,
    ChordQuality::HalfDiminished7,
    ChordQuality::Diminished7,
    ChordQuality::MinorMajor7,
    ChordQuality::Dominant9,
    ChordQuality::Major9,
    ChordQuality::Minor9,
];

// map of all known chord names with various aliases
lazy_static! {
    static ref CHORD_TABLE: HashMap<&'static str, ChordQuality> = {
        let mut table = HashMap::new();
        for quality in CHORD_QUALITIES {
            table.insert(quality.name(), quality);
        }
        table.extend([
            ("maj", ChordQuality::Major),
            ("M", ChordQuality::Major),
            ("min", ChordQuality::Minor),
            ("m", ChordQuality::Minor),
            ("-", ChordQuality::Minor),
            ("5", ChordQuality::Power),
            ("five", ChordQuality::Power),
            ("dim", ChordQuality::Diminished),
            ("o", ChordQuality::Diminished),
            ("aug", ChordQuality::Augmented),
            ("+", ChordQuality::Augmented),
            ("7", ChordQuality::Dominant7),
            ("dom7", ChordQuality::Dominant7),
            ("maj7", ChordQuality::Major7),
            ("M7", ChordQuality::Major7),
            ("m7", ChordQuality::Minor7),
            ("min7", ChordQuality::Minor7),
            ("-7", ChordQuality::Minor7),
            ("6", ChordQuality::Major6),
            ("six", ChordQuality::Major6),
            ("m6", ChordQuality::Minor6),
            ("min6", ChordQuality::Minor6),
            ("+9", ChordQuality::Add9),
            ("7sus4", ChordQuality::Dominant7Sus4),
            ("m7b5", ChordQuality::HalfDiminished7),
            ("min7b5", ChordQuality::HalfDiminished7),
            ("ø", ChordQuality::HalfDiminished7),
            ("dim7", ChordQuality::Diminished7),
            ("o7", ChordQuality::Diminished7),
            ("mMaj7", ChordQuality::MinorMajor7),
            ("minMaj7", ChordQuality::MinorMajor7),
            ("9", ChordQuality::Dominant9),
            ("dom9", ChordQuality::Dominant9),
            ("maj9", ChordQuality::Major9),
            ("M9", ChordQuality::Major9),
            ("m9", ChordQuality::Minor9),
            ("min9", ChordQuality::Minor9),
        ]);
        table
    };
}

// --------------------------------------------------------------------------------------------------

impl ChordQuality {
    /// Canonical name, e.g. "Major" or "Dominant7".
    pub fn name(&self) -> &'static str {
        match self {
            Self::Major => "Major",
            Self::Minor => "Minor",
            Self::Power => "Power",
            Self::Sus2 => "Sus2",
            Self::Sus4 => "Sus4",
            Self::Diminished => "Diminished",
            Self::Augmented => "Augmented",
            Self::Dominant7 => "Dominant7",
            Self::Major7 => "Major7",
            Self::Minor7 => "Minor7",
            Self::Major6 => "Major6",
            Self::Minor6 => "Minor6",
            Self::Add9 => "Add9",
            Self::Dominant7Sus4 => "Dominant7Sus4",
            Self::HalfDiminished7 => "HalfDiminished7",
            Self::Diminished7 => "Diminished7",
            Self::MinorMajor7 => "MinorMajor7",
            Self::Dominant9 => "Dominant9",
            Self::Major9 => "Major9",
            Self::Minor9 => "Minor9",
        }
    }

    /// Symbol appended to the root name in chord names, e.g. "m7" in "Am7".
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Major => "",
            Self::Minor => "m",
            Self::Power => "5",
            Self::Sus2 => "sus2",
            Self::Sus4 => "sus4",
            Self::Diminished => "dim",
            Self::Augmented => "aug",
            Self::Dominant7 => "7",
            Self::Major7 => "maj7",
            Self::Minor7 => "m7",
            Self::Major6 => "6",
            Self::Minor6 => "m6",
            Self::Add9 => "add9",
            Self::Dominant7Sus4 => "7sus4",
            Self::HalfDiminished7 => "m7b5",
            Self::Diminished7 => "dim7",
            Self::MinorMajor7 => "mMaj7",
            Self::Dominant9 => "9",
            Self::Major9 => "maj9",
            Self::Minor9 => "m9",
        }
    }

    /// Intervals in semitones above the root. Extensions may exceed an octave.
    pub fn intervals(&self) -> &'static [u8] {
        match self {
            Self::Major => &MAJOR,
            Self::Minor => &MINOR,
            Self::Power => &FIVE,
            Self::Sus2 => &SUS2,
            Self::Sus4 => &SUS4,
            Self::Diminished => &DIMINISHED,
            Self::Augmented => &AUG,
            Self::Dominant7 => &DOM7,
            Self::Major7 => &MAJOR7,
            Self::Minor7 => &MINOR7,
            Self::Major6 => &SIX,
            Self::Minor6 => &MINOR6,
            Self::Add9 => &ADD9,
            Self::Dominant7Sus4 => &SEVEN_SUS4,
            Self::HalfDiminished7 => &MINOR7FLAT5,
            Self::Diminished7 => &DIMINISHED7,
            Self::MinorMajor7 => &MINOR_MAJOR7,
            Self::Dominant9 => &NINE,
            Self::Major9 => &MAJOR9,
            Self::Minor9 => &MINOR9,
        }
    }

    /// Ordinal complexity: simpler chords rank lower.
    pub fn complexity(&self) -> u8 {
        match self {
            Self::Major | Self::Minor => 0,
            Self::Power | Self::Sus2 | Self::Sus4 => 1,
            Self::Diminished | Self::Augmented => 2,
            Self::Dominant7 | Self::Major7 | Self::Minor7 => 3,
            Self::Major6 | Self::Minor6 | Self::Add9 | Self::Dominant7Sus4 => 4,
            Self::HalfDiminished7 | Self::Diminished7 | Self::MinorMajor7 => 5,
            Self::Dominant9 | Self::Major9 | Self::Minor9 => 6,
        }
    }

    /// Intervals reduced to a single octave, in table order and without duplicates.
    pub fn interval_classes(&self) -> Vec<u8> {
        let mut classes = Vec::with_capacity(self.intervals().len());
        for interval in self.intervals() {
            let class = interval % 12;
            if !classes.contains(&class) {
                classes.push(class);
            }
        }
        classes
    }

    /// Number of distinct pitch classes in the chord.
    pub fn tone_count(&self) -> usize {
        self.interval_classes().len()
    }

    /// True for qualities containing a minor or major seventh, where the perfect fifth may be
    /// left out without changing the chord's identity.
    pub fn has_seventh(&self) -> bool {
        self.interval_classes()
            .iter()
            .any(|interval| *interval == 10 || *interval == 11)
    }

    /// Pitch classes of this chord quality played from the given root, in interval order.
    pub fn pitch_classes(&self, root: PitchClass) -> Vec<PitchClass> {
        self.interval_classes()
            .into_iter()
            .map(|interval| root.transposed(interval as i32))
            .collect()
    }
}

impl TryFrom<&str> for ChordQuality {
    type Error = String;

    /// Resolve a quality by its canonical name (case insensitive) or one of its aliases.
    fn try_from(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if let Some(quality) = CHORD_TABLE.get(s) {
            return Ok(*quality);
        }
        CHORD_QUALITIES
            .iter()
            .find(|quality| quality.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| {
                format!(
                    "Invalid chord identifier '{}'. Valid chords are: {}",
                    s,
                    chord_names()
                )
            })
    }
}

impl Display for ChordQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// --------------------------------------------------------------------------------------------------

/// return list of all known chord names and aliases, sorted.
pub fn chord_names() -> String {
    let mut names = CHORD_TABLE.keys().copied().collect::<Vec<_>>();
    names.sort_unstable();
    names.join(", ")
}

/// Scale degree label for an interval in semitones, e.g. "b3" or "9".
pub fn interval_label(interval: u8) -> &'static str {
    const LABELS: [&str; 12] = [
        "R", "b2", "2", "b3", "3", "4", "b5", "5", "#5", "6", "b7", "7",
    ];
    match interval {
        13 => "b9",
        14 => "9",
        15 => "#9",
        17 => "11",
        18 => "#11",
        21 => "13",
        _ => LABELS[(interval % 12) as usize],
    }
}

// --------------------------------------------------------------------------------------------------
