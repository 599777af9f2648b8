//! Diatonic scales for major and natural minor keys.

use derive_more::Display;

use crate::note::PitchClass;

// -------------------------------------------------------------------------------------------------

/// Key modes which can be detected from fretted notes.
#[derive(Debug, Display, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KeyMode {
    #[display("Major")]
    Major,
    #[display("Minor")]
    Minor,
}

/// Both key modes, in detection order.
pub const KEY_MODES: [KeyMode; 2] = [KeyMode::Major, KeyMode::Minor];

impl KeyMode {
    /// Raw scale degrees per semitone, where 0 indicates no step.
    fn degrees(&self) -> &'static [usize; 12] {
        match self {
            // [0, 2, 4, 5, 7, 9, 11]
            Self::Major => &[1, 0, 2, 0, 3, 4, 0, 5, 0, 6, 0, 7],
            // [0, 2, 3, 5, 7, 8, 10]
            Self::Minor => &[1, 0, 2, 3, 0, 4, 0, 5, 6, 0, 7, 0],
        }
    }

    /// Semitone steps of the mode, ascending from the key note.
    pub fn steps(&self) -> Vec<u8> {
        self.degrees()
            .iter()
            .copied()
            .enumerate()
            .filter(|(_s, d)| *d != 0)
            .map(|(s, _d)| s as u8)
            .collect()
    }
}

impl TryFrom<&str> for KeyMode {
    type Error = String;

    fn try_from(mode: &str) -> Result<Self, String> {
        match mode.trim().to_ascii_lowercase().as_str() {
            "major" | "maj" | "ionian" | "natural major" => Ok(Self::Major),
            "minor" | "min" | "aeolian" | "natural minor" => Ok(Self::Minor),
            _ => Err(format!("Unknown key mode '{}'", mode)),
        }
    }
}

// -------------------------------------------------------------------------------------------------

/// A diatonic scale: a key note and a mode.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Scale {
    key: PitchClass,
    mode: KeyMode,
}

impl Scale {
    pub fn new(key: PitchClass, mode: KeyMode) -> Self {
        Self { key, mode }
    }

    /// Key note.
    pub fn key(&self) -> PitchClass {
        self.key
    }

    /// Mode of the scale.
    pub fn mode(&self) -> KeyMode {
        self.mode
    }

    /// The 7 diatonic pitch classes, ascending from the key note.
    pub fn pitch_classes(&self) -> Vec<PitchClass> {
        self.mode
            .steps()
            .into_iter()
            .map(|step| self.key.transposed(step as i32))
            .collect()
    }

    /// Returns true if the given pitch class belongs to the scale. Membership is tested on
    /// pitch class numbers, so enharmonic spellings are equivalent.
    pub fn contains(&self, pitch_class: PitchClass) -> bool {
        self.mode.degrees()[pitch_class.interval_from(self.key) as usize] != 0
    }
}

impl std::fmt::Display for Scale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.key, self.mode)
    }
}

// --------------------------------------------------------------------------------------------------
