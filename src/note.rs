//! Pitches and pitch classes: MIDI note numbers, note name parsing and enharmonic
//! normalization.

use std::{
    fmt::Display,
    ops::{Add, Sub},
};

use derive_more::Into;

// -------------------------------------------------------------------------------------------------

/// Canonical pitch class names. Sharps are used for all black keys.
pub const PITCH_CLASS_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

// -------------------------------------------------------------------------------------------------

/// One of the 12 chromatic pitch classes, stored as a semitone offset from C (0..12).
///
/// Enharmonic spellings resolve to the same value, so "Db" and "C#" compare equal.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Into)]
pub struct PitchClass(u8);

impl PitchClass {
    pub const C: Self = Self(0);
    pub const CS: Self = Self(1);
    pub const D: Self = Self(2);
    pub const DS: Self = Self(3);
    pub const E: Self = Self(4);
    pub const F: Self = Self(5);
    pub const FS: Self = Self(6);
    pub const G: Self = Self(7);
    pub const GS: Self = Self(8);
    pub const A: Self = Self(9);
    pub const AS: Self = Self(10);
    pub const B: Self = Self(11);

    /// Create a pitch class from any semitone value, wrapping it into 0..12.
    pub fn new(semitones: i32) -> Self {
        Self(semitones.rem_euclid(12) as u8)
    }

    /// All 12 pitch classes in ascending order, starting at C.
    pub fn all() -> impl Iterator<Item = PitchClass> {
        (0..12).map(PitchClass)
    }

    /// Semitone offset from C.
    pub fn index(&self) -> u8 {
        self.0
    }

    /// Canonical (sharp) name of this pitch class.
    pub fn name(&self) -> &'static str {
        PITCH_CLASS_NAMES[self.0 as usize]
    }

    /// Ascending distance in semitones from `root` to this pitch class (0..12).
    pub fn interval_from(&self, root: PitchClass) -> u8 {
        (self.0 + 12 - root.0) % 12
    }

    /// Return a new pitch class, transposed by the given number of semitones.
    #[must_use]
    pub fn transposed(&self, semitones: i32) -> Self {
        Self::new(self.0 as i32 + semitones)
    }
}

impl TryFrom<&str> for PitchClass {
    type Error = String;

    /// Parse a note name without octave: `C`, `c#`, `Db`, `F♯`, `Bb`.
    fn try_from(s: &str) -> Result<Self, String> {
        let s = s.trim();
        let (semitones, rest) = parse_note_name(s)?;
        if !rest.is_empty() {
            return Err(format!(
                "invalid pitch class '{}' - unexpected trailing characters '{}'.",
                s, rest
            ));
        }
        Ok(Self::new(semitones))
    }
}

impl From<Pitch> for PitchClass {
    fn from(pitch: Pitch) -> Self {
        pitch.pitch_class()
    }
}

impl Display for PitchClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// -------------------------------------------------------------------------------------------------

/// An absolute pitch as MIDI note number (0..=127), where C4 = 60 and E2 = 40.
///
/// For string conversions, the following notation is supported:
/// `C4` (plain), `C#1` (sharps), `Db1` (flats), `D_2` (using _ as separator),
/// `G 5` (using space as separator), `C-1` (negative octave). Missing octaves default to 4.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Into)]
pub struct Pitch(u8);

impl Pitch {
    /// Create a pitch from a MIDI note number. Values above 127 are clamped.
    pub fn from_midi(midi: u8) -> Self {
        Self(midi.min(0x7f))
    }

    /// MIDI note number.
    pub fn midi(&self) -> u8 {
        self.0
    }

    /// Pitch class of this pitch.
    pub fn pitch_class(&self) -> PitchClass {
        PitchClass::new(self.0 as i32)
    }

    /// Octave, using the C4 = 60 convention (so MIDI 0 is in octave -1).
    pub fn octave(&self) -> i32 {
        self.0 as i32 / 12 - 1
    }

    /// Return a new transposed pitch with the given offset, clamped to the MIDI range.
    #[must_use]
    pub fn transposed(&self, offset: i32) -> Self {
        Self((self.0 as i32 + offset).clamp(0, 0x7f) as u8)
    }
}

impl TryFrom<&str> for Pitch {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, String> {
        let trimmed = s.trim();
        let (semitones, rest) = parse_note_name(trimmed)?;
        let rest = rest.trim_start_matches(['_', ' ', '\t']);
        let octave = if rest.is_empty() {
            4
        } else {
            rest.parse::<i32>()
                .map_err(|e| format!("invalid note str '{}': {}", trimmed, e))?
        };
        if !(-1..=9).contains(&octave) {
            return Err(format!(
                "invalid note str '{}' - octave '{}' is out of range.",
                trimmed, octave
            ));
        }
        let midi = (octave + 1) * 12 + semitones;
        if !(0..=0x7f).contains(&midi) {
            return Err(format!(
                "invalid note str '{}' - note is out of the MIDI range.",
                trimmed
            ));
        }
        Ok(Self(midi as u8))
    }
}

impl Add<u8> for Pitch {
    type Output = Self;
    fn add(self, rhs: u8) -> Self {
        self.transposed(rhs as i32)
    }
}

impl Sub<u8> for Pitch {
    type Output = Self;
    fn sub(self, rhs: u8) -> Self {
        self.transposed(-(rhs as i32))
    }
}

impl Display for Pitch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.pitch_class(), self.octave())
    }
}

// -------------------------------------------------------------------------------------------------

/// Parse a leading note letter with an optional single accidental. Returns the semitone
/// offset from C (may be -1 for "Cb" or 12 for "B#") and the unparsed remainder.
fn parse_note_name(s: &str) -> Result<(i32, &str), String> {
    let mut chars = s.char_indices();
    let semitones = match chars.next() {
        Some((_, c)) => match c.to_ascii_lowercase() {
            'c' => 0,
            'd' => 2,
            'e' => 4,
            'f' => 5,
            'g' => 7,
            'a' => 9,
            'b' => 11,
            _ => {
                return Err(format!(
                    "invalid note str '{}' - note character '{}' is invalid.",
                    s, c
                ))
            }
        },
        None => return Err("invalid note str '' - string is too short.".to_string()),
    };
    match chars.next() {
        Some((index, c)) if matches!(c, '#' | '♯' | 's' | 'S') => {
            Ok((semitones + 1, &s[index + c.len_utf8()..]))
        }
        Some((index, c)) if matches!(c, 'b' | '♭') => Ok((semitones - 1, &s[index + c.len_utf8()..])),
        Some((index, _)) => Ok((semitones, &s[index..])),
        None => Ok((semitones, "")),
    }
}

// --------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::{Pitch, PitchClass};

    #[test]
    fn pitch_class_arithmetic() {
        assert_eq!(PitchClass::new(-1), PitchClass::B);
        assert_eq!(PitchClass::new(25), PitchClass::CS);
        assert_eq!(PitchClass::E.interval_from(PitchClass::C), 4);
        assert_eq!(PitchClass::C.interval_from(PitchClass::E), 8);
        assert_eq!(PitchClass::A.transposed(3), PitchClass::C);
        assert_eq!(PitchClass::all().count(), 12);
    }

    #[test]
    fn pitch_class_enharmonics() -> Result<(), String> {
        assert_eq!(PitchClass::try_from("Db")?, PitchClass::try_from("C#")?);
        assert_eq!(PitchClass::try_from("Gb")?, PitchClass::FS);
        assert_eq!(PitchClass::try_from("cb")?, PitchClass::B);
        assert_eq!(PitchClass::try_from("B#")?, PitchClass::C);
        assert_eq!(PitchClass::try_from("A♭")?, PitchClass::GS);
        assert_eq!(PitchClass::try_from(" e ")?, PitchClass::E);

        assert!(PitchClass::try_from("X").is_err());
        assert!(PitchClass::try_from("").is_err());
        assert!(PitchClass::try_from("C4").is_err());
        assert!(PitchClass::try_from("c##").is_err());
        Ok(())
    }

    #[test]
    fn pitch_serialization() {
        assert_eq!(Pitch::from_midi(40).to_string(), "E2");
        assert_eq!(Pitch::from_midi(60).to_string(), "C4");
        assert_eq!(Pitch::from_midi(0).to_string(), "C-1");
        assert_eq!(Pitch::from_midi(70).to_string(), "A#4");
        assert_eq!(PitchClass::DS.to_string(), "D#");
    }

    #[test]
    fn pitch_deserialization() -> Result<(), String> {
        assert!(Pitch::try_from("x4").is_err());
        assert!(Pitch::try_from("c.2").is_err());
        assert!(Pitch::try_from("cc2").is_err());
        assert!(Pitch::try_from("c##2").is_err());
        assert!(Pitch::try_from("G10").is_err());

        assert_eq!(Pitch::try_from("E2")?.midi(), 40);
        assert_eq!(Pitch::try_from("A2")?.midi(), 45);
        assert_eq!(Pitch::try_from("E4")?.midi(), 64);
        assert_eq!(Pitch::try_from("Cb4")?.midi(), 59);
        assert_eq!(Pitch::try_from("C#3")?.midi(), 49);
        assert_eq!(Pitch::try_from("D_2")?.midi(), 38);
        assert_eq!(Pitch::try_from("g 3")?.midi(), 55);
        assert_eq!(Pitch::try_from("bb2")?.midi(), 46);
        assert_eq!(Pitch::try_from("C-1")?.midi(), 0);
        assert_eq!(Pitch::try_from("C")?.midi(), 60);
        Ok(())
    }

    #[test]
    fn pitch_transposition() {
        let e2 = Pitch::from_midi(40);
        assert_eq!(e2 + 5, Pitch::from_midi(45));
        assert_eq!(e2 - 2, Pitch::from_midi(38));
        assert_eq!(Pitch::from_midi(126).transposed(5).midi(), 127);
        assert_eq!(PitchClass::from(e2), PitchClass::E);
    }
}
