//! Fretboard geometry: tunings, per-string fret positions and the pitch mapping between them.

use std::fmt::Display;

use anyhow::Context;
use lazy_static::lazy_static;

use crate::note::{Pitch, PitchClass};

// -------------------------------------------------------------------------------------------------

/// Number of strings of the default instrument.
pub const STRING_COUNT: usize = 6;
/// Number of frets searched by the solvers. Frets `0..FRET_COUNT` are used.
pub const FRET_COUNT: u8 = 15;
/// Maximum distance between the lowest and highest fretted (non-open) position.
pub const MAX_HAND_SPAN: u8 = 4;
/// Highest fret number a voicing may use.
pub const MAX_FRET: u8 = 24;

// -------------------------------------------------------------------------------------------------

/// The state of a single string in a voicing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FretPosition {
    /// String is not played.
    Muted,
    /// String is played at the given fret. 0 is the open string.
    Fretted(u8),
}

impl FretPosition {
    /// Fret number, if the string is played.
    pub fn fret(&self) -> Option<u8> {
        match self {
            Self::Muted => None,
            Self::Fretted(fret) => Some(*fret),
        }
    }

    pub fn is_played(&self) -> bool {
        matches!(self, Self::Fretted(_))
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Fretted(0))
    }

    /// Parse a fret line in tab notation. Without whitespace every character is one string
    /// (`x32010`), else strings are separated by whitespace (`x 10 12 12 11 x`).
    /// `x`, `X` and `-` mark muted strings.
    pub fn parse_tab(s: &str) -> Result<Vec<FretPosition>, String> {
        fn parse_one(token: &str, line: &str) -> Result<FretPosition, String> {
            match token {
                "x" | "X" | "-" => Ok(FretPosition::Muted),
                _ => {
                    let fret = token
                        .parse::<u8>()
                        .map_err(|e| format!("invalid fret '{}' in tab '{}': {}", token, line, e))?;
                    if fret > MAX_FRET {
                        return Err(format!(
                            "invalid fret '{}' in tab '{}' - fret is out of range.",
                            token, line
                        ));
                    }
                    Ok(FretPosition::Fretted(fret))
                }
            }
        }
        let line = s.trim();
        if line.contains(char::is_whitespace) {
            line.split_whitespace()
                .map(|token| parse_one(token, line))
                .collect()
        } else {
            line.char_indices()
                .map(|(index, c)| parse_one(&line[index..index + c.len_utf8()], line))
                .collect()
        }
    }
}

impl Display for FretPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Muted => write!(f, "x"),
            Self::Fretted(fret) => write!(f, "{}", fret),
        }
    }
}

// -------------------------------------------------------------------------------------------------

/// Open string pitches of an instrument, ordered from the lowest (index 0) to the highest string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tuning {
    strings: Vec<Pitch>,
}

/// Known tuning names and their open string MIDI notes, lowest string first.
const NAMED_TUNINGS: [(&str, [u8; STRING_COUNT]); 9] = [
    ("standard", [40, 45, 50, 55, 59, 64]),
    ("drop d", [38, 45, 50, 55, 59, 64]),
    ("double drop d", [38, 45, 50, 55, 59, 62]),
    ("dadgad", [38, 45, 50, 55, 57, 62]),
    ("open d", [38, 45, 50, 54, 57, 62]),
    ("open g", [38, 43, 50, 55, 59, 62]),
    ("open e", [40, 47, 52, 56, 59, 64]),
    ("half step down", [39, 44, 49, 54, 58, 63]),
    ("full step down", [38, 43, 48, 53, 57, 62]),
];

lazy_static! {
    static ref STANDARD_TUNING: Tuning = Tuning::from_midi(&NAMED_TUNINGS[0].1);
}

impl Tuning {
    /// Create a tuning from open string pitches, lowest string first.
    pub fn new(strings: Vec<Pitch>) -> Self {
        Self { strings }
    }

    fn from_midi(notes: &[u8]) -> Self {
        Self::new(notes.iter().copied().map(Pitch::from_midi).collect())
    }

    /// Standard guitar tuning: E2 A2 D3 G3 B3 E4.
    pub fn standard() -> &'static Tuning {
        &STANDARD_TUNING
    }

    /// Look up a named tuning preset such as "Drop D" or "DADGAD" (case insensitive).
    pub fn from_name(name: &str) -> Option<Tuning> {
        let name = name.trim();
        NAMED_TUNINGS
            .iter()
            .find(|(preset, _)| preset.eq_ignore_ascii_case(name))
            .map(|(_, notes)| Self::from_midi(notes))
    }

    /// Names of all tuning presets.
    pub fn preset_names() -> Vec<&'static str> {
        NAMED_TUNINGS.iter().map(|(name, _)| *name).collect()
    }

    pub fn string_count(&self) -> usize {
        self.strings.len()
    }

    /// Open string pitches, lowest string first.
    pub fn strings(&self) -> &[Pitch] {
        &self.strings
    }

    /// MIDI note of the given open string.
    ///
    /// ### Panics
    ///
    /// Panics if `string` is not a valid string index.
    pub fn open_midi(&self, string: usize) -> u8 {
        self.strings[string].midi()
    }

    /// MIDI note sounding on the given string and fret.
    pub fn midi_at(&self, string: usize, fret: u8) -> u8 {
        self.open_midi(string) + fret
    }

    /// Pitch class sounding on the given string and fret.
    pub fn pitch_class_at(&self, string: usize, fret: u8) -> PitchClass {
        PitchClass::new(self.midi_at(string, fret) as i32)
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self::standard().clone()
    }
}

impl TryFrom<&[&str]> for Tuning {
    type Error = anyhow::Error;

    /// Parse open string note names, lowest string first, e.g. `["E2", "A2", ...]`.
    fn try_from(strings: &[&str]) -> anyhow::Result<Self> {
        anyhow::ensure!(!strings.is_empty(), "a tuning needs at least one string");
        let strings = strings
            .iter()
            .enumerate()
            .map(|(index, note)| {
                Pitch::try_from(*note)
                    .map_err(anyhow::Error::msg)
                    .with_context(|| format!("invalid tuning entry for string {}", index + 1))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(Self::new(strings))
    }
}

impl Display for Tuning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names = self
            .strings
            .iter()
            .map(|pitch| pitch.to_string())
            .collect::<Vec<_>>();
        write!(f, "{}", names.join(" "))
    }
}

// --------------------------------------------------------------------------------------------------
