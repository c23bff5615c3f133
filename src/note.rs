// Copyright (C) 2026 Michael Wilson <mike@mdwn.dev>
//
// This program is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free Software
// Foundation, version 3.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.
//

//! Pitch representation for kit key ranges.
//!
//! Notes use MIDI numbering: one unit is one semitone and 60 is middle C,
//! rendered as `c4`.

use std::fmt;
use std::str::FromStr;

/// Pitch class names, sharps only.
const PITCH_CLASSES: [&str; 12] = [
    "c", "c#", "d", "d#", "e", "f", "f#", "g", "g#", "a", "a#", "b",
];

/// Errors produced while parsing a note.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NoteError {
    #[error("unrecognized note name {0:?}")]
    InvalidName(String),
}

/// A pitch, one unit per semitone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Note(i32);

impl Note {
    /// The unset note. A reference key of zero lets the playback engine choose.
    pub const UNSET: Note = Note(0);

    /// The key cursor never starts below this, so the first assigned key is at least 12.
    pub const SCAN_FLOOR: Note = Note(11);

    /// The default start key.
    pub const C1: Note = Note(24);

    /// Creates a note from its MIDI number.
    pub const fn new(value: i32) -> Note {
        Note(value)
    }

    /// Returns true unless this is the unset note.
    pub fn is_set(&self) -> bool {
        *self != Note::UNSET
    }

    /// Advances the note by one semitone and returns the new value. Saturates at the top of
    /// the integer range.
    pub fn increment(&mut self) -> Note {
        *self = self.transpose(1);
        *self
    }

    /// Returns the note the given number of semitones away, saturating at the ends of the
    /// integer range.
    pub fn transpose(&self, semitones: i32) -> Note {
        Note(self.0.saturating_add(semitones))
    }

    /// Returns the number of semitones from this note up to the other.
    pub fn semitones_to(&self, other: Note) -> i32 {
        other.0.saturating_sub(self.0)
    }

    /// Renders the note as a lowercase pitch class followed by its octave, e.g. `c#4`.
    pub fn name(&self) -> String {
        let pitch_class = PITCH_CLASSES[self.0.rem_euclid(12) as usize];
        let octave = self.0.div_euclid(12) - 1;
        format!("{}{}", pitch_class, octave)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for Note {
    type Err = NoteError;

    /// Parses either a number (`60`) or a note name (`c4`, `C#4`, `db4`, `c-1`). Flats are
    /// accepted and resolve to the enharmonic sharp. Numbers outside the MIDI range are kept
    /// as they are; the scan floor is applied when keys are assigned.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.parse::<i32>() {
            Ok(value) => Ok(Note(value)),
            Err(_) => parse_name(trimmed).map(Note),
        }
    }
}

fn parse_name(name: &str) -> Result<i32, NoteError> {
    let invalid = || NoteError::InvalidName(name.to_string());
    let lower = name.to_ascii_lowercase();
    let mut chars = lower.chars();

    let semitone = match chars.next() {
        Some('c') => 0,
        Some('d') => 2,
        Some('e') => 4,
        Some('f') => 5,
        Some('g') => 7,
        Some('a') => 9,
        Some('b') => 11,
        _ => return Err(invalid()),
    };

    let rest = chars.as_str();
    let (accidental, octave) = if let Some(octave) = rest.strip_prefix('#') {
        (1, octave)
    } else if let Some(octave) = rest.strip_prefix('b') {
        (-1, octave)
    } else {
        (0, rest)
    };

    let octave: i32 = octave.parse().map_err(|_| invalid())?;
    octave
        .checked_add(1)
        .and_then(|octave| octave.checked_mul(12))
        .and_then(|base| base.checked_add(semitone + accidental))
        .ok_or_else(invalid)
}
