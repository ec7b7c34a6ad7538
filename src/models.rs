//! # Fretboard Data Types
//!
//! Value types shared by the calculator and the transposition engine.
//!
//! - [`Position`] - a raw (string, fret) pair, possibly out of range
//! - [`Note`] - a position annotated with pitch, name and frequency
//! - [`TranspositionResult`] - original vs. transposed notes plus fret averages

use serde::{Deserialize, Serialize};
use std::fmt;

/// A physical location on the fretboard.
///
/// String 1 is the highest-pitched open string. Values are not range-checked
/// here; validation happens when the position is turned into a [`Note`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    #[serde(rename = "string")]
    pub string_index: i32,
    #[serde(rename = "fret")]
    pub fret_index: i32,
}

impl Position {
    pub fn new(string_index: i32, fret_index: i32) -> Self {
        Position {
            string_index,
            fret_index,
        }
    }
}

/// A sounding note at a valid position.
///
/// Only the calculator builds notes, so pitch, name and frequency always agree
/// with the position under the standard tuning.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Note {
    position: Position,
    pitch_number: i32,
    name: String,
    frequency_hz: f64,
}

impl Note {
    pub(crate) fn new(
        position: Position,
        pitch_number: i32,
        name: String,
        frequency_hz: f64,
    ) -> Self {
        Note {
            position,
            pitch_number,
            name,
            frequency_hz,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn string_index(&self) -> i32 {
        self.position.string_index
    }

    pub fn fret_index(&self) -> i32 {
        self.position.fret_index
    }

    /// MIDI-style pitch number (60 = C4)
    pub fn pitch_number(&self) -> i32 {
        self.pitch_number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn frequency_hz(&self) -> f64 {
        self.frequency_hz
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (String {}, Fret {})",
            self.name, self.position.string_index, self.position.fret_index
        )
    }
}

/// Outcome of a batch transposition.
///
/// `transposed_notes` keeps the input order but may be shorter than
/// `original_notes` when a pitch has no playable position.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TranspositionResult {
    pub original_notes: Vec<Note>,
    pub transposed_notes: Vec<Note>,
    pub original_average_fret: f64,
    pub transposed_average_fret: f64,
}

impl TranspositionResult {
    /// How many frets lower the transposed notes sit on average.
    pub fn fret_reduction(&self) -> f64 {
        self.original_average_fret - self.transposed_average_fret
    }

    /// Fret reduction as a percentage of the original average; 0 when the
    /// original notes were all open strings.
    pub fn percentage_improvement(&self) -> f64 {
        if self.original_average_fret == 0.0 {
            0.0
        } else {
            100.0 * self.fret_reduction() / self.original_average_fret
        }
    }

    pub fn is_successful(&self) -> bool {
        !self.transposed_notes.is_empty()
    }
}

/// Arithmetic mean of the fret indices, 0 for an empty slice.
pub(crate) fn average_fret(notes: &[Note]) -> f64 {
    if notes.is_empty() {
        return 0.0;
    }
    let total: i64 = notes.iter().map(|n| n.fret_index() as i64).sum();
    total as f64 / notes.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn note(string_index: i32, fret_index: i32) -> Note {
        Note::new(Position::new(string_index, fret_index), 0, "C4".to_string(), 261.63)
    }

    #[test]
    fn test_position_value_equality() {
        assert_eq!(Position::new(2, 5), Position::new(2, 5));
        assert_ne!(Position::new(2, 5), Position::new(5, 2));

        let set: HashSet<Position> = [
            Position::new(1, 0),
            Position::new(1, 0),
            Position::new(3, 7),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_note_display() {
        let n = Note::new(Position::new(1, 12), 76, "E5".to_string(), 659.26);
        assert_eq!(n.to_string(), "E5 (String 1, Fret 12)");
    }

    #[test]
    fn test_average_fret() {
        assert_eq!(average_fret(&[]), 0.0);
        assert_eq!(average_fret(&[note(1, 3), note(2, 6)]), 4.5);
    }

    #[test]
    fn test_derived_statistics() {
        let result = TranspositionResult {
            original_notes: vec![note(1, 10)],
            transposed_notes: vec![note(2, 4)],
            original_average_fret: 10.0,
            transposed_average_fret: 4.0,
        };
        assert_eq!(result.fret_reduction(), 6.0);
        assert_eq!(result.percentage_improvement(), 60.0);
        assert!(result.is_successful());
    }

    #[test]
    fn test_percentage_improvement_with_open_strings() {
        let result = TranspositionResult {
            original_notes: vec![note(1, 0)],
            transposed_notes: vec![note(1, 0)],
            original_average_fret: 0.0,
            transposed_average_fret: 0.0,
        };
        assert_eq!(result.percentage_improvement(), 0.0);
    }

    #[test]
    fn test_empty_result_is_not_successful() {
        let result = TranspositionResult::default();
        assert!(!result.is_successful());
        assert_eq!(result.fret_reduction(), 0.0);
    }
}
