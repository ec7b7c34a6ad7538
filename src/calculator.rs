//! # Pitch Calculator
//!
//! Closed-form conversions between fretboard positions and pitch under
//! standard guitar tuning.
//!
//! ## Pitch Numbers
//! Pitches are MIDI-style semitone numbers: 60 = C4 (middle C), 69 = A4 (440 Hz).
//! A fretted note is simply the open string's pitch plus the fret index.
//!
//! ## Example
//! ```rust
//! use fretwise::calculator::{frequency_hz, pitch_name, pitch_number};
//!
//! let pitch = pitch_number(1, 12)?; // high E string, 12th fret
//! assert_eq!(pitch, 76);
//! assert_eq!(pitch_name(pitch), "E5");
//! assert!((frequency_hz(pitch) - 659.255).abs() < 0.001);
//! # Ok::<(), fretwise::FretError>(())
//! ```

use crate::error::FretError;
use crate::models::{Note, Position};

pub const STRING_COUNT: i32 = 6;
pub const MAX_FRET: i32 = 24;

/// Open string pitches, string 1 (high E) to string 6 (low E): E4 B3 G3 D3 A2 E2
pub const OPEN_STRING_PITCHES: [i32; STRING_COUNT as usize] = [64, 59, 55, 50, 45, 40];

const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

const A4_PITCH: i32 = 69;
const A4_FREQUENCY: f64 = 440.0;

/// Pitch of the string played open. `string_index` must already be validated.
fn open_string_pitch(string_index: i32) -> i32 {
    OPEN_STRING_PITCHES[(string_index - 1) as usize]
}

/// Pitch number produced by pressing `fret_index` on `string_index`.
///
/// # Errors
/// [`FretError::InvalidArgument`] if the string is outside 1..=6 or the fret
/// outside 0..=24.
pub fn pitch_number(string_index: i32, fret_index: i32) -> Result<i32, FretError> {
    if !(1..=STRING_COUNT).contains(&string_index) {
        return Err(FretError::InvalidArgument(format!(
            "string must be between 1 and {}, got {}",
            STRING_COUNT, string_index
        )));
    }
    if !(0..=MAX_FRET).contains(&fret_index) {
        return Err(FretError::InvalidArgument(format!(
            "fret must be between 0 and {}, got {}",
            MAX_FRET, fret_index
        )));
    }
    Ok(open_string_pitch(string_index) + fret_index)
}

/// Note name with octave, e.g. 60 -> "C4", 69 -> "A4"
pub fn pitch_name(pitch_number: i32) -> String {
    let octave = pitch_number.div_euclid(12) - 1;
    let letter = NOTE_NAMES[pitch_number.rem_euclid(12) as usize];
    format!("{}{}", letter, octave)
}

/// Equal-tempered frequency in Hz, referenced to A4 = 440 Hz
pub fn frequency_hz(pitch_number: i32) -> f64 {
    A4_FREQUENCY * 2f64.powf((pitch_number - A4_PITCH) as f64 / 12.0)
}

/// Build the fully annotated note for a position.
///
/// This is the entry point for a single raw click or manual entry.
///
/// # Errors
/// [`FretError::InvalidArgument`] for out-of-range positions.
pub fn compute_note(string_index: i32, fret_index: i32) -> Result<Note, FretError> {
    let pitch = pitch_number(string_index, fret_index)?;
    Ok(Note::new(
        Position::new(string_index, fret_index),
        pitch,
        pitch_name(pitch),
        frequency_hz(pitch),
    ))
}
