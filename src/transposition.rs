//! # Transposition Engine
//!
//! Finds every fretboard position that sounds a pitch and picks the one with
//! the lowest fret. "Transposition" here means moving a note to an easier
//! position at the same pitch, not changing key.
//!
//! The search is a plain scan over all 6 x 25 positions per pitch. The space is
//! fixed and small, so no lookup table is kept.
//!
//! ## Example
//! ```rust
//! use fretwise::{compute_note, transpose};
//!
//! // A2 played on the low E string, 5th fret
//! let notes = vec![compute_note(6, 5)?];
//! let result = transpose(&notes);
//!
//! // The open A string gives the same pitch
//! assert_eq!(result.transposed_notes[0].string_index(), 5);
//! assert_eq!(result.transposed_notes[0].fret_index(), 0);
//! assert_eq!(result.percentage_improvement(), 100.0);
//! # Ok::<(), fretwise::FretError>(())
//! ```

use crate::calculator::{compute_note, MAX_FRET, STRING_COUNT};
use crate::models::{average_fret, Note, Position, TranspositionResult};

/// All positions producing `target`, ordered by string then fret.
///
/// Empty when the pitch is outside the instrument's range.
pub fn find_all_positions(target: i32) -> Vec<Note> {
    (1..=STRING_COUNT)
        .flat_map(|string_index| (0..=MAX_FRET).map(move |fret_index| (string_index, fret_index)))
        .filter_map(|(string_index, fret_index)| compute_note(string_index, fret_index).ok())
        .filter(|note| note.pitch_number() == target)
        .collect()
}

/// The position for `target` with the smallest fret index.
///
/// Ties go to the lowest string index, i.e. the first candidate in search order.
pub fn find_lowest_position(target: i32) -> Option<Note> {
    // min_by_key keeps the first of several equal minimums
    find_all_positions(target)
        .into_iter()
        .min_by_key(|note| note.fret_index())
}

/// Move every note to its lowest-fret position and report fret averages.
///
/// Notes whose pitch has no position are left out of `transposed_notes`;
/// the order of the remaining notes follows the input.
pub fn transpose(original_notes: &[Note]) -> TranspositionResult {
    let mut transposed_notes = Vec::with_capacity(original_notes.len());

    for note in original_notes {
        match find_lowest_position(note.pitch_number()) {
            Some(lowest) => transposed_notes.push(lowest),
            None => log::debug!("No position found for {}, skipping", note),
        }
    }

    let result = TranspositionResult {
        original_notes: original_notes.to_vec(),
        original_average_fret: average_fret(original_notes),
        transposed_average_fret: average_fret(&transposed_notes),
        transposed_notes,
    };

    log::debug!(
        "Transposed {} of {} notes, average fret {:.1} -> {:.1}",
        result.transposed_notes.len(),
        result.original_notes.len(),
        result.original_average_fret,
        result.transposed_average_fret
    );

    result
}

/// Convert raw positions into notes, dropping any that are out of range.
///
/// Positions may come from untrusted input, so one bad entry never fails the
/// batch. Dropped entries are logged at warn level.
pub fn parse_positions(positions: &[Position]) -> Vec<Note> {
    positions
        .iter()
        .filter_map(|position| {
            match compute_note(position.string_index, position.fret_index) {
                Ok(note) => Some(note),
                Err(e) => {
                    log::warn!(
                        "Skipping position (string {}, fret {}): {}",
                        position.string_index,
                        position.fret_index,
                        e
                    );
                    None
                }
            }
        })
        .collect()
}
