//! Integration tests for fretwise
//!
//! Drives the public API from raw positions through to the final report.

use fretwise::{
    compute_note, find_all_positions, find_lowest_position, parse_positions, transpose,
    transpose_session, FretError, Position,
};
use pretty_assertions::assert_eq;

#[test]
fn test_high_e_twelfth_fret_end_to_end() {
    let notes = vec![compute_note(1, 12).unwrap()];
    assert_eq!(notes[0].pitch_number(), 76);

    let all = find_all_positions(76);
    assert!(all.iter().any(|n| n.position() == Position::new(1, 12)));
    assert!(all.iter().any(|n| n.position() == Position::new(2, 17)));

    let lowest = find_lowest_position(76).unwrap();
    let min_fret = all.iter().map(|n| n.fret_index()).min().unwrap();
    assert_eq!(lowest.fret_index(), min_fret);

    let result = transpose(&notes);
    assert_eq!(result.original_average_fret, 12.0);
    assert_eq!(result.transposed_average_fret, min_fret as f64);
}

#[test]
fn test_invalid_single_positions() {
    assert!(matches!(compute_note(7, 0), Err(FretError::InvalidArgument(_))));
    assert!(matches!(compute_note(1, 25), Err(FretError::InvalidArgument(_))));
}

#[test]
fn test_parse_then_transpose_scale() {
    // A minor pentatonic fragment played up the neck on the low strings
    let positions = vec![
        Position::new(6, 5),  // A2
        Position::new(6, 8),  // C3
        Position::new(5, 5),  // D3
        Position::new(5, 7),  // E3
        Position::new(0, 3),  // invalid, dropped
        Position::new(4, 5),  // G3
    ];
    let notes = parse_positions(&positions);
    assert_eq!(notes.len(), 5);

    let result = transpose(&notes);
    let names: Vec<&str> = result.transposed_notes.iter().map(|n| n.name()).collect();
    assert_eq!(names, vec!["A2", "C3", "D3", "E3", "G3"]);

    let moved: Vec<(i32, i32)> = result
        .transposed_notes
        .iter()
        .map(|n| (n.string_index(), n.fret_index()))
        .collect();
    assert_eq!(moved, vec![(5, 0), (5, 3), (4, 0), (4, 2), (3, 0)]);

    assert_eq!(result.original_average_fret, 6.0);
    assert_eq!(result.transposed_average_fret, 1.0);
    assert_eq!(result.fret_reduction(), 5.0);
    assert!((result.percentage_improvement() - 83.333).abs() < 0.001);
}

#[test]
fn test_transpose_session_document() {
    let source = r#"---
title: Open strings
positions:
  - { string: 6, fret: 5 }
  - { string: 5, fret: 5 }
  - { string: 8, fret: 1 }
"#;
    let (input, result) = transpose_session(source).unwrap();
    assert_eq!(input.title.as_deref(), Some("Open strings"));
    assert_eq!(input.positions.len(), 3);
    assert_eq!(result.original_notes.len(), 2);
    assert_eq!(result.transposed_average_fret, 0.0);
}

#[test]
fn test_transpose_session_with_only_invalid_positions() {
    let source = "positions:\n  - { string: 9, fret: 0 }\n";
    assert_eq!(transpose_session(source).unwrap_err(), FretError::NoNotes);
}
