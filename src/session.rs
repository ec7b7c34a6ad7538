//! # Sessions and Reports
//!
//! A [`Session`] holds the notes a user has entered and the most recent
//! transposition, and the render functions turn a result into text or YAML.
//!
//! ## Session Documents
//! Positions can be loaded from YAML:
//! ```yaml
//! title: Opening riff
//! positions:
//!   - { string: 1, fret: 12 }
//!   - { string: 6, fret: 5 }
//! ```
//!
//! ## Example
//! ```rust
//! use fretwise::session::{parse_session, render_report, Session};
//!
//! let input = parse_session("positions:\n  - { string: 6, fret: 5 }\n")?;
//! let mut session = Session::from_input(&input);
//! let result = session.transpose()?;
//!
//! let report = render_report(input.title.as_deref(), result);
//! assert!(report.contains("A2 (String 5, Fret 0)"));
//! # Ok::<(), fretwise::FretError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::calculator::compute_note;
use crate::error::FretError;
use crate::models::{Note, Position, TranspositionResult};
use crate::transposition::{parse_positions, transpose};

/// Parsed session document
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct SessionInput {
    #[serde(default)]
    pub title: Option<String>,
    pub positions: Vec<Position>,
}

/// Parse a YAML session document.
///
/// Positions are not range-checked here; out-of-range entries are dropped
/// later by [`Session::from_input`].
pub fn parse_session(source: &str) -> Result<SessionInput, FretError> {
    if source.trim().is_empty() {
        return Err(FretError::SessionError("document is empty".to_string()));
    }
    let input: SessionInput = serde_yaml::from_str(source)?;
    Ok(input)
}

/// Input notes plus the latest transposition.
#[derive(Debug, Clone, Default)]
pub struct Session {
    notes: Vec<Note>,
    result: Option<TranspositionResult>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session from a document, skipping invalid positions.
    pub fn from_input(input: &SessionInput) -> Self {
        Session {
            notes: parse_positions(&input.positions),
            result: None,
        }
    }

    /// Add one note. Invalid positions are rejected and leave the session unchanged.
    pub fn add_note(&mut self, string_index: i32, fret_index: i32) -> Result<&Note, FretError> {
        let note = compute_note(string_index, fret_index)?;
        self.notes.push(note);
        Ok(&self.notes[self.notes.len() - 1])
    }

    /// Transpose the current notes, replacing any earlier result.
    pub fn transpose(&mut self) -> Result<&TranspositionResult, FretError> {
        if self.notes.is_empty() {
            return Err(FretError::NoNotes);
        }
        Ok(&*self.result.insert(transpose(&self.notes)))
    }

    pub fn clear(&mut self) {
        self.notes.clear();
        self.result = None;
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn result(&self) -> Option<&TranspositionResult> {
        self.result.as_ref()
    }
}

/// Plain-text report: both note lists followed by the fret statistics.
pub fn render_report(title: Option<&str>, result: &TranspositionResult) -> String {
    let mut out = String::new();

    if let Some(title) = title {
        out.push_str(title);
        out.push('\n');
        out.push('\n');
    }

    out.push_str("Original notes:\n");
    for note in &result.original_notes {
        out.push_str(&format!("  {}\n", note));
    }

    out.push_str("Transposed notes:\n");
    for note in &result.transposed_notes {
        out.push_str(&format!("  {}\n", note));
    }

    if result.is_successful() {
        out.push('\n');
        out.push_str(&format!(
            "Average fret reduced from {:.1} to {:.1}\n",
            result.original_average_fret, result.transposed_average_fret
        ));
        out.push_str(&format!(
            "Fret reduction: {:.1} positions\n",
            result.fret_reduction()
        ));
        out.push_str(&format!(
            "Percentage improvement: {:.1}%\n",
            result.percentage_improvement()
        ));
    } else {
        out.push_str("\nNo playable positions found.\n");
    }

    out
}

#[derive(Serialize)]
struct YamlReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(flatten)]
    result: &'a TranspositionResult,
    fret_reduction: f64,
    percentage_improvement: f64,
    successful: bool,
}

/// YAML rendering of a result, including the derived statistics.
pub fn render_yaml(
    title: Option<&str>,
    result: &TranspositionResult,
) -> Result<String, FretError> {
    let report = YamlReport {
        title,
        result,
        fret_reduction: result.fret_reduction(),
        percentage_improvement: result.percentage_improvement(),
        successful: result.is_successful(),
    };
    serde_yaml::to_string(&report).map_err(|e| FretError::RenderError(e.to_string()))
}
