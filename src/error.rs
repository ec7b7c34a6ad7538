//! # Error Types
//!
//! All fallible operations in the crate return [`FretError`].
//!
//! ## Error Types
//! - `InvalidArgument` - string or fret outside the instrument's range
//! - `SessionError` - a session document could not be read
//! - `NoNotes` - a session was asked to transpose an empty note list
//! - `RenderError` - a report could not be serialized
//!
//! A pitch that no position can reproduce is not an error: lookups return
//! `Option` and batch operations skip the note.
//!
//! ## Usage
//! ```rust
//! use fretwise::{compute_note, FretError};
//!
//! match compute_note(7, 0) {
//!     Ok(note) => println!("{}", note),
//!     Err(FretError::InvalidArgument(message)) => eprintln!("Bad input: {}", message),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FretError {
    /// A string or fret index outside its valid range.
    ///
    /// # Example
    /// ```
    /// # use fretwise::FretError;
    /// let err = FretError::InvalidArgument("fret must be between 0 and 24, got 25".to_string());
    /// assert_eq!(err.to_string(), "Invalid argument: fret must be between 0 and 24, got 25");
    /// ```
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Malformed session document.
    #[error("Invalid session: {0}")]
    SessionError(String),

    #[error("No notes to transpose. Add some notes first.")]
    NoNotes,

    /// A report could not be serialized.
    ///
    /// # Example
    /// ```
    /// # use fretwise::FretError;
    /// let err = FretError::RenderError("unsupported value".to_string());
    /// assert_eq!(err.to_string(), "Failed to render report: unsupported value");
    /// ```
    #[error("Failed to render report: {0}")]
    RenderError(String),
}

impl From<serde_yaml::Error> for FretError {
    fn from(e: serde_yaml::Error) -> Self {
        FretError::SessionError(e.to_string())
    }
}
