pub mod calculator;
pub mod error;
pub mod models;
pub mod session;
pub mod transposition;

pub use calculator::{compute_note, frequency_hz, pitch_name, pitch_number};
pub use error::*;
pub use models::*;
pub use session::{parse_session, render_report, render_yaml, Session, SessionInput};
pub use transposition::{find_all_positions, find_lowest_position, parse_positions, transpose};

/// Load a YAML session document and transpose its notes.
/// Out-of-range positions in the document are skipped.
pub fn transpose_session(source: &str) -> Result<(SessionInput, TranspositionResult), FretError> {
    let input = parse_session(source)?;
    let mut session = Session::from_input(&input);
    let result = session.transpose()?.clone();
    Ok((input, result))
}
