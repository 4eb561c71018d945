//! Load-time failure taxonomy for the calendar catalog.

use thiserror::Error;

/// Reasons a calendar data file is rejected at startup.
///
/// Any of these is fatal: a calendar whose day numbering cannot be
/// trusted cannot drive unlock logic, so the app renders a failure screen
/// instead of a half-broken grid.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The data file is not valid JSON, or an entry is missing the
    /// companion fields its `contentType` requires (the content enum only
    /// deserializes complete variants).
    #[error("calendar data is malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The calendar declares no days at all.
    #[error("calendar contains no days")]
    Empty,

    /// The same day number appears more than once.
    #[error("day {day} appears more than once")]
    DuplicateDay { day: u32 },

    /// Day numbers are not exactly `1..=N` in ascending order.
    #[error("day numbers must run 1..=N without gaps: expected day {expected}, found day {found}")]
    NonDense { expected: u32, found: u32 },
}
