//! Error types for the FitBoard widgets

use thiserror::Error;

/// Errors raised while parsing or validating raw form input,
/// before a value reaches any widget state
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("{0} cannot be empty")]
    Empty(&'static str),

    #[error("{0} must be a number")]
    NotNumeric(&'static str),

    #[error("{0}: {1}")]
    OutOfRange(&'static str, String),
}

/// Errors raised by tracker state operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrackerError {
    #[error("Lift name cannot be empty")]
    EmptyName,

    #[error("Lift already exists: {0}")]
    DuplicateLift(String),

    #[error("Unknown lift: {0}")]
    UnknownLift(String),

    #[error("Week {index} is out of range: {weeks} weeks recorded")]
    WeekOutOfRange { index: usize, weeks: usize },

    #[error(transparent)]
    Input(#[from] InputError),
}
