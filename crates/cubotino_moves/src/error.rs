use std::ops::Range;

use thiserror::Error;

/// Error produced while translating a solution or parsing actuator ops.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// Solution is empty or contains only whitespace
    #[error("empty solution")]
    EmptySolution,
    /// Input is not well-formed notation
    #[error("invalid notation: {}", itertools::join(.0, "; "))]
    Parse(Vec<NotationError>),
    /// Holder angle left its travel range
    ///
    /// This indicates a bug in the expansion tables.
    #[error("holder angle {angle}° out of range after move #{move_index}")]
    AngleOutOfRange {
        /// Index of the move that was just expanded.
        move_index: usize,
        /// Angle after the move, in degrees.
        angle: i32,
    },
    /// Holder angle is not one of -90°, 0°, or +90°
    #[error("unexpected holder angle {angle}°")]
    UnexpectedAngle {
        /// Angle, in degrees.
        angle: i32,
    },
}

/// Syntax error in a solution string or actuator op string.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
#[error("{reason} at {}..{}", .span.start, .span.end)]
pub struct NotationError {
    /// Byte range of the input where the error occurred.
    pub span: Range<usize>,
    /// Human-readable description of the error.
    pub reason: String,
}
