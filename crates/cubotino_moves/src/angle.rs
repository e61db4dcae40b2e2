//! Angle of the cube holder.
//!
//! The servo that spins the cube and rotates the bottom layer has a travel of
//! ±90° around its home position, so the holder is always at -90°, 0°, or
//! +90° between moves.

use std::fmt;

use crate::{ActuatorOp, TranslateError};

/// Angle of the cube holder relative to its home position, in degrees.
/// Clockwise (seen from below) is positive.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ActuatorAngle(i32);

impl fmt::Display for ActuatorAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

impl ActuatorAngle {
    /// Home position.
    pub const HOME: Self = Self(0);
    /// Clockwise end of travel.
    pub const CW: Self = Self(90);
    /// Counterclockwise end of travel.
    pub const CCW: Self = Self(-90);

    /// Lowest angle the holder can reach.
    pub const MIN_DEGREES: i32 = -90;
    /// Highest angle the holder can reach.
    pub const MAX_DEGREES: i32 = 90;

    /// Constructs an angle from degrees, without checking its range.
    pub fn from_degrees(degrees: i32) -> Self {
        Self(degrees)
    }

    /// Returns the angle in degrees.
    pub fn degrees(self) -> i32 {
        self.0
    }

    /// Returns whether the angle is within the travel of the holder.
    pub fn is_within_travel(self) -> bool {
        (Self::MIN_DEGREES..=Self::MAX_DEGREES).contains(&self.0)
    }

    /// Returns the angle after performing `ops`, without checking whether it
    /// stays within travel. Flips do not move the holder.
    #[must_use]
    pub fn advance(self, ops: &[ActuatorOp]) -> Self {
        Self(self.0 + ops.iter().map(|op| op.angle_delta()).sum::<i32>())
    }

    /// Returns the spin that brings the holder back home, or `None` if it is
    /// already there.
    pub fn homing_spin(self) -> Result<Option<ActuatorOp>, TranslateError> {
        match self {
            Self::HOME => Ok(None),
            Self::CW => Ok(Some(ActuatorOp::S3)),
            Self::CCW => Ok(Some(ActuatorOp::S1)),
            _ => Err(TranslateError::UnexpectedAngle { angle: self.0 }),
        }
    }
}
