//! Actuator primitives and their micro-encoding.
//!
//! The servo driver consumes a string of two-byte primitives with no
//! separators, such as `F1R1S3`:
//!
//! - `F` followed by `1`, `2`, or `3` flips the cube that many times.
//! - `S` followed by a [`TurnAmount`] digit spins the whole cube.
//! - `R` followed by a [`TurnAmount`] digit rotates the bottom layer while the
//!   upper layers are held.

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use crate::TranslateError;

/// Number of consecutive flips in a single [`ActuatorOp::Flip`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum FlipCount {
    /// One flip, written `1`.
    Once,
    /// Two flips, written `2`.
    Twice,
    /// Three flips, written `3`.
    Thrice,
}

impl FlipCount {
    /// Returns the number of flips.
    pub fn count(self) -> u8 {
        match self {
            FlipCount::Once => 1,
            FlipCount::Twice => 2,
            FlipCount::Thrice => 3,
        }
    }

    /// Returns the flip count for `n`, or `None` if `n` is not between 1
    /// and 3.
    pub fn new(n: u8) -> Option<Self> {
        match n {
            1 => Some(FlipCount::Once),
            2 => Some(FlipCount::Twice),
            3 => Some(FlipCount::Thrice),
            _ => None,
        }
    }
}

/// Angle to spin the cube or rotate the bottom layer, seen from below.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum TurnAmount {
    /// 180° clockwise, written `0`.
    Cw180,
    /// 90° clockwise, written `1`.
    Cw90,
    /// 90° counterclockwise, written `3`.
    Ccw90,
    /// 180° counterclockwise, written `4`.
    Ccw180,
}

impl TurnAmount {
    /// Returns the digit used in the micro-encoding.
    pub fn digit(self) -> char {
        match self {
            TurnAmount::Cw180 => '0',
            TurnAmount::Cw90 => '1',
            TurnAmount::Ccw90 => '3',
            TurnAmount::Ccw180 => '4',
        }
    }

    /// Returns the amount for a digit of the micro-encoding, or `None` if there
    /// is none.
    pub fn from_digit(c: char) -> Option<Self> {
        match c {
            '0' => Some(TurnAmount::Cw180),
            '1' => Some(TurnAmount::Cw90),
            '3' => Some(TurnAmount::Ccw90),
            '4' => Some(TurnAmount::Ccw180),
            _ => None,
        }
    }

    /// Returns the signed change in holder angle, in degrees. Clockwise is
    /// positive.
    pub fn degrees(self) -> i32 {
        match self {
            TurnAmount::Cw180 => 180,
            TurnAmount::Cw90 => 90,
            TurnAmount::Ccw90 => -90,
            TurnAmount::Ccw180 => -180,
        }
    }

    /// Returns the amount turning the same angle in the other direction.
    #[must_use]
    pub fn rev(self) -> Self {
        match self {
            TurnAmount::Cw180 => TurnAmount::Ccw180,
            TurnAmount::Cw90 => TurnAmount::Ccw90,
            TurnAmount::Ccw90 => TurnAmount::Cw90,
            TurnAmount::Ccw180 => TurnAmount::Cw180,
        }
    }
}

/// Single actuator primitive.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum ActuatorOp {
    /// Tilts the cube so that the front face ends up on the bottom.
    Flip(FlipCount),
    /// Spins the whole cube about the vertical axis.
    Spin(TurnAmount),
    /// Rotates the bottom layer while the rest of the cube is constrained.
    Rotate(TurnAmount),
}

impl fmt::Display for ActuatorOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActuatorOp::Flip(n) => write!(f, "F{}", n.count()),
            ActuatorOp::Spin(amount) => write!(f, "S{}", amount.digit()),
            ActuatorOp::Rotate(amount) => write!(f, "R{}", amount.digit()),
        }
    }
}

impl ActuatorOp {
    /// `F1`
    pub const F1: Self = Self::Flip(FlipCount::Once);
    /// `F2`
    pub const F2: Self = Self::Flip(FlipCount::Twice);
    /// `F3`
    pub const F3: Self = Self::Flip(FlipCount::Thrice);

    /// `S0`
    pub const S0: Self = Self::Spin(TurnAmount::Cw180);
    /// `S1`
    pub const S1: Self = Self::Spin(TurnAmount::Cw90);
    /// `S3`
    pub const S3: Self = Self::Spin(TurnAmount::Ccw90);
    /// `S4`
    pub const S4: Self = Self::Spin(TurnAmount::Ccw180);

    /// `R0`
    pub const R0: Self = Self::Rotate(TurnAmount::Cw180);
    /// `R1`
    pub const R1: Self = Self::Rotate(TurnAmount::Cw90);
    /// `R3`
    pub const R3: Self = Self::Rotate(TurnAmount::Ccw90);
    /// `R4`
    pub const R4: Self = Self::Rotate(TurnAmount::Ccw180);

    /// Returns the number of physical actuator movements needed to perform the
    /// op.
    ///
    /// A spin or rotation costs one movement regardless of its angle.
    pub fn move_cost(self) -> u32 {
        match self {
            ActuatorOp::Flip(n) => n.count().into(),
            ActuatorOp::Spin(_) | ActuatorOp::Rotate(_) => 1,
        }
    }

    /// Returns the signed change in holder angle caused by the op, in degrees.
    pub fn angle_delta(self) -> i32 {
        match self {
            ActuatorOp::Flip(_) => 0,
            ActuatorOp::Spin(amount) | ActuatorOp::Rotate(amount) => amount.degrees(),
        }
    }

    /// Returns whether the op is a flip.
    pub fn is_flip(self) -> bool {
        matches!(self, ActuatorOp::Flip(_))
    }

    /// Returns whether the op is a bottom layer rotation.
    pub fn is_rotate(self) -> bool {
        matches!(self, ActuatorOp::Rotate(_))
    }
}

/// Returns the total number of physical actuator movements in `ops`.
pub fn count_moves(ops: &[ActuatorOp]) -> u32 {
    ops.iter().map(|op| op.move_cost()).sum()
}

/// Sequence of actuator primitives.
///
/// This displays as the micro-encoding consumed by the servo driver.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct OpSequence(pub Vec<ActuatorOp>);

impl fmt::Display for OpSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|op| write!(f, "{op}"))
    }
}

impl FromStr for OpSequence {
    type Err = TranslateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse_ops(s)
    }
}

impl Deref for OpSequence {
    type Target = Vec<ActuatorOp>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for OpSequence {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vec<ActuatorOp>> for OpSequence {
    fn from(value: Vec<ActuatorOp>) -> Self {
        Self(value)
    }
}

impl From<&[ActuatorOp]> for OpSequence {
    fn from(value: &[ActuatorOp]) -> Self {
        Self(value.to_vec())
    }
}

impl FromIterator<ActuatorOp> for OpSequence {
    fn from_iter<T: IntoIterator<Item = ActuatorOp>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl OpSequence {
    /// Constructs a new empty sequence.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Returns the total number of physical actuator movements.
    pub fn move_count(&self) -> u32 {
        count_moves(&self.0)
    }
}
