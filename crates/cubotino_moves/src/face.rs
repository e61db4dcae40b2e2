//! Cube faces and solver moves.
//!
//! Faces are named from the solver's point of view, which never changes while
//! solving. Where a face physically sits on the robot is tracked separately by
//! [`crate::OrientationState`].

use std::fmt;

use strum::{EnumIter, IntoEnumIterator};

/// Logical face of the cube, in URF notation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Face {
    /// Up
    U,
    /// Down
    D,
    /// Front
    F,
    /// Back
    B,
    /// Left
    L,
    /// Right
    R,
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl Face {
    /// Returns the face on the opposite side of the cube.
    #[must_use]
    pub fn opposite(self) -> Face {
        match self {
            Face::U => Face::D,
            Face::D => Face::U,
            Face::F => Face::B,
            Face::B => Face::F,
            Face::L => Face::R,
            Face::R => Face::L,
        }
    }

    /// Returns the letter used for the face in solver notation.
    pub fn letter(self) -> char {
        match self {
            Face::U => 'U',
            Face::D => 'D',
            Face::F => 'F',
            Face::B => 'B',
            Face::L => 'L',
            Face::R => 'R',
        }
    }

    /// Returns the face with the given letter, or `None` if there is none.
    pub fn from_letter(c: char) -> Option<Face> {
        Face::iter().find(|face| face.letter() == c)
    }
}

/// Amount to turn a face, as emitted by the solver.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MoveAmount {
    /// 90° clockwise, written `1`.
    Cw90,
    /// 180°, written `2`.
    Half,
    /// 90° counterclockwise, written `3`.
    Ccw90,
}

impl fmt::Display for MoveAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.digit())
    }
}

impl MoveAmount {
    /// Returns the digit used for the amount in solver notation.
    pub fn digit(self) -> char {
        match self {
            MoveAmount::Cw90 => '1',
            MoveAmount::Half => '2',
            MoveAmount::Ccw90 => '3',
        }
    }

    /// Returns the amount with the given digit, or `None` if there is none.
    pub fn from_digit(c: char) -> Option<MoveAmount> {
        match c {
            '1' => Some(MoveAmount::Cw90),
            '2' => Some(MoveAmount::Half),
            '3' => Some(MoveAmount::Ccw90),
            _ => None,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            MoveAmount::Cw90 => 0,
            MoveAmount::Half => 1,
            MoveAmount::Ccw90 => 2,
        }
    }
}

/// Move emitted by the solver, assuming a fixed cube orientation.
///
/// Example: `R3`
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct LogicalMove {
    /// Face to turn.
    pub face: Face,
    /// How far to turn it.
    pub amount: MoveAmount,
}

impl fmt::Display for LogicalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.amount)
    }
}

impl LogicalMove {
    /// Constructs a new move.
    pub fn new(face: Face, amount: MoveAmount) -> Self {
        Self { face, amount }
    }
}
