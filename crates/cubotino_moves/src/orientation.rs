//! Tracking which face of the cube sits where on the robot.
//!
//! The robot never brings the cube back to a canonical orientation, so each
//! solver move has to be redirected to wherever its face currently is. Five
//! physical positions are tracked; the face at the back is always the one
//! missing from those five.
//!
//! ```text
//!   vertical            horizontal
//!   +-----+
//!   |  U  |
//!   +-----+      +-----+-----+-----+
//!   |  F  |      |  L  |  F  |  R  |
//!   +-----+      +-----+-----+-----+
//!   |  D  |
//!   +-----+
//! ```
//!
//! A flip only shifts the vertical group and a spin only shifts the horizontal
//! group. The two groups share the front position.

use std::fmt;

use strum::EnumIter;

use crate::{ActuatorOp, Face, FlipCount, LogicalMove, MoveAmount, TurnAmount};

/// Physical position on the robot.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Position {
    /// Top of the cube.
    U,
    /// Bottom of the cube, in the holder.
    D,
    /// Side facing the flipper.
    F,
    /// Side facing away from the flipper. This position is not tracked
    /// directly.
    B,
    /// Left side.
    L,
    /// Right side.
    R,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Position::U => 'U',
            Position::D => 'D',
            Position::F => 'F',
            Position::B => 'B',
            Position::L => 'L',
            Position::R => 'R',
        };
        write!(f, "{c}")
    }
}

impl Position {
    pub(crate) fn index(self) -> usize {
        match self {
            Position::U => 0,
            Position::D => 1,
            Position::F => 2,
            Position::B => 3,
            Position::L => 4,
            Position::R => 5,
        }
    }
}

/// Orientation of the cube at the start of a translation.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StartLayout {
    /// Cube as the scanner leaves it after reading the sixth face: `U` on
    /// front, `L` on top, `F` on the left.
    #[default]
    Scanned,
    /// Every face at its own position.
    Aligned,
}

/// Move redirected to the physical position where its face currently is.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdaptedMove {
    /// Position of the face to turn.
    pub position: Position,
    /// Amount to turn it.
    pub amount: MoveAmount,
}

impl fmt::Display for AdaptedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.position, self.amount)
    }
}

/// Faces currently at each of the five tracked positions.
///
/// The front position belongs to both the horizontal group (`L`, `F`, `R`) and
/// the vertical group (`U`, `F`, `D`), and it is stored once so the two groups
/// cannot disagree.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrientationState {
    /// Face on top.
    pub up: Face,
    /// Face on the bottom.
    pub down: Face,
    /// Face on the left.
    pub left: Face,
    /// Face on the front.
    pub front: Face,
    /// Face on the right.
    pub right: Face,
}

impl Default for OrientationState {
    fn default() -> Self {
        Self::initial(StartLayout::default())
    }
}

impl OrientationState {
    /// Every face at its own position.
    pub const ALIGNED: Self = Self {
        up: Face::U,
        down: Face::D,
        left: Face::L,
        front: Face::F,
        right: Face::R,
    };

    /// Orientation of the cube right after scanning.
    pub const SCANNED: Self = Self {
        up: Face::L,
        down: Face::R,
        left: Face::F,
        front: Face::U,
        right: Face::B,
    };

    /// Returns the orientation at the start of a translation.
    pub fn initial(layout: StartLayout) -> Self {
        match layout {
            StartLayout::Scanned => Self::SCANNED,
            StartLayout::Aligned => Self::ALIGNED,
        }
    }

    /// Returns the faces of the horizontal group: left, front, right.
    pub fn horizontal(self) -> [Face; 3] {
        [self.left, self.front, self.right]
    }

    /// Returns the faces of the vertical group: up, front, down.
    pub fn vertical(self) -> [Face; 3] {
        [self.up, self.front, self.down]
    }

    /// Returns the face at `position`.
    pub fn face_at(self, position: Position) -> Face {
        match position {
            Position::U => self.up,
            Position::D => self.down,
            Position::F => self.front,
            Position::B => self.front.opposite(),
            Position::L => self.left,
            Position::R => self.right,
        }
    }

    /// Returns whether the tracked faces describe a real cube: five distinct
    /// faces with opposite faces in opposite positions.
    pub fn is_consistent(self) -> bool {
        let tracked = self.tracked();
        let distinct = tracked
            .iter()
            .enumerate()
            .all(|(i, (_, a))| tracked[i + 1..].iter().all(|(_, b)| a != b));
        distinct && self.up.opposite() == self.down && self.left.opposite() == self.right
    }

    fn tracked(self) -> [(Position, Face); 5] {
        [
            (Position::L, self.left),
            (Position::F, self.front),
            (Position::R, self.right),
            (Position::U, self.up),
            (Position::D, self.down),
        ]
    }

    /// Returns the orientation after one flip.
    ///
    /// The front face moves to the bottom, the top face moves to the front, and
    /// the back face moves to the top.
    #[must_use]
    pub fn apply_flip(self) -> Self {
        let down = self.front;
        let front = self.up;
        Self {
            up: down.opposite(),
            down,
            front,
            ..self
        }
    }

    /// Returns the orientation after spinning the cube 90° clockwise, seen from
    /// below.
    #[must_use]
    pub fn apply_spin_cw(self) -> Self {
        let right = self.front;
        let front = self.left;
        Self {
            left: right.opposite(),
            front,
            right,
            ..self
        }
    }

    /// Returns the orientation after spinning the cube 90° counterclockwise,
    /// seen from below.
    #[must_use]
    pub fn apply_spin_ccw(self) -> Self {
        let left = self.front;
        let front = self.right;
        Self {
            left,
            front,
            right: left.opposite(),
            ..self
        }
    }

    /// Returns the orientation after performing `op`.
    ///
    /// Rotating the bottom layer does not change the orientation of the cube.
    #[must_use]
    pub fn apply_op(self, op: ActuatorOp) -> Self {
        match op {
            ActuatorOp::Flip(FlipCount::Once) => self.apply_flip(),
            ActuatorOp::Flip(FlipCount::Twice) => self.apply_flip().apply_flip(),
            ActuatorOp::Flip(FlipCount::Thrice) => self.apply_flip().apply_flip().apply_flip(),
            ActuatorOp::Spin(TurnAmount::Cw90) => self.apply_spin_cw(),
            ActuatorOp::Spin(TurnAmount::Cw180) => self.apply_spin_cw().apply_spin_cw(),
            ActuatorOp::Spin(TurnAmount::Ccw90) => self.apply_spin_ccw(),
            ActuatorOp::Spin(TurnAmount::Ccw180) => self.apply_spin_ccw().apply_spin_ccw(),
            ActuatorOp::Rotate(_) => self,
        }
    }

    /// Returns the orientation after performing `ops` in order.
    #[must_use]
    pub fn apply_sequence(self, ops: &[ActuatorOp]) -> Self {
        ops.iter().fold(self, |state, &op| state.apply_op(op))
    }

    /// Redirects a solver move to the position where its face currently is.
    ///
    /// A face that is not at any of the tracked positions must be at the back.
    pub fn adapt(self, mv: LogicalMove) -> AdaptedMove {
        let position = self
            .tracked()
            .into_iter()
            .find(|&(_, face)| face == mv.face)
            .map_or(Position::B, |(position, _)| position);
        AdaptedMove {
            position,
            amount: mv.amount,
        }
    }
}
