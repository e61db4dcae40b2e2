//! Expansion of adapted moves into actuator primitives.
//!
//! There is one table per holder angle. Each entry is the cheapest sequence
//! that turns the face at a position by an amount, given the holder starts at
//! that table's angle, and leaves the holder at -90°, 0°, or +90°.

use crate::{ActuatorAngle, ActuatorOp, AdaptedMove, TranslateError};

use ActuatorOp as Op;

type Row = [&'static [ActuatorOp]; 3];

/// Lookup table from adapted move to actuator primitives.
#[derive(Debug)]
pub struct ExpansionTable {
    name: &'static str,
    angle: ActuatorAngle,
    /// Rows are indexed by position `U`, `D`, `F`, `B`, `L`, `R`; columns by
    /// amount `1`, `2`, `3`.
    rows: [Row; 6],
}

/// Table used when the holder is home.
pub static HOME: ExpansionTable = ExpansionTable {
    name: "home",
    angle: ActuatorAngle::HOME,
    rows: [
        [&[Op::F2, Op::R1], &[Op::F2, Op::S3, Op::R0], &[Op::F2, Op::R3]],
        [&[Op::R1], &[Op::S3, Op::R0], &[Op::R3]],
        [&[Op::F1, Op::R1], &[Op::F1, Op::S3, Op::R0], &[Op::F1, Op::R3]],
        [&[Op::F3, Op::R1], &[Op::F3, Op::S3, Op::R0], &[Op::F3, Op::R3]],
        [
            &[Op::S1, Op::F1, Op::S3, Op::R1],
            &[Op::S1, Op::F1, Op::S4, Op::R0],
            &[Op::S1, Op::F1, Op::R3],
        ],
        [
            &[Op::S3, Op::F1, Op::R1],
            &[Op::S3, Op::F1, Op::R0],
            &[Op::S3, Op::F1, Op::S1, Op::R3],
        ],
    ],
};

/// Table used when the holder is at +90°.
pub static CW: ExpansionTable = ExpansionTable {
    name: "cw",
    angle: ActuatorAngle::CW,
    rows: [
        [&[Op::F2, Op::S3, Op::R1], &[Op::F2, Op::R4], &[Op::F2, Op::R3]],
        [&[Op::S3, Op::R1], &[Op::R4], &[Op::R3]],
        [&[Op::F1, Op::S3, Op::R1], &[Op::F1, Op::R4], &[Op::F1, Op::R3]],
        [&[Op::F3, Op::S3, Op::R1], &[Op::F3, Op::R4], &[Op::F3, Op::R3]],
        [
            &[Op::S3, Op::F3, Op::R1],
            &[Op::S3, Op::F3, Op::S3, Op::R0],
            &[Op::S3, Op::F3, Op::R3],
        ],
        [
            &[Op::S3, Op::F1, Op::R1],
            &[Op::S3, Op::F1, Op::S3, Op::R0],
            &[Op::S3, Op::F1, Op::R3],
        ],
    ],
};

/// Table used when the holder is at -90°.
pub static CCW: ExpansionTable = ExpansionTable {
    name: "ccw",
    angle: ActuatorAngle::CCW,
    rows: [
        [&[Op::F2, Op::R1], &[Op::F2, Op::R0], &[Op::F2, Op::S1, Op::R3]],
        [&[Op::R1], &[Op::R0], &[Op::S1, Op::R3]],
        [&[Op::F1, Op::R1], &[Op::F1, Op::R0], &[Op::F1, Op::S1, Op::R3]],
        [&[Op::F3, Op::R1], &[Op::F3, Op::R0], &[Op::F3, Op::S1, Op::R3]],
        [
            &[Op::S1, Op::F1, Op::R1],
            &[Op::S1, Op::F1, Op::S3, Op::R0],
            &[Op::S1, Op::F1, Op::R3],
        ],
        [
            &[Op::S1, Op::F3, Op::R1],
            &[Op::S1, Op::F3, Op::S3, Op::R0],
            &[Op::S1, Op::F3, Op::R3],
        ],
    ],
};

impl ExpansionTable {
    /// Returns the table to use when the holder is at `angle`.
    pub fn for_angle(angle: ActuatorAngle) -> Result<&'static ExpansionTable, TranslateError> {
        match angle {
            ActuatorAngle::HOME => Ok(&HOME),
            ActuatorAngle::CW => Ok(&CW),
            ActuatorAngle::CCW => Ok(&CCW),
            _ => Err(TranslateError::UnexpectedAngle {
                angle: angle.degrees(),
            }),
        }
    }

    /// Returns the name of the table.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the holder angle that the table expects.
    pub fn angle(&self) -> ActuatorAngle {
        self.angle
    }

    /// Returns the actuator primitives that perform `mv`.
    pub fn expand(&self, mv: AdaptedMove) -> &'static [ActuatorOp] {
        self.rows[mv.position.index()][mv.amount.index()]
    }
}
