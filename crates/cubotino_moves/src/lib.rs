//! Translation of cube solver output into actuator commands for the CUBOTino
//! robot.
//!
//! The solver assumes the cube never changes orientation, but the robot can
//! only spin the cube about the vertical axis, flip it toward the back, and
//! rotate the bottom layer. Every solver move is therefore reinterpreted
//! against the cube's current physical orientation and expanded into actuator
//! primitives using a table chosen by the current angle of the cube holder.
//!
//! ```
//! use cubotino_moves::{Translator, TranslatorConfig};
//!
//! let translation = Translator::new(TranslatorConfig::default())
//!     .translate("U2 D2 R2 L2 F2 B2")
//!     .unwrap();
//! assert_eq!(translation.ops.to_string(), "F1S3R0F2R4S1F3S3R0F2R4F1R0F2R4S1");
//! assert_eq!(translation.move_count, 21);
//! ```

pub mod angle;
mod config;
mod error;
pub mod face;
pub mod ops;
pub mod optimize;
pub mod orientation;
mod parse;
#[cfg(feature = "serde")]
mod serde_impl;
mod session;
pub mod tables;

pub use angle::ActuatorAngle;
pub use config::TranslatorConfig;
pub use error::{NotationError, TranslateError};
pub use face::{Face, LogicalMove, MoveAmount};
pub use ops::{ActuatorOp, FlipCount, OpSequence, TurnAmount, count_moves};
pub use optimize::{Optimizations, cancel_opposite_spins, merge_trailing_flips, optimize};
pub use orientation::{AdaptedMove, OrientationState, Position, StartLayout};
pub use parse::{parse_ops, parse_solution};
pub use session::{Session, Step, Translation, Translator, translate};
pub use tables::ExpansionTable;

#[cfg(test)]
mod tests;
