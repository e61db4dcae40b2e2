//! Local rewrites that shorten an actuator sequence without changing its
//! physical outcome.
//!
//! Each pass returns the rewritten sequence and whether it changed anything.
//! Neither pass ever increases [`crate::count_moves`].

use crate::{ActuatorOp, FlipCount, OpSequence, TurnAmount};

/// Which optimization passes changed a sequence.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Optimizations {
    /// Whether [`cancel_opposite_spins()`] removed any spins.
    pub cancel_opposite_spins: bool,
    /// Whether [`merge_trailing_flips()`] removed two flips.
    pub merge_trailing_flips: bool,
}

impl Optimizations {
    /// Returns whether any pass changed the sequence.
    pub fn any(self) -> bool {
        self.cancel_opposite_spins || self.merge_trailing_flips
    }
}

/// Runs the optimization passes over `ops`.
///
/// [`merge_trailing_flips()`] always runs. [`cancel_opposite_spins()`] runs
/// first, and only if `cancel_spins` is `true`.
pub fn optimize(ops: &[ActuatorOp], cancel_spins: bool) -> (OpSequence, Optimizations) {
    let mut fired = Optimizations::default();

    let mut ops = OpSequence::from(ops);
    if cancel_spins {
        (ops, fired.cancel_opposite_spins) = cancel_opposite_spins(&ops);
    }
    (ops, fired.merge_trailing_flips) = merge_trailing_flips(&ops);

    (ops, fired)
}

/// Removes every 90° spin that is immediately followed by a 90° spin in the
/// opposite direction.
///
/// Pairs that become adjacent once an inner pair is removed are removed too,
/// so running the pass again on its own output never changes anything.
pub fn cancel_opposite_spins(ops: &[ActuatorOp]) -> (OpSequence, bool) {
    let mut out: Vec<ActuatorOp> = Vec::with_capacity(ops.len());
    for &op in ops {
        match (out.last(), op) {
            (
                Some(&ActuatorOp::Spin(TurnAmount::Cw90)),
                ActuatorOp::Spin(TurnAmount::Ccw90),
            )
            | (
                Some(&ActuatorOp::Spin(TurnAmount::Ccw90)),
                ActuatorOp::Spin(TurnAmount::Cw90),
            ) => {
                out.pop();
            }
            _ => out.push(op),
        }
    }

    let changed = out.len() != ops.len();
    if changed {
        log::info!(
            "canceled {} pairs of opposite spins",
            (ops.len() - out.len()) / 2,
        );
    }
    (OpSequence(out), changed)
}

/// Replaces the second-to-last flip with a single flip when it is a triple
/// flip, the last flip is a double flip, and both are followed by equivalent
/// ops.
///
/// Three flips followed later by two matching flips reach the same cube
/// orientation as one flip followed by the same two, saving two flips.
pub fn merge_trailing_flips(ops: &[ActuatorOp]) -> (OpSequence, bool) {
    let unchanged = || (OpSequence::from(ops), false);

    let mut flips = ops.iter().enumerate().rev().filter(|(_, op)| op.is_flip());
    let (Some((last, &last_flip)), Some((prev, &prev_flip))) = (flips.next(), flips.next())
    else {
        return unchanged();
    };
    if prev_flip != ActuatorOp::Flip(FlipCount::Thrice)
        || last_flip != ActuatorOp::Flip(FlipCount::Twice)
    {
        return unchanged();
    }

    let after_prev = &ops[prev + 1..last];
    let after_last = &ops[last + 1..];
    if !trailing_ops_match(after_prev, after_last) {
        return unchanged();
    }

    let mut out = ops.to_vec();
    out[prev] = ActuatorOp::Flip(FlipCount::Once);
    log::info!("merged trailing flips at op #{prev}");
    (OpSequence(out), true)
}

/// Returns whether the ops following the triple flip put the cube in the same
/// state as the ops following the double flip.
///
/// Only as many ops are compared as follow the triple flip. Anything beyond
/// that after the double flip must not rotate the bottom layer.
fn trailing_ops_match(after_prev: &[ActuatorOp], after_last: &[ActuatorOp]) -> bool {
    let n = after_prev.len().min(after_last.len());
    let (compared, rest) = after_last.split_at(n);
    if rest.iter().any(|op| op.is_rotate()) {
        return false;
    }

    match (after_prev, compared) {
        _ if after_prev == compared => true,
        // Half turns of the bottom layer in either direction are equivalent.
        ([ActuatorOp::Rotate(a)], [ActuatorOp::Rotate(b)]) => {
            matches!(
                (a, b),
                (TurnAmount::Cw180, TurnAmount::Ccw180) | (TurnAmount::Ccw180, TurnAmount::Cw180)
            )
        }
        _ => false,
    }
}
