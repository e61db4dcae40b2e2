use crate::{
    ActuatorAngle, ActuatorOp, AdaptedMove, ExpansionTable, LogicalMove, OpSequence, Optimizations,
    OrientationState, StartLayout, TranslateError, TranslatorConfig,
};

/// Translates `solution` into actuator primitives.
///
/// This is shorthand for [`Translator::translate()`].
pub fn translate(solution: &str, config: &TranslatorConfig) -> Result<Translation, TranslateError> {
    Translator::new(*config).translate(solution)
}

/// Translator from solver solutions to actuator primitives.
///
/// The translator holds no state between calls, so it may be shared freely
/// between threads. Each call to [`Translator::translate()`] uses a fresh
/// [`Session`].
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Translator {
    config: TranslatorConfig,
}

impl Translator {
    /// Constructs a translator.
    pub fn new(config: TranslatorConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// Translates `solution`, a string of solver moves such as `U2 L1 R3`.
    ///
    /// Nothing is expanded unless the whole solution parses.
    pub fn translate(&self, solution: &str) -> Result<Translation, TranslateError> {
        let moves = crate::parse_solution(solution)?;
        let mut session = Session::new(self.config.start_layout);
        for mv in moves {
            session.push_move(mv)?;
        }
        session.finish(self.config.cancel_opposite_spins)
    }
}

/// Expansion of a single solver move.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    /// Move emitted by the solver.
    pub logical: LogicalMove,
    /// Move redirected to the position where its face was.
    pub adapted: AdaptedMove,
    /// Holder angle before the move, which selected the expansion table.
    pub angle_before: ActuatorAngle,
    /// Actuator primitives, before optimization.
    pub ops: OpSequence,
}

/// Result of translating a solution.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Translation {
    /// Expansion of each solver move, in order.
    pub steps: Vec<Step>,
    /// Optimized primitives for the servo driver, ending with the holder at
    /// home.
    pub ops: OpSequence,
    /// Number of physical movements in `ops`.
    pub move_count: u32,
    /// Number of physical movements before optimization.
    pub unoptimized_count: u32,
    /// Which optimization passes changed the sequence.
    pub optimizations: Optimizations,
}

/// State of one translation: where each face is, where the holder is, and the
/// primitives emitted so far.
#[derive(Debug, Clone)]
pub struct Session {
    orientation: OrientationState,
    angle: ActuatorAngle,
    steps: Vec<Step>,
    ops: OpSequence,
}

impl Session {
    /// Starts a session with the cube in `layout` and the holder at home.
    pub fn new(layout: StartLayout) -> Self {
        log::debug!("starting translation with {layout:?} layout");
        Self {
            orientation: OrientationState::initial(layout),
            angle: ActuatorAngle::HOME,
            steps: vec![],
            ops: OpSequence::new(),
        }
    }

    /// Returns the current orientation of the cube.
    pub fn orientation(&self) -> OrientationState {
        self.orientation
    }

    /// Returns the current holder angle.
    pub fn angle(&self) -> ActuatorAngle {
        self.angle
    }

    /// Returns the moves expanded so far.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Returns the primitives emitted so far.
    pub fn ops(&self) -> &OpSequence {
        &self.ops
    }

    /// Expands one solver move and appends its primitives.
    ///
    /// Returns an error if the holder would leave its travel range, which
    /// leaves the session unchanged.
    pub fn push_move(&mut self, mv: LogicalMove) -> Result<&Step, TranslateError> {
        let adapted = self.orientation.adapt(mv);
        let table = ExpansionTable::for_angle(self.angle)?;
        log::trace!(
            "move #{}: {mv} -> {adapted} using {} table",
            self.steps.len(),
            table.name(),
        );
        self.push_expansion(mv, adapted, table.expand(adapted))
    }

    /// Appends `expansion` as the primitives performing `mv`.
    ///
    /// The expansion tables never move the holder out of travel, but anything
    /// else passed here might, in which case the session is left unchanged.
    pub(crate) fn push_expansion(
        &mut self,
        mv: LogicalMove,
        adapted: AdaptedMove,
        expansion: &[ActuatorOp],
    ) -> Result<&Step, TranslateError> {
        let move_index = self.steps.len();
        let angle = self.angle.advance(expansion);
        if !angle.is_within_travel() {
            return Err(TranslateError::AngleOutOfRange {
                move_index,
                angle: angle.degrees(),
            });
        }

        let ops = OpSequence::from(expansion);
        log::trace!("move #{move_index}: {ops} (holder {} -> {angle})", self.angle);

        self.orientation = self.orientation.apply_sequence(expansion);
        self.ops.extend_from_slice(expansion);
        self.steps.push(Step {
            logical: mv,
            adapted,
            angle_before: self.angle,
            ops,
        });
        self.angle = angle;

        Ok(&self.steps[move_index])
    }

    /// Brings the holder home, optimizes the primitives, and returns the
    /// result.
    pub fn finish(mut self, cancel_opposite_spins: bool) -> Result<Translation, TranslateError> {
        if let Some(spin) = self.angle.homing_spin()? {
            log::debug!("holder ends at {}; appending {spin}", self.angle);
            self.ops.push(spin);
            self.angle = ActuatorAngle::HOME;
        }

        let unoptimized_count = self.ops.move_count();
        let (ops, optimizations) = crate::optimize(&self.ops, cancel_opposite_spins);
        let move_count = ops.move_count();
        log::debug!(
            "translated {} moves into {move_count} robot movements \
             ({unoptimized_count} before optimization)",
            self.steps.len(),
        );

        Ok(Translation {
            steps: self.steps,
            ops,
            move_count,
            unoptimized_count,
            optimizations,
        })
    }
}
