use pretty_assertions::assert_eq;
use proptest::prelude::*;
use strum::IntoEnumIterator;

use crate::*;

fn ops(s: &str) -> OpSequence {
    parse_ops(s).unwrap()
}

fn solution(moves: &[LogicalMove]) -> String {
    itertools::join(moves, " ")
}

fn translate_with(s: &str, start_layout: StartLayout) -> Translation {
    let config = TranslatorConfig {
        start_layout,
        ..Default::default()
    };
    translate(s, &config).unwrap()
}

fn step_strings(translation: &Translation) -> Vec<String> {
    translation
        .steps
        .iter()
        .map(|step| step.ops.to_string())
        .collect()
}

#[test]
fn test_opposite_face() {
    for face in Face::iter() {
        assert_eq!(face, face.opposite().opposite());
        assert_ne!(face, face.opposite());
    }
    assert_eq!(Face::B, Face::F.opposite());
    assert_eq!(Face::L, Face::R.opposite());
    assert_eq!(Face::U, Face::D.opposite());
}

#[test]
fn test_face_letters() {
    for face in Face::iter() {
        assert_eq!(Some(face), Face::from_letter(face.letter()));
    }
    assert_eq!(None, Face::from_letter('X'));
    assert_eq!(None, Face::from_letter('u'));
}

#[test]
fn test_initial_orientation() {
    let aligned = OrientationState::initial(StartLayout::Aligned);
    assert_eq!([Face::L, Face::F, Face::R], aligned.horizontal());
    assert_eq!([Face::U, Face::F, Face::D], aligned.vertical());
    assert_eq!(Face::B, aligned.face_at(Position::B));

    let scanned = OrientationState::initial(StartLayout::Scanned);
    assert_eq!([Face::F, Face::U, Face::B], scanned.horizontal());
    assert_eq!([Face::L, Face::U, Face::R], scanned.vertical());
    assert_eq!(Face::D, scanned.face_at(Position::B));

    assert!(aligned.is_consistent());
    assert!(scanned.is_consistent());
    assert_eq!(scanned, OrientationState::default());
}

#[test]
fn test_orientation_mutators() {
    let aligned = OrientationState::ALIGNED;

    let flipped = aligned.apply_flip();
    assert_eq!([Face::B, Face::U, Face::F], flipped.vertical());
    assert_eq!([Face::L, Face::U, Face::R], flipped.horizontal());

    let cw = aligned.apply_spin_cw();
    assert_eq!([Face::B, Face::L, Face::F], cw.horizontal());
    assert_eq!([Face::U, Face::L, Face::D], cw.vertical());

    let ccw = aligned.apply_spin_ccw();
    assert_eq!([Face::F, Face::R, Face::B], ccw.horizontal());
    assert_eq!([Face::U, Face::R, Face::D], ccw.vertical());

    assert_eq!(aligned, cw.apply_spin_ccw());
    assert_eq!(aligned, ccw.apply_spin_cw());
    assert_eq!(
        aligned,
        aligned.apply_flip().apply_flip().apply_flip().apply_flip(),
    );
    assert_eq!(
        aligned.apply_spin_cw().apply_spin_cw(),
        aligned.apply_spin_ccw().apply_spin_ccw(),
    );
}

#[test]
fn test_apply_sequence() {
    let aligned = OrientationState::ALIGNED;
    assert_eq!(aligned, aligned.apply_sequence(&ops("R0R1R3R4")));
    assert_eq!(
        aligned.apply_flip().apply_flip().apply_spin_ccw(),
        aligned.apply_sequence(&ops("F2R1S3")),
    );
    assert_eq!(
        aligned.apply_spin_cw().apply_spin_cw(),
        aligned.apply_sequence(&ops("S0")),
    );
    assert_eq!(
        aligned.apply_spin_ccw().apply_spin_ccw(),
        aligned.apply_sequence(&ops("S4")),
    );
}

#[test]
fn test_adapt_move() {
    let adapt = |state: OrientationState, face, amount| state.adapt(LogicalMove::new(face, amount));

    let aligned = OrientationState::ALIGNED;
    for face in Face::iter() {
        let position = adapt(aligned, face, MoveAmount::Half).position;
        assert_eq!(face.to_string(), position.to_string());
    }

    let scanned = OrientationState::SCANNED;
    let mv = adapt(scanned, Face::R, MoveAmount::Cw90);
    assert_eq!(Position::D, mv.position);
    assert_eq!(MoveAmount::Cw90, mv.amount);
    assert_eq!(Position::B, adapt(scanned, Face::D, MoveAmount::Ccw90).position);
    assert_eq!(Position::F, adapt(scanned, Face::U, MoveAmount::Half).position);
    assert_eq!(Position::L, adapt(scanned, Face::F, MoveAmount::Half).position);
}

#[test]
fn test_adapt_agrees_with_face_at() {
    let mut state = OrientationState::SCANNED;
    for &op in ops("F1S3F2S0F3S1S4").iter() {
        state = state.apply_op(op);
        for face in Face::iter() {
            let mv = state.adapt(LogicalMove::new(face, MoveAmount::Cw90));
            assert_eq!(face, state.face_at(mv.position));
        }
    }
}

#[test]
fn test_actuator_angle() {
    assert_eq!(ActuatorAngle::CW, ActuatorAngle::HOME.advance(&ops("F2R1")));
    assert_eq!(ActuatorAngle::HOME, ActuatorAngle::CW.advance(&ops("F2R3")));
    assert_eq!(ActuatorAngle::CW, ActuatorAngle::CW.advance(&ops("S3F3S3R0")));
    assert_eq!(ActuatorAngle::CCW, ActuatorAngle::HOME.advance(&ops("S3F1S1R3")));
    assert_eq!(ActuatorAngle::HOME, ActuatorAngle::HOME.advance(&ops("F1F2F3")));

    let too_far = ActuatorAngle::CW.advance(&ops("R1"));
    assert_eq!(180, too_far.degrees());
    assert!(!too_far.is_within_travel());

    assert_eq!(Ok(None), ActuatorAngle::HOME.homing_spin());
    assert_eq!(Ok(Some(ActuatorOp::S3)), ActuatorAngle::CW.homing_spin());
    assert_eq!(Ok(Some(ActuatorOp::S1)), ActuatorAngle::CCW.homing_spin());
    assert_eq!(
        Err(TranslateError::UnexpectedAngle { angle: 180 }),
        too_far.homing_spin(),
    );
}

#[test]
fn test_expansion_tables_stay_within_travel() {
    for angle in [ActuatorAngle::HOME, ActuatorAngle::CW, ActuatorAngle::CCW] {
        let table = ExpansionTable::for_angle(angle).unwrap();
        assert_eq!(angle, table.angle());
        for position in Position::iter() {
            for amount in MoveAmount::iter() {
                let expansion = table.expand(AdaptedMove { position, amount });
                let after = angle.advance(expansion);
                assert!(
                    [-90, 0, 90].contains(&after.degrees()),
                    "{position}{amount} in {} table ends at {after}",
                    table.name(),
                );
            }
        }
    }

    assert_eq!(
        TranslateError::UnexpectedAngle { angle: 180 },
        ExpansionTable::for_angle(ActuatorAngle::from_degrees(180)).unwrap_err(),
    );
}

#[test]
fn test_expansion_table_entries() {
    let expand = |table: &ExpansionTable, position, amount| {
        table.expand(AdaptedMove { position, amount }).iter().copied().collect::<OpSequence>()
    };

    assert_eq!(ops("F2R1"), expand(&tables::HOME, Position::U, MoveAmount::Cw90));
    assert_eq!(ops("S1F1S4R0"), expand(&tables::HOME, Position::L, MoveAmount::Half));
    assert_eq!(ops("S3F1S1R3"), expand(&tables::HOME, Position::R, MoveAmount::Ccw90));
    assert_eq!(ops("R4"), expand(&tables::CW, Position::D, MoveAmount::Half));
    assert_eq!(ops("S3F3S3R0"), expand(&tables::CW, Position::L, MoveAmount::Half));
    assert_eq!(ops("F3S1R3"), expand(&tables::CCW, Position::B, MoveAmount::Ccw90));
    assert_eq!(ops("S1F3R1"), expand(&tables::CCW, Position::R, MoveAmount::Cw90));
}

#[test]
fn test_count_moves() {
    assert_eq!(0, count_moves(&[]));
    assert_eq!(5, count_moves(&ops("F3S1R0")));
    assert_eq!(4, count_moves(&ops("S0S1R3R4")));
    assert_eq!(6, ops("F1F2F3").move_count());
}

#[test]
fn test_parse_solution() {
    use Face::*;
    use MoveAmount::*;

    let expected = vec![
        LogicalMove::new(U, Half),
        LogicalMove::new(L, Cw90),
        LogicalMove::new(B, Ccw90),
    ];
    assert_eq!(Ok(expected.clone()), parse_solution("U2 L1 B3"));
    assert_eq!(Ok(expected.clone()), parse_solution("U2L1B3"));
    assert_eq!(Ok(expected.clone()), parse_solution("  U2   L1\tB3 \n"));
    assert_eq!("U2 L1 B3", solution(&expected));

    assert_eq!(Err(TranslateError::EmptySolution), parse_solution(""));
    assert_eq!(Err(TranslateError::EmptySolution), parse_solution(" \t\n"));

    for bad in ["X1", "U4", "U0", "U2R", "U2 L", "u2", "U2 L1 B", "U 2"] {
        match parse_solution(bad) {
            Err(TranslateError::Parse(errors)) => assert!(!errors.is_empty(), "{bad:?}"),
            other => panic!("expected parse error for {bad:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_parse_ops() {
    let expected = OpSequence(vec![
        ActuatorOp::F1,
        ActuatorOp::Rotate(TurnAmount::Cw90),
        ActuatorOp::Spin(TurnAmount::Ccw90),
        ActuatorOp::S0,
        ActuatorOp::R4,
    ]);
    assert_eq!(Ok(expected.clone()), parse_ops("F1R1S3S0R4"));
    assert_eq!(Ok(expected.clone()), parse_ops(" F1 R1 S3 S0 R4 "));
    assert_eq!("F1R1S3S0R4", expected.to_string());
    assert_eq!(Ok(expected), "F1R1S3S0R4".parse::<OpSequence>());

    assert_eq!(Ok(OpSequence::new()), parse_ops(""));
    assert_eq!(Ok(OpSequence::new()), parse_ops("  "));

    for bad in ["F0", "F4", "S2", "R5", "X1", "F", "F1S"] {
        assert!(
            matches!(parse_ops(bad), Err(TranslateError::Parse(_))),
            "{bad:?} should not parse",
        );
    }
}

#[test]
fn test_cancel_opposite_spins() {
    assert_eq!((ops("R1"), true), cancel_opposite_spins(&ops("S1S3R1")));
    assert_eq!((ops("F1R1"), true), cancel_opposite_spins(&ops("F1S3S1R1")));
    assert_eq!((ops(""), true), cancel_opposite_spins(&ops("S1S1S3S3")));
    assert_eq!((ops("S1"), true), cancel_opposite_spins(&ops("S1S3S1")));

    // Half spins and rotations are left alone.
    for s in ["S0S4", "S4S0", "R1R3", "S1R3", "S1F1S3", ""] {
        assert_eq!((ops(s), false), cancel_opposite_spins(&ops(s)));
    }
}

#[test]
fn test_merge_trailing_flips() {
    let merge = |s: &str| {
        let (out, fired) = merge_trailing_flips(&ops(s));
        (out.to_string(), fired)
    };
    let fired = |s: &str| (s.to_string(), true);
    let unchanged = |s: &str| (s.to_string(), false);

    // identical trailing ops
    assert_eq!(fired("F1R1F2R1"), merge("F3R1F2R1"));
    assert_eq!(fired("S1F1S3R1F2S3R1"), merge("S1F3S3R1F2S3R1"));
    assert_eq!(fired("F1F2"), merge("F3F2"));
    // half turns in opposite directions
    assert_eq!(fired("F1R0F2R4"), merge("F3R0F2R4"));
    assert_eq!(fired("F1R4F2R0"), merge("F3R4F2R0"));
    // extra spin after the double flip
    assert_eq!(fired("F1R0F2R4S1"), merge("F3R0F2R4S1"));
    // only the last two flips are considered
    assert_eq!(fired("F3R1F1R3F2R3"), merge("F3R1F3R3F2R3"));

    assert_eq!(unchanged("F3R1F2R3"), merge("F3R1F2R3"));
    assert_eq!(unchanged("F3R1F2S1R1"), merge("F3R1F2S1R1"));
    assert_eq!(unchanged("F3F2R1"), merge("F3F2R1"));
    assert_eq!(unchanged("F3S3R0F2R4"), merge("F3S3R0F2R4"));
    assert_eq!(unchanged("F2R1F3R1"), merge("F2R1F3R1"));
    assert_eq!(unchanged("F3R1F3R1"), merge("F3R1F3R1"));
    assert_eq!(unchanged("F3R1F2R1F1R1"), merge("F3R1F2R1F1R1"));
    assert_eq!(unchanged("F3R1"), merge("F3R1"));
    assert_eq!(unchanged("R1S3"), merge("R1S3"));
    assert_eq!(unchanged(""), merge(""));
}

#[test]
fn test_optimize() {
    let (out, fired) = optimize(&ops("S1S3F3R0F2R4S1"), true);
    assert_eq!("F1R0F2R4S1", out.to_string());
    assert_eq!(
        Optimizations {
            cancel_opposite_spins: true,
            merge_trailing_flips: true,
        },
        fired,
    );
    assert!(fired.any());

    let (out, fired) = optimize(&ops("S1S3F3R0F2R4S1"), false);
    assert_eq!("S1S3F1R0F2R4S1", out.to_string());
    assert!(!fired.cancel_opposite_spins);
    assert!(fired.merge_trailing_flips);

    let (out, fired) = optimize(&ops("F1R1"), true);
    assert_eq!("F1R1", out.to_string());
    assert!(!fired.any());
}

#[test]
fn test_translate_merges_trailing_flips() {
    let translation = translate_with("U2 D2 R2 L2 F2 B2", StartLayout::Scanned);
    assert_eq!(
        vec!["F1S3R0", "F2R4", "S1F3S3R0", "F2R4", "F3R0", "F2R4"],
        step_strings(&translation),
    );
    assert_eq!("F1S3R0F2R4S1F3S3R0F2R4F1R0F2R4S1", translation.ops.to_string());
    assert_eq!(23, translation.unoptimized_count);
    assert_eq!(21, translation.move_count);
    assert!(translation.optimizations.merge_trailing_flips);
    assert!(!translation.optimizations.cancel_opposite_spins);
    assert!(translation.move_count < translation.unoptimized_count);

    let translation = translate_with("U2 D2 R2 L2 F2 B2", StartLayout::Aligned);
    assert_eq!("F2S3R0F2R4F3R0F2R4S1F3S3R0F2R4S1", translation.ops.to_string());
    assert_eq!(24, translation.move_count);
    assert!(!translation.optimizations.any());
}

#[test]
fn test_translate_long_solution() {
    let solution = "U2 L1 R1 D2 B2 R1 D2 B2 D2 L3 B3 R3 F2 D3 L1 U2 F2 D3 B3 D1";

    let translation = translate_with(solution, StartLayout::Scanned);
    assert_eq!(
        vec![
            "F1S3R0", "S3F3R1", "F2S3R1", "S3F3S3R0", "F1R4", "S1F1R1", "S3F3S3R0", "F1R4",
            "F3R0", "S3F1R3", "S1F1R3", "F1S1R3", "S1F3S3R0", "F1R3", "S3F1R1", "F1S3R0",
            "F1R4", "F1S1R3", "S1F3R3", "F1R1",
        ],
        step_strings(&translation),
    );
    assert_eq!(
        "F1S3R0S3F3R1F2S3R1S3F3S3R0F1R4S1F1R1S3F3S3R0F1R4F3R0S3F1R3S1F1R3\
         F1S1R3S1F3S3R0F1R3S3F1R1F1S3R0F1R4F1S1R3S1F3R3F1R1",
        translation.ops.to_string(),
    );
    assert_eq!(70, translation.unoptimized_count);
    assert_eq!(70, translation.move_count);

    let translation = translate_with(solution, StartLayout::Aligned);
    assert_eq!(83, translation.unoptimized_count);
    assert_eq!(83, translation.move_count);
    assert_eq!(Some(&ActuatorOp::S3), translation.ops.last());
}

#[test]
fn test_translate_short_solutions() {
    let translation = translate_with("R1", StartLayout::Scanned);
    assert_eq!("R1S3", translation.ops.to_string());
    assert_eq!(2, translation.move_count);
    assert_eq!(Position::D, translation.steps[0].adapted.position);

    let translation = translate_with("R1", StartLayout::Aligned);
    assert_eq!("S3F1R1", translation.ops.to_string());
    assert_eq!(3, translation.move_count);

    let translation = translate_with("U1 F1", StartLayout::Scanned);
    assert_eq!(vec!["F1R1", "S3F3R1"], step_strings(&translation));
    assert_eq!(ActuatorAngle::CW, translation.steps[1].angle_before);
    assert_eq!("F1R1S3F3R1S3", translation.ops.to_string());
    assert_eq!(8, translation.move_count);

    let translation = translate_with("F3 U1 D2 R2 L2 U2 D2 R1 L2", StartLayout::Scanned);
    assert_eq!(
        "S1F1R3S3F1R1F2S3R0F1R4F2R0F3R4F2R0F1S3R1F2R4S1",
        translation.ops.to_string(),
    );
    assert_eq!(29, translation.move_count);
    assert!(!translation.optimizations.any());
}

#[test]
fn test_translate_errors() {
    let translator = Translator::default();
    assert_eq!(Err(TranslateError::EmptySolution), translator.translate(""));
    assert_eq!(Err(TranslateError::EmptySolution), translator.translate("   "));
    assert!(matches!(
        translator.translate("U2 D2 X2"),
        Err(TranslateError::Parse(_)),
    ));
    assert!(matches!(
        translator.translate("U2 D2 R"),
        Err(TranslateError::Parse(_)),
    ));
}

#[test]
fn test_cancel_opposite_spins_option() {
    let config = TranslatorConfig {
        cancel_opposite_spins: true,
        ..Default::default()
    };
    let with_pass = translate("U2 D2 R2 L2 F2 B2", &config).unwrap();
    let without_pass = translate("U2 D2 R2 L2 F2 B2", &TranslatorConfig::default()).unwrap();
    assert_eq!(without_pass.ops, with_pass.ops);
    assert!(!with_pass.optimizations.cancel_opposite_spins);
}

#[test]
fn test_independent_sessions() {
    let solution = "U2 L1 R1 D2 B2 R1 D2 B2 D2 L3 B3 R3 F2 D3 L1 U2 F2 D3 B3 D1";
    let translator = Translator::default();
    let first = translator.translate(solution).unwrap();
    let second = translator.translate(solution).unwrap();
    assert_eq!(first, second);

    let results: Vec<Translation> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| translator.translate(solution).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    for result in results {
        assert_eq!(first, result);
    }
}

#[test]
fn test_session_step_by_step() {
    let mut session = Session::new(StartLayout::Aligned);
    let step = session.push_move(LogicalMove::new(Face::U, MoveAmount::Cw90)).unwrap();
    assert_eq!(ops("F2R1"), step.ops);
    assert_eq!(ActuatorAngle::HOME, step.angle_before);
    assert_eq!(ActuatorAngle::CW, session.angle());
    assert_eq!(
        OrientationState::ALIGNED.apply_flip().apply_flip(),
        session.orientation(),
    );

    session.push_move(LogicalMove::new(Face::D, MoveAmount::Half)).unwrap();
    assert_eq!(2, session.steps().len());
    assert_eq!("F2R1F2R4", session.ops().to_string());

    let session_angle = session.angle();
    let translation = session.finish(false).unwrap();
    assert_eq!(ActuatorAngle::CCW, session_angle);
    assert_eq!("F2R1F2R4S1", translation.ops.to_string());
    assert_eq!(7, translation.move_count);
}

#[test]
fn test_session_rejects_holder_out_of_travel() {
    let mut session = Session::new(StartLayout::Aligned);
    session.push_move(LogicalMove::new(Face::U, MoveAmount::Cw90)).unwrap();
    assert_eq!(ActuatorAngle::CW, session.angle());

    let orientation = session.orientation();
    let ops_before = session.ops().clone();
    let steps_before = session.steps().to_vec();

    let mv = LogicalMove::new(Face::F, MoveAmount::Cw90);
    let adapted = orientation.adapt(mv);
    assert_eq!(
        TranslateError::AngleOutOfRange {
            move_index: 1,
            angle: 180,
        },
        session
            .push_expansion(mv, adapted, &[ActuatorOp::F1, ActuatorOp::S1])
            .unwrap_err(),
    );

    // Nothing from the rejected move is recorded.
    assert_eq!(ActuatorAngle::CW, session.angle());
    assert_eq!(orientation, session.orientation());
    assert_eq!(ops_before, *session.ops());
    assert_eq!(steps_before, session.steps());

    // The session keeps working afterwards.
    let step = session.push_move(mv).unwrap();
    assert_eq!(ActuatorAngle::CW, step.angle_before);
    assert_eq!(2, session.steps().len());
    session.finish(false).unwrap();
}

proptest! {
    #[test]
    fn proptest_opposite_is_involution(face: Face) {
        prop_assert_eq!(face, face.opposite().opposite());
        prop_assert_ne!(face, face.opposite());
    }

    #[test]
    fn proptest_orientation_stays_consistent(
        layout in prop_oneof![Just(StartLayout::Scanned), Just(StartLayout::Aligned)],
        stream in prop::collection::vec(any::<ActuatorOp>(), 0..64),
    ) {
        let mut state = OrientationState::initial(layout);
        for op in stream {
            state = state.apply_op(op);
            prop_assert!(state.is_consistent(), "{state:?}");
            prop_assert_eq!(state.up.opposite(), state.down);
        }
    }

    #[test]
    fn proptest_ops_roundtrip(ops: Vec<ActuatorOp>) {
        let ops = OpSequence(ops);
        prop_assert_eq!(Ok(ops.clone()), parse_ops(&ops.to_string()));
    }

    #[test]
    fn proptest_solution_roundtrip(moves in prop::collection::vec(any::<LogicalMove>(), 1..30)) {
        prop_assert_eq!(Ok(moves.clone()), parse_solution(&solution(&moves)));
    }

    #[test]
    fn proptest_optimize_never_adds_moves(ops: Vec<ActuatorOp>, cancel_spins: bool) {
        let (optimized, _) = optimize(&ops, cancel_spins);
        prop_assert!(optimized.move_count() <= count_moves(&ops));
    }

    #[test]
    fn proptest_optimize_is_idempotent(ops: Vec<ActuatorOp>, cancel_spins: bool) {
        let (once, _) = optimize(&ops, cancel_spins);
        let (twice, fired) = optimize(&once, cancel_spins);
        prop_assert_eq!(&once, &twice);
        prop_assert!(!fired.any());
    }

    #[test]
    fn proptest_cancel_opposite_spins_is_idempotent(ops: Vec<ActuatorOp>) {
        let (once, _) = cancel_opposite_spins(&ops);
        let (twice, fired) = cancel_opposite_spins(&once);
        prop_assert_eq!(once, twice);
        prop_assert!(!fired);
    }

    #[test]
    fn proptest_holder_stays_within_travel(
        moves in prop::collection::vec(any::<LogicalMove>(), 1..40),
        aligned in any::<bool>(),
    ) {
        let layout = if aligned { StartLayout::Aligned } else { StartLayout::Scanned };
        let mut session = Session::new(layout);
        for &mv in &moves {
            session.push_move(mv).unwrap();
            prop_assert!([-90, 0, 90].contains(&session.angle().degrees()));
            prop_assert!(session.orientation().is_consistent());
        }

        let translation = session.finish(false).unwrap();
        prop_assert_eq!(ActuatorAngle::HOME, ActuatorAngle::HOME.advance(&translation.ops));
        prop_assert!(translation.move_count <= translation.unoptimized_count);
        prop_assert_eq!(moves.len(), translation.steps.len());

        let config = TranslatorConfig { start_layout: layout, cancel_opposite_spins: false };
        prop_assert_eq!(Ok(translation), translate(&solution(&moves), &config));
    }
}
